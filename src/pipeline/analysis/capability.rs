/// One attempt configuration in the narrowing retry ladder, from most to
/// least capable. Schema enforcement is not represented here because it is
/// never dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityTier {
    pub elevated_reasoning: bool,
    pub web_search: bool,
}

pub const TIER_COUNT: usize = 3;

/// Map the caller's deep-analysis flag to the three-tier ladder.
///
/// Reasoning elevation is stripped first (it is the feature observed to
/// conflict with strict schema enforcement for some content types), search
/// second. Without deep analysis all three tiers are bare retries, but all
/// three invocations still happen.
pub fn capability_ladder(deep_analysis: bool) -> [CapabilityTier; TIER_COUNT] {
    if deep_analysis {
        [
            CapabilityTier {
                elevated_reasoning: true,
                web_search: true,
            },
            CapabilityTier {
                elevated_reasoning: false,
                web_search: true,
            },
            CapabilityTier {
                elevated_reasoning: false,
                web_search: false,
            },
        ]
    } else {
        [CapabilityTier {
            elevated_reasoning: false,
            web_search: false,
        }; TIER_COUNT]
    }
}
