use super::ExtractionError;

/// Extract the text runs from a DOCX body: paragraphs, hyperlink runs and
/// table cells, in document order.
///
/// Extracted-but-empty text counts as a failure so the caller can fall back
/// to binary transmission.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ExtractionError::DocxParse(e.to_string()))?;

    let mut text = String::new();
    for child in &docx.document.children {
        collect_text(child, &mut text);
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ExtractionError::NoText);
    }
    Ok(trimmed.to_string())
}

fn collect_text(element: &docx_rs::DocumentChild, output: &mut String) {
    match element {
        docx_rs::DocumentChild::Paragraph(para) => {
            collect_paragraph(para, output);
            output.push('\n');
        }
        docx_rs::DocumentChild::Table(table) => {
            for row in &table.rows {
                let docx_rs::TableChild::TableRow(tr) = row;
                for cell in &tr.cells {
                    let docx_rs::TableRowChild::TableCell(tc) = cell;
                    for content in &tc.children {
                        if let docx_rs::TableCellContent::Paragraph(para) = content {
                            collect_paragraph(para, output);
                            output.push_str(" | ");
                        }
                    }
                }
                output.push('\n');
            }
        }
        _ => {}
    }
}

fn collect_paragraph(para: &docx_rs::Paragraph, output: &mut String) {
    for child in &para.children {
        match child {
            docx_rs::ParagraphChild::Run(run) => collect_run(run, output),
            docx_rs::ParagraphChild::Hyperlink(link) => {
                for nested in &link.children {
                    if let docx_rs::ParagraphChild::Run(run) = nested {
                        collect_run(run, output);
                    }
                }
            }
            _ => {}
        }
    }
}

fn collect_run(run: &docx_rs::Run, output: &mut String) {
    for child in &run.children {
        if let docx_rs::RunChild::Text(text) = child {
            output.push_str(&text.text);
        }
    }
}
