use crate::preview::{PreviewDocument, PreviewEntry, PreviewSection};

fn push_paragraph(md: &mut String, text: &str) {
    if !text.is_empty() {
        md.push_str(text);
        md.push_str("\n\n");
    }
}

fn push_entry(md: &mut String, entry: &PreviewEntry) {
    match &entry.date_range {
        Some(range) => md.push_str(&format!("**{}** ({range})\n", entry.title)),
        None => md.push_str(&format!("**{}**\n", entry.title)),
    }
    if let Some(subtitle) = &entry.subtitle {
        md.push_str(subtitle);
        md.push('\n');
    }
    if let Some(note) = &entry.note {
        md.push_str(note);
        md.push('\n');
    }
    md.push('\n');
    if let Some(body) = &entry.body {
        push_paragraph(md, body);
    }
}

/// Renders the preview as a Markdown document. Blank paragraphs are skipped.
pub fn render_markdown(doc: &PreviewDocument) -> String {
    let mut md = String::new();
    for section in &doc.sections {
        match section {
            PreviewSection::Personal {
                name,
                contact,
                location,
                summary,
            } => {
                md.push_str(&format!("# {name}\n\n"));
                push_paragraph(&mut md, contact);
                push_paragraph(&mut md, location);
                push_paragraph(&mut md, summary);
            }
            PreviewSection::Entries { heading, entries } => {
                md.push_str(&format!("## {heading}\n\n"));
                for entry in entries {
                    push_entry(&mut md, entry);
                }
            }
            PreviewSection::Tags { heading, tags } => {
                md.push_str(&format!("## {heading}\n\n"));
                for tag in tags {
                    md.push_str(&format!("- {tag}\n"));
                }
                md.push('\n');
            }
            PreviewSection::Paragraph { heading, text } => {
                md.push_str(&format!("## {heading}\n\n"));
                push_paragraph(&mut md, text);
            }
        }
    }
    md
}
