use v_htmlescape::escape;

use crate::preview::{PreviewDocument, PreviewEntry, PreviewSection};

fn push_entry(html: &mut String, entry: &PreviewEntry) {
    html.push_str("<div class=\"entry\">");
    html.push_str("<div class=\"entry-header\">");
    html.push_str(&format!("<strong>{}</strong>", escape(&entry.title)));
    if let Some(range) = &entry.date_range {
        html.push_str(&format!("<span class=\"dates\">{}</span>", escape(range)));
    }
    html.push_str("</div>");
    if let Some(subtitle) = &entry.subtitle {
        html.push_str(&format!("<div class=\"subtitle\">{}</div>", escape(subtitle)));
    }
    if let Some(note) = &entry.note {
        html.push_str(&format!("<div class=\"note\">{}</div>", escape(note)));
    }
    if let Some(body) = &entry.body {
        html.push_str(&format!("<p>{}</p>", escape(body)));
    }
    html.push_str("</div>");
}

/// Renders the preview as an HTML fragment rooted at `div.resume-preview`.
pub fn render_html(doc: &PreviewDocument) -> String {
    let mut html = String::from("<div class=\"resume-preview\">");
    for section in &doc.sections {
        match section {
            PreviewSection::Personal {
                name,
                contact,
                location,
                summary,
            } => {
                html.push_str("<section class=\"personal\">");
                html.push_str(&format!("<h1>{}</h1>", escape(name)));
                html.push_str(&format!("<p>{}</p>", escape(contact)));
                html.push_str(&format!("<p>{}</p>", escape(location)));
                html.push_str(&format!("<p class=\"summary\">{}</p>", escape(summary)));
            }
            PreviewSection::Entries { heading, entries } => {
                html.push_str(&format!("<section><h2>{}</h2>", escape(heading)));
                for entry in entries {
                    push_entry(&mut html, entry);
                }
            }
            PreviewSection::Tags { heading, tags } => {
                html.push_str(&format!("<section><h2>{}</h2>", escape(heading)));
                html.push_str("<div class=\"tags\">");
                for tag in tags {
                    html.push_str(&format!("<span class=\"tag\">{}</span>", escape(tag)));
                }
                html.push_str("</div>");
            }
            PreviewSection::Paragraph { heading, text } => {
                html.push_str(&format!("<section><h2>{}</h2>", escape(heading)));
                html.push_str(&format!("<p>{}</p>", escape(text)));
            }
        }
        html.push_str("</section>");
    }
    html.push_str("</div>");
    html
}
