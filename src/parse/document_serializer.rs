use crate::model::Document;
use crate::parse::document_parser::INDENT_WIDTH;

/// Serialize a document to markdown: title heading, blank line, one
/// checklist line per item with two spaces of indentation per level.
pub fn serialize_document(doc: &Document) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n", doc.title));

    if !doc.items.is_empty() {
        out.push('\n');
    }

    for item in &doc.items {
        let indent = " ".repeat(item.level * INDENT_WIDTH);
        let checkbox = if item.completed { 'x' } else { ' ' };
        out.push_str(&format!("{}- [{}] {}\n", indent, checkbox, item.label));
    }

    out
}
