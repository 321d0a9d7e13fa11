use crate::model::{Document, Item};

/// Spaces of indentation per outline level.
pub const INDENT_WIDTH: usize = 2;

/// Parse a markdown checklist into a document.
///
/// The first `# ` heading becomes the title. Checklist lines (`- [ ]` /
/// `- [x]`) become items, with two spaces of indentation per level. Any
/// other line is ignored. Depths are normalized so an item is never more
/// than one level deeper than the item above it, which is the structural
/// contract every outline operation relies on.
pub fn parse_document(text: &str) -> Document {
    let mut doc = Document::default();
    let mut saw_title = false;

    for line in text.lines() {
        if !saw_title
            && let Some(title) = line.strip_prefix("# ")
        {
            doc.title = title.trim().to_string();
            saw_title = true;
            continue;
        }

        if let Some(item) = parse_item_line(line) {
            doc.items.push(item);
        }
    }

    normalize_levels(&mut doc.items);
    doc
}

/// Parse a single checklist line. Returns None for anything that is not a
/// task line.
fn parse_item_line(line: &str) -> Option<Item> {
    let trimmed = line.trim_start_matches(' ');
    let indent = line.len() - trimmed.len();

    let rest = trimmed.strip_prefix("- [")?;
    let mut chars = rest.chars();
    let state_char = chars.next()?;
    let completed = match state_char {
        'x' | 'X' => true,
        ' ' => false,
        _ => return None,
    };
    let rest = chars.as_str().strip_prefix("] ")?;

    Some(Item {
        label: rest.trim_end().to_string(),
        completed,
        level: indent / INDENT_WIDTH,
    })
}

/// Clamp levels so each item is at most one step deeper than its
/// predecessor. The first item is always top-level: there is nothing above
/// it to nest under.
fn normalize_levels(items: &mut [Item]) {
    let mut prev = 0;
    for (i, item) in items.iter_mut().enumerate() {
        let cap = if i == 0 { 0 } else { prev + 1 };
        if item.level > cap {
            item.level = cap;
        }
        prev = item.level;
    }
}
