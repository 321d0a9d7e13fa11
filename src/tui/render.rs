use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::i18n::Msg;
use crate::parse::document_parser::INDENT_WIDTH;
use crate::store::Mode;
use crate::util::unicode::{display_width, truncate_to_width};

use super::app::App;

/// Main render function — title, outline, status, input box, key hints
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let input_active = app.store.mode() != Mode::List;

    let mut constraints = vec![
        Constraint::Length(2), // title + blank row
        Constraint::Min(1),    // outline
        Constraint::Length(1), // status row
    ];
    if input_active {
        constraints.push(Constraint::Length(3));
    }
    if app.show_key_hints {
        constraints.push(Constraint::Length(1));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_title(frame, app, chunks[0]);
    render_outline(frame, app, chunks[1]);
    render_status(frame, app, chunks[2]);

    let mut next = 3;
    if input_active {
        render_input_box(frame, app, chunks[next]);
        next += 1;
    }
    if app.show_key_hints {
        render_hints(frame, app, chunks[next]);
    }
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(Span::styled(
        app.store.title().to_string(),
        Style::default()
            .fg(app.theme.highlight)
            .bg(app.theme.background)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(app.theme.background)),
        area,
    );
}

fn render_outline(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let items = app.store.items();

    if items.is_empty() {
        let line = Line::from(Span::styled(
            app.store.messages().text(Msg::NoTasks).to_string(),
            Style::default()
                .fg(app.theme.dim)
                .bg(bg)
                .add_modifier(Modifier::ITALIC),
        ));
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        return;
    }

    // Keep the selection on screen
    let visible = area.height as usize;
    if visible > 0
        && let Some(selected) = app.store.selection()
    {
        if selected < app.scroll_offset {
            app.scroll_offset = selected;
        } else if selected >= app.scroll_offset + visible {
            app.scroll_offset = selected + 1 - visible;
        }
    }

    let items = app.store.items();
    let selected = app.store.selection();
    let width = area.width as usize;
    let mut lines = Vec::new();

    for (i, item) in items.iter().enumerate().skip(app.scroll_offset) {
        if lines.len() >= visible {
            break;
        }
        let is_selected = selected == Some(i);

        let marker = if is_selected { "\u{25B6} " } else { "  " };
        let indent = " ".repeat(item.level * INDENT_WIDTH);
        let checkbox = if item.completed { "[x] " } else { "[ ] " };

        let prefix_width = display_width(marker) + indent.len() + checkbox.len();
        let label = truncate_to_width(&item.label, width.saturating_sub(prefix_width));

        let row_bg = if is_selected { app.theme.selection_bg } else { bg };
        let marker_style = Style::default().fg(app.theme.highlight).bg(row_bg);
        let mut body_style = Style::default().fg(app.theme.text).bg(row_bg);
        if item.completed {
            body_style = Style::default()
                .fg(app.theme.dim)
                .bg(row_bg)
                .add_modifier(Modifier::CROSSED_OUT);
        } else if is_selected {
            body_style = Style::default().fg(app.theme.text_bright).bg(row_bg);
        }

        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), marker_style),
            Span::styled(format!("{}{}", indent, checkbox), body_style),
            Span::styled(label, body_style),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let line = match app.store.status() {
        Some(status) => Line::from(Span::styled(
            status.to_string(),
            Style::default().fg(app.theme.green).bg(bg),
        )),
        None => Line::from(Span::styled(String::new(), Style::default().bg(bg))),
    };
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

fn render_input_box(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let prompt = match app.store.mode() {
        Mode::Edit => app.store.messages().text(Msg::PromptEdit),
        _ => app.store.messages().text(Msg::PromptAdd),
    };

    let input = app.store.input();
    let cursor = app.store.cursor();

    // Text with a block cursor at the edit position
    let spans = vec![
        Span::styled(
            input[..cursor].to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
        Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ),
        Span::styled(
            input[cursor..].to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.green).bg(bg))
        .title(format!(" {} ", prompt));
    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(bg))
            .block(block),
        area,
    );
}

fn render_hints(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let hints = match app.store.mode() {
        Mode::List => app.store.messages().text(Msg::HintsList),
        _ => app.store.messages().text(Msg::HintsInput),
    };
    let line = Line::from(Span::styled(
        hints.to_string(),
        Style::default().fg(app.theme.dim).bg(bg),
    ));
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Messages;
    use crate::model::{Document, Item};
    use crate::store::Store;
    use crate::tui::theme::Theme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use tempfile::TempDir;

    /// Render into an in-memory buffer and return plain text (no styles).
    fn render_to_string(app: &mut App, w: u16, h: u16) -> String {
        let backend = TestBackend::new(w, h);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buf = terminal.backend().buffer().clone();
        let w = buf.area.width as usize;
        buf.content
            .chunks(w)
            .map(|row| {
                let s: String = row.iter().map(|cell| cell.symbol()).collect();
                s.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app_with(items: &[(&str, usize, bool)]) -> (App, TempDir) {
        let tmp = TempDir::new().unwrap();
        let document = Document {
            title: "Groceries".to_string(),
            items: items
                .iter()
                .map(|&(label, level, completed)| Item {
                    label: label.to_string(),
                    completed,
                    level,
                })
                .collect(),
        };
        let store = Store::new(document, tmp.path().join("todo.md"), Messages::load("en"));
        (App::new(store, Theme::default(), true), tmp)
    }

    #[test]
    fn test_render_shows_title_and_items() {
        let (mut app, _tmp) = app_with(&[("Milk", 0, false), ("Oat", 1, true)]);
        let text = render_to_string(&mut app, 40, 10);
        assert!(text.contains("Groceries"));
        assert!(text.contains("[ ] Milk"));
        // Nested item is indented two extra spaces and checked
        assert!(text.contains("  [x] Oat"));
    }

    #[test]
    fn test_render_marks_selection() {
        let (mut app, _tmp) = app_with(&[("Milk", 0, false)]);
        let text = render_to_string(&mut app, 40, 10);
        assert!(text.contains("\u{25B6} [ ] Milk"));
    }

    #[test]
    fn test_render_empty_outline_shows_placeholder() {
        let (mut app, _tmp) = app_with(&[]);
        let text = render_to_string(&mut app, 60, 10);
        assert!(text.contains("Nothing here yet"));
    }

    #[test]
    fn test_render_input_box_in_add_mode() {
        let (mut app, _tmp) = app_with(&[]);
        app.store.start_add();
        app.store.input_insert("Te");
        let text = render_to_string(&mut app, 40, 12);
        assert!(text.contains("New task"));
        assert!(text.contains("Te\u{258C}"));
    }

    #[test]
    fn test_render_scrolls_to_keep_selection_visible() {
        let rows: Vec<(String, usize, bool)> = (0..30)
            .map(|i| (format!("Task {:02}", i), 0, false))
            .collect();
        let refs: Vec<(&str, usize, bool)> = rows
            .iter()
            .map(|(label, level, completed)| (label.as_str(), *level, *completed))
            .collect();
        let (mut app, _tmp) = app_with(&refs);
        for _ in 0..29 {
            app.store.select_next();
        }
        let text = render_to_string(&mut app, 40, 12);
        assert!(text.contains("Task 29"));
        assert!(!text.contains("Task 00"));
    }
}
