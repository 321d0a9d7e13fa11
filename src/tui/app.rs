use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::cli::Cli;
use crate::i18n::Messages;
use crate::io::{config_io, document_io};
use crate::store::Store;

use super::input;
use super::render;
use super::theme::Theme;

/// Main application state: the store plus presentation-only concerns.
pub struct App {
    pub store: Store,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// First visible row of the outline list
    pub scroll_offset: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: Store, theme: Theme, show_key_hints: bool) -> Self {
        App {
            store,
            theme,
            show_key_hints,
            scroll_offset: 0,
            should_quit: false,
        }
    }
}

/// Run the TUI application. A document that cannot be read is fatal: there
/// is no outline to operate on, so the interactive loop never starts.
pub fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::load_config();
    let lang = cli
        .lang
        .clone()
        .or_else(|| config.lang.clone())
        .unwrap_or_else(|| "en".to_string());
    let messages = Messages::load(&lang);

    let path = PathBuf::from(&cli.file);
    let document = document_io::load_document(&path)?;

    let theme = Theme::from_config(&config.ui);
    let store = Store::new(document, path, messages);
    let mut app = App::new(store, theme, config.ui.show_key_hints);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
