use clap::Parser;

#[derive(Parser)]
#[command(name = "sprig", about = concat!("[~] sprig v", env!("CARGO_PKG_VERSION"), " - your todo list is plain text"), version)]
pub struct Cli {
    /// Markdown file holding the list (created on first save if missing)
    #[arg(default_value = "todo.md")]
    pub file: String,

    /// Interface language, e.g. "en" or "zh" (overrides the config file)
    #[arg(long)]
    pub lang: Option<String>,
}
