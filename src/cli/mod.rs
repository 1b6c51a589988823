pub mod render;
pub mod template;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "labmark",
    about = "Render laboratory-site Markdown: KaTeX math, research-area tags, homepage links, paper placeholders",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to config file (defaults to labmark.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a Markdown file to HTML
    Render(render::RenderArgs),

    /// Print the member-profile starter Markdown
    Template(template::TemplateArgs),
}
