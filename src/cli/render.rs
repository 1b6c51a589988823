use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use crate::config::RenderConfig;
use crate::error::Result;
use crate::output::human;
use crate::output::json::JsonEnvelope;
use crate::render::Renderer;
use crate::text;

/// Config filename looked up in the working directory when `--config` is not
/// given.
const DEFAULT_CONFIG: &str = "labmark.toml";

#[derive(Args)]
pub struct RenderArgs {
    /// Input Markdown file
    pub input: PathBuf,

    /// Write HTML to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the configured language (en, zh, zh-TW)
    #[arg(long)]
    pub lang: Option<String>,
}

#[derive(Serialize)]
struct RenderReport {
    html: String,
    paper_ids: Vec<String>,
    summary: String,
}

pub fn run(args: &RenderArgs, config_path: Option<&str>, json: bool) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(lang) = &args.lang {
        config.language = lang.clone();
        config.validate()?;
    }

    let source = std::fs::read_to_string(&args.input)?;
    let renderer = Renderer::new(config)?;
    let rendered = renderer.render(&source)?;

    if let Some(path) = &args.output {
        std::fs::write(path, &rendered.html)?;
    }

    if json {
        let report = RenderReport {
            summary: text::excerpt(&source, 200),
            paper_ids: rendered.paper_ids,
            html: rendered.html,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonEnvelope::success(report))
                .expect("failed to serialize output")
        );
    } else {
        match &args.output {
            Some(path) => human::success(&format!(
                "Rendered {} to {}",
                args.input.display(),
                path.display()
            )),
            None => print!("{}", rendered.html),
        }
    }

    Ok(())
}

fn load_config(explicit: Option<&str>) -> Result<RenderConfig> {
    match explicit {
        Some(path) => RenderConfig::load(Path::new(path)),
        None => {
            let default = Path::new(DEFAULT_CONFIG);
            if default.exists() {
                RenderConfig::load(default)
            } else {
                Ok(RenderConfig::default())
            }
        }
    }
}
