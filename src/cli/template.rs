use clap::Args;
use serde::Serialize;

use crate::error::{RenderError, Result};
use crate::locale::Locale;
use crate::output::json::JsonEnvelope;
use crate::templates;

#[derive(Args)]
pub struct TemplateArgs {
    /// Template language (en, zh, zh-TW)
    #[arg(long, default_value = "en")]
    pub lang: String,
}

#[derive(Serialize)]
struct TemplateReport {
    language: String,
    template: String,
}

pub fn run(args: &TemplateArgs, json: bool) -> Result<()> {
    let locale = Locale::parse(&args.lang).ok_or_else(|| RenderError::ConfigInvalid {
        message: format!(
            "unsupported language `{}`. Supported: en, zh, zh-TW",
            args.lang
        ),
    })?;
    let body = templates::member_template(locale);

    if json {
        let report = TemplateReport {
            language: locale.as_str().to_string(),
            template: body.to_string(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonEnvelope::success(report))
                .expect("failed to serialize output")
        );
    } else {
        print!("{body}");
    }

    Ok(())
}
