pub mod links;
pub mod markdown;
pub mod math;

use serde::Serialize;

use crate::config::RenderConfig;
use crate::error::Result;
use crate::tags::TagRegistry;

/// Result of rendering one Markdown document.
#[derive(Debug, Clone, Serialize)]
pub struct Rendered {
    /// Final HTML, safe to inject into a page.
    pub html: String,
    /// Paper IDs from `{{papers: …}}` tags, in document order, unresolved.
    /// The hosting page fetches their metadata and fills the placeholders.
    pub paper_ids: Vec<String>,
}

/// The assembled pipeline: tag expansion, math, base Markdown render, link
/// hardening.
///
/// One instance is immutable after construction and carries no per-call
/// state, so it can be shared across any number of independent render calls.
pub struct Renderer {
    config: RenderConfig,
    tags: TagRegistry,
}

impl Renderer {
    /// Build a renderer from a validated config.
    pub fn new(config: RenderConfig) -> Result<Self> {
        let tags = TagRegistry::new(&config)?;
        Ok(Self { config, tags })
    }

    /// Render one Markdown document to HTML.
    ///
    /// Tag expansion runs before the math pass: tag output is generated from
    /// our own templates and contains no `$`, while KaTeX output is not ours
    /// and may contain `{{`.
    pub fn render(&self, input: &str) -> Result<Rendered> {
        let expanded = self.tags.expand(input)?;
        let with_math = math::render_math(&expanded.markdown);
        let html = markdown::markdown_to_html(&with_math, &self.config.markdown);
        let html = links::harden_external_links(&html);
        tracing::debug!(
            bytes_in = input.len(),
            bytes_out = html.len(),
            papers = expanded.paper_ids.len(),
            "rendered document"
        );
        Ok(Rendered {
            html,
            paper_ids: expanded.paper_ids,
        })
    }
}

/// Minimal HTML text escaping for error spans built outside the template
/// engine.
pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
