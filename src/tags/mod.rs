pub mod builtins;
pub mod homepage;
pub mod papers;
pub mod parser;
pub mod research;

pub use parser::{LinkSite, TagCall, TagKind};

use crate::config::RenderConfig;
use crate::error::Result;
use crate::locale::Locale;
use crate::render::escape_html;

/// Result of tag expansion over one Markdown document.
#[derive(Debug)]
pub struct Expanded {
    pub markdown: String,
    /// IDs from `{{papers: …}}` tags in document order, awaiting resolution
    /// by the hosting page. Not deduplicated.
    pub paper_ids: Vec<String>,
}

/// Registry of custom tag renderers.
///
/// Constructed once per renderer, holds a dedicated Tera instance for the
/// built-in tag templates. Untrusted values (labels, URLs) are escaped before
/// they reach a template; colors are validated hex and locale strings are
/// ours.
pub struct TagRegistry {
    tera: tera::Tera,
    locale: Locale,
    palette: Vec<String>,
}

impl TagRegistry {
    pub fn new(config: &RenderConfig) -> Result<Self> {
        let mut tera = tera::Tera::default();
        tera.autoescape_on(vec![]); // values are pre-escaped, URLs must survive
        for builtin in builtins::all() {
            tera.add_raw_template(builtin.name, builtin.template.trim_end())?;
        }
        Ok(Self {
            tera,
            locale: config.locale(),
            palette: config.tags.palette.clone(),
        })
    }

    /// Expand all custom tags in the given Markdown.
    ///
    /// Tags inside code blocks are left untouched. A tag whose content is
    /// blank (or yields no valid entries) expands to nothing.
    pub fn expand(&self, input: &str) -> Result<Expanded> {
        let calls = parser::parse_tags(input);
        if calls.is_empty() {
            return Ok(Expanded {
                markdown: input.to_string(),
                paper_ids: Vec::new(),
            });
        }

        let mut paper_ids = Vec::new();
        let mut rendered = Vec::with_capacity(calls.len());
        for call in &calls {
            rendered.push(self.render_tag(call, &mut paper_ids)?);
        }

        // Replace spans back-to-front so byte offsets stay valid.
        let mut output = input.to_string();
        for (call, html) in calls.iter().zip(&rendered).rev() {
            output.replace_range(call.span.0..call.span.1, html);
        }

        Ok(Expanded {
            markdown: output,
            paper_ids,
        })
    }

    fn render_tag(&self, call: &TagCall, paper_ids: &mut Vec<String>) -> Result<String> {
        tracing::debug!(kind = ?call.kind, line = call.line, "expanding tag");
        match call.kind {
            TagKind::Research => {
                let Some(spec) = research::parse_spec(&call.content, &self.palette) else {
                    return Ok(String::new());
                };
                let areas: Vec<serde_json::Value> = spec
                    .areas
                    .iter()
                    .map(|a| {
                        serde_json::json!({
                            "label": escape_html(&a.label),
                            "color": a.color,
                            "text_color": a.text_color,
                        })
                    })
                    .collect();
                let mut ctx = tera::Context::new();
                ctx.insert("heading", self.locale.research_heading());
                ctx.insert("areas", &areas);
                ctx.insert("background", &spec.background);
                Ok(self.tera.render("tags/research.html", &ctx)?)
            }
            TagKind::Papers => {
                let ids = papers::parse_ids(&call.content);
                if ids.is_empty() {
                    return Ok(String::new());
                }
                let mut ctx = tera::Context::new();
                ctx.insert("ids", &ids.join(","));
                ctx.insert("loading", self.locale.papers_loading());
                paper_ids.extend(ids);
                Ok(self.tera.render("tags/papers.html", &ctx)?)
            }
            TagKind::Link(site) => {
                let Some(url) = homepage::normalize_url(&call.content) else {
                    return Ok(String::new());
                };
                let mut ctx = tera::Context::new();
                ctx.insert("site", site.slug());
                ctx.insert("url", &escape_html(&url));
                ctx.insert("label", homepage::link_label(site, self.locale));
                Ok(self.tera.render("tags/homepage.html", &ctx)?)
            }
        }
    }
}
