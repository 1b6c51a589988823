//! labmark renders laboratory-site Markdown to HTML.
//!
//! On top of a CommonMark base render it layers the content conventions the
//! lab site uses: `$...$`/`$$...$$` KaTeX math, `{{research: …}}` area chips,
//! `{{papers: …}}` placeholders resolved asynchronously by the hosting page,
//! the homepage-link tag family, and new-tab hardening of external anchors.
//!
//! ```no_run
//! use labmark::{RenderConfig, Renderer};
//!
//! let renderer = Renderer::new(RenderConfig::default())?;
//! let out = renderer.render("See $E=mc^2$ and {{papers: 1,2}}.")?;
//! assert!(out.html.contains("papers-list-container"));
//! assert_eq!(out.paper_ids, vec!["1", "2"]);
//! # Ok::<(), labmark::RenderError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod locale;
pub mod output;
pub mod render;
pub mod tags;
pub mod templates;
pub mod text;

pub use config::RenderConfig;
pub use error::{RenderError, Result};
pub use locale::Locale;
pub use render::{Rendered, Renderer};
