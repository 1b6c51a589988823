use pulldown_cmark::{html, Options, Parser};

use crate::config::MarkdownOptions;

/// Render Markdown to HTML with the configured extension set.
pub fn markdown_to_html(markdown: &str, opts: &MarkdownOptions) -> String {
    let mut options = Options::empty();
    if opts.strikethrough {
        options.insert(Options::ENABLE_STRIKETHROUGH);
    }
    if opts.tables {
        options.insert(Options::ENABLE_TABLES);
    }
    if opts.footnotes {
        options.insert(Options::ENABLE_FOOTNOTES);
    }
    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
