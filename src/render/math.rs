//! Math pass: extract `$inline$` and `$$display$$` spans from markdown and
//! replace them with KaTeX-rendered HTML before the markdown pipeline runs.
//!
//! A formula that fails to typeset degrades to its literal source wrapped in
//! an error container; the rest of the document still renders.
//!
//! This module is only compiled when the `math` feature is enabled.

/// KaTeX CSS CDN URL for inclusion in page `<head>`.
pub const KATEX_CSS_URL: &str = "https://cdn.jsdelivr.net/npm/katex@0.16.22/dist/katex.min.css";

/// Pre-process markdown, rendering math expressions via KaTeX.
///
/// `$$...$$` takes precedence over two inline matches at the same position
/// and may span lines; `$...$` must close on the same line and must not be
/// empty or escaped. Code blocks and inline code spans are left untouched.
#[cfg(feature = "math")]
pub fn render_math(markdown: &str) -> String {
    use super::escape_html;

    let mut result = String::with_capacity(markdown.len());
    let chars: Vec<char> = markdown.chars().collect();
    let len = chars.len();
    let mut i = 0;

    while i < len {
        // Skip fenced code blocks (``` or ~~~)
        if i + 2 < len
            && ((chars[i] == '`' && chars[i + 1] == '`' && chars[i + 2] == '`')
                || (chars[i] == '~' && chars[i + 1] == '~' && chars[i + 2] == '~'))
        {
            let fence_char = chars[i];
            let fence_start = i;
            while i < len && chars[i] == fence_char {
                i += 1;
            }
            let fence_len = i - fence_start;
            // Copy fence + the rest of the info-string line
            for c in &chars[fence_start..i] {
                result.push(*c);
            }
            while i < len && chars[i] != '\n' {
                result.push(chars[i]);
                i += 1;
            }
            if i < len {
                result.push(chars[i]);
                i += 1;
            }
            // Copy until a closing fence at least as long as the opener
            loop {
                if i >= len {
                    break;
                }
                if chars[i] == fence_char {
                    let close_start = i;
                    let mut close_count = 0;
                    while i < len && chars[i] == fence_char {
                        close_count += 1;
                        i += 1;
                    }
                    for c in &chars[close_start..i] {
                        result.push(*c);
                    }
                    if close_count >= fence_len {
                        break;
                    }
                } else {
                    result.push(chars[i]);
                    i += 1;
                }
            }
            continue;
        }

        // Skip inline code spans (`...`)
        if chars[i] == '`' && (i + 1 >= len || chars[i + 1] != '`') {
            result.push('`');
            i += 1;
            while i < len && chars[i] != '`' {
                result.push(chars[i]);
                i += 1;
            }
            if i < len {
                result.push('`');
                i += 1;
            }
            continue;
        }

        // Display math: $$...$$
        if i + 1 < len && chars[i] == '$' && chars[i + 1] == '$' {
            i += 2;
            let expr_start = i;
            while i + 1 < len && !(chars[i] == '$' && chars[i + 1] == '$') {
                i += 1;
            }
            if i + 1 < len {
                let raw: String = chars[expr_start..i].iter().collect();
                i += 2; // skip closing $$
                let expr = raw.trim();
                match typeset(expr, true) {
                    Ok(html) => {
                        result.push_str("<div class=\"math-display\">");
                        result.push_str(&html);
                        result.push_str("</div>");
                    }
                    Err(err) => {
                        tracing::warn!("display math failed to typeset: {err}");
                        result.push_str("<div class=\"math-display math-error\">$$");
                        result.push_str(&escape_html(expr));
                        result.push_str("$$</div>");
                    }
                }
            } else {
                // Unclosed $$, preserve as-is
                result.push_str("$$");
                let rest: String = chars[expr_start..].iter().collect();
                result.push_str(&rest);
                break;
            }
            continue;
        }

        // Inline math: $...$
        if chars[i] == '$' {
            let escaped = i > 0 && chars[i - 1] == '\\';
            // Content must exist and not start with a space or newline
            let has_content =
                i + 1 < len && chars[i + 1] != '$' && chars[i + 1] != ' ' && chars[i + 1] != '\n';

            if !escaped && has_content {
                i += 1;
                let expr_start = i;
                while i < len && chars[i] != '\n' {
                    if chars[i] == '$' && chars[i - 1] != '\\' {
                        break;
                    }
                    i += 1;
                }
                if i < len && chars[i] == '$' {
                    let expr: String = chars[expr_start..i].iter().collect();
                    i += 1; // skip closing $
                    if !expr.is_empty() && !expr.ends_with(' ') {
                        match typeset(&expr, false) {
                            Ok(html) => {
                                result.push_str("<span class=\"math-inline\">");
                                result.push_str(&html);
                                result.push_str("</span>");
                            }
                            Err(err) => {
                                tracing::warn!("inline math failed to typeset: {err}");
                                result.push_str("<span class=\"math-inline math-error\">$");
                                result.push_str(&escape_html(&expr));
                                result.push_str("$</span>");
                            }
                        }
                    } else {
                        // Not valid math (trailing space), preserve
                        result.push('$');
                        result.push_str(&expr);
                        result.push('$');
                    }
                } else {
                    // No closing $ on this line, preserve
                    result.push('$');
                    let rest: String = chars[expr_start..i].iter().collect();
                    result.push_str(&rest);
                }
                continue;
            }
        }

        result.push(chars[i]);
        i += 1;
    }

    result
}

/// Typeset a single expression via KaTeX.
#[cfg(feature = "math")]
fn typeset(expr: &str, display_mode: bool) -> Result<String, String> {
    let opts = katex::Opts::builder()
        .display_mode(display_mode)
        .output_type(katex::OutputType::HtmlAndMathml)
        .trust(true)
        .build()
        .map_err(|e| format!("KaTeX options error: {e}"))?;

    katex::render_with_opts(expr, &opts).map_err(|e| format!("KaTeX render error: {e}"))
}

/// Stub when the math feature is not enabled — returns input unchanged.
#[cfg(not(feature = "math"))]
pub fn render_math(markdown: &str) -> String {
    markdown.to_string()
}
