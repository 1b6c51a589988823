/// External-profile sites recognized as homepage-link tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkSite {
    Homepage,
    Website,
    Github,
    Scholar,
    Linkedin,
    Researchgate,
}

impl LinkSite {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "homepage" => Some(LinkSite::Homepage),
            "website" => Some(LinkSite::Website),
            "github" => Some(LinkSite::Github),
            "scholar" => Some(LinkSite::Scholar),
            "linkedin" => Some(LinkSite::Linkedin),
            "researchgate" => Some(LinkSite::Researchgate),
            _ => None,
        }
    }

    /// Lowercase identifier, used both as the tag name and as a CSS class suffix.
    pub fn slug(self) -> &'static str {
        match self {
            LinkSite::Homepage => "homepage",
            LinkSite::Website => "website",
            LinkSite::Github => "github",
            LinkSite::Scholar => "scholar",
            LinkSite::Linkedin => "linkedin",
            LinkSite::Researchgate => "researchgate",
        }
    }
}

/// The kind of a custom tag. One variant per renderer; adding a variant
/// without a matching render arm is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `{{research: A, B, C}}` — research-area chips.
    Research,
    /// `{{papers: 1,2,3}}` — placeholder resolved by the hosting page.
    Papers,
    /// `{{github: url}}`, `{{website: url}}`, ... — an external profile link.
    Link(LinkSite),
}

impl TagKind {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "research" => Some(TagKind::Research),
            "papers" => Some(TagKind::Papers),
            other => LinkSite::from_name(other).map(TagKind::Link),
        }
    }
}

/// A custom tag found in Markdown content.
#[derive(Debug, Clone)]
pub struct TagCall {
    pub kind: TagKind,
    /// Raw text between `:` and `}}`, untrimmed. Render rules own trimming.
    pub content: String,
    /// Byte offset range `(start, end)` in the source string.
    pub span: (usize, usize),
    /// 1-based line number of the opening `{{`.
    pub line: usize,
}

/// Scan Markdown content for custom tags.
///
/// Skips fenced code blocks and inline code spans. A malformed or unknown tag
/// is not an error; its text is left for the base Markdown render, and no
/// input is consumed beyond the candidate `{`. Returns calls in document
/// order with byte spans for replacement.
pub fn parse_tags(input: &str) -> Vec<TagCall> {
    let bytes = input.as_bytes();
    let len = bytes.len();
    let mut calls = Vec::new();
    let mut pos: usize = 0;
    let mut line: usize = 1;

    // Fenced code block state
    let mut in_fence = false;
    let mut fence_char: u8 = 0;
    let mut fence_len: usize = 0;

    while pos < len {
        if is_line_start(bytes, pos) {
            let check = skip_indent(bytes, pos);
            if in_fence {
                if fence_close_at(bytes, check, fence_char, fence_len) {
                    in_fence = false;
                    pos = next_line(bytes, pos);
                    line += 1;
                    continue;
                }
            } else if let Some((ch, n)) = fence_open_at(bytes, check) {
                in_fence = true;
                fence_char = ch;
                fence_len = n;
                pos = next_line(bytes, pos);
                line += 1;
                continue;
            }
        }

        if in_fence {
            if bytes[pos] == b'\n' {
                line += 1;
            }
            pos += 1;
            continue;
        }

        match bytes[pos] {
            b'\n' => {
                line += 1;
                pos += 1;
            }
            b'`' => {
                // Inline code span: skip to the matching backtick run.
                let run = run_len(bytes, pos, b'`');
                match closing_run(bytes, pos + run, run) {
                    Some(close) => {
                        let end = close + run;
                        line += count_newlines(&bytes[pos..end]);
                        pos = end;
                    }
                    None => pos += run,
                }
            }
            b'{' => match match_tag_at(input, pos) {
                Some((kind, content_start, end)) => {
                    calls.push(TagCall {
                        kind,
                        content: input[content_start..end - 2].to_string(),
                        span: (pos, end),
                        line,
                    });
                    line += count_newlines(&bytes[pos..end]);
                    pos = end;
                }
                None => pos += 1,
            },
            _ => pos += 1,
        }
    }

    calls
}

/// Try to recognize a tag at `pos`. Pure: consumes nothing on failure.
/// Returns `(kind, content_start, end_past_close)` on a match.
fn match_tag_at(input: &str, pos: usize) -> Option<(TagKind, usize, usize)> {
    let bytes = input.as_bytes();
    if !input[pos..].starts_with("{{") {
        return None;
    }
    let name_start = pos + 2;
    let mut i = name_start;
    while i < bytes.len() && bytes[i].is_ascii_lowercase() {
        i += 1;
    }
    if i == name_start || i >= bytes.len() || bytes[i] != b':' {
        return None;
    }
    let kind = TagKind::from_name(&input[name_start..i])?;
    let content_start = i + 1;
    let close = input[content_start..].find("}}")? + content_start;
    Some((kind, content_start, close + 2))
}

fn is_line_start(bytes: &[u8], pos: usize) -> bool {
    pos == 0 || bytes[pos - 1] == b'\n'
}

/// Skip up to 3 leading spaces, the indent a fence marker may carry.
fn skip_indent(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos;
    while i < bytes.len() && bytes[i] == b' ' && i - pos < 3 {
        i += 1;
    }
    i
}

/// Detect a fence opener (``` or ~~~, three or more) at `pos`.
fn fence_open_at(bytes: &[u8], pos: usize) -> Option<(u8, usize)> {
    if pos >= bytes.len() {
        return None;
    }
    let ch = bytes[pos];
    if ch != b'`' && ch != b'~' {
        return None;
    }
    let count = run_len(bytes, pos, ch);
    (count >= 3).then_some((ch, count))
}

/// Detect a closing fence: same char, at least the opening length, and
/// nothing but whitespace on the rest of the line.
fn fence_close_at(bytes: &[u8], pos: usize, fence_char: u8, fence_len: usize) -> bool {
    if pos >= bytes.len() || bytes[pos] != fence_char {
        return false;
    }
    let count = run_len(bytes, pos, fence_char);
    if count < fence_len {
        return false;
    }
    for &b in &bytes[pos + count..] {
        if b == b'\n' {
            return true;
        }
        if b != b' ' && b != b'\t' {
            return false;
        }
    }
    true
}

fn run_len(bytes: &[u8], pos: usize, ch: u8) -> usize {
    let mut count = 0;
    while pos + count < bytes.len() && bytes[pos + count] == ch {
        count += 1;
    }
    count
}

/// Position just past the current line's `\n`, or end of input.
fn next_line(bytes: &[u8], pos: usize) -> usize {
    match bytes[pos..].iter().position(|&b| b == b'\n') {
        Some(off) => pos + off + 1,
        None => bytes.len(),
    }
}

/// Find a closing backtick run of exactly `count` backticks from `start`.
fn closing_run(bytes: &[u8], start: usize, count: usize) -> Option<usize> {
    let mut pos = start;
    while pos < bytes.len() {
        if bytes[pos] == b'`' {
            let found = run_len(bytes, pos, b'`');
            if found == count {
                return Some(pos);
            }
            pos += found;
        } else {
            pos += 1;
        }
    }
    None
}

fn count_newlines(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| b == b'\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_research_tag() {
        let calls = parse_tags("{{research: AI, Robotics}}");
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].kind, TagKind::Research);
        assert_eq!(calls[0].content, " AI, Robotics");
    }

    #[test]
    fn test_parse_papers_tag() {
        let calls = parse_tags("See {{papers: 1,2,3}} below");
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].kind, TagKind::Papers);
        assert_eq!(calls[0].content, " 1,2,3");
    }

    #[test]
    fn test_parse_link_tags() {
        let input = "{{github: https://github.com/x}}\n{{scholar: https://scholar.google.com}}\n{{website: example.com}}";
        let calls = parse_tags(input);
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].kind, TagKind::Link(LinkSite::Github));
        assert_eq!(calls[1].kind, TagKind::Link(LinkSite::Scholar));
        assert_eq!(calls[2].kind, TagKind::Link(LinkSite::Website));
    }

    #[test]
    fn test_unknown_name_not_matched() {
        assert!(parse_tags("{{unknown: x}}").is_empty());
        assert!(parse_tags("{{youtube: abc}}").is_empty());
    }

    #[test]
    fn test_unterminated_tag_not_matched() {
        assert!(parse_tags("{{research: AI").is_empty());
    }

    #[test]
    fn test_missing_colon_not_matched() {
        assert!(parse_tags("{{research}}").is_empty());
    }

    #[test]
    fn test_uppercase_name_not_matched() {
        assert!(parse_tags("{{Research: AI}}").is_empty());
    }

    #[test]
    fn test_span_covers_full_tag() {
        let input = "before {{papers: 7}} after";
        let calls = parse_tags(input);
        assert_eq!(&input[calls[0].span.0..calls[0].span.1], "{{papers: 7}}");
    }

    #[test]
    fn test_failed_match_leaves_later_tags_reachable() {
        let calls = parse_tags("{{nope: x}} then {{papers: 5}}");
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].kind, TagKind::Papers);
    }

    #[test]
    fn test_extra_brace_before_tag() {
        let input = "{{{research: AI}}";
        let calls = parse_tags(input);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].span.0, 1);
    }

    #[test]
    fn test_tag_in_fenced_code_ignored() {
        let input = "```\n{{research: AI}}\n```\n\n{{papers: 1}}";
        let calls = parse_tags(input);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].kind, TagKind::Papers);
    }

    #[test]
    fn test_tag_in_tilde_fence_ignored() {
        let input = "~~~\n{{research: AI}}\n~~~";
        assert!(parse_tags(input).is_empty());
    }

    #[test]
    fn test_fence_at_start_of_input() {
        let input = "```\n{{papers: 1}}\n```";
        assert!(parse_tags(input).is_empty());
    }

    #[test]
    fn test_indented_fence_up_to_three_spaces() {
        let input = "   ```\n{{papers: 1}}\n   ```\n{{papers: 2}}";
        let calls = parse_tags(input);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].content, " 2");
    }

    #[test]
    fn test_longer_closing_fence_accepted() {
        let input = "```\n{{papers: 1}}\n````\n{{papers: 2}}";
        let calls = parse_tags(input);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].content, " 2");
    }

    #[test]
    fn test_shorter_inner_fence_does_not_close() {
        let input = "````\n```\n{{papers: 1}}\n````\n";
        assert!(parse_tags(input).is_empty());
    }

    #[test]
    fn test_unclosed_fence_swallows_rest() {
        let input = "```\n{{papers: 1}}";
        assert!(parse_tags(input).is_empty());
    }

    #[test]
    fn test_tag_in_inline_code_ignored() {
        let input = "Use `{{papers: 1}}` literally, but {{papers: 2}} renders.";
        let calls = parse_tags(input);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].content, " 2");
    }

    #[test]
    fn test_double_backtick_code_span() {
        let input = "``{{papers: 1}}`` and {{papers: 2}}";
        let calls = parse_tags(input);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].content, " 2");
    }

    #[test]
    fn test_unclosed_backtick_does_not_hide_tags() {
        let input = "a ` stray tick {{papers: 3}}";
        let calls = parse_tags(input);
        assert_eq!(calls.len(), 1);
    }

    #[test]
    fn test_line_numbers() {
        let input = "one\ntwo\n{{papers: 1}}\n{{papers: 2}}";
        let calls = parse_tags(input);
        assert_eq!(calls[0].line, 3);
        assert_eq!(calls[1].line, 4);
    }

    #[test]
    fn test_content_may_cross_newline() {
        let input = "{{research: AI,\nRobotics}}";
        let calls = parse_tags(input);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].content, " AI,\nRobotics");
    }

    #[test]
    fn test_multiple_tags_same_line() {
        let input = "{{github: a.com}} {{linkedin: b.com}}";
        let calls = parse_tags(input);
        assert_eq!(calls.len(), 2);
        assert!(calls[0].span.1 <= calls[1].span.0);
    }

    #[test]
    fn test_no_tags_returns_empty() {
        assert!(parse_tags("Just **markdown** here.").is_empty());
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_nested_braces_close_at_first_terminator() {
        let calls = parse_tags("{{research: {{x}}");
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].content, " {{x");
    }

    #[test]
    fn test_multibyte_content_preserved() {
        let calls = parse_tags("{{research: 机器学习, 深度学习}}");
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].content, " 机器学习, 深度学习");
    }
}
