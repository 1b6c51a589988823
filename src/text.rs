//! Plain-text helpers for list pages and previews.

/// Strip Markdown formatting, returning readable plain text.
///
/// Drops heading/list/quote markers, emphasis and code markers, fenced code
/// blocks, HTML tags, and link/image syntax (keeping the link text). Meant
/// for excerpts, not for round-tripping.
pub fn strip_markdown(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut in_fence = false;
    let mut fence_char = '`';

    for line in text.lines() {
        let trimmed = line.trim_start();
        if let Some(ch) = fence_marker(trimmed) {
            if in_fence {
                if ch == fence_char {
                    in_fence = false;
                }
            } else {
                in_fence = true;
                fence_char = ch;
            }
            continue;
        }
        if in_fence {
            continue;
        }
        let stripped = strip_inline(strip_line_prefix(trimmed));
        lines.push(stripped);
    }

    // Drop blank lines left behind by removed structure.
    let mut out = String::new();
    for line in &lines {
        if line.trim().is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(line.trim_end());
    }
    out
}

/// A plain-text excerpt of at most `max_chars` characters, ellipsized.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let plain = strip_markdown(text).replace('\n', " ");
    if plain.chars().count() <= max_chars {
        return plain;
    }
    let cut: String = plain.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

/// Returns the fence character if the line opens or closes a fenced block.
fn fence_marker(line: &str) -> Option<char> {
    for ch in ['`', '~'] {
        if line.starts_with(&ch.to_string().repeat(3)) {
            return Some(ch);
        }
    }
    None
}

/// Strip heading, blockquote, and list markers from the start of a line.
fn strip_line_prefix(line: &str) -> &str {
    let mut rest = line;
    while let Some(r) = rest.strip_prefix("> ").or_else(|| rest.strip_prefix('>')) {
        rest = r.trim_start();
    }
    if rest.starts_with('#') {
        let hashes = rest.chars().take_while(|&c| c == '#').count();
        if hashes <= 6 {
            if let Some(r) = rest[hashes..].strip_prefix(' ') {
                return r;
            }
        }
    }
    for marker in ["- ", "* ", "+ "] {
        if let Some(r) = rest.strip_prefix(marker) {
            return r;
        }
    }
    // Ordered list: digits, a dot, a space.
    let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        if let Some(r) = rest[digits..].strip_prefix(". ") {
            return r;
        }
    }
    rest
}

/// Drop inline formatting markers, link/image syntax, and HTML tags.
fn strip_inline(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '!' if chars.get(i + 1) == Some(&'[') => {
                i += 1; // image: drop the bang, the bracket is handled next
            }
            '[' => {
                if let Some(close) = find_from(&chars, i + 1, ']') {
                    if chars.get(close + 1) == Some(&'(') {
                        if let Some(paren) = find_from(&chars, close + 2, ')') {
                            out.extend(&chars[i + 1..close]);
                            i = paren + 1;
                            continue;
                        }
                    }
                }
                out.push('[');
                i += 1;
            }
            '<' => match find_from(&chars, i + 1, '>') {
                Some(end) => i = end + 1,
                None => {
                    out.push('<');
                    i += 1;
                }
            },
            '*' | '_' | '~' | '`' => i += 1,
            c => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

fn find_from(chars: &[char], start: usize, target: char) -> Option<usize> {
    chars[start..]
        .iter()
        .position(|&c| c == target)
        .map(|off| start + off)
}
