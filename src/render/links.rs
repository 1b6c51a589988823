//! Link-safety pass over rendered HTML.
//!
//! External links open in a new tab without handing the opener to the target
//! page. Internal (relative) links are left untouched.

/// Add `target="_blank" rel="noopener noreferrer"` to every external anchor.
///
/// An href is external when it starts with `http://`, `https://`, or `//`,
/// or contains `://` anywhere (any scheme-qualified URL). Existing `target`
/// or `rel` attributes on external anchors are replaced, never duplicated,
/// so the pass is idempotent.
pub fn harden_external_links(html: &str) -> String {
    let bytes = html.as_bytes();
    let len = bytes.len();
    let mut result = String::with_capacity(len + 64);
    let mut pos = 0;

    while pos < len {
        let Some(off) = html[pos..].find("<a") else {
            result.push_str(&html[pos..]);
            break;
        };
        let tag_start = pos + off;
        result.push_str(&html[pos..tag_start]);

        // `<a` must be a whole element name, not a prefix of e.g. `<abbr`.
        let after = tag_start + 2;
        if after >= len || !matches!(bytes[after], b' ' | b'\t' | b'\n' | b'>' | b'/') {
            result.push_str("<a");
            pos = after;
            continue;
        }

        let Some(tag_end) = find_tag_end(bytes, after) else {
            result.push_str(&html[tag_start..]);
            break;
        };
        let tag = &html[tag_start..=tag_end];
        match href_value(tag) {
            Some(href) if is_external(href) => result.push_str(&rewrite_anchor(tag)),
            _ => result.push_str(tag),
        }
        pos = tag_end + 1;
    }

    result
}

/// True for scheme-qualified or protocol-relative URLs.
fn is_external(href: &str) -> bool {
    href.starts_with("http://")
        || href.starts_with("https://")
        || href.starts_with("//")
        || href.contains("://")
}

/// Position of the `>` closing the open tag, skipping quoted attribute values.
fn find_tag_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut pos = start;
    let mut quote: Option<u8> = None;
    while pos < bytes.len() {
        match quote {
            Some(q) => {
                if bytes[pos] == q {
                    quote = None;
                }
            }
            None => match bytes[pos] {
                b'"' | b'\'' => quote = Some(bytes[pos]),
                b'>' => return Some(pos),
                _ => {}
            },
        }
        pos += 1;
    }
    None
}

/// Extract the quoted href value from an anchor open tag.
fn href_value(tag: &str) -> Option<&str> {
    let bytes = tag.as_bytes();
    let idx = tag.find("href=")?;
    let val_start = idx + 5;
    let quote = *bytes.get(val_start)?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let rest = &tag[val_start + 1..];
    let end = rest.find(quote as char)?;
    Some(&rest[..end])
}

/// Rebuild an anchor open tag with `target` and `rel` forced to the safe
/// values. All other attributes are copied through verbatim.
fn rewrite_anchor(tag: &str) -> String {
    let inner = &tag[2..tag.len() - 1];
    let inner = inner.strip_suffix('/').unwrap_or(inner);
    let mut out = String::with_capacity(tag.len() + 48);
    out.push_str("<a");
    for (name, raw) in attributes(inner) {
        if name.eq_ignore_ascii_case("target") || name.eq_ignore_ascii_case("rel") {
            continue;
        }
        out.push(' ');
        out.push_str(raw);
    }
    out.push_str(" target=\"_blank\" rel=\"noopener noreferrer\">");
    out
}

/// Tokenize `name`, `name=value`, and `name="value"` attribute forms.
/// Returns `(name, raw_source)` pairs; `raw_source` preserves the original
/// spelling so the rebuilt tag stays byte-faithful for kept attributes.
fn attributes(input: &str) -> Vec<(&str, &str)> {
    let bytes = input.as_bytes();
    let len = bytes.len();
    let mut attrs = Vec::new();
    let mut pos = 0;

    while pos < len {
        while pos < len && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos >= len {
            break;
        }
        let start = pos;
        while pos < len && !bytes[pos].is_ascii_whitespace() && bytes[pos] != b'=' {
            pos += 1;
        }
        let name_end = pos;

        let mut lookahead = pos;
        while lookahead < len && bytes[lookahead].is_ascii_whitespace() {
            lookahead += 1;
        }
        if lookahead < len && bytes[lookahead] == b'=' {
            pos = lookahead + 1;
            while pos < len && bytes[pos].is_ascii_whitespace() {
                pos += 1;
            }
            if pos < len && (bytes[pos] == b'"' || bytes[pos] == b'\'') {
                let q = bytes[pos];
                pos += 1;
                while pos < len && bytes[pos] != q {
                    pos += 1;
                }
                if pos < len {
                    pos += 1;
                }
            } else {
                while pos < len && !bytes[pos].is_ascii_whitespace() {
                    pos += 1;
                }
            }
        }
        attrs.push((&input[start..name_end], input[start..pos].trim_end()));
    }

    attrs
}
