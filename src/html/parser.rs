use std::collections::BTreeMap;

use crate::html::document::{DocumentModel, NodeId};

// ============================================================================
// Tolerant HTML parser — tokenizer + tree builder
// ============================================================================

/// Elements that never open a scope.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose body is consumed raw and discarded.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Parse an HTML string into a `DocumentModel`.
///
/// Never fails: malformed markup recovers silently, and an input with no
/// recognizable elements produces an empty (but valid) document.
pub fn parse(html: &str) -> DocumentModel {
    let mut doc = DocumentModel::empty();
    let bytes = html.as_bytes();
    let mut pos = 0usize;
    // Stack of open elements: (node id, tag name)
    let mut open: Vec<(NodeId, String)> = Vec::new();
    let mut text_start = 0usize;

    while pos < bytes.len() {
        if bytes[pos] != b'<' {
            pos += 1;
            continue;
        }

        // Flush pending text before the '<'
        flush_text(&mut doc, &open, &html[text_start..pos]);

        if html[pos..].starts_with("<!--") {
            pos = skip_comment(html, pos);
        } else if html[pos..].starts_with("<!") || html[pos..].starts_with("<?") {
            pos = skip_until(bytes, pos, b'>');
        } else if html[pos..].starts_with("</") {
            let (name, next) = read_tag_name(html, pos + 2);
            pos = skip_until(bytes, next, b'>');
            close_tag(&mut open, &name);
        } else if bytes
            .get(pos + 1)
            .is_some_and(|b| b.is_ascii_alphabetic())
        {
            let (tag, attributes, self_closing, next) = read_open_tag(html, pos + 1);
            pos = next;
            open_tag(&mut doc, &mut open, tag.clone(), attributes, self_closing);

            if !self_closing && RAW_TEXT_ELEMENTS.contains(&tag.as_str()) {
                pos = skip_raw_text(html, pos, &tag);
                close_tag(&mut open, &tag);
            }
        } else {
            // A lone '<' that starts no markup is text
            pos += 1;
            text_start = pos - 1;
            continue;
        }

        text_start = pos;
    }

    flush_text(&mut doc, &open, &html[text_start..]);
    doc
}

fn flush_text(doc: &mut DocumentModel, open: &[(NodeId, String)], raw: &str) {
    if raw.trim().is_empty() {
        return;
    }
    let parent = open.last().map(|(id, _)| *id);
    doc.push_text(decode_entities(raw), parent);
}

fn open_tag(
    doc: &mut DocumentModel,
    open: &mut Vec<(NodeId, String)>,
    tag: String,
    attributes: BTreeMap<String, String>,
    self_closing: bool,
) {
    close_implicit(open, &tag);
    let parent = open.last().map(|(id, _)| *id);
    let id = doc.push_element(tag.clone(), attributes, parent);
    if !self_closing && !VOID_ELEMENTS.contains(&tag.as_str()) {
        open.push((id, tag));
    }
}

/// Elements that implicitly close an open element of a conflicting kind.
fn close_implicit(open: &mut Vec<(NodeId, String)>, incoming: &str) {
    let closes: &[&str] = match incoming {
        "li" => &["li"],
        "p" => &["p"],
        "option" => &["option"],
        "tr" => &["tr", "td", "th"],
        "td" | "th" => &["td", "th"],
        "dt" | "dd" => &["dt", "dd"],
        _ => return,
    };
    if let Some((_, top)) = open.last() {
        if closes.contains(&top.as_str()) {
            open.pop();
        }
    }
}

/// Pop the open stack down to (and including) `name`. A close tag with no
/// matching open element is ignored.
fn close_tag(open: &mut Vec<(NodeId, String)>, name: &str) {
    if let Some(depth) = open.iter().rposition(|(_, tag)| tag == name) {
        open.truncate(depth);
    }
}

// ============================================================================
// Tokenizer pieces
// ============================================================================

fn skip_comment(html: &str, start: usize) -> usize {
    match html[start + 4..].find("-->") {
        Some(rel) => start + 4 + rel + 3,
        None => html.len(),
    }
}

fn skip_until(bytes: &[u8], mut pos: usize, target: u8) -> usize {
    while pos < bytes.len() && bytes[pos] != target {
        pos += 1;
    }
    (pos + 1).min(bytes.len())
}

/// Consume a raw-text element body up to its matching close tag.
fn skip_raw_text(html: &str, start: usize, tag: &str) -> usize {
    let needle = format!("</{}", tag);
    let needle = needle.as_bytes();
    let bytes = html.as_bytes();
    let mut pos = start;
    while pos + needle.len() <= bytes.len() {
        if bytes[pos..pos + needle.len()].eq_ignore_ascii_case(needle) {
            return skip_until(bytes, pos, b'>');
        }
        pos += 1;
    }
    html.len()
}

fn read_tag_name(html: &str, start: usize) -> (String, usize) {
    let bytes = html.as_bytes();
    let mut pos = start;
    while pos < bytes.len() && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'-') {
        pos += 1;
    }
    (html[start..pos].to_ascii_lowercase(), pos)
}

/// Read a tag name plus attributes, stopping after the closing '>'.
/// Returns (tag, attributes, self_closing, next position).
fn read_open_tag(html: &str, start: usize) -> (String, BTreeMap<String, String>, bool, usize) {
    let bytes = html.as_bytes();
    let (tag, mut pos) = read_tag_name(html, start);
    let mut attributes = BTreeMap::new();
    let mut self_closing = false;

    loop {
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos >= bytes.len() {
            break;
        }
        match bytes[pos] {
            b'>' => {
                pos += 1;
                break;
            }
            b'/' => {
                self_closing = true;
                pos += 1;
            }
            _ => {
                let (name, value, next) = read_attribute(html, pos);
                pos = next;
                if !name.is_empty() {
                    // First declaration wins on duplicates
                    attributes.entry(name).or_insert(value);
                }
            }
        }
    }

    (tag, attributes, self_closing, pos)
}

fn read_attribute(html: &str, start: usize) -> (String, String, usize) {
    let bytes = html.as_bytes();
    let mut pos = start;

    while pos < bytes.len()
        && !bytes[pos].is_ascii_whitespace()
        && !matches!(bytes[pos], b'=' | b'>' | b'/')
    {
        pos += 1;
    }
    let name = html[start..pos].to_ascii_lowercase();

    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }

    // Valueless attribute
    if pos >= bytes.len() || bytes[pos] != b'=' {
        return (name, String::new(), pos);
    }
    pos += 1;
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    if pos >= bytes.len() {
        return (name, String::new(), pos);
    }

    let value = match bytes[pos] {
        quote @ (b'"' | b'\'') => {
            pos += 1;
            let value_start = pos;
            while pos < bytes.len() && bytes[pos] != quote {
                pos += 1;
            }
            let raw = &html[value_start..pos];
            pos = (pos + 1).min(bytes.len());
            decode_entities(raw)
        }
        _ => {
            let value_start = pos;
            while pos < bytes.len() && !bytes[pos].is_ascii_whitespace() && bytes[pos] != b'>' {
                pos += 1;
            }
            decode_entities(&html[value_start..pos])
        }
    };

    (name, value, pos)
}

// ============================================================================
// Entity decoding — minimal set, unknown references pass through
// ============================================================================

fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match tail.find(';') {
            Some(end) if end <= 10 => {
                let entity = &tail[1..end];
                match decode_entity(entity) {
                    Some(decoded) => out.push_str(&decoded),
                    None => out.push_str(&tail[..end + 1]),
                }
                rest = &tail[end + 1..];
            }
            _ => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<String> {
    match entity {
        "amp" => Some("&".into()),
        "lt" => Some("<".into()),
        "gt" => Some(">".into()),
        "quot" => Some("\"".into()),
        "apos" => Some("'".into()),
        "nbsp" => Some(" ".into()),
        _ => {
            let code = entity.strip_prefix('#')?;
            let value = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse::<u32>().ok()?,
            };
            char::from_u32(value).map(|c| c.to_string())
        }
    }
}
