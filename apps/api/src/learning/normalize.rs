//! Response Normalizer — turns free-text model output into an ordered list of
//! strings the client can render.
//!
//! The generator is not a deterministic structured-data source: replies show
//! up fenced in markdown, single-quoted, wrapped in an object, or as plain
//! prose. Each stage below narrows that space toward one strict contract
//! (ordered `Vec<String>`) and degrades to an empty list instead of failing
//! the request. The client treats an empty list as "no results, retry".

use serde_json::Value;
use std::borrow::Cow;
use tracing::warn;

/// Which list the caller is extracting. Drives the candidate-key search when
/// the generator wraps the array in an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListKind {
    Subtopics,
    Resources,
}

impl ListKind {
    /// Object keys checked in priority order when the parsed value is an
    /// object instead of a bare array. Heuristic: if the generator's output
    /// shape drifts, these names go stale and the wrong field may win.
    fn candidate_keys(self) -> &'static [&'static str] {
        match self {
            ListKind::Subtopics => &["subtopics", "topics"],
            ListKind::Resources => &["resources", "urls", "links"],
        }
    }
}

/// Normalizes raw model output into an ordered list of strings.
///
/// Never fails: absent input, unparseable text, and non-array values all
/// yield an empty list. Output order follows the raw array.
pub fn normalize_list(raw: Option<&str>, kind: ListKind) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    let cleaned = strip_fences(raw);
    if cleaned.is_empty() {
        return Vec::new();
    }

    let Some(value) = parse_with_repairs(&cleaned) else {
        warn!(
            "unparsable model output ({} bytes after cleanup)",
            cleaned.len()
        );
        return Vec::new();
    };

    let Some(items) = extract_array(value, kind) else {
        warn!("model output parsed but contained no array");
        return Vec::new();
    };

    items.iter().map(value_to_string).collect()
}

/// Resource entries may come back as `"label: url"`. Keep everything after
/// the first `": "`, then guarantee a scheme so the client can render a link.
pub fn extract_link(entry: &str) -> String {
    let link = match entry.split_once(": ") {
        Some((_, rest)) => rest,
        None => entry,
    }
    .trim();

    if link.starts_with("http://") || link.starts_with("https://") {
        link.to_string()
    } else {
        format!("https://{link}")
    }
}

/// Removes markdown code-fence markers (``` with an optional json/javascript
/// annotation) wherever they appear, then trims surrounding whitespace.
fn strip_fences(raw: &str) -> String {
    raw.replace("```json", "")
        .replace("```javascript", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Parse strategies, tried in order until one yields a JSON value:
/// 1. strict parse of the cleaned text;
/// 2. if the text is a single value entirely wrapped in double quotes, re-wrap
///    the inner text in single quotes and retry (degenerate generator output
///    that disguises a quoted string as JSON);
/// 3. replace every single quote with a double quote and retry once.
fn parse_with_repairs(cleaned: &str) -> Option<Value> {
    let candidates = [
        Some(Cow::Borrowed(cleaned)),
        rewrap_double_quoted(cleaned).map(Cow::Owned),
        Some(Cow::Owned(cleaned.replace('\'', "\""))),
    ];

    candidates
        .into_iter()
        .flatten()
        .find_map(|text| serde_json::from_str(&text).ok())
}

fn rewrap_double_quoted(text: &str) -> Option<String> {
    let inner = text.strip_prefix('"')?.strip_suffix('"')?;
    Some(format!("'{inner}'"))
}

/// Pulls the list out of the parsed value. Arrays pass through; objects are
/// searched by candidate key, then fall back to the first array-valued field.
fn extract_array(value: Value, kind: ListKind) -> Option<Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(mut map) => {
            for key in kind.candidate_keys() {
                if let Some(Value::Array(items)) = map.remove(*key) {
                    return Some(items);
                }
            }
            map.into_iter().find_map(|(_, v)| match v {
                Value::Array(items) => Some(items),
                _ => None,
            })
        }
        _ => None,
    }
}

/// Model arrays occasionally mix in numbers or nested values; anything
/// non-string is rendered through its JSON form.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
