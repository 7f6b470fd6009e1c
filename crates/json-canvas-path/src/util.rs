use crate::types::PathStep;

/// Decode `~0` and `~1` in one pointer component. A `~` followed by
/// anything else is kept as written.
pub fn unescape_component(component: &str) -> String {
    let mut out = String::with_capacity(component.len());
    let mut chars = component.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('~', Some('0')) => {
                chars.next();
                out.push('~');
            }
            ('~', Some('1')) => {
                chars.next();
                out.push('/');
            }
            _ => out.push(c),
        }
    }
    out
}

/// Encode a key as a pointer component.
pub fn escape_component(component: &str) -> String {
    let mut out = String::with_capacity(component.len());
    for c in component.chars() {
        match c {
            '~' => out.push_str("~0"),
            '/' => out.push_str("~1"),
            c => out.push(c),
        }
    }
    out
}

/// Parse a JSON Pointer string into path steps.
///
/// Every step comes back as a key. Keys that look like indices still address
/// array elements, see [`PathStep::as_index`].
pub fn parse_pointer(pointer: &str) -> Vec<PathStep> {
    if pointer.is_empty() {
        return Vec::new();
    }
    let body = pointer.strip_prefix('/').unwrap_or(pointer);
    body.split('/')
        .map(|component| PathStep::Key(unescape_component(component)))
        .collect()
}

/// Format path steps as a JSON Pointer string. The root formats as `""`.
pub fn format_path(path: &[PathStep]) -> String {
    let mut out = String::new();
    for step in path {
        out.push('/');
        out.push_str(&escape_component(&step.as_key()));
    }
    out
}

/// True for the canonical spelling of an array index: `"0"`, or digits
/// without a leading zero.
pub fn is_valid_index(index: &str) -> bool {
    match index.as_bytes() {
        [b'0'] => true,
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    }
}
