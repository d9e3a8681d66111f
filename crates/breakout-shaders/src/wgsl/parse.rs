//! Minimal WGSL extraction.
//!
//! Recognises `struct Name { field: type, ... }` declarations, resource
//! `var`s carrying a `@binding(N)` attribute, and integer `const`s.
//! Comments are dropped first; block comments nest as WGSL requires.
//! Member attributes other than `@align(N)` and `@size(N)` are ignored.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static STRUCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\bstruct\s+([A-Za-z_]\w*)\s*\{(.*?)\}").unwrap());
static ATTRIBUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(\w+)(?:\s*\(([^)]*)\))?").unwrap());
static FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^([A-Za-z_]\w*)\s*:\s*(.+)$").unwrap());
static RESOURCE_VAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"((?:@\w+\s*(?:\([^)]*\))?\s*)+)\bvar\b(?:\s*<[^>]*>)?\s+([A-Za-z_]\w*)\s*:\s*([^;=]+)")
        .unwrap()
});
static BINDING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@binding\s*\(\s*([^)]*?)\s*\)").unwrap());
static CONST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bconst\s+([A-Za-z_]\w*)\s*(?::\s*\w+\s*)?=\s*([0-9][0-9A-Za-z]*)\s*;").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WgslField {
    pub name: String,
    /// Type with whitespace removed, e.g. `vec2<f32>`.
    pub ty: String,
    /// Explicit `@align(N)`, if any.
    pub align: Option<usize>,
    /// Explicit `@size(N)`, if any.
    pub size: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WgslStruct {
    pub name: String,
    pub fields: Vec<WgslField>,
}

/// A module-scope resource declared with `@binding(N) var<...> name: ty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WgslBinding {
    pub name: String,
    /// Type with whitespace removed, e.g. `array<PerQuad>`.
    pub ty: String,
    /// `None` when the argument is not an integer literal.
    pub binding: Option<u32>,
}

/// An integer `const` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WgslConst {
    pub name: String,
    pub value: u32,
}

/// Every struct declared in `source`, in order of appearance.
pub fn parse_structs(source: &str) -> Vec<WgslStruct> {
    let source = strip_comments(source);

    STRUCT_RE
        .captures_iter(&source)
        .map(|caps| WgslStruct {
            name: caps[1].to_string(),
            fields: parse_members(&caps[2]),
        })
        .collect()
}

/// Every `@binding` resource declared in `source`.
pub fn parse_bindings(source: &str) -> Vec<WgslBinding> {
    let source = strip_comments(source);

    RESOURCE_VAR_RE
        .captures_iter(&source)
        .filter_map(|caps| {
            let binding = BINDING_RE.captures(&caps[1])?;
            Some(WgslBinding {
                name: caps[2].to_string(),
                ty: strip_whitespace(&caps[3]),
                binding: parse_int_literal(&binding[1]).and_then(|n| u32::try_from(n).ok()),
            })
        })
        .collect()
}

/// Every `const` initialised with an integer literal.
pub fn parse_consts(source: &str) -> Vec<WgslConst> {
    let source = strip_comments(source);

    CONST_RE
        .captures_iter(&source)
        .filter_map(|caps| {
            let value = parse_int_literal(&caps[2]).and_then(|n| u32::try_from(n).ok())?;
            Some(WgslConst {
                name: caps[1].to_string(),
                value,
            })
        })
        .collect()
}

fn parse_members(body: &str) -> Vec<WgslField> {
    split_top_level(body)
        .into_iter()
        .filter_map(|member| {
            let mut align = None;
            let mut size = None;
            // Layout attributes with a non-literal argument stay in the text,
            // so the member fails to parse and shows up as drift.
            let stripped = ATTRIBUTE_RE.replace_all(member, |caps: &Captures<'_>| {
                let literal = caps.get(2).and_then(|arg| parse_int_literal(arg.as_str()));
                match (&caps[1], literal) {
                    ("align", Some(n)) => {
                        align = Some(n);
                        String::new()
                    }
                    ("size", Some(n)) => {
                        size = Some(n);
                        String::new()
                    }
                    ("align" | "size", None) => caps[0].to_string(),
                    _ => String::new(),
                }
            });
            let caps = FIELD_RE.captures(stripped.trim())?;
            Some(WgslField {
                name: caps[1].to_string(),
                ty: strip_whitespace(&caps[2]),
                align,
                size,
            })
        })
        .collect()
}

/// Split on commas outside `<...>` and `(...)`, so `array<f32, 4>` and
/// `@interpolate(flat, center)` stay whole.
fn split_top_level(body: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in body.char_indices() {
        match c {
            '<' | '(' => depth += 1,
            '>' | ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&body[start..]);
    parts.retain(|p| !p.trim().is_empty());
    parts
}

/// Remove `//` and (nested) `/* */` comments. Each block comment becomes a
/// single space so neighbouring tokens stay apart.
pub(crate) fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut depth = 0usize;

    while let Some(c) = chars.next() {
        match (c, chars.peek().copied()) {
            ('/', Some('*')) => {
                chars.next();
                depth += 1;
            }
            ('*', Some('/')) if depth > 0 => {
                chars.next();
                depth -= 1;
                if depth == 0 {
                    out.push(' ');
                }
            }
            ('/', Some('/')) if depth == 0 => {
                while chars.next_if(|&n| n != '\n').is_some() {}
            }
            _ if depth > 0 => {}
            _ => out.push(c),
        }
    }
    out
}

/// Decimal or hex integer literal with an optional `u`/`i` suffix.
fn parse_int_literal(text: &str) -> Option<usize> {
    let text = text.trim().trim_end_matches(|c| c == 'u' || c == 'i');
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
