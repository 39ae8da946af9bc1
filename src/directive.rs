//! Chat directive interpreter.
//!
//! Scans raw user text for an embedded avatar command and extracts it as a
//! typed [`Directive`]. Pure extraction: the caller decides whether and how
//! to apply the result.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use crate::persona::ColorValue;

/// A recognized in-chat command. New command kinds extend this enum instead
/// of growing the caller's string handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Directive {
    /// Recolor the avatar: "change color to `<token>`",
    /// "set colour to `<token>`", or a leading "/color `<token>`".
    SetColor(ColorValue),
}

/// Token is a bare alphabetic word or `#` + 3-6 hex digits. The phrase form
/// matches anywhere in the message; the slash form only at the start. The
/// phrase alternative is listed first, so it wins where both could apply.
const COLOR_PATTERN: &str = r"(?i)(?:change|set) colou?r to\s+([a-zA-Z]+|#[0-9a-fA-F]{3,6})|^/color\s+([a-zA-Z]+|#[0-9a-fA-F]{3,6})";

fn color_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(COLOR_PATTERN).expect("color directive pattern compiles"))
}

/// Extract the first directive embedded in `input`, if any. Later matches in
/// the same message are ignored.
pub fn parse(input: &str) -> Option<Directive> {
    let caps = color_regex().captures(input)?;
    let token = caps.get(1).or_else(|| caps.get(2))?.as_str();
    Some(Directive::SetColor(ColorValue::from(token)))
}
