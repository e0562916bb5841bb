use crate::foundation::{
    core::Rgb8,
    error::{BlankClipError, BlankClipResult},
};

/// Largest packed `0xRRGGBB` value.
pub const MAX_PACKED_COLOR: i64 = 0xFF_FFFF;

/// A color as written by a caller: packed `0xRRGGBB` integer or hex digits.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    /// `0xRRGGBB`; valid range is `0..=0xFFFFFF`.
    Packed(i64),
    /// `RRGGBB` or `#RRGGBB`, case-insensitive.
    Hex(String),
}

impl Default for ColorInput {
    fn default() -> Self {
        Self::Packed(0)
    }
}

impl From<i64> for ColorInput {
    fn from(v: i64) -> Self {
        Self::Packed(v)
    }
}

impl From<i32> for ColorInput {
    fn from(v: i32) -> Self {
        Self::Packed(i64::from(v))
    }
}

impl From<u32> for ColorInput {
    fn from(v: u32) -> Self {
        Self::Packed(i64::from(v))
    }
}

impl From<&str> for ColorInput {
    fn from(s: &str) -> Self {
        Self::Hex(s.to_owned())
    }
}

impl From<String> for ColorInput {
    fn from(s: String) -> Self {
        Self::Hex(s)
    }
}

impl From<Rgb8> for ColorInput {
    fn from(c: Rgb8) -> Self {
        Self::Packed((i64::from(c.r) << 16) | (i64::from(c.g) << 8) | i64::from(c.b))
    }
}

impl TryFrom<&serde_json::Value> for ColorInput {
    type Error = BlankClipError;

    /// Loosely typed configuration values: integers and strings only.
    fn try_from(v: &serde_json::Value) -> BlankClipResult<Self> {
        match v {
            serde_json::Value::Number(n) => n.as_i64().map(Self::Packed).ok_or_else(|| {
                BlankClipError::invalid_color(format!(
                    "parse_color: color number {n} is not an integer"
                ))
            }),
            serde_json::Value::String(s) => Ok(Self::Hex(s.clone())),
            other => Err(BlankClipError::invalid_color(format!(
                "parse_color: uninterpretable color {other}"
            ))),
        }
    }
}

/// Normalize a color to 8-bit RGB.
pub fn parse_color(color: &ColorInput) -> BlankClipResult<Rgb8> {
    match color {
        ColorInput::Packed(v) => parse_packed(*v),
        ColorInput::Hex(s) => parse_hex(s),
    }
}

fn parse_packed(v: i64) -> BlankClipResult<Rgb8> {
    if !(0..=MAX_PACKED_COLOR).contains(&v) {
        return Err(BlankClipError::invalid_color(format!(
            "parse_color: color value {v:#x} is outside 0x000000..=0xFFFFFF"
        )));
    }
    let byte = |shift: u32| ((v >> shift) & 0xFF) as u8;
    Ok(Rgb8::new(byte(16), byte(8), byte(0)))
}

// Exactly six hex digits; `#RRGGBBAA`-style inputs are rejected.
fn parse_hex(s: &str) -> BlankClipResult<Rgb8> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(BlankClipError::invalid_color(format!(
            "parse_color: \"{s}\" is not #RRGGBB hex"
        )));
    }

    fn hex_byte(pair: &str) -> BlankClipResult<u8> {
        u8::from_str_radix(pair, 16).map_err(|e| {
            BlankClipError::invalid_color(format!("parse_color: invalid hex byte \"{pair}\": {e}"))
        })
    }

    Ok(Rgb8::new(
        hex_byte(&digits[0..2])?,
        hex_byte(&digits[2..4])?,
        hex_byte(&digits[4..6])?,
    ))
}
