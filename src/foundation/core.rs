use crate::foundation::error::{BlankClipError, BlankClipResult};

/// Duration used when no positive duration is supplied.
pub const DEFAULT_DURATION_SECS: u64 = 30;

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> BlankClipResult<Self> {
        if den == 0 {
            return Err(BlankClipError::invalid_parameters(
                "Fps: denominator must be > 0",
            ));
        }
        if num == 0 {
            return Err(BlankClipError::invalid_parameters(
                "Fps: numerator must be > 0",
            ));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Whole frames that fit in `secs` seconds, `floor(secs * num / den)`.
    pub fn secs_to_frames_floor(self, secs: u64) -> u64 {
        let frames = u128::from(secs) * u128::from(self.num) / u128::from(self.den.max(1));
        u64::try_from(frames).unwrap_or(u64::MAX)
    }
}

impl std::fmt::Display for Fps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

/// Standard 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// `#000000`.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// `#FFFFFF`.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as `[r, g, b]`.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<(u8, u8, u8)> for Rgb8 {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// Validated clip or composition length: a positive whole number of seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct DurationSecs(u64);

impl DurationSecs {
    /// Seconds as a plain integer.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for DurationSecs {
    type Error = BlankClipError;

    fn try_from(secs: i64) -> BlankClipResult<Self> {
        if secs <= 0 {
            return Err(BlankClipError::invalid_duration(format!(
                "duration {secs} must be a positive integer"
            )));
        }
        Ok(Self(secs.unsigned_abs()))
    }
}

impl TryFrom<i32> for DurationSecs {
    type Error = BlankClipError;

    fn try_from(secs: i32) -> BlankClipResult<Self> {
        Self::try_from(i64::from(secs))
    }
}

impl TryFrom<u64> for DurationSecs {
    type Error = BlankClipError;

    fn try_from(secs: u64) -> BlankClipResult<Self> {
        if secs == 0 {
            return Err(BlankClipError::invalid_duration(
                "duration 0 must be a positive integer",
            ));
        }
        Ok(Self(secs))
    }
}

impl TryFrom<f64> for DurationSecs {
    type Error = BlankClipError;

    /// Always fails: floating-point values are not integers, even when whole (`5.0`).
    fn try_from(secs: f64) -> BlankClipResult<Self> {
        Err(BlankClipError::invalid_duration(format!(
            "duration {secs} must be a positive integer, not a float"
        )))
    }
}

/// Explicit duration if it is a positive integer, otherwise the 30 second default.
pub fn resolve_duration_secs(duration: Option<i64>) -> u64 {
    match duration {
        Some(secs) if secs > 0 => secs.unsigned_abs(),
        _ => DEFAULT_DURATION_SECS,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
