use crate::{
    foundation::error::{BlankClipError, BlankClipResult},
    preset::{format::PixelFormat, resolution::Resolution},
};

/// Preset used when the caller does not name one.
pub const DEFAULT_PRESET: &str = "FHD_24000_1001_RGB24";

/// Parsed `<RESOLUTION>_<fpsNum>_<fpsDen>_<FORMAT>` preset.
///
/// Frame-rate parts are kept as written; zero values are rejected later, when a
/// descriptor is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Preset {
    /// Named frame size.
    pub resolution: Resolution,
    /// Frame-rate numerator.
    pub fps_num: u32,
    /// Frame-rate denominator; may be zero here.
    pub fps_den: u32,
    /// Pixel format.
    pub format: PixelFormat,
}

impl Preset {
    /// Width of the named resolution.
    pub fn width(&self) -> u32 {
        self.resolution.width()
    }

    /// Height of the named resolution.
    pub fn height(&self) -> u32 {
        self.resolution.height()
    }

    /// `(width, height, fps_num, fps_den, format)`.
    pub fn to_parts(&self) -> (u32, u32, u32, u32, PixelFormat) {
        let (w, h) = self.resolution.dimensions();
        (w, h, self.fps_num, self.fps_den, self.format)
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}_{}_{}_{}",
            self.resolution, self.fps_num, self.fps_den, self.format
        )
    }
}

impl std::str::FromStr for Preset {
    type Err = BlankClipError;

    fn from_str(s: &str) -> BlankClipResult<Self> {
        parse_preset(s)
    }
}

impl TryFrom<String> for Preset {
    type Error = BlankClipError;

    fn try_from(s: String) -> BlankClipResult<Self> {
        parse_preset(&s)
    }
}

impl From<Preset> for String {
    fn from(p: Preset) -> Self {
        p.to_string()
    }
}

/// Parse a preset string.
///
/// Matching is anchored at the start of `input` only: once a complete preset has
/// been read, whatever follows it is ignored (`"HD_30_1_RGB24_extra"` parses as
/// `HD_30_1_RGB24`).
///
/// Frame-rate parts must fit in a `u32`, the range the engine boundary carries; larger
/// digit runs fail with [`BlankClipError::InvalidPreset`].
pub fn parse_preset(input: &str) -> BlankClipResult<Preset> {
    let invalid =
        |what: &str| BlankClipError::invalid_preset(format!("parse_preset: {what} in \"{input}\""));

    let (resolution, rest) = Resolution::ALL
        .into_iter()
        .find_map(|r| {
            input
                .strip_prefix(r.name())
                .and_then(|rest| rest.strip_prefix('_'))
                .map(|rest| (r, rest))
        })
        .ok_or_else(|| invalid("unknown resolution"))?;

    let (fps_num, rest) = take_number(rest).ok_or_else(|| invalid("missing fps numerator"))?;
    let rest = rest
        .strip_prefix('_')
        .ok_or_else(|| invalid("missing separator"))?;
    let (fps_den, rest) = take_number(rest).ok_or_else(|| invalid("missing fps denominator"))?;
    let rest = rest
        .strip_prefix('_')
        .ok_or_else(|| invalid("missing separator"))?;

    let (format, trailing) = PixelFormat::ALL
        .into_iter()
        .find_map(|f| rest.strip_prefix(f.name()).map(|trailing| (f, trailing)))
        .ok_or_else(|| invalid("unknown pixel format"))?;

    if !trailing.is_empty() {
        tracing::warn!(preset = input, ignored = trailing, "ignoring trailing preset characters");
    }

    let fps_num = fps_num
        .parse::<u32>()
        .map_err(|e| invalid(&format!("fps numerator {fps_num}: {e}")))?;
    let fps_den = fps_den
        .parse::<u32>()
        .map_err(|e| invalid(&format!("fps denominator {fps_den}: {e}")))?;

    Ok(Preset {
        resolution,
        fps_num,
        fps_den,
        format,
    })
}

/// Split a non-empty leading run of ASCII digits off `s`.
fn take_number(s: &str) -> Option<(&str, &str)> {
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    if end == 0 {
        return None;
    }
    Some(s.split_at(end))
}
