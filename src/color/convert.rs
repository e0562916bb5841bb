use crate::{
    foundation::{
        core::Rgb8,
        error::{BlankClipError, BlankClipResult},
    },
    preset::format::{FormatFamily, PixelFormat},
};

/// Background sample value(s) for a blank buffer, sized to the format's bit depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Background {
    /// Single-plane (gray) formats.
    Single(u16),
    /// Three-plane formats, in plane order (`R,G,B` or `Y,U,V`).
    Triple([u16; 3]),
}

impl Background {
    /// Sample values in plane order; one for gray, three otherwise.
    pub fn samples(&self) -> &[u16] {
        match self {
            Background::Single(v) => std::slice::from_ref(v),
            Background::Triple(v) => v.as_slice(),
        }
    }
}

/// Promote an 8-bit sample to 16 bits, centered in the widened range: `(v << 8) + 128`.
pub fn expand_depth(v: u8) -> u16 {
    (u16::from(v) << 8) + 128
}

const YUV_MID_8: f64 = 128.0;
const YUV_MID_16: f64 = 32768.0;

/// Background sample(s) for `rgb` in `format`.
///
/// Every result is truncated toward zero. 10-bit YUV has no conversion and fails with
/// [`BlankClipError::UnsupportedFormat`].
pub fn convert(rgb: Rgb8, format: PixelFormat) -> BlankClipResult<Background> {
    let bits = format.bits_per_sample();
    let unsupported = || {
        BlankClipError::unsupported_format(format!(
            "convert: no {bits}-bit conversion for {format}"
        ))
    };

    match format.family() {
        FormatFamily::Gray => {
            let luma = gray_luma(rgb);
            match bits {
                8 => Ok(Background::Single(u16::from(luma))),
                16 => Ok(Background::Single(expand_depth(luma))),
                _ => Err(unsupported()),
            }
        }
        FormatFamily::Rgb => match bits {
            8 => Ok(Background::Triple(rgb.to_array().map(u16::from))),
            16 => Ok(Background::Triple(rgb.to_array().map(expand_depth))),
            _ => Err(unsupported()),
        },
        FormatFamily::Yuv => match bits {
            8 => {
                let [r, g, b] = rgb.to_array().map(f64::from);
                Ok(Background::Triple(rgb_to_yuv(r, g, b, YUV_MID_8, 255.0)))
            }
            16 => {
                let [r, g, b] = rgb.to_array().map(|c| f64::from(expand_depth(c)));
                Ok(Background::Triple(rgb_to_yuv(r, g, b, YUV_MID_16, 65535.0)))
            }
            _ => Err(unsupported()),
        },
    }
}

fn gray_luma(rgb: Rgb8) -> u8 {
    let sum = u16::from(rgb.r) + u16::from(rgb.g) + u16::from(rgb.b);
    // sum / 3 <= 255
    (sum / 3) as u8
}

fn rgb_to_yuv(r: f64, g: f64, b: f64, mid: f64, max: f64) -> [u16; 3] {
    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let u = -0.169 * r - 0.331 * g + 0.5 * b + mid;
    let v = 0.5 * r - 0.419 * g - 0.081 * b + mid;
    [y, u, v].map(|c| c.trunc().clamp(0.0, max) as u16)
}
