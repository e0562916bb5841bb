use crate::foundation::error::{BlankClipError, BlankClipResult};

/// Broad sample layout of a pixel format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FormatFamily {
    /// Single luma plane.
    Gray,
    /// Three planes: red, green, blue.
    Rgb,
    /// Luma plus two chroma planes.
    Yuv,
}

/// Chroma plane size relative to luma. Only meaningful for [`FormatFamily::Yuv`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ChromaSubsampling {
    /// Half width, half height.
    Yuv420,
    /// Half width, full height.
    Yuv422,
    /// No subsampling.
    Yuv444,
}

/// Fixed description of a pixel format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatDescriptor {
    /// Sample layout.
    pub family: FormatFamily,
    /// Bits per sample of a single channel.
    pub bits_per_sample: u8,
    /// Chroma subsampling, `None` outside the YUV family.
    pub subsampling: Option<ChromaSubsampling>,
}

/// Pixel formats accepted in preset strings and as overrides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PixelFormat {
    /// 8-bit RGB.
    #[serde(rename = "RGB24")]
    Rgb24,
    /// 16-bit RGB.
    #[serde(rename = "RGB48")]
    Rgb48,
    /// 8-bit planar YUV 4:2:0.
    #[serde(rename = "YUV420P8")]
    Yuv420P8,
    /// 10-bit planar YUV 4:2:0.
    #[serde(rename = "YUV420P10")]
    Yuv420P10,
    /// 16-bit planar YUV 4:2:0.
    #[serde(rename = "YUV420P16")]
    Yuv420P16,
    /// 8-bit planar YUV 4:2:2.
    #[serde(rename = "YUV422P8")]
    Yuv422P8,
    /// 10-bit planar YUV 4:2:2.
    #[serde(rename = "YUV422P10")]
    Yuv422P10,
    /// 16-bit planar YUV 4:2:2.
    #[serde(rename = "YUV422P16")]
    Yuv422P16,
    /// 8-bit planar YUV 4:4:4.
    #[serde(rename = "YUV444P8")]
    Yuv444P8,
    /// 10-bit planar YUV 4:4:4.
    #[serde(rename = "YUV444P10")]
    Yuv444P10,
    /// 16-bit planar YUV 4:4:4.
    #[serde(rename = "YUV444P16")]
    Yuv444P16,
    /// 8-bit grayscale.
    #[serde(rename = "GRAY8")]
    Gray8,
    /// 16-bit grayscale.
    #[serde(rename = "GRAY16")]
    Gray16,
}

impl PixelFormat {
    /// Every format, in the order preset matching tries them.
    pub const ALL: [PixelFormat; 13] = [
        PixelFormat::Rgb24,
        PixelFormat::Rgb48,
        PixelFormat::Yuv420P8,
        PixelFormat::Yuv420P10,
        PixelFormat::Yuv420P16,
        PixelFormat::Yuv422P8,
        PixelFormat::Yuv422P10,
        PixelFormat::Yuv422P16,
        PixelFormat::Yuv444P8,
        PixelFormat::Yuv444P10,
        PixelFormat::Yuv444P16,
        PixelFormat::Gray8,
        PixelFormat::Gray16,
    ];

    /// Token used in preset strings and JSON.
    pub fn name(self) -> &'static str {
        match self {
            PixelFormat::Rgb24 => "RGB24",
            PixelFormat::Rgb48 => "RGB48",
            PixelFormat::Yuv420P8 => "YUV420P8",
            PixelFormat::Yuv420P10 => "YUV420P10",
            PixelFormat::Yuv420P16 => "YUV420P16",
            PixelFormat::Yuv422P8 => "YUV422P8",
            PixelFormat::Yuv422P10 => "YUV422P10",
            PixelFormat::Yuv422P16 => "YUV422P16",
            PixelFormat::Yuv444P8 => "YUV444P8",
            PixelFormat::Yuv444P10 => "YUV444P10",
            PixelFormat::Yuv444P16 => "YUV444P16",
            PixelFormat::Gray8 => "GRAY8",
            PixelFormat::Gray16 => "GRAY16",
        }
    }

    /// Family, depth and subsampling of this format.
    pub fn descriptor(self) -> FormatDescriptor {
        use ChromaSubsampling::*;
        use FormatFamily::*;

        let (family, bits_per_sample, subsampling) = match self {
            PixelFormat::Rgb24 => (Rgb, 8, None),
            PixelFormat::Rgb48 => (Rgb, 16, None),
            PixelFormat::Yuv420P8 => (Yuv, 8, Some(Yuv420)),
            PixelFormat::Yuv420P10 => (Yuv, 10, Some(Yuv420)),
            PixelFormat::Yuv420P16 => (Yuv, 16, Some(Yuv420)),
            PixelFormat::Yuv422P8 => (Yuv, 8, Some(Yuv422)),
            PixelFormat::Yuv422P10 => (Yuv, 10, Some(Yuv422)),
            PixelFormat::Yuv422P16 => (Yuv, 16, Some(Yuv422)),
            PixelFormat::Yuv444P8 => (Yuv, 8, Some(Yuv444)),
            PixelFormat::Yuv444P10 => (Yuv, 10, Some(Yuv444)),
            PixelFormat::Yuv444P16 => (Yuv, 16, Some(Yuv444)),
            PixelFormat::Gray8 => (Gray, 8, None),
            PixelFormat::Gray16 => (Gray, 16, None),
        };
        FormatDescriptor {
            family,
            bits_per_sample,
            subsampling,
        }
    }

    /// Sample layout family.
    pub fn family(self) -> FormatFamily {
        self.descriptor().family
    }

    /// Bits per sample of a single channel.
    pub fn bits_per_sample(self) -> u8 {
        self.descriptor().bits_per_sample
    }

    /// Chroma subsampling for YUV formats.
    pub fn chroma_subsampling(self) -> Option<ChromaSubsampling> {
        self.descriptor().subsampling
    }

    /// Number of planes (and background samples) a buffer of this format carries.
    pub fn plane_count(self) -> usize {
        match self.family() {
            FormatFamily::Gray => 1,
            FormatFamily::Rgb | FormatFamily::Yuv => 3,
        }
    }

    /// Largest value a single sample can hold.
    pub fn max_sample_value(self) -> u16 {
        match self.bits_per_sample() {
            16 => u16::MAX,
            bits => (1u16 << bits) - 1,
        }
    }

    /// Exact token lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl std::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for PixelFormat {
    type Err = BlankClipError;

    fn from_str(s: &str) -> BlankClipResult<Self> {
        Self::from_name(s).ok_or_else(|| {
            BlankClipError::unsupported_format(format!("pixel_format: unknown format \"{s}\""))
        })
    }
}
