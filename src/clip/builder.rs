use crate::{
    clip::descriptor::ClipDescriptor,
    color::{
        convert::convert,
        input::{ColorInput, parse_color},
    },
    foundation::{
        core::{Fps, resolve_duration_secs},
        error::{BlankClipError, BlankClipResult},
    },
    preset::{
        format::PixelFormat,
        parse::{DEFAULT_PRESET, parse_preset},
    },
};

const OP: &str = "build_clip";

/// Builder for [`ClipDescriptor`].
///
/// Start from a preset and override individual fields; each override replaces only
/// its own field.
///
/// ```
/// use blankclip::ClipBuilder;
///
/// let clip = ClipBuilder::new()
///     .preset("QVGA_24_1_GRAY8")
///     .color(0xFFFFFF)
///     .build()
///     .unwrap();
/// assert_eq!((clip.width(), clip.height()), (320, 240));
/// assert_eq!(clip.background().samples(), &[255]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ClipBuilder {
    preset: String,
    width: Option<u32>,
    height: Option<u32>,
    fps_num: Option<u32>,
    fps_den: Option<u32>,
    format: Option<PixelFormat>,
    duration: Option<i64>,
    color: ColorInput,
}

impl Default for ClipBuilder {
    fn default() -> Self {
        Self {
            preset: DEFAULT_PRESET.to_owned(),
            width: None,
            height: None,
            fps_num: None,
            fps_den: None,
            format: None,
            duration: None,
            color: ColorInput::default(),
        }
    }
}

impl ClipBuilder {
    /// `FHD_24000_1001_RGB24`, black, 30 seconds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset supplying every field not overridden. Parsed in [`ClipBuilder::build`].
    pub fn preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = preset.into();
        self
    }

    /// Override the preset width.
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Override the preset height.
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Override the frame-rate numerator.
    pub fn fps_num(mut self, fps_num: u32) -> Self {
        self.fps_num = Some(fps_num);
        self
    }

    /// Override the frame-rate denominator.
    pub fn fps_den(mut self, fps_den: u32) -> Self {
        self.fps_den = Some(fps_den);
        self
    }

    /// Override the pixel format.
    pub fn format(mut self, format: PixelFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Duration in seconds. Values `<= 0` fall back to the 30 second default.
    pub fn duration(mut self, secs: i64) -> Self {
        self.duration = Some(secs);
        self
    }

    /// Background color: packed `0xRRGGBB` integer or `#RRGGBB` string.
    pub fn color(mut self, color: impl Into<ColorInput>) -> Self {
        self.color = color.into();
        self
    }

    pub(crate) fn duration_override(&self) -> Option<i64> {
        self.duration
    }

    /// Resolve the preset, overrides and color into a descriptor.
    ///
    /// Fails without side effects: [`BlankClipError::InvalidPreset`] /
    /// [`BlankClipError::InvalidColor`] for unparsable inputs,
    /// [`BlankClipError::InvalidParameters`] when a resolved dimension or frame-rate part is
    /// zero, and [`BlankClipError::UnsupportedFormat`] when the format has no color conversion.
    #[tracing::instrument(skip(self), fields(preset = %self.preset))]
    pub fn build(&self) -> BlankClipResult<ClipDescriptor> {
        let preset = parse_preset(&self.preset).map_err(|e| e.within(OP))?;
        let rgb = parse_color(&self.color).map_err(|e| e.within(OP))?;

        let width = self.width.unwrap_or(preset.width());
        let height = self.height.unwrap_or(preset.height());
        let fps_num = self.fps_num.unwrap_or(preset.fps_num);
        let fps_den = self.fps_den.unwrap_or(preset.fps_den);
        let format = self.format.unwrap_or(preset.format);
        let duration_secs = resolve_duration_secs(self.duration);

        if width == 0 || height == 0 {
            return Err(BlankClipError::invalid_parameters(format!(
                "{OP}: frame size {width}x{height} must be non-zero"
            )));
        }
        let fps = Fps::new(fps_num, fps_den).map_err(|e| e.within(OP))?;

        let background = convert(rgb, format)?;

        let clip = ClipDescriptor {
            width,
            height,
            fps,
            format,
            duration_secs,
            background,
        };
        tracing::debug!(?clip, "resolved blank clip");
        Ok(clip)
    }
}

/// Shorthand for `ClipBuilder::new().preset(preset).color(color).build()`.
pub fn build_clip(
    preset: impl Into<String>,
    color: impl Into<ColorInput>,
) -> BlankClipResult<ClipDescriptor> {
    ClipBuilder::new().preset(preset).color(color).build()
}
