use crate::{
    clip::builder::ClipBuilder,
    color::input::ColorInput,
    foundation::error::BlankClipResult,
    preset::format::PixelFormat,
    scene::composition::{Composition, DEFAULT_TRACKS},
};

/// JSON-facing composition description. Every field is optional.
///
/// ```json
/// { "preset": "HD_30_1_YUV420P8", "width": 1000, "color": "#336699", "tracks": 4 }
/// ```
///
/// `duration` follows the construction rule: anything but a positive integer means the
/// 30 second default. `color` may be a packed integer or a hex string.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CompositionSpec {
    /// Preset string; defaults to `FHD_24000_1001_RGB24`.
    pub preset: Option<String>,
    /// Width override.
    pub width: Option<u32>,
    /// Height override.
    pub height: Option<u32>,
    /// Frame-rate numerator override.
    pub fps_num: Option<u32>,
    /// Frame-rate denominator override.
    pub fps_den: Option<u32>,
    /// Pixel format token override.
    pub format: Option<String>,
    /// Duration in seconds.
    pub duration: Option<serde_json::Value>,
    /// Background color.
    pub color: Option<serde_json::Value>,
    /// Slot count; defaults to [`DEFAULT_TRACKS`].
    pub tracks: Option<usize>,
}

impl CompositionSpec {
    /// Builder for the base clip in slot 0.
    pub fn clip_builder(&self) -> BlankClipResult<ClipBuilder> {
        let mut b = ClipBuilder::new();
        if let Some(preset) = &self.preset {
            b = b.preset(preset.as_str());
        }
        if let Some(w) = self.width {
            b = b.width(w);
        }
        if let Some(h) = self.height {
            b = b.height(h);
        }
        if let Some(n) = self.fps_num {
            b = b.fps_num(n);
        }
        if let Some(d) = self.fps_den {
            b = b.fps_den(d);
        }
        if let Some(name) = &self.format {
            let format: PixelFormat = name.parse()?;
            b = b.format(format);
        }
        if let Some(secs) = self.duration.as_ref().and_then(serde_json::Value::as_i64) {
            b = b.duration(secs);
        }
        if let Some(color) = &self.color {
            b = b.color(ColorInput::try_from(color)?);
        }
        Ok(b)
    }

    /// Requested slot count.
    pub fn track_count(&self) -> usize {
        self.tracks.unwrap_or(DEFAULT_TRACKS)
    }

    /// Build the composition this spec describes.
    pub fn build(&self) -> BlankClipResult<Composition> {
        let clip = self
            .clip_builder()
            .map_err(|e| e.within("composition spec"))?;
        Composition::new(&clip, self.track_count())
    }
}
