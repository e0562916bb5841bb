use crate::{
    color::convert::Background,
    foundation::core::Fps,
    preset::format::PixelFormat,
};

/// Fully resolved description of a blank clip.
///
/// Produced by [`ClipBuilder::build`](crate::ClipBuilder::build) and never mutated afterwards.
/// This is the value handed to a [`BlankBufferEngine`](crate::BlankBufferEngine).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ClipDescriptor {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) fps: Fps,
    pub(crate) format: PixelFormat,
    pub(crate) duration_secs: u64,
    pub(crate) background: Background,
}

impl ClipDescriptor {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Pixel format.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Clip length in whole seconds.
    pub fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    /// Clip length in frames at the clip's frame rate, rounded down.
    pub fn duration_frames(&self) -> u64 {
        self.fps.secs_to_frames_floor(self.duration_secs)
    }

    /// Background sample value(s) in the format's bit depth.
    pub fn background(&self) -> Background {
        self.background
    }
}
