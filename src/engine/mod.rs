//! Boundary to the rendering engine that owns real pixel buffers.
//!
//! This crate only describes buffers. Allocation, compositing and frame retrieval
//! belong to an implementation of [`BlankBufferEngine`].

use crate::{
    clip::descriptor::ClipDescriptor,
    color::convert::Background,
    foundation::error::BlankClipResult,
    preset::format::PixelFormat,
};

/// Arguments of a blank-buffer allocation, in engine terms.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct BlankBufferRequest {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel format.
    pub format: PixelFormat,
    /// Frame-rate numerator.
    pub fps_num: u32,
    /// Frame-rate denominator.
    pub fps_den: u32,
    /// Buffer length in frames, not seconds.
    pub duration_frames: u64,
    /// Fill value(s) for every frame.
    pub background: Background,
}

impl BlankBufferRequest {
    /// Request matching a built descriptor.
    pub fn from_descriptor(clip: &ClipDescriptor) -> Self {
        let fps = clip.fps();
        Self {
            width: clip.width(),
            height: clip.height(),
            format: clip.format(),
            fps_num: fps.num,
            fps_den: fps.den,
            duration_frames: clip.duration_frames(),
            background: clip.background(),
        }
    }
}

impl From<&ClipDescriptor> for BlankBufferRequest {
    fn from(clip: &ClipDescriptor) -> Self {
        Self::from_descriptor(clip)
    }
}

/// A rendering engine able to materialize descriptors.
///
/// Engine failures are reported through [`BlankClipError::Other`](crate::BlankClipError::Other).
pub trait BlankBufferEngine {
    /// Opaque buffer handle owned by the engine.
    type Handle;
    /// Whatever the engine returns for a frame lookup.
    type Frame;

    /// Allocate a buffer filled with `request.background`.
    fn allocate_blank_buffer(
        &mut self,
        request: &BlankBufferRequest,
    ) -> BlankClipResult<Self::Handle>;

    /// Produce the frame of a track stack at `timestamp` seconds.
    ///
    /// The meaning of `timestamp` and of empty slots is up to the engine.
    fn frame_at(
        &mut self,
        tracks: &[Option<ClipDescriptor>],
        timestamp: f64,
    ) -> BlankClipResult<Self::Frame>;
}
