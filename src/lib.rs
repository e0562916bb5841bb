//! Blank video clip descriptors built from compact preset strings.
//!
//! A preset such as `FHD_24000_1001_YUV420P8` names a frame size, a rational frame rate
//! and a pixel format. Combined with an 8-bit RGB color it resolves to a
//! [`ClipDescriptor`] carrying the exact background sample values for that format.
//! A [`Composition`] stacks descriptors as tracks.
//!
//! - Parse presets with [`parse_preset`] and colors with [`parse_color`]
//! - Build descriptors with [`ClipBuilder`]
//! - Hand them to a [`BlankBufferEngine`] for allocation
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod clip;
mod color;
mod engine;
mod foundation;
mod preset;
mod scene;

pub use crate::clip::builder::{ClipBuilder, build_clip};
pub use crate::clip::descriptor::ClipDescriptor;
pub use crate::color::convert::{Background, convert, expand_depth};
pub use crate::color::input::{ColorInput, MAX_PACKED_COLOR, parse_color};
pub use crate::engine::{BlankBufferEngine, BlankBufferRequest};
pub use crate::foundation::core::{DEFAULT_DURATION_SECS, DurationSecs, Fps, Rgb8};
pub use crate::foundation::error::{BlankClipError, BlankClipResult};
pub use crate::preset::format::{ChromaSubsampling, FormatDescriptor, FormatFamily, PixelFormat};
pub use crate::preset::parse::{DEFAULT_PRESET, Preset, parse_preset};
pub use crate::preset::resolution::Resolution;
pub use crate::scene::composition::{Composition, DEFAULT_TRACKS};
pub use crate::scene::spec::CompositionSpec;
