use crate::{
    clip::{builder::ClipBuilder, descriptor::ClipDescriptor},
    engine::{BlankBufferEngine, BlankBufferRequest},
    foundation::{
        core::{DurationSecs, resolve_duration_secs},
        error::{BlankClipError, BlankClipResult},
    },
    scene::spec::CompositionSpec,
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Track count used when none is given.
pub const DEFAULT_TRACKS: usize = 3;

const OP: &str = "composition";

/// An ordered stack of track slots over a blank base clip.
///
/// Slot 0 always holds the base clip built at construction. Slots stack from index 0
/// upwards and start out empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Composition {
    tracks: Vec<Option<ClipDescriptor>>,
    duration_secs: u64,
}

impl Composition {
    /// Build slot 0 from `clip` and allocate `tracks` slots in total.
    ///
    /// Nothing is constructed if the base clip fails to build, `tracks` is zero, or the
    /// slots cannot be allocated.
    #[tracing::instrument(skip(clip))]
    pub fn new(clip: &ClipBuilder, tracks: usize) -> BlankClipResult<Self> {
        if tracks == 0 {
            return Err(BlankClipError::invalid_parameters(format!(
                "{OP}: at least one track is required"
            )));
        }
        let base = clip.build().map_err(|e| e.within(OP))?;

        let mut slots = Vec::new();
        slots.try_reserve_exact(tracks).map_err(|e| {
            BlankClipError::invalid_parameters(format!(
                "{OP}: cannot allocate {tracks} track slots: {e}"
            ))
        })?;
        slots.push(Some(base));
        slots.resize(tracks, None);
        let duration_secs = resolve_duration_secs(clip.duration_override());

        tracing::debug!(tracks, duration_secs, "composition ready");
        Ok(Self {
            tracks: slots,
            duration_secs,
        })
    }

    /// Default base clip with [`DEFAULT_TRACKS`] slots.
    pub fn with_defaults() -> BlankClipResult<Self> {
        Self::new(&ClipBuilder::new(), DEFAULT_TRACKS)
    }

    /// Parse a JSON [`CompositionSpec`] and build it.
    pub fn from_reader<R: std::io::Read>(r: R) -> BlankClipResult<Self> {
        let spec: CompositionSpec = serde_json::from_reader(r)
            .map_err(|e| BlankClipError::config(format!("parse composition JSON: {e}")))?;
        spec.build()
    }

    /// Parse a JSON [`CompositionSpec`] file from disk and build it.
    pub fn from_path(path: impl AsRef<Path>) -> BlankClipResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BlankClipError::config(format!(
                "open composition JSON '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// All slots, bottom track first.
    pub fn tracks(&self) -> &[Option<ClipDescriptor>] {
        &self.tracks
    }

    /// Descriptor in slot `index`, if the slot exists and is populated.
    pub fn track(&self, index: usize) -> Option<&ClipDescriptor> {
        self.tracks.get(index).and_then(Option::as_ref)
    }

    /// Number of slots, populated or not.
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Duration in seconds.
    pub fn duration(&self) -> u64 {
        self.duration_secs
    }

    /// Replace the duration.
    ///
    /// Accepts any value convertible to [`DurationSecs`]; zero, negative and fractional
    /// values fail with [`BlankClipError::InvalidDuration`] and leave the duration unchanged.
    pub fn set_duration<T>(&mut self, secs: T) -> BlankClipResult<()>
    where
        T: TryInto<DurationSecs, Error = BlankClipError>,
    {
        let secs = secs.try_into().map_err(|e| e.within(OP))?.get();
        tracing::debug!(from = self.duration_secs, to = secs, "composition duration changed");
        self.duration_secs = secs;
        Ok(())
    }

    /// Ask `engine` for the frame at `timestamp`.
    ///
    /// The composition only forwards its track stack; frame semantics are the engine's.
    #[tracing::instrument(skip(self, engine))]
    pub fn get_frame<E: BlankBufferEngine>(
        &self,
        engine: &mut E,
        timestamp: f64,
    ) -> BlankClipResult<E::Frame> {
        engine.frame_at(&self.tracks, timestamp)
    }

    /// Allocate an engine buffer for every populated slot. Empty slots map to `None`.
    pub fn allocate_tracks<E: BlankBufferEngine>(
        &self,
        engine: &mut E,
    ) -> BlankClipResult<Vec<Option<E::Handle>>> {
        self.tracks
            .iter()
            .map(|slot| {
                slot.as_ref()
                    .map(|clip| engine.allocate_blank_buffer(&BlankBufferRequest::from(clip)))
                    .transpose()
            })
            .collect()
    }
}
