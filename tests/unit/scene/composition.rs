use super::{
    composition::{Composition, DEFAULT_TRACKS},
    spec::CompositionSpec,
};
use crate::{
    clip::{builder::ClipBuilder, descriptor::ClipDescriptor},
    engine::{BlankBufferEngine, BlankBufferRequest},
    foundation::error::{BlankClipError, BlankClipResult},
    preset::format::PixelFormat,
};

#[derive(Default)]
struct RecordingEngine {
    allocated: Vec<BlankBufferRequest>,
    lookups: Vec<(usize, f64)>,
}

impl BlankBufferEngine for RecordingEngine {
    type Handle = usize;
    type Frame = String;

    fn allocate_blank_buffer(&mut self, request: &BlankBufferRequest) -> BlankClipResult<usize> {
        self.allocated.push(request.clone());
        Ok(self.allocated.len() - 1)
    }

    fn frame_at(
        &mut self,
        tracks: &[Option<ClipDescriptor>],
        timestamp: f64,
    ) -> BlankClipResult<String> {
        self.lookups.push((tracks.len(), timestamp));
        Ok(format!("frame@{timestamp}"))
    }
}

struct FailingEngine;

impl BlankBufferEngine for FailingEngine {
    type Handle = ();
    type Frame = ();

    fn allocate_blank_buffer(&mut self, _request: &BlankBufferRequest) -> BlankClipResult<()> {
        Err(anyhow::anyhow!("out of buffers").into())
    }

    fn frame_at(
        &mut self,
        _tracks: &[Option<ClipDescriptor>],
        _timestamp: f64,
    ) -> BlankClipResult<()> {
        Err(anyhow::anyhow!("no frames").into())
    }
}

#[test]
fn new_populates_only_slot_zero() {
    let comp = Composition::new(&ClipBuilder::new(), 3).unwrap();
    assert_eq!(comp.tracks().len(), 3);
    assert!(comp.tracks()[0].is_some());
    assert!(comp.tracks()[1].is_none());
    assert!(comp.tracks()[2].is_none());
    assert_eq!(comp.track(0).unwrap().width(), 1920);
    assert!(comp.track(1).is_none());
    assert!(comp.track(7).is_none());
}

#[test]
fn defaults() {
    let comp = Composition::with_defaults().unwrap();
    assert_eq!(comp.track_count(), DEFAULT_TRACKS);
    assert_eq!(comp.duration(), 30);
}

#[test]
fn single_track_is_allowed_zero_is_not() {
    assert_eq!(Composition::new(&ClipBuilder::new(), 1).unwrap().track_count(), 1);
    assert!(matches!(
        Composition::new(&ClipBuilder::new(), 0),
        Err(BlankClipError::InvalidParameters(_))
    ));
}

#[test]
fn base_clip_failures_abort_construction() {
    let err = Composition::new(&ClipBuilder::new().preset("bogus"), 3).unwrap_err();
    assert!(matches!(err, BlankClipError::InvalidPreset(_)));
    assert!(err.to_string().starts_with("invalid preset: composition: build_clip:"));

    let err = Composition::new(&ClipBuilder::new().format(PixelFormat::Yuv444P10), 3).unwrap_err();
    assert!(matches!(err, BlankClipError::UnsupportedFormat(_)));
}

#[test]
fn duration_uses_the_construction_rule() {
    let b = ClipBuilder::new().duration(12);
    let comp = Composition::new(&b, 2).unwrap();
    assert_eq!(comp.duration(), 12);
    assert_eq!(comp.track(0).unwrap().duration_secs(), 12);

    let comp = Composition::new(&ClipBuilder::new().duration(-4), 2).unwrap();
    assert_eq!(comp.duration(), 30);
}

#[test]
fn set_duration_validates() {
    let mut comp = Composition::with_defaults().unwrap();
    assert!(matches!(
        comp.set_duration(-1),
        Err(BlankClipError::InvalidDuration(_))
    ));
    assert!(matches!(
        comp.set_duration(0),
        Err(BlankClipError::InvalidDuration(_))
    ));
    assert!(matches!(
        comp.set_duration(1.5),
        Err(BlankClipError::InvalidDuration(_))
    ));
    assert_eq!(comp.duration(), 30);

    comp.set_duration(10).unwrap();
    assert_eq!(comp.duration(), 10);
    comp.set_duration(90u64).unwrap();
    assert_eq!(comp.duration(), 90);

    // the base clip keeps its own length
    assert_eq!(comp.track(0).unwrap().duration_secs(), 30);
}

#[test]
fn get_frame_forwards_to_engine() {
    let comp = Composition::new(&ClipBuilder::new(), 4).unwrap();
    let mut engine = RecordingEngine::default();
    assert_eq!(comp.get_frame(&mut engine, 1.25).unwrap(), "frame@1.25");
    assert_eq!(engine.lookups, vec![(4, 1.25)]);

    let err = comp.get_frame(&mut FailingEngine, 0.0).unwrap_err();
    assert!(matches!(err, BlankClipError::Other(_)));
}

#[test]
fn allocate_tracks_skips_empty_slots() {
    let comp = Composition::new(&ClipBuilder::new().preset("HD_25_1_GRAY16").color("#ffffff"), 3)
        .unwrap();
    let mut engine = RecordingEngine::default();
    let handles = comp.allocate_tracks(&mut engine).unwrap();
    assert_eq!(handles, vec![Some(0), None, None]);

    let req = &engine.allocated[0];
    assert_eq!((req.width, req.height), (1280, 720));
    assert_eq!(req.format, PixelFormat::Gray16);
    assert_eq!((req.fps_num, req.fps_den), (25, 1));
    assert_eq!(req.duration_frames, 750);
    assert_eq!(req.background.samples(), &[65408]);

    assert!(comp.allocate_tracks(&mut FailingEngine).is_err());
}

#[test]
fn spec_defaults_match_constructor_defaults() {
    let spec: CompositionSpec = serde_json::from_str("{}").unwrap();
    assert_eq!(spec.build().unwrap(), Composition::with_defaults().unwrap());
}

#[test]
fn spec_overrides() {
    let spec: CompositionSpec = serde_json::from_str(
        r##"{
            "preset": "VGA_30_1_RGB24",
            "height": 400,
            "format": "YUV422P16",
            "duration": 8,
            "color": "#000000",
            "tracks": 5
        }"##,
    )
    .unwrap();
    let comp = spec.build().unwrap();
    assert_eq!(comp.track_count(), 5);
    assert_eq!(comp.duration(), 8);
    let base = comp.track(0).unwrap();
    assert_eq!((base.width(), base.height()), (640, 400));
    assert_eq!(base.format(), PixelFormat::Yuv422P16);
    assert_eq!(base.background().samples(), &[127, 32768, 32768]);
}

#[test]
fn spec_fractional_duration_falls_back_to_default() {
    let spec: CompositionSpec = serde_json::from_str(r#"{"duration": 1.5}"#).unwrap();
    assert_eq!(spec.build().unwrap().duration(), 30);
}

#[test]
fn spec_rejects_bad_values_with_domain_errors() {
    let spec: CompositionSpec = serde_json::from_str(r#"{"color": [1, 2, 3]}"#).unwrap();
    assert!(matches!(spec.build(), Err(BlankClipError::InvalidColor(_))));

    let spec: CompositionSpec = serde_json::from_str(r#"{"format": "NV12"}"#).unwrap();
    assert!(matches!(spec.build(), Err(BlankClipError::UnsupportedFormat(_))));

    let spec: CompositionSpec = serde_json::from_str(r#"{"tracks": 0}"#).unwrap();
    assert!(matches!(spec.build(), Err(BlankClipError::InvalidParameters(_))));
}

#[test]
fn from_reader_reports_config_errors() {
    let err = Composition::from_reader("{ not json".as_bytes()).unwrap_err();
    assert!(matches!(err, BlankClipError::Config(_)));

    let err = Composition::from_reader(r#"{"width": -1}"#.as_bytes()).unwrap_err();
    assert!(matches!(err, BlankClipError::Config(_)));

    let comp = Composition::from_reader(r#"{"preset": "QHD_60_1_GRAY8"}"#.as_bytes()).unwrap();
    assert_eq!(comp.track(0).unwrap().width(), 2560);
}

#[test]
fn from_path_missing_file_is_config_error() {
    let err = Composition::from_path("definitely/not/here.json").unwrap_err();
    assert!(matches!(err, BlankClipError::Config(_)));
}

#[test]
fn unallocatable_track_count_is_an_error() {
    let err = Composition::new(&ClipBuilder::new(), usize::MAX).unwrap_err();
    assert!(matches!(err, BlankClipError::InvalidParameters(_)));
    assert!(err.to_string().contains("track slots"));

    let err = Composition::from_reader(r#"{"tracks": 18446744073709551615}"#.as_bytes())
        .unwrap_err();
    assert!(matches!(err, BlankClipError::InvalidParameters(_)));
}

#[test]
fn set_duration_rejects_whole_floats_like_construction() {
    let mut comp = Composition::with_defaults().unwrap();
    assert!(matches!(
        comp.set_duration(5.0),
        Err(BlankClipError::InvalidDuration(_))
    ));
    assert_eq!(comp.duration(), 30);

    let from_json = Composition::from_reader(r#"{"duration": 5.0}"#.as_bytes()).unwrap();
    assert_eq!(from_json.duration(), 30);
}
