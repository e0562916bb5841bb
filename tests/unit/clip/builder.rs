use super::builder::{ClipBuilder, build_clip};
use crate::{
    color::convert::Background,
    foundation::{core::Fps, error::BlankClipError},
    preset::format::PixelFormat,
};

#[test]
fn defaults_follow_the_default_preset() {
    let clip = ClipBuilder::new().build().unwrap();
    assert_eq!((clip.width(), clip.height()), (1920, 1080));
    assert_eq!(clip.fps(), Fps { num: 24000, den: 1001 });
    assert_eq!(clip.format(), PixelFormat::Rgb24);
    assert_eq!(clip.duration_secs(), 30);
    assert_eq!(clip.background(), Background::Triple([0, 0, 0]));
}

#[test]
fn gray_preset_with_white() {
    let clip = build_clip("QVGA_24_1_GRAY8", 0xFFFFFF).unwrap();
    assert_eq!(clip.background(), Background::Single(255));
    assert_eq!((clip.width(), clip.height()), (320, 240));
    assert_eq!((clip.fps().num, clip.fps().den), (24, 1));
}

#[test]
fn format_override_with_black_gives_neutral_chroma() {
    let clip = ClipBuilder::new()
        .format(PixelFormat::Yuv420P8)
        .color(0x000000)
        .build()
        .unwrap();
    assert_eq!(clip.background(), Background::Triple([0, 128, 128]));
    assert_eq!(clip.format(), PixelFormat::Yuv420P8);
}

#[test]
fn overrides_apply_field_by_field() {
    let clip = ClipBuilder::new()
        .preset("HD_30000_1001_YUV444P16")
        .width(1000)
        .build()
        .unwrap();
    assert_eq!(clip.width(), 1000);
    assert_eq!(clip.height(), 720);
    assert_eq!(clip.fps(), Fps { num: 30000, den: 1001 });
    assert_eq!(clip.format(), PixelFormat::Yuv444P16);

    let clip = ClipBuilder::new()
        .preset("HD_30000_1001_YUV444P16")
        .height(10)
        .fps_den(1)
        .build()
        .unwrap();
    assert_eq!((clip.width(), clip.height()), (1280, 10));
    assert_eq!(clip.fps(), Fps { num: 30000, den: 1 });
}

#[test]
fn format_override_rescues_unsupported_preset_format() {
    let base = ClipBuilder::new().preset("VGA_25_1_YUV422P10");
    assert!(matches!(
        base.build(),
        Err(BlankClipError::UnsupportedFormat(_))
    ));
    let clip = base.format(PixelFormat::Yuv422P8).build().unwrap();
    assert_eq!(clip.format(), PixelFormat::Yuv422P8);
}

#[test]
fn duration_defaults_unless_positive() {
    assert_eq!(ClipBuilder::new().duration(5).build().unwrap().duration_secs(), 5);
    assert_eq!(ClipBuilder::new().duration(0).build().unwrap().duration_secs(), 30);
    assert_eq!(ClipBuilder::new().duration(-3).build().unwrap().duration_secs(), 30);
}

#[test]
fn duration_frames_follow_the_frame_rate() {
    let clip = build_clip("HD_25_1_RGB24", 0).unwrap();
    assert_eq!(clip.duration_frames(), 750);
    let clip = ClipBuilder::new().duration(10).build().unwrap();
    assert_eq!(clip.duration_frames(), 239);
}

#[test]
fn parse_failures_carry_both_operation_names() {
    let err = build_clip("nope", 0).unwrap_err();
    assert!(matches!(err, BlankClipError::InvalidPreset(_)));
    let msg = err.to_string();
    assert!(msg.contains("build_clip") && msg.contains("parse_preset"), "{msg}");

    let err = build_clip("HD_30_1_RGB24", "#12345").unwrap_err();
    assert!(matches!(err, BlankClipError::InvalidColor(_)));
    assert!(err.to_string().contains("build_clip: parse_color"));

    assert!(matches!(
        build_clip("HD_30_1_RGB24", 0x1000000),
        Err(BlankClipError::InvalidColor(_))
    ));
}

#[test]
fn zero_values_are_invalid_parameters() {
    for builder in [
        ClipBuilder::new().width(0),
        ClipBuilder::new().height(0),
        ClipBuilder::new().fps_num(0),
        ClipBuilder::new().fps_den(0),
        ClipBuilder::new().preset("HD_30_0_RGB24"),
        ClipBuilder::new().preset("HD_0_1_RGB24"),
    ] {
        let err = builder.build().unwrap_err();
        assert!(
            matches!(err, BlankClipError::InvalidParameters(_)),
            "{builder:?} -> {err:?}"
        );
    }
}

#[test]
fn hex_and_packed_colors_agree() {
    let a = ClipBuilder::new().color("#123456").build().unwrap();
    let b = ClipBuilder::new().color(0x123456).build().unwrap();
    assert_eq!(a, b);
}

#[test]
fn descriptor_serializes_with_format_token() {
    let clip = build_clip("QVGA_24_1_GRAY16", "#ffffff").unwrap();
    let v = serde_json::to_value(&clip).unwrap();
    assert_eq!(v["format"], "GRAY16");
    assert_eq!(v["background"], 65408);
    assert_eq!(v["fps"]["num"], 24);
    assert_eq!(v["duration_secs"], 30);
}
