use super::*;

fn two_pixel_frame() -> FrameRGBA {
    // Opaque red then opaque green; premultiplied equals straight at a=255.
    FrameRGBA {
        width: 2,
        height: 1,
        data: vec![255, 0, 0, 255, 0, 255, 0, 255],
    }
}

#[test]
fn encode_png_round_trips_through_the_decoder() {
    let bytes = encode_png(&two_pixel_frame()).unwrap();

    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (2, 1));
    assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(decoded.get_pixel(1, 0).0, [0, 255, 0, 255]);
}

#[test]
fn encode_png_rejects_byte_length_mismatch() {
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 4],
    };
    let err = encode_png(&frame).unwrap_err();
    assert!(matches!(err, StripError::Encode(_)));
}

#[test]
fn write_png_creates_parent_directories() {
    let tmp = std::env::temp_dir().join(format!(
        "stripbooth_png_test_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let path = tmp.join("nested").join("strip.png");

    write_png(&path, &two_pixel_frame()).unwrap();

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (2, 1));

    std::fs::remove_dir_all(&tmp).ok();
}
