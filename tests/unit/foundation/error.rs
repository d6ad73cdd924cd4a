use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StripError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(StripError::render("x").to_string().contains("render error:"));
    assert!(StripError::encode("x").to_string().contains("encode error:"));
    assert!(
        StripError::InvalidFrameCount(7)
            .to_string()
            .contains("invalid frame count: 7")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StripError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
