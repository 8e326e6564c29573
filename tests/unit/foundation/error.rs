use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PxlError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PxlError::resource("x")
            .to_string()
            .contains("resource error:")
    );
    assert!(
        PxlError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PxlError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
