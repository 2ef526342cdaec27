use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SnakeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(SnakeError::source("x").to_string().contains("source error:"));
    assert!(SnakeError::render("x").to_string().contains("render error:"));
    assert!(
        SnakeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SnakeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
