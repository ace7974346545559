use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LobbyError::asset_load("x")
            .to_string()
            .contains("asset load error:")
    );
    assert!(
        LobbyError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(LobbyError::decode("x").to_string().contains("decode error:"));
    assert!(
        LobbyError::generation("x")
            .to_string()
            .contains("generation error:")
    );
    assert!(LobbyError::export("x").to_string().contains("export error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LobbyError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert!(err.detail().contains("boom"));
}

#[test]
fn detail_strips_category_prefix() {
    let err = LobbyError::generation("canvas too large");
    assert_eq!(err.detail(), "canvas too large");
}

#[test]
fn only_asset_failures_are_unrecoverable() {
    assert!(!LobbyError::asset_load("x").is_recoverable());
    assert!(LobbyError::validation("x").is_recoverable());
    assert!(LobbyError::decode("x").is_recoverable());
    assert!(LobbyError::generation("x").is_recoverable());
}
