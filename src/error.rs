use thiserror::Error;

/// Errors surfaced by [`apply_theme`](crate::apply_theme). Both kinds indicate
/// a mismatch between the input's shape and the engine's contract (programmer
/// error), never an environmental failure; no partial result is produced
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The theme mapping holds a key that is not a usable tag specifier
    #[error("invalid theme: {0}")]
    InvalidTheme(String),

    /// A value presented as a markup node lacks a usable tag specifier
    #[error("malformed node: {0}")]
    MalformedNode(String),
}

#[cfg(test)]
#[test]
fn test_error_display() {
    let err = ThemeError::MalformedNode("empty tag specifier".to_string());
    assert!(err.to_string().contains("malformed node"));
    assert!(err.to_string().contains("empty tag specifier"));
}
