use crate::error::ClipboardError;

/// Trait for clipboard backend abstraction
/// Supports different clipboard systems (Wayland, X11, macOS)
/// Backends hold no clipboard state of their own: every call goes to the external tool
pub trait ClipboardBackend: Send + Sync {
    /// Read the current clipboard text
    fn read_text(&self) -> Result<String, ClipboardError>;

    /// Replace the clipboard content with `text`, verbatim
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Get the backend name (for logging/debugging)
    fn name(&self) -> &'static str;
}

/// Known backend identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    #[default]
    Wayland,
    X11,
    Darwin,
}

impl BackendKind {
    /// Resolve a backend identifier (case-sensitive)
    /// Unrecognized identifiers fall back to Wayland instead of failing
    pub fn from_identifier(id: &str) -> Self {
        match id {
            "wayland" => BackendKind::Wayland,
            "x11" => BackendKind::X11,
            "darwin" => BackendKind::Darwin,
            other => {
                log::debug!("Unknown clipboard backend {:?}, falling back to wayland", other);
                BackendKind::default()
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Wayland => "wayland",
            BackendKind::X11 => "x11",
            BackendKind::Darwin => "darwin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_identifiers() {
        assert_eq!(BackendKind::from_identifier("wayland"), BackendKind::Wayland);
        assert_eq!(BackendKind::from_identifier("x11"), BackendKind::X11);
        assert_eq!(BackendKind::from_identifier("darwin"), BackendKind::Darwin);
    }

    #[test]
    fn test_unknown_identifier_falls_back_to_wayland() {
        assert_eq!(BackendKind::from_identifier("unknown"), BackendKind::Wayland);
        assert_eq!(BackendKind::from_identifier(""), BackendKind::Wayland);
        // Identifiers are case-sensitive
        assert_eq!(BackendKind::from_identifier("X11"), BackendKind::Wayland);
    }

    #[test]
    fn test_as_str_round_trips() {
        for kind in [BackendKind::Wayland, BackendKind::X11, BackendKind::Darwin] {
            assert_eq!(BackendKind::from_identifier(kind.as_str()), kind);
        }
    }
}
