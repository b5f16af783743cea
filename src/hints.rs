use crate::color::{avatar_color, AVATAR_COLORS};
use crate::initials::initials;
use serde::{Deserialize, Serialize};

/// Initials plus background color for one display source.
///
/// This is the pair UI layers consume together. The color is derived from
/// the extracted initials rather than the raw source, so equal sources
/// always render identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarHints {
    pub initials: String,
    pub color: String,
}

impl AvatarHints {
    /// Hints for `source`, colored from [`AVATAR_COLORS`].
    pub fn new(source: Option<&str>) -> Self {
        Self::with_palette(source, AVATAR_COLORS)
    }

    /// Hints for `source`, colored from a caller-supplied palette.
    ///
    /// An empty palette falls back to [`AVATAR_COLORS`].
    pub fn with_palette<S: AsRef<str>>(source: Option<&str>, palette: &[S]) -> Self {
        let initials = initials(source);
        let color = avatar_color(Some(&initials), Some(palette));
        Self { initials, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_for_email() {
        let hints = AvatarHints::new(Some("john.doe@example.com"));
        assert_eq!(hints.initials, "JD");
        assert_eq!(hints.color, "#2AA076");
    }

    #[test]
    fn test_absent_source() {
        let hints = AvatarHints::new(None);
        assert_eq!(hints.initials, "");
        assert_eq!(hints.color, AVATAR_COLORS[0]);
    }

    #[test]
    fn test_custom_palette() {
        let palette = ["red", "green", "blue"];
        let hints = AvatarHints::with_palette(Some("john.doe@example.com"), &palette[..]);
        assert_eq!(hints.initials, "JD");
        assert_eq!(hints.color, "green");
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let empty: Vec<String> = Vec::new();
        let hints = AvatarHints::with_palette(Some("john.doe@example.com"), &empty[..]);
        assert_eq!(hints.color, "#2AA076");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let hints = AvatarHints::new(Some("jane@example.com"));

        let json = serde_json::to_string(&hints).unwrap();
        let parsed: AvatarHints = serde_json::from_str(&json).unwrap();

        assert_eq!(hints, parsed);
    }
}
