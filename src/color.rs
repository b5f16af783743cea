//! # Avatar Color Selection
//!
//! Maps an initials string to a background color from a palette. The pick
//! is a plain code-point sum taken modulo the palette length, so equal
//! initials always land on the same entry across sessions and platforms.

/// Default palette for initials-based avatar backgrounds.
pub const AVATAR_COLORS: &[&str] = &[
    "#6A50D3",
    "#FF9B42",
    "#DF486F",
    "#73348C",
    "#B23683",
    "#F96E57",
    "#4380E2",
    "#2AA076",
    "#00A8B3",
];

/// Background color for an initials-based avatar.
///
/// The pick is deterministic: the Unicode code points of `initials` are
/// summed and the total indexes into the active palette. Absent or empty
/// initials select the first entry. `custom_palette` is used only when it is
/// present and non-empty; otherwise [`AVATAR_COLORS`] applies, which also
/// keeps the modulo away from zero-length palettes.
pub fn avatar_color<S: AsRef<str>>(
    initials: Option<&str>,
    custom_palette: Option<&[S]>,
) -> String {
    let custom = custom_palette.filter(|palette| !palette.is_empty());
    let palette_len = custom.map_or(AVATAR_COLORS.len(), |palette| palette.len());
    let index = color_index(initials, palette_len);

    match custom {
        Some(palette) => palette[index].as_ref().to_string(),
        None => AVATAR_COLORS[index].to_string(),
    }
}

/// Palette index for the given initials. `palette_len` must be non-zero.
fn color_index(initials: Option<&str>, palette_len: usize) -> usize {
    match initials {
        Some(initials) if !initials.is_empty() => {
            // Summed by code point, not by UTF-16 unit or byte. Wrapping
            // keeps the function total for pathological inputs.
            let name_hash = initials
                .chars()
                .fold(0u64, |hash, c| hash.wrapping_add(c as u64));
            (name_hash % palette_len as u64) as usize
        }
        _ => 0,
    }
}
