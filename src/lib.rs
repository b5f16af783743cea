//! # Monogram
//!
//! Monogram computes deterministic visual identity hints for user avatars.
//! Given a display name or an email address, it derives the two things an
//! initials avatar needs:
//!
//! - **Initials**: the first grapheme of each of the first two words,
//!   uppercased. Extraction is grapheme-aware, so combining marks, emoji,
//!   and other multi-code-point clusters survive intact instead of being
//!   truncated mid-character.
//! - **Background color**: one entry of a palette, selected by hashing the
//!   initials. Equal inputs always produce equal colors; there is no
//!   randomness and no time dependency.
//!
//! It also classifies avatar URLs against known hosting services and builds
//! Gravatar lookup URLs, so callers can try a hosted avatar first and fall
//! back to the generated initials when none exists.
//!
//! ## No I/O, No State
//!
//! Everything here is a pure function over `&str`. No network access, no
//! caching, no shared mutable state, and no panics on any input: absent and
//! malformed values degrade to defined results (empty initials, the
//! palette's first color, a `false` classification). That makes the crate
//! safe to call concurrently from any UI or service layer with no
//! coordination.
//!
//! ## Quick Example
//!
//! ```rust
//! use monogram::{avatar_color, initials};
//!
//! let initials = initials(Some("john.doe@example.com"));
//! assert_eq!(initials, "JD");
//!
//! // Equal initials always map to the same palette entry.
//! let color = avatar_color(Some(&initials), None::<&[&str]>);
//! assert_eq!(color, "#2AA076");
//! ```
//!
//! Hosted avatars:
//!
//! ```rust
//! use monogram::{gravatar_url, is_gravatar_url, GRAVATAR_BASE_URL};
//!
//! let url = gravatar_url("john.doe@example.com", GRAVATAR_BASE_URL);
//! assert!(is_gravatar_url(Some(&url), GRAVATAR_BASE_URL));
//! ```
//!
//! ## Module Overview
//!
//! - [`mod@initials`]: grapheme-aware initials extraction
//! - [`color`]: deterministic palette selection
//! - [`gravatar`]: avatar service URL classification and construction
//! - [`hints`]: the serializable initials + color bundle

pub mod color;
pub mod gravatar;
pub mod hints;
pub mod initials;

pub use crate::color::{avatar_color, AVATAR_COLORS};
pub use crate::gravatar::{gravatar_url, is_cors_avatar_url, is_gravatar_url, GRAVATAR_BASE_URL};
pub use crate::hints::AvatarHints;
pub use crate::initials::initials;
