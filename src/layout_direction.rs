//! Layout direction support for RTL (right-to-left) languages.
//!
//! Submenu panels anchor to the trailing side of their host, so the side a
//! panel opens on depends on the text direction in effect. A global layout
//! direction acts as the fallback when a host has no explicit direction of
//! its own; the shell sets it from the system locale or a user preference.

use std::sync::atomic::{AtomicU8, Ordering};

/// Global layout direction state, stored as u8: 0 = Ltr, 1 = Rtl.
static LAYOUT_DIRECTION: AtomicU8 = AtomicU8::new(0);

/// Returns the global layout direction.
pub fn layout_direction() -> LayoutDirection {
    match LAYOUT_DIRECTION.load(Ordering::Relaxed) {
        1 => LayoutDirection::Rtl,
        _ => LayoutDirection::Ltr,
    }
}

/// Sets the global layout direction.
///
/// This should be called by the shell when the effective text direction
/// changes; already-open panels pick it up on their next render.
pub fn set_layout_direction(direction: LayoutDirection) {
    LAYOUT_DIRECTION.store(direction as u8, Ordering::Relaxed);
}

/// The direction of the layout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum LayoutDirection {
    /// Left-to-right layout (default for most Western languages).
    #[default]
    Ltr = 0,
    /// Right-to-left layout (for Arabic, Hebrew, etc.).
    Rtl = 1,
}

impl LayoutDirection {
    /// Returns `true` if the layout direction is left-to-right.
    pub fn is_ltr(self) -> bool {
        matches!(self, Self::Ltr)
    }

    /// Returns `true` if the layout direction is right-to-left.
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }

    /// Returns the opposite layout direction.
    pub fn flip(self) -> Self {
        match self {
            Self::Ltr => Self::Rtl,
            Self::Rtl => Self::Ltr,
        }
    }

    /// Resolves a logical start/end pair to a physical left/right pair.
    ///
    /// In LTR: start = left, end = right. In RTL: start = right, end = left.
    pub fn resolve_start_end<T>(self, start: T, end: T) -> (T, T) {
        match self {
            Self::Ltr => (start, end),
            Self::Rtl => (end, start),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LayoutDirection;

    #[test]
    fn flip_is_involutive() {
        assert_eq!(LayoutDirection::Ltr.flip(), LayoutDirection::Rtl);
        assert_eq!(LayoutDirection::Ltr.flip().flip(), LayoutDirection::Ltr);
    }

    #[test]
    fn resolve_start_end_swaps_in_rtl() {
        assert_eq!(LayoutDirection::Ltr.resolve_start_end("a", "b"), ("a", "b"));
        assert_eq!(LayoutDirection::Rtl.resolve_start_end("a", "b"), ("b", "a"));
    }
}
