//! The anchored popup primitive, as seen by the controller.
//!
//! The popup itself (geometry, flipping, painting) lives with the host's
//! rendered output. The controller only observes and toggles it, so a
//! [`PopupCell`] owns the state on the render side and hands out weak
//! [`PopupHandle`]s whose operations no-op while the popup has not been
//! rendered yet or is gone.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::layout_direction::LayoutDirection;

/// Where a panel is placed relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// On the right side of the anchor, top edges aligned.
    #[default]
    RightStart,
    /// On the left side of the anchor, top edges aligned.
    LeftStart,
}

impl Placement {
    /// The trailing-start placement for the given layout direction.
    ///
    /// Submenus open towards the trailing side: right in LTR, left in RTL.
    pub fn for_direction(direction: LayoutDirection) -> Self {
        match direction {
            LayoutDirection::Ltr => Self::RightStart,
            LayoutDirection::Rtl => Self::LeftStart,
        }
    }
}

/// An anchored popup's configuration and visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    active: bool,
    placement: Placement,
    skidding: f32,
    flip: bool,
    shift: bool,
}

impl Popup {
    /// Creates an inactive [`Popup`] with the given placement.
    ///
    /// Flip and shift fallbacks are enabled so the positioning primitive may
    /// move the panel when it would overflow the viewport.
    pub fn new(placement: Placement) -> Self {
        Self {
            active: false,
            placement,
            skidding: 0.0,
            flip: true,
            shift: true,
        }
    }

    /// Sets the skidding offset along the anchor's edge.
    #[must_use]
    pub fn with_skidding(mut self, skidding: f32) -> Self {
        self.skidding = skidding;
        self
    }

    /// Sets whether the popup may flip to the opposite side on overflow.
    #[must_use]
    pub fn with_flip(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    /// Sets whether the popup may shift along its side to stay in view.
    #[must_use]
    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }

    /// Whether the popup is currently shown.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The placement of the popup relative to its anchor.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// The skidding offset of the popup.
    pub fn skidding(&self) -> f32 {
        self.skidding
    }

    /// Whether the flip fallback is enabled.
    pub fn flip(&self) -> bool {
        self.flip
    }

    /// Whether the shift fallback is enabled.
    pub fn shift(&self) -> bool {
        self.shift
    }

    fn set_active(&mut self, active: bool) -> bool {
        if self.active == active {
            return false;
        }

        self.active = active;
        true
    }
}

/// Shared ownership of a [`Popup`] on the render side.
pub struct PopupCell {
    inner: Rc<RefCell<Popup>>,
}

impl PopupCell {
    /// Creates a new [`PopupCell`] owning the given popup.
    pub fn new(popup: Popup) -> Self {
        Self {
            inner: Rc::new(RefCell::new(popup)),
        }
    }

    /// Returns a weak handle for a controller to observe and toggle.
    pub fn handle(&self) -> PopupHandle {
        PopupHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Reads the popup state.
    pub fn with_data<R>(&self, f: impl FnOnce(&Popup) -> R) -> R {
        f(&self.inner.borrow())
    }

    /// Mutates the popup state.
    pub fn with_data_mut<R>(&self, f: impl FnOnce(&mut Popup) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }
}

/// A non-owning handle to a possibly not-yet-rendered [`Popup`].
#[derive(Clone)]
pub struct PopupHandle {
    inner: Weak<RefCell<Popup>>,
}

impl PopupHandle {
    /// A handle bound to nothing.
    ///
    /// Every operation on it is a no-op; [`PopupHandle::is_active`] reports
    /// `false`.
    pub fn unbound() -> Self {
        Self { inner: Weak::new() }
    }

    /// Whether the underlying popup currently exists.
    pub fn is_bound(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Whether the popup is shown. `false` while unbound.
    pub fn is_active(&self) -> bool {
        self.inner
            .upgrade()
            .is_some_and(|popup| popup.borrow().is_active())
    }

    /// Sets the popup's active flag, returning whether the flag changed.
    ///
    /// Returns `false` while unbound or when the flag already had the
    /// requested value.
    pub fn set_active(&self, active: bool) -> bool {
        match self.inner.upgrade() {
            Some(popup) => popup.borrow_mut().set_active(active),
            None => false,
        }
    }

    /// Updates the popup's skidding offset. No-op while unbound.
    pub fn set_skidding(&self, skidding: f32) {
        if let Some(popup) = self.inner.upgrade() {
            popup.borrow_mut().skidding = skidding;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Placement, Popup, PopupCell, PopupHandle};
    use crate::layout_direction::LayoutDirection;

    #[test]
    fn placement_follows_direction() {
        assert_eq!(
            Placement::for_direction(LayoutDirection::Ltr),
            Placement::RightStart
        );
        assert_eq!(
            Placement::for_direction(LayoutDirection::Rtl),
            Placement::LeftStart
        );
    }

    #[test]
    fn set_active_reports_changes_only() {
        let cell = PopupCell::new(Popup::new(Placement::RightStart));
        let handle = cell.handle();

        assert!(handle.set_active(true));
        assert!(!handle.set_active(true));
        assert!(handle.set_active(false));
        assert!(!handle.set_active(false));
    }

    #[test]
    fn unbound_handle_noops() {
        let handle = PopupHandle::unbound();

        assert!(!handle.is_bound());
        assert!(!handle.is_active());
        assert!(!handle.set_active(true));
        handle.set_skidding(-4.0);
    }

    #[test]
    fn handle_unbinds_when_popup_is_dropped() {
        let cell = PopupCell::new(Popup::new(Placement::RightStart));
        let handle = cell.handle();
        assert!(handle.is_bound());

        drop(cell);
        assert!(!handle.is_bound());
        assert!(!handle.set_active(true));
    }
}
