//! Handle mouse events.
use crate::node::NodeId;

/// A mouse event, scoped to a submenu host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The mouse cursor entered the host's bounds.
    CursorEntered,

    /// The mouse cursor left the host's bounds.
    CursorLeft,

    /// A mouse button was pressed.
    ///
    /// `target` is the deepest element on the event's composed path, or
    /// `None` when the press landed on no tracked element at all.
    ButtonPressed {
        /// The button that was pressed.
        button: Button,
        /// The deepest element under the press.
        target: Option<NodeId>,
    },

    /// A mouse button was released.
    ButtonReleased {
        /// The button that was released.
        button: Button,
        /// The deepest element under the release.
        target: Option<NodeId>,
    },
}

/// The button of a mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// The left mouse button.
    Left,

    /// The right mouse button.
    Right,

    /// The middle (wheel) button.
    Middle,
}
