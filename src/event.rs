//! Handle events of a user interface.
use crate::keyboard;
use crate::mouse;
use crate::node::NodeId;

/// A user interface event, as delivered to a submenu controller by its host.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A keyboard event.
    Keyboard(keyboard::Event),

    /// A mouse event.
    Mouse(mouse::Event),

    /// Keyboard focus left the host's subtree.
    ///
    /// `related_target` is the element receiving focus, if any. Hosts report
    /// this whenever focus moves away from any element inside them; whether
    /// the move actually leaves the subtree is decided by the controller.
    FocusLost {
        /// The element gaining focus, or `None` when focus went nowhere.
        related_target: Option<NodeId>,
    },
}

/// The status of an [`Event`] after being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The [`Event`] was **NOT** handled; it keeps propagating to ancestors.
    Ignored,

    /// The [`Event`] was handled; its default action is suppressed and it
    /// stops propagating.
    Captured,
}

impl Status {
    /// Merges two [`Status`] into one.
    ///
    /// `Captured` takes precedence over `Ignored`:
    ///
    /// ```
    /// use flyout::event::Status;
    ///
    /// assert_eq!(Status::Ignored.merge(Status::Ignored), Status::Ignored);
    /// assert_eq!(Status::Ignored.merge(Status::Captured), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Ignored), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Captured), Status::Captured);
    /// ```
    pub fn merge(self, b: Self) -> Self {
        match self {
            Status::Ignored => b,
            Status::Captured => Status::Captured,
        }
    }
}
