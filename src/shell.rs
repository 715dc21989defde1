//! A connection to the host's update cycle.
//!
//! Controllers never redraw or move focus themselves; they record the
//! request on a [`Shell`] and the embedding widget applies it after the
//! event is processed.

use crate::node::NodeId;

/// Where keyboard focus should move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The host menu item itself.
    Host,
    /// A specific element inside the submenu panel.
    Node(NodeId),
}

/// Collects the side effects of handling a single event.
#[derive(Debug, Default)]
pub struct Shell {
    redraws: usize,
    layout_invalidated: bool,
    focus_request: Option<FocusTarget>,
}

impl Shell {
    /// Creates an empty [`Shell`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a redraw of the host.
    pub fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    /// Invalidates the host's layout.
    pub fn invalidate_layout(&mut self) {
        self.layout_invalidated = true;
    }

    /// Requests that keyboard focus move to the given target.
    ///
    /// A later request replaces an earlier one; only one focus move is
    /// performed per event.
    pub fn request_focus(&mut self, target: FocusTarget) {
        self.focus_request = Some(target);
    }

    /// Whether any redraw was requested.
    pub fn redraw_requested(&self) -> bool {
        self.redraws > 0
    }

    /// How many redraw requests were recorded.
    pub fn redraw_count(&self) -> usize {
        self.redraws
    }

    /// Whether the layout was invalidated.
    pub fn is_layout_invalid(&self) -> bool {
        self.layout_invalidated
    }

    /// Takes the pending focus request, if any.
    pub fn take_focus_request(&mut self) -> Option<FocusTarget> {
        self.focus_request.take()
    }

    /// Peeks at the pending focus request without consuming it.
    pub fn focus_request(&self) -> Option<FocusTarget> {
        self.focus_request
    }
}
