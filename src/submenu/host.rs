//! The contract between a submenu controller and its owning menu item.

use crate::node::{ItemNode, NodeId};
use crate::popup::PopupHandle;

/// The resolved top inset of the host's parent container.
///
/// Each component is a post-layout pixel length; `None` stands for an
/// absent or non-length value and resolves to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Inset {
    /// The parent's resolved top padding.
    pub padding_top: Option<f32>,
    /// The parent's resolved top border width.
    pub border_top: Option<f32>,
    /// The parent's resolved top margin.
    pub margin_top: Option<f32>,
}

impl Inset {
    /// The total top inset in pixels, with absent components as zero.
    pub fn top_total(self) -> f32 {
        self.padding_top.unwrap_or(0.0)
            + self.border_top.unwrap_or(0.0)
            + self.margin_top.unwrap_or(0.0)
    }
}

/// The menu item a [`Controller`](super::Controller) is attached to.
///
/// The controller's lifetime is bounded by its host's: the host invokes the
/// controller's lifecycle callbacks and forwards it raw input events, and
/// the controller answers back through these queries.
pub trait Host {
    /// The identity of the host element itself.
    fn id(&self) -> NodeId;

    /// Whether the host is disabled.
    fn is_disabled(&self) -> bool;

    /// Whether the named slot currently has assigned content.
    fn has_slotted(&self, slot: &str) -> bool;

    /// The content assigned to the named slot.
    ///
    /// Returns `None` when the slot cannot be located in the rendered
    /// output at all, as opposed to an empty slice for a present but empty
    /// slot.
    fn assigned_items(&self, slot: &str) -> Option<&[ItemNode]>;

    /// Whether `node` is the host or lies on the host's composed path.
    fn contains(&self, node: NodeId) -> bool;

    /// The element that currently holds keyboard focus, if any.
    fn focused(&self) -> Option<NodeId>;

    /// The resolved top inset of the host's parent container.
    fn parent_inset(&self) -> Inset;

    /// A handle to the anchored popup in the host's rendered output.
    ///
    /// The handle is unbound until the host has rendered the popup.
    fn popup(&self) -> PopupHandle;
}
