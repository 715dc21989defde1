//! Element identities and slotted submenu content.
//!
//! The controller never owns the elements it coordinates; it refers to them
//! by [`NodeId`] and inspects slotted content through [`ItemNode`] snapshots
//! the host hands it.

use std::fmt;
use std::sync::atomic::{self, AtomicU64};

use smol_str::SmolStr;

/// The tag marking an element as a menu item.
pub const MENU_ITEM_TAG: &str = "menu-item";

/// The identity of an element in the host's presentation tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

static COUNT: AtomicU64 = AtomicU64::new(1);

impl NodeId {
    /// Creates a new unique [`NodeId`].
    pub fn unique() -> NodeId {
        NodeId(COUNT.fetch_add(1, atomic::Ordering::Relaxed))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A node of slotted submenu content.
///
/// This is a structural snapshot of an assigned element: its tag, its
/// optional `role` attribute, and its children in document order. The
/// controller only reads it to find the first focusable menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemNode {
    id: NodeId,
    tag: SmolStr,
    role: Option<SmolStr>,
    children: Vec<ItemNode>,
}

impl ItemNode {
    /// Creates a new [`ItemNode`] with the given tag and a fresh identity.
    pub fn new(tag: impl Into<SmolStr>) -> Self {
        Self {
            id: NodeId::unique(),
            tag: tag.into(),
            role: None,
            children: Vec::new(),
        }
    }

    /// Creates a menu item node.
    pub fn menu_item() -> Self {
        Self::new(MENU_ITEM_TAG)
    }

    /// Sets the `role` attribute of this node.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<SmolStr>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Sets the children of this node, in document order.
    #[must_use]
    pub fn with_children(mut self, children: Vec<ItemNode>) -> Self {
        self.children = children;
        self
    }

    /// Returns the identity of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the tag of this node.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the children of this node.
    pub fn children(&self) -> &[ItemNode] {
        &self.children
    }

    /// Whether this node is an interactive menu item.
    ///
    /// An element qualifies when it carries the menu item tag or a `role`
    /// beginning with `menuitem` (which also covers `menuitemcheckbox` and
    /// `menuitemradio`).
    pub fn is_menu_item(&self) -> bool {
        self.tag == MENU_ITEM_TAG
            || self
                .role
                .as_ref()
                .is_some_and(|role| role.starts_with("menuitem"))
    }
}

/// Finds the first eligible menu item within the assigned nodes.
///
/// Each top-level node's descendants are searched depth-first in document
/// order; the top-level nodes themselves are containers and do not qualify.
/// Returns the identity of the first match across all assigned nodes.
pub fn first_eligible(assigned: &[ItemNode]) -> Option<NodeId> {
    assigned
        .iter()
        .find_map(|node| first_eligible_descendant(node.children()))
}

fn first_eligible_descendant(children: &[ItemNode]) -> Option<NodeId> {
    for child in children {
        if child.is_menu_item() {
            return Some(child.id());
        }

        if let Some(found) = first_eligible_descendant(child.children()) {
            return Some(found);
        }
    }

    None
}
