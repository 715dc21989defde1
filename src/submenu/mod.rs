//! Hover and keyboard activation for a menu item's submenu.
//!
//! A [`Controller`] is created alongside the menu item that owns a submenu
//! and is driven by the item's lifecycle ([`Controller::on_host_connect`],
//! [`Controller::on_host_update`], [`Controller::on_host_disconnect`]) and
//! by raw input events ([`Controller::update`]). It decides when the
//! anchored panel opens and closes, where keyboard focus moves, and the
//! skidding offset that keeps the panel's top edge aligned with the host.
//!
//! The embedding widget implements [`Host`] to answer the structural
//! queries the controller needs: whether the submenu slot has content,
//! whether the host is disabled, which elements belong to the host's
//! subtree, where focus currently is, and the resolved inset of the host's
//! parent container.

mod controller;
mod host;


pub use controller::{Controller, Listeners};
pub use host::{Host, Inset};

use smol_str::SmolStr;
use thiserror::Error;

/// The name of the slot submenu content is assigned to.
pub const SUBMENU_SLOT: &str = "submenu";

/// A recoverable submenu condition.
///
/// These are reported through `log::error!` and never propagate to the
/// embedder; the triggering event is left unconsumed so ancestors may still
/// act on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The submenu content slot could not be located in the rendered output.
    #[error("slot {slot:?} was not found in the rendered output")]
    SlotMissing {
        /// The name of the missing slot.
        slot: SmolStr,
    },

    /// The assigned submenu content contains no focusable menu item.
    #[error("no eligible menu item found in the assigned submenu content")]
    NoEligibleItem,
}
