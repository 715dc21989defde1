//! Activation logic for hierarchical submenu flyouts.
//!
//! A [`submenu::Controller`] attaches to a single menu item that owns a
//! nested panel of items and decides when that panel is shown or hidden,
//! where keyboard focus goes, and which positioning offset keeps the panel
//! aligned with its parent menu. The controller is pure policy: it does not
//! render anything and it does not own the panel. The embedding widget
//! implements [`submenu::Host`] to answer structural queries, hands raw
//! [`Event`]s to the controller, and applies the side effects the controller
//! records on a [`Shell`].
//!
//! ```
//! use flyout::popup::{Placement, Popup, PopupCell};
//! use flyout::LayoutDirection;
//!
//! let popup = PopupCell::new(
//!     Popup::new(Placement::for_direction(LayoutDirection::Ltr)).with_skidding(-11.0),
//! );
//! assert!(!popup.handle().is_active());
//! ```

pub mod event;
pub mod keyboard;
pub mod layout_direction;
pub mod mouse;
pub mod node;
pub mod popup;
pub mod shell;
pub mod submenu;

pub use event::Event;
pub use layout_direction::{LayoutDirection, layout_direction, set_layout_direction};
pub use node::{ItemNode, NodeId};
pub use shell::{FocusTarget, Shell};
