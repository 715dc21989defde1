//! The submenu activation state machine.

use super::host::Host;
use super::{Error, SUBMENU_SLOT};
use crate::event::{self, Event};
use crate::keyboard::{self, Named};
use crate::mouse;
use crate::node::{self, NodeId};
use crate::shell::{FocusTarget, Shell};

bitflags::bitflags! {
    /// The set of input listeners a controller registers on its host.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Listeners: u8 {
        /// The pointer entered the host.
        const POINTER_ENTER = 1 << 0;
        /// A key was pressed while the host's subtree had focus.
        const KEY_DOWN = 1 << 1;
        /// The host was clicked.
        const CLICK = 1 << 2;
        /// Focus left an element inside the host.
        const FOCUS_OUT = 1 << 3;
    }
}

/// Decides when a menu item's submenu panel opens and closes.
///
/// One controller is attached to each menu item that owns a submenu. It is
/// driven by the host's lifecycle callbacks and by raw input events, and it
/// drives two outputs: the active flag of the anchored popup and the
/// skidding offset applied to the popup's position.
#[derive(Debug, Default)]
pub struct Controller {
    connected: bool,
    listeners: Listeners,
    skidding: f32,
    pending_focus: Option<NodeId>,
}

impl Controller {
    /// Creates a detached [`Controller`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the controller's listener set is currently attached.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// The listeners currently registered on the host.
    pub fn listeners(&self) -> Listeners {
        self.listeners
    }

    /// The skidding offset computed on the last connected host update.
    ///
    /// Hosts pass this value unmodified to the popup on every render.
    pub fn skidding(&self) -> f32 {
        self.skidding
    }

    /// Whether the submenu panel is currently shown.
    pub fn is_expanded(&self, host: &dyn Host) -> bool {
        host.popup().is_active()
    }

    /// Notifies the controller that its host connected to the tree.
    pub fn on_host_connect(&mut self, host: &dyn Host) {
        self.sync_listeners(host);
    }

    /// Notifies the controller that its host finished an update.
    ///
    /// Re-evaluates the listener guard, recomputes the skidding offset so a
    /// reflowed layout is reflected before the next open, and completes a
    /// keyboard-open by moving focus into the now-rendered panel.
    pub fn on_host_update(&mut self, host: &dyn Host, shell: &mut Shell) {
        self.sync_listeners(host);

        if !self.connected {
            return;
        }

        self.skidding = -host.parent_inset().top_total();
        host.popup().set_skidding(self.skidding);

        if let Some(item) = self.pending_focus.take() {
            shell.request_focus(FocusTarget::Node(item));
        }
    }

    /// Notifies the controller that its host disconnected from the tree.
    pub fn on_host_disconnect(&mut self) {
        self.detach_listeners();
    }

    /// Processes a raw input event delivered by the host.
    ///
    /// Returns [`event::Status::Captured`] when the event's default action
    /// must be suppressed and its propagation stopped.
    pub fn update(
        &mut self,
        host: &dyn Host,
        event: &Event,
        shell: &mut Shell,
    ) -> event::Status {
        use event::Status::{Captured, Ignored};

        if !self.connected {
            return Ignored;
        }

        match event {
            Event::Mouse(mouse::Event::CursorEntered) => {
                // Hover opens immediately. Closing is driven by focus
                // geography and outside presses, not a pointer-leave timer.
                self.set_active(host, shell, true);
                Captured
            }

            Event::Mouse(mouse::Event::ButtonPressed { target, .. }) => {
                if target.is_none_or(|pressed| !host.contains(pressed)) {
                    self.set_active(host, shell, false);
                }
                Ignored
            }

            Event::Mouse(mouse::Event::ButtonReleased {
                button: mouse::Button::Left,
                target: Some(target),
            }) if *target == host.id() => {
                // The head item of a submenu is inert to direct clicks; it
                // only opens via hover or keyboard.
                Captured
            }

            Event::FocusLost { related_target } => {
                if related_target.is_none_or(|gained| !host.contains(gained)) {
                    self.set_active(host, shell, false);
                }
                Ignored
            }

            Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                self.handle_key_pressed(host, key, shell)
            }

            _ => Ignored,
        }
    }

    fn handle_key_pressed(
        &mut self,
        host: &dyn Host,
        key: &keyboard::Key,
        shell: &mut Shell,
    ) -> event::Status {
        use event::Status::{Captured, Ignored};

        match key {
            keyboard::Key::Named(Named::Escape | Named::Tab) => {
                self.set_active(host, shell, false);
                Ignored
            }

            keyboard::Key::Named(Named::ArrowLeft) => match host.focused() {
                Some(focused) if focused != host.id() => {
                    self.set_active(host, shell, false);
                    shell.request_focus(FocusTarget::Host);
                    Captured
                }
                // Focus is on the host itself; let an ancestor menu handle
                // outdented navigation.
                _ => Ignored,
            },

            keyboard::Key::Named(Named::ArrowRight | Named::Enter | Named::Space) => {
                self.open_and_focus(host, shell)
            }

            keyboard::Key::Character(c) if c == " " => self.open_and_focus(host, shell),

            _ => Ignored,
        }
    }

    /// Opens the panel (if needed) and moves focus to its first item.
    ///
    /// When the panel was closed, the focus move is deferred to the next
    /// host update: the target element is not guaranteed focusable until
    /// the pending re-render completes.
    fn open_and_focus(&mut self, host: &dyn Host, shell: &mut Shell) -> event::Status {
        let item = match self.first_item(host) {
            Ok(item) => item,
            Err(error) => {
                log::error!("submenu keyboard open failed: {error}");
                return event::Status::Ignored;
            }
        };

        if self.set_active(host, shell, true) {
            self.pending_focus = Some(item);
        } else {
            shell.request_focus(FocusTarget::Node(item));
        }

        event::Status::Captured
    }

    fn first_item(&self, host: &dyn Host) -> Result<NodeId, Error> {
        let assigned = host.assigned_items(SUBMENU_SLOT).ok_or(Error::SlotMissing {
            slot: SUBMENU_SLOT.into(),
        })?;

        node::first_eligible(assigned).ok_or(Error::NoEligibleItem)
    }

    /// Toggles the popup, returning whether its state actually changed.
    ///
    /// A real transition requests exactly one redraw; toggling to the
    /// current state requests none.
    fn set_active(&mut self, host: &dyn Host, shell: &mut Shell, active: bool) -> bool {
        if !active {
            self.pending_focus = None;
        }

        if host.popup().set_active(active) {
            shell.invalidate_layout();
            shell.request_redraw();
            true
        } else {
            false
        }
    }

    fn sync_listeners(&mut self, host: &dyn Host) {
        let guard = host.has_slotted(SUBMENU_SLOT) && !host.is_disabled();

        if guard {
            self.attach_listeners();
        } else {
            self.detach_listeners();
        }
    }

    fn attach_listeners(&mut self) {
        if self.connected {
            return;
        }

        self.listeners = Listeners::all();
        self.connected = true;
        log::debug!("submenu listeners attached: {:?}", self.listeners);
    }

    fn detach_listeners(&mut self) {
        if !self.connected {
            return;
        }

        self.listeners = Listeners::empty();
        self.connected = false;
        self.pending_focus = None;
        log::debug!("submenu listeners detached");
    }
}
