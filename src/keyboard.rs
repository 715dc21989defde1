//! Listen to keyboard events.
use smol_str::SmolStr;

/// A keyboard event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    KeyPressed {
        /// The logical key.
        key: Key,

        /// The state of the modifier keys.
        modifiers: Modifiers,
    },

    /// A key was released.
    KeyReleased {
        /// The logical key.
        key: Key,

        /// The state of the modifier keys.
        modifiers: Modifiers,
    },
}

/// A logical key, resolved after the active layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A key with an established name.
    Named(Named),

    /// A key string determined by the current layout.
    Character(SmolStr),
}

/// A named, non-character key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Named {
    /// The Enter or ↵ key.
    Enter,
    /// The space bar.
    Space,
    /// The Escape key.
    Escape,
    /// The Tab key.
    Tab,
    /// The left arrow key.
    ArrowLeft,
    /// The right arrow key.
    ArrowRight,
    /// The up arrow key.
    ArrowUp,
    /// The down arrow key.
    ArrowDown,
    /// The Home key.
    Home,
    /// The End key.
    End,
}

bitflags::bitflags! {
    /// The current state of the keyboard modifiers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u32 {
        /// The "shift" key.
        const SHIFT = 0b100;
        /// The "control" key.
        const CTRL = 0b100 << 3;
        /// The "alt" key.
        const ALT = 0b100 << 6;
        /// The "windows" key on Windows, the "command" key on macOS.
        const LOGO = 0b100 << 9;
    }
}

impl Modifiers {
    /// Returns true if the "shift" key is pressed.
    pub fn shift(self) -> bool {
        self.contains(Self::SHIFT)
    }

    /// Returns true if the "alt" key is pressed.
    pub fn alt(self) -> bool {
        self.contains(Self::ALT)
    }

    /// Returns true if the "control" key is pressed.
    pub fn control(self) -> bool {
        self.contains(Self::CTRL)
    }

    /// Returns true if the "logo" key is pressed.
    pub fn logo(self) -> bool {
        self.contains(Self::LOGO)
    }
}
