//! Open/closed state of the mobile menu and the events that drive it.
//!
//! Everything here is plain data so the rules can be exercised without a
//! browser; the component wraps a `MenuState` in a signal and feeds it events.

use super::config::Breakpoint;

/// `KeyboardEvent.key` value that closes the menu.
pub const ESCAPE_KEY: &str = "Escape";

const OPEN_LABEL: &str = "Abrir menú";
const CLOSE_LABEL: &str = "Cerrar menú";

/// Something that happened to the header or the window it lives in.
#[derive(Clone, Debug, PartialEq)]
pub enum MenuEvent {
    /// The hamburger control was pressed.
    Toggle,
    /// The logo or one of the nav links was followed.
    LinkActivated,
    /// A key went down anywhere in the window.
    KeyDown(String),
    /// The window was resized; carries the viewport width read at that moment.
    Resized(f64),
}

/// Whether the mobile menu of one mounted header is open.
///
/// Every header owns its own `MenuState`; it starts closed and only
/// [`MenuState::toggle`] opens it. Everything else that reaches the header
/// (following a link, pressing Escape, growing the window to desktop width)
/// closes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    is_open: bool,
}

impl MenuState {
    /// A closed menu, the state every header mounts with.
    #[must_use]
    pub const fn new() -> Self {
        Self { is_open: false }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        self.is_open
    }

    /// Flips the menu between open and closed.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Closes the menu. Closing a closed menu is a no-op.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Applies `event` to the menu.
    ///
    /// This is the only place that decides which inputs matter: key-downs
    /// other than [`ESCAPE_KEY`] and resizes narrower than `breakpoint` leave
    /// the state untouched.
    ///
    /// # Arguments
    ///
    /// * `event` - What happened to the header or its window.
    /// * `breakpoint` - Width from which a resize closes the menu.
    ///
    /// # Returns
    ///
    /// `true` if the menu changed, so callers can skip redundant signal writes.
    pub fn apply(&mut self, event: &MenuEvent, breakpoint: Breakpoint) -> bool {
        let before = self.is_open;
        match event {
            MenuEvent::Toggle => self.toggle(),
            MenuEvent::LinkActivated => self.close(),
            MenuEvent::KeyDown(key) if key == ESCAPE_KEY => self.close(),
            MenuEvent::Resized(width) if breakpoint.is_desktop(*width) => self.close(),
            MenuEvent::KeyDown(_) | MenuEvent::Resized(_) => {}
        }
        before != self.is_open
    }

    /// Value of the toggle's `aria-expanded` attribute.
    #[must_use]
    pub const fn aria_expanded(self) -> &'static str {
        if self.is_open { "true" } else { "false" }
    }

    /// Value of the toggle's `aria-label`: what pressing it will do.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        if self.is_open { CLOSE_LABEL } else { OPEN_LABEL }
    }
}
