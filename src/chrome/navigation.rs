//! Dropdown menu, anchor scrolling, keyboard focus mode.

/// Body overflow while the menu is open or closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyScroll {
    /// `overflow: hidden`
    Locked,
    /// overflow reset
    Free,
}

/// Dropdown menu state.
///
/// Every transition returns the body scroll to apply, so the toggle button,
/// the dropdown and the body always agree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Menu button clicked.
    pub fn toggle(&mut self) -> BodyScroll {
        self.open = !self.open;
        self.body_scroll()
    }

    /// A menu link or category was clicked.
    pub fn close(&mut self) -> BodyScroll {
        self.open = false;
        BodyScroll::Free
    }

    /// Key pressed anywhere. Escape closes an open menu; returns `None` when
    /// nothing changed.
    pub fn on_key(&mut self, key: &str) -> Option<BodyScroll> {
        if key == "Escape" && self.open {
            Some(self.close())
        } else {
            None
        }
    }

    /// `active` class on the toggle and dropdown.
    pub fn active_class(&self) -> Option<&'static str> {
        self.open.then_some("active")
    }

    fn body_scroll(&self) -> BodyScroll {
        if self.open {
            BodyScroll::Locked
        } else {
            BodyScroll::Free
        }
    }
}

/// What clicking an in-page link should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorAction {
    /// Leave the default browser behavior alone
    Default,
    /// Prevent default; the target is missing
    Ignore,
    /// Prevent default and smooth-scroll the target to the top of the viewport
    ScrollTo(String),
}

impl AnchorAction {
    /// Resolve an `href` starting with `#`. `target_exists` reports whether
    /// an element with the given id is on the page.
    pub fn resolve(href: &str, target_exists: impl Fn(&str) -> bool) -> Self {
        let Some(id) = href.strip_prefix('#') else {
            return Self::Default;
        };
        if id.is_empty() {
            return Self::Default;
        }
        if target_exists(id) {
            Self::ScrollTo(id.to_string())
        } else {
            Self::Ignore
        }
    }
}

/// Whether focus outlines are shown (`keyboard-navigation` body class).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusMode {
    keyboard: bool,
}

impl FocusMode {
    pub const CLASS: &'static str = "keyboard-navigation";

    pub fn on_key(&mut self, key: &str) {
        if key == "Tab" {
            self.keyboard = true;
        }
    }

    pub fn on_mouse_down(&mut self) {
        self.keyboard = false;
    }

    pub fn is_keyboard(&self) -> bool {
        self.keyboard
    }
}
