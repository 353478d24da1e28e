//! Mobile sidebar shell state machine.
//!
//! Owns the open/closed visibility of the whole sidebar on narrow
//! viewports. The shell mediates visibility only; it never touches
//! active-state computation.

use std::sync::mpsc;

use crate::scroll_lock::{ScrollGuard, ScrollLock};
use crate::signal::{MenuCommand, MenuTrigger};

/// Mobile visibility state for the whole sidebar.
///
/// Starts closed. Holds a scroll-lock guard exactly while open, so every
/// exit path — toggle, external close, or dropping the shell — restores
/// background scrolling.
pub struct ResponsiveShell {
    open: bool,
    commands: mpsc::Receiver<MenuCommand>,
    lock: ScrollLock,
    guard: Option<ScrollGuard>,
}

impl ResponsiveShell {
    /// Create a closed shell and the trigger handle for external controls.
    #[must_use]
    pub fn new(lock: ScrollLock) -> (Self, MenuTrigger) {
        let (tx, rx) = mpsc::channel();
        (
            Self {
                open: false,
                commands: rx,
                lock,
                guard: None,
            },
            MenuTrigger::new(tx),
        )
    }

    /// True while the mobile sidebar is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True while the overlay intercept region should be rendered.
    #[must_use]
    pub fn overlay_visible(&self) -> bool {
        self.open
    }

    /// Flip the sidebar open/closed.
    pub fn toggle(&mut self) {
        self.set_open(!self.open);
    }

    /// Force the sidebar closed. Clicking the overlay lands here.
    pub fn close(&mut self) {
        self.set_open(false);
    }

    /// Apply all pending commands from external triggers.
    ///
    /// Call before rendering, so every queued request is observed by the
    /// next render pass. Returns the number of commands applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(command) = self.commands.try_recv() {
            match command {
                MenuCommand::Toggle => self.toggle(),
                MenuCommand::Close => self.close(),
            }
            applied += 1;
        }
        applied
    }

    fn set_open(&mut self, open: bool) {
        if self.open == open {
            return;
        }
        self.open = open;
        self.guard = open.then(|| self.lock.acquire());
        tracing::debug!(open, "mobile sidebar");
    }
}
