//! Menu toggle signal between external controls and the shell.
//!
//! An explicit channel replaces a stringly-typed global event: the shell
//! owns the receiving end, and any number of cloned [`MenuTrigger`] handles
//! can request a toggle or close from outside the sidebar's render subtree.

use std::sync::mpsc;

/// Command requested by an external control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    /// Flip the mobile sidebar open/closed.
    Toggle,
    /// Force the mobile sidebar closed.
    Close,
}

/// Error emitting a command after the shell was torn down.
///
/// Indicates a wiring mistake: the trigger outlived the shell it was
/// created for.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("menu command sent after its shell was torn down")]
pub struct SignalError;

/// Cloneable handle for requesting shell commands.
#[derive(Clone, Debug)]
pub struct MenuTrigger {
    tx: mpsc::Sender<MenuCommand>,
}

impl MenuTrigger {
    pub(crate) fn new(tx: mpsc::Sender<MenuCommand>) -> Self {
        Self { tx }
    }

    /// Request a toggle.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError`] if the shell no longer exists.
    pub fn toggle(&self) -> Result<(), SignalError> {
        self.send(MenuCommand::Toggle)
    }

    /// Request a close.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError`] if the shell no longer exists.
    pub fn close(&self) -> Result<(), SignalError> {
        self.send(MenuCommand::Close)
    }

    fn send(&self, command: MenuCommand) -> Result<(), SignalError> {
        self.tx.send(command).map_err(|_| SignalError)
    }
}

#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::scroll_lock::ScrollLock;
    use crate::shell::ResponsiveShell;

    assert_impl_all!(MenuTrigger: Send, Clone);

    #[test]
    fn test_emit_after_shell_drop_fails_loudly() {
        let (shell, trigger) = ResponsiveShell::new(ScrollLock::default());
        drop(shell);

        assert_eq!(trigger.toggle(), Err(SignalError));
        assert_eq!(trigger.close(), Err(SignalError));
    }

    #[test]
    fn test_cloned_triggers_share_the_shell() {
        let (mut shell, trigger) = ResponsiveShell::new(ScrollLock::default());
        let header_button = trigger.clone();

        trigger.toggle().unwrap();
        header_button.toggle().unwrap();
        shell.pump();

        assert!(!shell.is_open()); // two toggles cancel out
    }
}
