//! Responsive sidebar shell for the WFS documentation site.
//!
//! Owns the mobile open/closed state, receives toggle requests from
//! external controls over an explicit channel, and suppresses background
//! scrolling while open through a reference-counted lock that releases on
//! every exit path.
//!
//! # Example
//!
//! ```
//! use wfs_shell::{ResponsiveShell, ScrollLock};
//!
//! let (mut shell, trigger) = ResponsiveShell::new(ScrollLock::default());
//!
//! // A header button somewhere outside the sidebar requests a toggle.
//! trigger.toggle().unwrap();
//!
//! // The shell applies queued requests before the next render pass.
//! shell.pump();
//! assert!(shell.is_open());
//! ```

mod scroll_lock;
mod shell;
mod signal;

pub use scroll_lock::{NullScrollSink, ScrollGuard, ScrollLock, ScrollSink};
pub use shell::ResponsiveShell;
pub use signal::{MenuCommand, MenuTrigger, SignalError};
