//! Transient user notifications.
//!
//! Every API call reports its outcome through a [`Notifier`]. The service is
//! injected rather than global so tests can capture what the user would see.

use colored::Colorize;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Error,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationKind::Success => write!(f, "success"),
            NotificationKind::Error => write!(f, "error"),
        }
    }
}

/// A notification as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

/// Sink for user-facing notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str) {
        (**self).notify(kind, title, message)
    }
}

/// Prints notifications to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl TerminalNotifier {
    /// Render a notification as a single line.
    pub fn format(kind: NotificationKind, title: &str, message: &str) -> String {
        match kind {
            NotificationKind::Success => format!(
                "{}  {} {}",
                "✓".green().bold(),
                format!("{}:", title).green().bold(),
                message
            ),
            NotificationKind::Error => format!(
                "{}  {} {}",
                "✗".red().bold(),
                format!("{}:", title).red().bold(),
                message
            ),
        }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str) {
        eprintln!("{}", Self::format(kind, title, message));
    }
}

/// Keeps every notification in memory.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    entries: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all notifications so far, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    /// Number of notifications of the given kind.
    pub fn count(&self, kind: NotificationKind) -> usize {
        self.lock().iter().filter(|n| n.kind == kind).count()
    }

    /// The most recent notification, if any.
    pub fn last(&self) -> Option<Notification> {
        self.lock().last().cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notification>> {
        // The vector stays valid even if a holder panicked.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str) {
        self.lock().push(Notification {
            kind,
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}
