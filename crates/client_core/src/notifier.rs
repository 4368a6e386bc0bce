//! Notification ports and the shared toast widget model.

use std::sync::{Mutex, MutexGuard};

use shared::protocol::Severity;

/// Renders one transient status message.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, message: &str, severity: Severity);
}

/// Blocking acknowledgement shown to the operator.
pub trait Alert: Send + Sync {
    fn alert(&self, message: &str);
}

/// Every class a severity can apply. Cleared before each render.
pub const SEVERITY_CLASSES: [&str; 6] = [
    "bg-success",
    "bg-danger",
    "bg-warning",
    "bg-info",
    "text-white",
    "text-dark",
];

pub fn severity_classes(severity: Severity) -> [&'static str; 2] {
    match severity {
        Severity::Success => ["bg-success", "text-white"],
        Severity::Error => ["bg-danger", "text-white"],
        Severity::Warning => ["bg-warning", "text-dark"],
        Severity::Info => ["bg-info", "text-white"],
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastState {
    pub title: String,
    pub body: String,
    pub classes: Vec<String>,
    /// Number of times the show lifecycle was (re)started.
    pub shows: u64,
}

impl ToastState {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Page-global toast. Calls are not queued: each one overwrites the title,
/// body and styling and restarts the display.
#[derive(Debug, Default)]
pub struct ToastWidget {
    state: Mutex<ToastState>,
}

impl ToastWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Widget whose markup already carries non-severity classes (`toast`, ...).
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            state: Mutex::new(ToastState {
                classes: classes.into_iter().map(Into::into).collect(),
                ..ToastState::default()
            }),
        }
    }

    pub fn snapshot(&self) -> ToastState {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, ToastState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Notifier for ToastWidget {
    fn notify(&self, title: &str, message: &str, severity: Severity) {
        let mut state = self.lock();
        state.title = title.to_string();
        state.body = message.to_string();
        state
            .classes
            .retain(|class| !SEVERITY_CLASSES.contains(&class.as_str()));
        state
            .classes
            .extend(severity_classes(severity).iter().map(|c| c.to_string()));
        state.shows += 1;
        tracing::debug!(severity = severity.as_str(), title, "toast shown");
    }
}

#[cfg(test)]
#[path = "tests/notifier_tests.rs"]
mod tests;
