//! Terminal renderings of the toast widget and the blocking alert.

use std::io::{self, BufRead, Write};

use client_core::{Alert, Notifier, ToastState, ToastWidget};
use shared::protocol::Severity;

pub struct TerminalToast {
    widget: ToastWidget,
}

impl TerminalToast {
    pub fn new() -> Self {
        Self {
            widget: ToastWidget::with_classes(["toast"]),
        }
    }
}

impl Default for TerminalToast {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for TerminalToast {
    fn notify(&self, title: &str, message: &str, severity: Severity) {
        self.widget.notify(title, message, severity);
        println!("{}", toast_line(&self.widget.snapshot(), severity));
    }
}

pub fn toast_line(state: &ToastState, severity: Severity) -> String {
    let marker = match severity {
        Severity::Success => "✔",
        Severity::Error => "✖",
        Severity::Warning => "!",
        Severity::Info => "i",
    };
    format!("{marker} {}: {}", state.title, state.body)
}

/// Prints the alert and waits for Enter when `wait` is set.
pub struct TerminalAlert {
    pub wait: bool,
}

impl Alert for TerminalAlert {
    fn alert(&self, message: &str) {
        eprintln!("⚠ {message}");
        if self.wait {
            eprint!("press Enter to continue");
            let _ = io::stderr().flush();
            let mut line = String::new();
            let _ = io::stdin().lock().read_line(&mut line);
        }
    }
}
