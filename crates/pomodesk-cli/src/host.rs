//! Terminal implementations of the engine's display and notification ports.

use std::io::Write;

use notify_rust::Notification;
use pomodesk_core::{DisplaySink, Event, NotificationPermission, Notifier, Notice, Snapshot};
use tracing::debug;

/// Desktop notifications through the OS notification daemon.
///
/// There is no interactive prompt on the desktop: permission is granted on
/// request unless notifications are disabled in the config.
pub struct DesktopNotifier {
    enabled: bool,
    permission: NotificationPermission,
}

impl DesktopNotifier {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            permission: if enabled {
                NotificationPermission::Default
            } else {
                NotificationPermission::Denied
            },
        }
    }
}

impl Notifier for DesktopNotifier {
    fn permission(&self) -> NotificationPermission {
        self.permission
    }

    fn request_permission(&mut self) -> NotificationPermission {
        if self.enabled {
            self.permission = NotificationPermission::Granted;
        }
        self.permission
    }

    fn notify(&mut self, notice: &Notice) -> Result<(), Box<dyn std::error::Error>> {
        Notification::new()
            .appname("pomodesk")
            .summary(&notice.title)
            .body(&notice.body)
            .show()?;
        Ok(())
    }
}

/// How the terminal display prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// One self-overwriting status line.
    StatusLine,
    /// One JSON object per engine event, nothing else.
    JsonEvents,
}

pub struct TerminalDisplay {
    output: Output,
    bell: bool,
    line_open: bool,
}

impl TerminalDisplay {
    pub fn new(output: Output, bell: bool) -> Self {
        Self {
            output,
            bell,
            line_open: false,
        }
    }

    /// End the status line so later output starts on a fresh line.
    pub fn finish(&mut self) {
        if self.line_open {
            println!();
            self.line_open = false;
        }
    }
}

impl DisplaySink for TerminalDisplay {
    fn render(&mut self, snapshot: &Snapshot) {
        if self.output != Output::StatusLine {
            return;
        }
        let mut stdout = std::io::stdout();
        let written = write!(
            stdout,
            "\r{} {}  {:<11} {:<7} {:>3.0}%  #{}   ",
            snapshot.icon,
            snapshot.clock,
            snapshot.phase_label,
            snapshot.status.label(),
            snapshot.progress * 100.0,
            snapshot.completed_work_count,
        )
        .and_then(|()| stdout.flush());
        if let Err(e) = written {
            debug!(error = %e, "failed to draw status line");
        }
        self.line_open = true;
    }

    fn toast(&mut self, notice: &Notice) {
        if self.output != Output::StatusLine {
            return;
        }
        self.finish();
        println!("{}  {}", notice.title, notice.body);
        if self.bell {
            let mut stdout = std::io::stdout();
            if let Err(e) = stdout.write_all(b"\x07").and_then(|()| stdout.flush()) {
                debug!(error = %e, "failed to ring terminal bell");
            }
        }
    }

    fn event(&mut self, event: &Event) {
        if self.output != Output::JsonEvents {
            return;
        }
        match serde_json::to_string(event) {
            Ok(line) => println!("{line}"),
            Err(e) => debug!(error = %e, "failed to encode event"),
        }
    }
}
