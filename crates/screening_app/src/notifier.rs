use screening_core::{Notification, NotificationKind};
use screening_engine::Notifier;
use screening_logging::screening_debug;

/// Prints notifications to stderr, keeping stdout for the ranking table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: &Notification) {
        screening_debug!("notification {:?}", notification.kind);
        eprintln!("{}", format_notification(notification));
    }
}

fn format_notification(notification: &Notification) -> String {
    let tag = match notification.kind {
        NotificationKind::ValidationError => "error",
        NotificationKind::Warning => "warning",
        NotificationKind::Success => "ok",
        NotificationKind::Failure => "failed",
    };
    format!("[{tag}] {}: {}", notification.title, notification.description)
}
