use screening_core::Notification;

/// Receives the user-facing notifications produced by the controller.
///
/// Called synchronously, after the form state has been updated and with no
/// lock held, so implementations may read the controller.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}
