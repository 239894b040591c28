use crate::{
    models::{Notification, Severity},
    services::traits::NotificationSink,
};
use std::sync::Mutex;

/// Sends notifications to the log at a level matching their severity.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationSink for LogNotifier {
    fn notify(&self, notification: Notification) {
        let text = match &notification.description {
            Some(description) => format!("{} ({})", notification.title, description),
            None => notification.title.clone(),
        };
        match notification.severity {
            Severity::Success => log::info!("✅ {}", text),
            Severity::Info => log::info!("{}", text),
            Severity::Warning => log::warn!("⚠️  {}", text),
            Severity::Error => log::error!("❌ {}", text),
        }
    }
}

/// Holds notifications until the host UI drains them into toasts.
#[derive(Debug, Default)]
pub struct QueuedNotifier {
    queue: Mutex<Vec<Notification>>,
}

impl QueuedNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<Notification> {
        match self.queue.lock() {
            Ok(mut queue) => std::mem::take(&mut *queue),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub fn len(&self) -> usize {
        self.queue.lock().map(|queue| queue.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for QueuedNotifier {
    fn notify(&self, notification: Notification) {
        match self.queue.lock() {
            Ok(mut queue) => queue.push(notification),
            Err(poisoned) => poisoned.into_inner().push(notification),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_drains_in_order() {
        let notifier = QueuedNotifier::new();
        notifier.notify(Notification::warning("first"));
        notifier.notify(Notification::error("second").with_description("detail"));
        assert_eq!(notifier.len(), 2);

        let drained = notifier.drain();
        assert_eq!(drained[0].title, "first");
        assert_eq!(drained[1].description.as_deref(), Some("detail"));
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_log_notifier_accepts_every_severity() {
        let notifier = LogNotifier::new();
        notifier.notify(Notification::success("saved"));
        notifier.notify(Notification::info("info"));
        notifier.notify(Notification::warning("careful"));
        notifier.notify(Notification::error("failed").with_description("why"));
    }
}
