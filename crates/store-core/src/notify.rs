//! # Notifications
//!
//! Non-blocking notifications raised by the checkout flow and the bounded
//! queue of toasts the view renders from them.

use std::collections::VecDeque;

/// Notification text shown after a verified payment.
pub const PAYMENT_SUCCESSFUL_MESSAGE: &str = "Payment successful!";

/// Default number of toasts kept on screen
pub const DEFAULT_TOAST_CAPACITY: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// A notification with a stable id for keyed rendering and dismissal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Bounded queue of visible toasts; the oldest is evicted when full
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    capacity: usize,
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            next_id: 0,
            capacity: capacity.max(1),
            toasts: VecDeque::new(),
        }
    }

    /// Add a notification, returning the id of its toast
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        if self.toasts.len() == self.capacity {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast { id, notification });
        id
    }

    /// Remove a toast; unknown ids are ignored
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Notification::success(PAYMENT_SUCCESSFUL_MESSAGE));
        let second = queue.push(Notification::error("Something went wrong!"));

        assert_ne!(first, second);
        assert_eq!(queue.len(), 2);

        queue.dismiss(first);
        let remaining: Vec<_> = queue.iter().map(|t| t.id).collect();
        assert_eq!(remaining, vec![second]);

        queue.dismiss(first);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_evicts_oldest() {
        let mut queue = ToastQueue::new(2);
        queue.push(Notification::error("one"));
        queue.push(Notification::error("two"));
        queue.push(Notification::success("three"));

        let messages: Vec<_> = queue.iter().map(|t| t.notification.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn test_ids_stay_unique_after_eviction() {
        let mut queue = ToastQueue::new(1);
        let a = queue.push(Notification::error("a"));
        let b = queue.push(Notification::error("b"));

        assert!(b > a);
        assert!(queue.iter().all(|t| t.id == b));
    }
}
