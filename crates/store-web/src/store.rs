//! Yew reducers over the core session and toast queue, and the observer
//! that lets the checkout flow drive them from async tasks.

use std::rc::Rc;
use store_core::{CheckoutObserver, Notification, Session, SessionAction, ToastQueue};
use yew::prelude::*;

/// View state for the storefront
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStore(pub Session);

impl Reducible for SessionStore {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(SessionStore(self.0.apply(action)))
    }
}

pub enum ToastAction {
    Push(Notification),
    Dismiss(u64),
}

/// Visible notifications
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastStore(pub ToastQueue);

impl Reducible for ToastStore {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = self.0.clone();
        match action {
            ToastAction::Push(notification) => {
                queue.push(notification);
            }
            ToastAction::Dismiss(id) => queue.dismiss(id),
        }
        Rc::new(ToastStore(queue))
    }
}

/// Forwards checkout transitions and notifications to the view's reducers
#[derive(Clone)]
pub struct ViewObserver {
    session: UseReducerDispatcher<SessionStore>,
    toasts: UseReducerDispatcher<ToastStore>,
}

impl ViewObserver {
    pub fn new(
        session: UseReducerDispatcher<SessionStore>,
        toasts: UseReducerDispatcher<ToastStore>,
    ) -> Self {
        Self { session, toasts }
    }
}

impl CheckoutObserver for ViewObserver {
    fn transition(&self, action: SessionAction) {
        self.session.dispatch(action);
    }

    fn notify(&self, notification: Notification) {
        self.toasts.dispatch(ToastAction::Push(notification));
    }
}
