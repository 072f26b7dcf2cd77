//! Non-blocking notification stack.

use gloo_timers::callback::Timeout;
use store_core::{NotificationKind, Toast};
use yew::prelude::*;

/// How long a toast stays visible
pub const TOAST_TIMEOUT_MS: u32 = 4_000;

fn toast_classes(kind: NotificationKind) -> Classes {
    let palette = match kind {
        NotificationKind::Success => "bg-green-50 border-green-500 text-green-800",
        NotificationKind::Error => "bg-red-50 border-red-500 text-red-800",
    };
    classes!(
        "flex",
        "items-start",
        "justify-between",
        "gap-4",
        "border-l-4",
        "rounded-md",
        "shadow-lg",
        "px-4",
        "py-3",
        palette
    )
}

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-3 w-80" role="status" aria-live="polite">
            { for props.toasts.iter().map(|toast| html! {
                <ToastItem
                    key={toast.id}
                    toast={toast.clone()}
                    on_dismiss={props.on_dismiss.clone()}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub toast: Toast,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
pub fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |id| {
            let id = *id;
            let timeout = Timeout::new(TOAST_TIMEOUT_MS, move || on_dismiss.emit(id));
            // Dropping the handle cancels the timer if the toast goes first.
            move || drop(timeout)
        });
    }

    let onclick = props.on_dismiss.reform(move |_: MouseEvent| id);
    let notification = &props.toast.notification;

    html! {
        <div class={toast_classes(notification.kind)}>
            <p class="text-sm font-medium">{ notification.message.clone() }</p>
            <button {onclick} class="text-sm opacity-60 hover:opacity-100" aria-label="Dismiss">
                { "×" }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_palette() {
        assert!(toast_classes(NotificationKind::Success).contains("bg-green-50"));
        assert!(toast_classes(NotificationKind::Error).contains("text-red-800"));
    }
}
