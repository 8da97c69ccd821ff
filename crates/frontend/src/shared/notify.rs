//! User-visible notifications.

use leptos::prelude::*;
use thaw::*;

/// Sink for success/failure messages shown to the operator.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Toasts rendered by the `ToasterProvider` mounted in `App`.
#[derive(Clone)]
pub struct ToastNotifier {
    toaster: ToasterInjection,
}

impl ToastNotifier {
    pub fn from_context() -> Self {
        Self {
            toaster: ToasterInjection::expect_context(),
        }
    }

    fn dispatch(&self, message: &str, intent: ToastIntent) {
        let message = message.to_string();
        self.toaster.dispatch_toast(
            move || {
                view! {
                    <Toast>
                        <ToastTitle>{message}</ToastTitle>
                    </Toast>
                }
            },
            ToastOptions::default().with_intent(intent),
        );
    }
}

impl Notifier for ToastNotifier {
    fn success(&self, message: &str) {
        self.dispatch(message, ToastIntent::Success);
    }

    fn error(&self, message: &str) {
        self.dispatch(message, ToastIntent::Error);
    }
}
