use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

const DISMISS_AFTER_MS: u32 = 5_000;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub title: AttrValue,
    pub message: AttrValue,
    pub kind: ToastKind,
    pub on_close: Callback<()>,
}

/// Transient toast in the corner of the viewport. Auto-dismisses after a
/// few seconds; none of this survives a reload.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(DISMISS_AFTER_MS, move || on_close.emit(()));
                move || drop(timeout)
            },
            (props.title.clone(), props.message.clone()),
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    let kind_class = match props.kind {
        ToastKind::Success => "toast-success",
        ToastKind::Error => "toast-error",
    };

    html! {
        <div class={classes!("toast", kind_class)} data-testid="toast">
            <div class="toast-body">
                <span class="toast-title">{props.title.to_string()}</span>
                <span class="toast-message">{props.message.to_string()}</span>
            </div>
            <button class="toast-close" onclick={close} data-testid="toast-close">{"×"}</button>
            <style>
                {r#"
                .toast {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    z-index: 100;
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    min-width: 280px;
                    max-width: 380px;
                    padding: 1rem 1.25rem;
                    border-radius: 12px;
                    color: #fff;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.25);
                    animation: toast-in 0.3s ease;
                }

                @keyframes toast-in {
                    from { transform: translateY(1rem); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }

                .toast-success {
                    background: #2C5F7C;
                    border-left: 4px solid #FDB913;
                }

                .toast-error {
                    background: #B3412F;
                    border-left: 4px solid #7C1F12;
                }

                .toast-body {
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                }

                .toast-title {
                    font-weight: 700;
                }

                .toast-message {
                    font-size: 0.9rem;
                    opacity: 0.9;
                }

                .toast-close {
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.2rem;
                    cursor: pointer;
                    line-height: 1;
                    padding: 0;
                }

                @media (max-width: 768px) {
                    .toast {
                        left: 1rem;
                        right: 1rem;
                        bottom: 1rem;
                        min-width: 0;
                        max-width: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
