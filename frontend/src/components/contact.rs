use gloo_net::http::Request;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::components::notification::{Notification, ToastKind};
use crate::config;
use crate::content::{CONTACT_EMAIL, INSTAGRAM_HANDLE, INSTAGRAM_URL};
use crate::state::SubmissionStatus;

#[derive(Serialize, Clone)]
struct ContactPayload {
    name: String,
    email: String,
    message: String,
}

#[derive(Clone, PartialEq)]
struct Toast {
    title: &'static str,
    message: &'static str,
    kind: ToastKind,
}

const TOAST_MISSING_FIELDS: Toast = Toast {
    title: "Campos obrigatorios",
    message: "Por favor, preencha todos os campos.",
    kind: ToastKind::Error,
};

const TOAST_SENT: Toast = Toast {
    title: "Mensagem enviada!",
    message: "Entraremos em contato em breve.",
    kind: ToastKind::Success,
};

const TOAST_FAILED: Toast = Toast {
    title: "Erro ao enviar",
    message: "Por favor, tente novamente mais tarde.",
    kind: ToastKind::Error,
};

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let status = use_state(SubmissionStatus::default);
    let toast = use_state(|| None::<Toast>);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let status = status.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // The button is disabled while pending; this guard covers any
            // other way of firing the form.
            if status.is_pending() {
                return;
            }

            // Presence check only; the server does the strict validation.
            if name.is_empty() || email.is_empty() || message.is_empty() {
                toast.set(Some(TOAST_MISSING_FIELDS));
                return;
            }

            status.set(SubmissionStatus::Pending);

            let payload = ContactPayload {
                name: (*name).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
            };
            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let status = status.clone();
            let toast = toast.clone();
            spawn_local(async move {
                let response = Request::post(&format!("{}/api/contact", config::get_backend_url()))
                    .json(&payload)
                    .unwrap()
                    .send()
                    .await;

                match response {
                    Ok(response) if response.ok() => {
                        name.set(String::new());
                        email.set(String::new());
                        message.set(String::new());
                        status.set(SubmissionStatus::Succeeded);
                        toast.set(Some(TOAST_SENT));
                    }
                    Ok(response) => {
                        gloo_console::error!(format!(
                            "contact submission rejected with status {}",
                            response.status()
                        ));
                        // Keep the fields so the visitor can retry.
                        status.set(SubmissionStatus::Failed);
                        toast.set(Some(TOAST_FAILED));
                    }
                    Err(e) => {
                        gloo_console::error!(format!("contact submission failed: {}", e));
                        status.set(SubmissionStatus::Failed);
                        toast.set(Some(TOAST_FAILED));
                    }
                }
            });
        })
    };

    let on_toast_close = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    html! {
        <section id="contato" class="section contact-section" data-testid="section-contact">
            <div class="section-inner">
                <div class="contact-columns">
                    <div class="contact-info">
                        <h2>{"Entre em Contato Conosco"}</h2>
                        <p>{"Envie uma mensagem ou acompanhe-nos nas nossas redes sociais."}</p>

                        <div class="contact-links">
                            <a
                                href={INSTAGRAM_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="contact-link"
                                data-testid="link-instagram"
                            >
                                <span class="contact-link-icon">{"📷"}</span>
                                <span>{INSTAGRAM_HANDLE}</span>
                            </a>
                            <a
                                href={format!("mailto:{}", CONTACT_EMAIL)}
                                class="contact-link"
                                data-testid="link-email"
                            >
                                <span class="contact-link-icon">{"✉"}</span>
                                <span>{CONTACT_EMAIL}</span>
                            </a>
                        </div>
                    </div>

                    <form class="contact-form" {onsubmit} data-testid="contact-form">
                        <input
                            type="text"
                            placeholder="Insira o seu nome."
                            value={(*name).clone()}
                            oninput={on_name}
                            data-testid="input-name"
                        />
                        <input
                            type="email"
                            placeholder="Insira o seu e-mail."
                            value={(*email).clone()}
                            oninput={on_email}
                            data-testid="input-email"
                        />
                        <textarea
                            placeholder="Insira a sua mensagem."
                            value={(*message).clone()}
                            oninput={on_message}
                            data-testid="input-message"
                        />
                        <div class="contact-form-actions">
                            <button
                                type="submit"
                                disabled={status.is_pending()}
                                data-testid="button-submit-contact"
                            >
                                { if status.is_pending() { "Enviando..." } else { "Enviar" } }
                            </button>
                        </div>
                    </form>
                </div>
            </div>

            if let Some(current) = (*toast).clone() {
                <Notification
                    title={current.title}
                    message={current.message}
                    kind={current.kind}
                    on_close={on_toast_close}
                />
            }

            <style>
                {r#"
                .contact-section {
                    background: var(--trampay-blue-dark);
                }

                .contact-columns {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: start;
                }

                .contact-info {
                    color: #fff;
                }

                .contact-info h2 {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }

                .contact-info > p {
                    color: var(--trampay-blue-light);
                    margin-bottom: 2rem;
                }

                .contact-links {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }

                .contact-link {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    color: #fff;
                    text-decoration: none;
                    font-size: 1.1rem;
                    transition: color 0.3s ease;
                }

                .contact-link:hover {
                    color: var(--trampay-gold);
                }

                .contact-link-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: var(--trampay-blue);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.3rem;
                }

                .contact-form {
                    background: var(--trampay-blue);
                    border-radius: 16px;
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .contact-form input,
                .contact-form textarea {
                    border: none;
                    border-radius: 8px;
                    padding: 1rem;
                    font-size: 1rem;
                    font-family: inherit;
                    background: rgba(255, 255, 255, 0.9);
                    color: #222;
                }

                .contact-form textarea {
                    min-height: 120px;
                    resize: none;
                }

                .contact-form-actions {
                    display: flex;
                    justify-content: flex-end;
                }

                .contact-form button {
                    background: var(--trampay-blue-dark);
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    padding: 0.75rem 2rem;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }

                .contact-form button:hover:not(:disabled) {
                    background: var(--trampay-gold);
                }

                .contact-form button:disabled {
                    opacity: 0.7;
                    cursor: wait;
                }

                @media (max-width: 768px) {
                    .contact-columns {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
