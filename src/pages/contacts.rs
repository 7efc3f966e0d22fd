use yew::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use gloo_timers::future::TimeoutFuture;
use web_sys::MouseEvent;
use log::info;

use crate::content::CONTACTS;
use crate::state::CopyFeedback;

/// Contact cards plus the one fallible operation on the site: copying the
/// Discord handle. A refused clipboard write degrades to a toast that still
/// shows the handle, so the user can copy it by hand.
#[function_component(Contacts)]
pub fn contacts() -> Html {
    let copy_feedback = use_state(|| None::<CopyFeedback>);

    let on_copy_handle = {
        let copy_feedback = copy_feedback.clone();
        Callback::from(move |_: MouseEvent| {
            let copy_feedback = copy_feedback.clone();
            if let Some(window) = web_sys::window() {
                let clipboard = window.navigator().clipboard();
                spawn_local(async move {
                    let feedback =
                        match JsFuture::from(clipboard.write_text(CONTACTS.discord_user)).await {
                            Ok(_) => {
                                info!("Copied discord handle to clipboard");
                                CopyFeedback::Copied(CONTACTS.discord_user.to_string())
                            }
                            Err(_) => CopyFeedback::Manual(CONTACTS.discord_user.to_string()),
                        };
                    copy_feedback.set(Some(feedback));
                    TimeoutFuture::new(2_500).await;
                    copy_feedback.set(None);
                });
            } else {
                copy_feedback.set(Some(CopyFeedback::Manual(
                    CONTACTS.discord_user.to_string(),
                )));
            }
        })
    };

    html! {
        <div class="section-card contacts-page">
            <div class="section-heading">
                <h2>{"Contacts"}</h2>
                <p>{"Telegram is the fastest way to reach me. Discord and email work too."}</p>
            </div>

            <div class="contacts-grid">
                <div class="contact-card">
                    <div class="contact-label">{"Telegram"}</div>
                    <a class="contact-link" href={CONTACTS.telegram} target="_blank" rel="noreferrer">
                        {"t.me/monoalr"}
                    </a>
                    <div class="contact-hint">
                        {"Best to include up front: what you need, the deadline, examples/references."}
                    </div>
                </div>

                <div class="contact-card">
                    <div class="contact-label">{"Discord"}</div>
                    <div class="contact-value">{CONTACTS.discord_user}</div>

                    <div class="contact-actions">
                        <button class="cta-button" onclick={on_copy_handle}>
                            {"Copy handle"}
                        </button>
                        <a class="cta-button primary" href={CONTACTS.discord_server} target="_blank" rel="noreferrer">
                            {"Open server"}
                        </a>
                    </div>
                </div>
            </div>

            <div class="contact-card email-card">
                <div class="contact-label">{"Email"}</div>
                <a class="contact-link" href={format!("mailto:{}", CONTACTS.email)}>
                    {CONTACTS.email}
                </a>
            </div>

            {
                if let Some(feedback) = &*copy_feedback {
                    html! {
                        <div class={classes!("copy-toast", feedback.is_error().then(|| "error"))}>
                            {feedback.message()}
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .contacts-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                }

                .contact-card {
                    border-radius: 24px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.03);
                    padding: 1.5rem;
                }

                .email-card {
                    margin-top: 1rem;
                }

                .contact-label {
                    font-size: 0.85rem;
                    color: rgba(255, 255, 255, 0.55);
                }

                .contact-value {
                    margin-top: 0.25rem;
                    font-size: 1.1rem;
                    font-weight: 600;
                    color: #fff;
                }

                .contact-link {
                    display: inline-block;
                    margin-top: 0.25rem;
                    font-size: 1.1rem;
                    font-weight: 600;
                    color: #fff;
                    text-decoration: underline;
                    text-underline-offset: 4px;
                }

                .contact-link:hover {
                    opacity: 0.9;
                }

                .contact-hint {
                    margin-top: 0.75rem;
                    font-size: 0.9rem;
                    color: rgba(255, 255, 255, 0.7);
                }

                .contact-actions {
                    margin-top: 1rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }

                .copy-toast {
                    position: fixed;
                    bottom: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 70;
                    padding: 0.75rem 1.25rem;
                    border-radius: 16px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(7, 15, 35, 0.95);
                    color: #fff;
                    font-size: 0.9rem;
                    box-shadow: 0 16px 48px rgba(0, 0, 0, 0.45);
                    animation: toastIn 0.2s ease-out;
                }

                .copy-toast.error {
                    border-color: rgba(255, 120, 120, 0.4);
                }

                @keyframes toastIn {
                    from { transform: translate(-50%, 10px); opacity: 0; }
                    to { transform: translate(-50%, 0); opacity: 1; }
                }

                @media (max-width: 768px) {
                    .contacts-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
