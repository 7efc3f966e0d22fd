use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};

use crate::content::{Media, PORTFOLIO};

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub index: usize,
    pub on_close: Callback<()>,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

/// Modal viewer over the portfolio gallery. While mounted it owns a window
/// keydown listener (Escape / ArrowLeft / ArrowRight); the listener is
/// removed in the effect cleanup, so closing the overlay also stops all
/// keyboard handling.
#[function_component(LightboxOverlay)]
pub fn lightbox_overlay(props: &LightboxProps) -> Html {
    let item = &PORTFOLIO[props.index];

    {
        use_effect_with_deps(
            move |(_, on_close, on_prev, on_next)| {
                let window = web_sys::window().unwrap();

                let on_close = on_close.clone();
                let on_prev = on_prev.clone();
                let on_next = on_next.clone();
                let key_callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    match e.key().as_str() {
                        "Escape" => on_close.emit(()),
                        "ArrowLeft" => on_prev.emit(()),
                        "ArrowRight" => on_next.emit(()),
                        _ => {}
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);

                window
                    .add_event_listener_with_callback(
                        "keydown",
                        key_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "keydown",
                            key_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (
                props.index,
                props.on_close.clone(),
                props.on_prev.clone(),
                props.on_next.clone(),
            ),
        );
    }

    let close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let prev_click = {
        let on_prev = props.on_prev.clone();
        Callback::from(move |_: MouseEvent| on_prev.emit(()))
    };
    let next_click = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    html! {
        <div class="lightbox-overlay" role="dialog" aria-modal="true">
            <button class="lightbox-backdrop" onclick={backdrop_click} aria-label="Close"></button>

            <div class="lightbox-panel">
                <div class="lightbox-topbar">
                    <div class="lightbox-caption">
                        <div class="lightbox-title">{item.title}</div>
                        <div class="lightbox-desc">{item.desc}</div>
                    </div>
                    <div class="lightbox-controls">
                        <button class="lightbox-nav-button" onclick={prev_click} aria-label="Previous">{"←"}</button>
                        <button class="lightbox-nav-button" onclick={next_click} aria-label="Next">{"→"}</button>
                        <button class="lightbox-close-button" onclick={close_click} aria-label="Close">{"Close"}</button>
                    </div>
                </div>

                <div class="lightbox-media">
                    {
                        match item.media {
                            Media::Image(src) => html! {
                                <img src={src} alt={item.title} />
                            },
                            Media::Video { src, poster } => html! {
                                <video src={src} poster={poster} controls={true} />
                            },
                        }
                    }
                </div>
            </div>

            <style>
                {r#"
                .lightbox-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 60;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }

                .lightbox-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.7);
                    border: none;
                    cursor: pointer;
                }

                .lightbox-panel {
                    position: relative;
                    width: 100%;
                    max-width: 64rem;
                    border-radius: 24px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: #070F23;
                    box-shadow: 0 30px 120px rgba(0, 0, 0, 0.65);
                    overflow: hidden;
                    animation: lightboxIn 0.2s ease-out;
                }

                @keyframes lightboxIn {
                    from { transform: scale(0.98) translateY(10px); opacity: 0; }
                    to { transform: scale(1) translateY(0); opacity: 1; }
                }

                .lightbox-topbar {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 0.75rem;
                    padding: 1rem 1.25rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.03);
                }

                .lightbox-caption {
                    min-width: 0;
                }

                .lightbox-title {
                    font-weight: 600;
                    color: #fff;
                    white-space: nowrap;
                    overflow: hidden;
                    text-overflow: ellipsis;
                }

                .lightbox-desc {
                    font-size: 0.9rem;
                    color: rgba(255, 255, 255, 0.65);
                    white-space: nowrap;
                    overflow: hidden;
                    text-overflow: ellipsis;
                }

                .lightbox-controls {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .lightbox-nav-button {
                    padding: 0.5rem 0.75rem;
                    border-radius: 16px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: transparent;
                    color: rgba(255, 255, 255, 0.85);
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .lightbox-nav-button:hover {
                    background: rgba(255, 255, 255, 0.05);
                }

                .lightbox-close-button {
                    padding: 0.5rem 0.75rem;
                    border-radius: 16px;
                    border: none;
                    background: #fff;
                    color: #0f172a;
                    font-weight: 500;
                    cursor: pointer;
                    transition: opacity 0.2s ease;
                }

                .lightbox-close-button:hover {
                    opacity: 0.9;
                }

                .lightbox-media {
                    aspect-ratio: 16 / 9;
                    background: rgba(0, 0, 0, 0.3);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .lightbox-media img,
                .lightbox-media video {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                }
                "#}
            </style>
        </div>
    }
}
