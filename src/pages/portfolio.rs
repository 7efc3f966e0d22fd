use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::PORTFOLIO;

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    /// Emits the clicked card's index so the app can open the lightbox on it.
    pub on_open: Callback<usize>,
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    html! {
        <div class="section-card portfolio-page">
            <div class="section-heading">
                <h2>{"Portfolio"}</h2>
                <p>{"Click a card to see the piece up close."}</p>
            </div>

            <div class="portfolio-grid">
                {
                    PORTFOLIO.iter().enumerate().map(|(idx, item)| {
                        let on_open = props.on_open.clone();
                        let open_click = Callback::from(move |_: MouseEvent| on_open.emit(idx));
                        html! {
                            <button class="portfolio-card" key={item.title} onclick={open_click}>
                                <div class="portfolio-title">{item.title}</div>
                                <p class="portfolio-desc">{item.desc}</p>

                                <div class="portfolio-thumb">
                                    <img src={item.media.thumbnail()} alt={item.title} />
                                    <div class="thumb-shade"></div>
                                </div>

                                {
                                    if item.tags.is_empty() {
                                        html! {}
                                    } else {
                                        html! {
                                            <div class="tag-row">
                                                {
                                                    item.tags.iter().map(|&tag| html! {
                                                        <span class="tag-chip" key={tag}>{tag}</span>
                                                    }).collect::<Html>()
                                                }
                                            </div>
                                        }
                                    }
                                }
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>

            <style>
                {r#"
                .portfolio-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                }

                .portfolio-card {
                    text-align: left;
                    border-radius: 24px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.03);
                    padding: 1.25rem;
                    overflow: hidden;
                    cursor: pointer;
                    color: inherit;
                    font: inherit;
                    transition: background 0.2s ease;
                }

                .portfolio-card:hover {
                    background: rgba(255, 255, 255, 0.05);
                }

                .portfolio-title {
                    font-size: 1.1rem;
                    font-weight: 600;
                    color: #fff;
                }

                .portfolio-desc {
                    margin-top: 0.5rem;
                    font-size: 0.9rem;
                    line-height: 1.6;
                    color: rgba(255, 255, 255, 0.7);
                }

                .portfolio-thumb {
                    position: relative;
                    margin-top: 1rem;
                    border-radius: 16px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: #06102a;
                    overflow: hidden;
                    aspect-ratio: 16 / 9;
                }

                .portfolio-thumb img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .thumb-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.35), transparent 50%);
                }

                .portfolio-card .tag-row {
                    margin-top: 1rem;
                }

                @media (max-width: 1280px) {
                    .portfolio-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .portfolio-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
