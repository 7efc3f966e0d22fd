use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config;
use crate::state::Section;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_select: Callback<Section>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let goto = |section: Section| {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(section))
    };

    let highlights = [
        (
            "Gamedev / Roblox",
            "Systems, combat, abilities, UI logic, states and synchronization.",
        ),
        (
            "3D",
            "Assets and characters, clean import and in-game optimization.",
        ),
        ("Animation", "Combat sets, locomotion, rig/export."),
    ];

    html! {
        <div class="section-card home-page">
            <div class="section-heading">
                <h2>{"Home"}</h2>
                <p>{"I build game mechanics, 3D and animation. On the side I'm developing my own game (we'll name it later)."}</p>
            </div>

            <div class="home-highlights">
                {
                    highlights.iter().map(|&(label, text)| html! {
                        <div class="home-highlight" key={label}>
                            <div class="highlight-label">{label}</div>
                            <div class="highlight-text">{text}</div>
                        </div>
                    }).collect::<Html>()
                }
            </div>

            <div class="home-cta-row">
                <button class="cta-button primary" onclick={goto(Section::Services)}>
                    {"Services & Pricing"}
                </button>
                <button class="cta-button" onclick={goto(Section::Portfolio)}>
                    {"Portfolio"}
                </button>
                <button class="cta-button" onclick={goto(Section::Game)}>
                    {"The Game"}
                </button>
            </div>

            <div class="home-hero">
                <img src={config::hero_image()} alt="Hero" />
                <div class="hero-shade"></div>
                <div class="hero-sheen"></div>
            </div>

            <style>
                {r#"
                .home-highlights {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                }

                .home-highlight {
                    border-radius: 24px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.03);
                    padding: 1.25rem;
                }

                .highlight-label {
                    font-size: 0.85rem;
                    color: rgba(255, 255, 255, 0.55);
                }

                .highlight-text {
                    margin-top: 0.5rem;
                    font-size: 0.9rem;
                    line-height: 1.6;
                    color: rgba(255, 255, 255, 0.8);
                }

                .home-cta-row {
                    margin-top: 1.5rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }

                .home-hero {
                    position: relative;
                    margin-top: 1.5rem;
                    border-radius: 24px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.03);
                    overflow: hidden;
                    aspect-ratio: 21 / 9;
                }

                .home-hero img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .hero-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(5, 11, 26, 0.75), transparent 50%);
                }

                .hero-sheen {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to right, transparent, rgba(255, 255, 255, 0.05), transparent);
                    opacity: 0.4;
                }

                @media (max-width: 768px) {
                    .home-highlights {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
