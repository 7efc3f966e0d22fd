use yew::prelude::*;
use web_sys::MouseEvent;

use crate::state::Section;

#[derive(Properties, PartialEq)]
pub struct GameProps {
    pub on_select: Callback<Section>,
}

#[function_component(Game)]
pub fn game(props: &GameProps) -> Html {
    let goto = |section: Section| {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(section))
    };

    let facts = [
        ("Status", "In active development"),
        ("Genre", "To be decided"),
        ("Platform", "To be decided"),
    ];

    let in_progress = [
        "Gameplay and mechanics prototype",
        "First assets/animations",
        "Controls and game feel",
        "Content planning",
    ];

    let next_up = [
        "Content and progression",
        "UI and polish",
        "Optimization/stability",
        "Public updates",
    ];

    html! {
        <div class="section-card game-page">
            <div class="section-heading">
                <h2>{"Game in development"}</h2>
                <p>{"We'll name it later. Progress, features and updates will land here."}</p>
            </div>

            <div class="game-facts">
                {
                    facts.iter().map(|&(label, value)| html! {
                        <div class="game-fact" key={label}>
                            <div class="fact-label">{label}</div>
                            <div class="fact-value">{value}</div>
                        </div>
                    }).collect::<Html>()
                }
            </div>

            <div class="game-columns">
                <div class="game-column">
                    <div class="column-title">{"What I'm on now"}</div>
                    <ul class="column-items">
                        {
                            in_progress.iter().map(|&it| html! {
                                <li key={it}>
                                    <span class="bullet-dot"></span>
                                    <span>{it}</span>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>

                <div class="game-column">
                    <div class="column-title">{"What's next"}</div>
                    <ul class="column-items">
                        {
                            next_up.iter().map(|&it| html! {
                                <li key={it}>
                                    <span class="bullet-dot"></span>
                                    <span>{it}</span>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>
            </div>

            <div class="game-cta-row">
                <button class="cta-button" onclick={goto(Section::Portfolio)}>
                    {"Portfolio"}
                </button>
                <button class="cta-button primary" onclick={goto(Section::Contacts)}>
                    {"Get in touch"}
                </button>
            </div>

            <style>
                {r#"
                .game-facts {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                }

                .game-fact {
                    border-radius: 24px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.03);
                    padding: 1.25rem;
                }

                .fact-label {
                    font-size: 0.85rem;
                    color: rgba(255, 255, 255, 0.55);
                }

                .fact-value {
                    margin-top: 0.25rem;
                    font-size: 1.1rem;
                    font-weight: 600;
                    color: #fff;
                }

                .game-columns {
                    margin-top: 1.5rem;
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                }

                .game-column {
                    border-radius: 24px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.03);
                    padding: 1.5rem;
                }

                .column-title {
                    font-size: 1.1rem;
                    font-weight: 600;
                    color: #fff;
                }

                .column-items {
                    margin-top: 0.75rem;
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    font-size: 0.9rem;
                    color: rgba(255, 255, 255, 0.7);
                }

                .column-items li {
                    display: flex;
                    gap: 0.5rem;
                }

                .game-cta-row {
                    margin-top: 1.5rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }

                @media (max-width: 968px) {
                    .game-facts {
                        grid-template-columns: 1fr;
                    }

                    .game-columns {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
