use yew::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use chrono::{Datelike, Utc};

mod config;
mod content;
mod state;
mod pages {
    pub mod home;
    pub mod services;
    pub mod portfolio;
    pub mod game;
    pub mod contacts;
}
mod components {
    pub mod lightbox;
}

use pages::{
    home::Home,
    services::Services,
    portfolio::Portfolio,
    game::Game,
    contacts::Contacts,
};
use components::lightbox::LightboxOverlay;
use content::{CONTACTS, PORTFOLIO};
use state::{Lightbox, Section};

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active: Section,
    pub on_select: Callback<Section>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <aside class="sidebar">
            <div class="sidebar-heading">
                <div class="sidebar-kicker">{"Menu"}</div>
                <div class="sidebar-sub">{"Site sections"}</div>
            </div>

            <div class="sidebar-menu">
                {
                    Section::ALL.iter().map(|section| {
                        let section = *section;
                        let on_select = props.on_select.clone();
                        let onclick = Callback::from(move |_: MouseEvent| on_select.emit(section));
                        html! {
                            <button
                                key={section.label()}
                                class={classes!("nav-item", (props.active == section).then(|| "active"))}
                                {onclick}
                            >
                                <span class="nav-item-marker"></span>
                                <span class="nav-item-label">{section.label()}</span>
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>

            <div class="sidebar-links">
                <div class="sidebar-divider"></div>
                <div class="sidebar-kicker">{"Quick links"}</div>
                <a class="quick-link" href={CONTACTS.telegram} target="_blank" rel="noreferrer">
                    {"Telegram"}
                </a>
                <a class="quick-link" href={CONTACTS.discord_server} target="_blank" rel="noreferrer">
                    {"Discord server"}
                </a>
            </div>
        </aside>
    }
}

#[function_component]
fn App() -> Html {
    let section = use_state(|| Section::Home);
    let lightbox = use_state(|| Lightbox::Closed);

    // Back to the top whenever another section is picked
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            *section,
        );
    }

    let select_section = {
        let section = section.clone();
        Callback::from(move |next: Section| {
            info!("Showing {} section", next.label());
            section.set(next);
        })
    };

    let open_lightbox = {
        let lightbox = lightbox.clone();
        Callback::from(move |idx: usize| lightbox.set(Lightbox::open(idx)))
    };
    let close_lightbox = {
        let lightbox = lightbox.clone();
        Callback::from(move |_| lightbox.set(Lightbox::Closed))
    };
    let prev_lightbox = {
        let lightbox = lightbox.clone();
        Callback::from(move |_| lightbox.set((*lightbox).prev(PORTFOLIO.len())))
    };
    let next_lightbox = {
        let lightbox = lightbox.clone();
        Callback::from(move |_| lightbox.set((*lightbox).next(PORTFOLIO.len())))
    };

    let contact_click = {
        let select_section = select_section.clone();
        Callback::from(move |_: MouseEvent| select_section.emit(Section::Contacts))
    };

    let active_block = match *section {
        Section::Home => html! { <Home on_select={select_section.clone()} /> },
        Section::Services => html! { <Services on_select={select_section.clone()} /> },
        Section::Portfolio => html! { <Portfolio on_open={open_lightbox} /> },
        Section::Game => html! { <Game on_select={select_section.clone()} /> },
        Section::Contacts => html! { <Contacts /> },
    };

    html! {
        <main class="app-shell">
            <div class="bg-base"></div>
            <div class="bg-glow"></div>
            <div class="bg-grid"></div>
            <div class="bg-noise"></div>

            <div class="page-frame">
                <header class="top-bar">
                    <div class="top-bar-text">
                        <div class="top-bar-kicker">{"monoalr • freelance"}</div>
                        <div class="top-bar-title">{"Mono — game development / 3D / animation"}</div>
                        <div class="top-bar-section">{section.label()}</div>
                    </div>
                    <button class="cta-button primary" onclick={contact_click}>
                        {"Get in touch"}
                    </button>
                </header>

                <div class="page-grid">
                    <Sidebar active={*section} on_select={select_section.clone()} />

                    <section class="page-content">
                        { active_block }
                        <footer class="page-footer">
                            { format!("© {} monoalr", Utc::now().year()) }
                        </footer>
                    </section>
                </div>
            </div>

            {
                if let Some(index) = lightbox.index() {
                    html! {
                        <LightboxOverlay
                            {index}
                            on_close={close_lightbox}
                            on_prev={prev_lightbox}
                            on_next={next_lightbox}
                        />
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                * {
                    box-sizing: border-box;
                }

                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #fff;
                }

                .app-shell {
                    min-height: 100vh;
                }

                .bg-base {
                    position: fixed;
                    inset: 0;
                    z-index: -10;
                    background: #050B1A;
                }

                .bg-glow {
                    position: fixed;
                    inset: 0;
                    z-index: -10;
                    background:
                        radial-gradient(900px 600px at 18% 18%, rgba(18, 74, 140, 0.35), transparent 60%),
                        radial-gradient(1000px 700px at 80% 25%, rgba(9, 44, 96, 0.35), transparent 62%),
                        radial-gradient(1100px 800px at 50% 95%, rgba(6, 26, 60, 0.55), transparent 65%);
                    animation: glowPulse 10s ease-in-out infinite;
                }

                @keyframes glowPulse {
                    0% { opacity: 0.55; }
                    50% { opacity: 0.75; }
                    100% { opacity: 0.55; }
                }

                .bg-grid {
                    position: fixed;
                    inset: 0;
                    z-index: -10;
                    opacity: 0.1;
                    background-image:
                        linear-gradient(to right, rgba(255, 255, 255, 0.06) 1px, transparent 1px),
                        linear-gradient(to bottom, rgba(255, 255, 255, 0.06) 1px, transparent 1px);
                    background-size: 64px 64px;
                    mask-image: radial-gradient(700px 500px at 50% 30%, black, transparent 70%);
                }

                .bg-noise {
                    position: fixed;
                    inset: 0;
                    z-index: -10;
                    opacity: 0.06;
                    mix-blend-mode: overlay;
                    pointer-events: none;
                    background-image: url("data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='120' height='120'%3E%3Cfilter id='n'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='.8' numOctaves='3' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='120' height='120' filter='url(%23n)' opacity='.4'/%3E%3C/svg%3E");
                }

                .page-frame {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1.5rem 1rem;
                }

                .top-bar {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    border-radius: 24px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.03);
                    padding: 1rem 1.25rem;
                }

                .top-bar-text {
                    min-width: 0;
                }

                .top-bar-kicker {
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.55);
                }

                .top-bar-title {
                    font-size: 1.15rem;
                    font-weight: 600;
                    white-space: nowrap;
                    overflow: hidden;
                    text-overflow: ellipsis;
                }

                .top-bar-section {
                    margin-top: 0.25rem;
                    font-size: 0.9rem;
                    color: rgba(255, 255, 255, 0.55);
                }

                .page-grid {
                    margin-top: 1.5rem;
                    display: grid;
                    grid-template-columns: 280px 1fr;
                    gap: 1.5rem;
                }

                .sidebar {
                    border-radius: 24px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.03);
                    padding: 1rem;
                    height: fit-content;
                    position: sticky;
                    top: 1.5rem;
                }

                .sidebar-heading {
                    padding: 0.5rem 0.75rem;
                }

                .sidebar-kicker {
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.55);
                }

                .sidebar-sub {
                    margin-top: 0.25rem;
                    font-size: 0.9rem;
                    color: rgba(255, 255, 255, 0.75);
                }

                .sidebar-menu {
                    margin-top: 0.75rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .nav-item {
                    position: relative;
                    width: 100%;
                    text-align: left;
                    padding: 0.75rem 1rem;
                    border-radius: 16px;
                    border: 1px solid transparent;
                    background: transparent;
                    color: rgba(255, 255, 255, 0.75);
                    font-size: 0.9rem;
                    font-weight: 500;
                    cursor: pointer;
                    overflow: hidden;
                    transition: background 0.2s ease, border-color 0.2s ease;
                }

                .nav-item:hover {
                    background: rgba(255, 255, 255, 0.05);
                    border-color: rgba(255, 255, 255, 0.1);
                }

                .nav-item.active {
                    background: rgba(255, 255, 255, 0.1);
                    border-color: rgba(255, 255, 255, 0.15);
                    color: #fff;
                }

                .nav-item-marker {
                    position: absolute;
                    left: 0;
                    top: 0.5rem;
                    bottom: 0.5rem;
                    width: 4px;
                    border-radius: 0 4px 4px 0;
                    background: transparent;
                    transition: background 0.2s ease;
                }

                .nav-item.active .nav-item-marker {
                    background: rgba(255, 255, 255, 0.7);
                }

                .sidebar-links {
                    margin-top: 1.25rem;
                    padding: 0 0.75rem 0.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .sidebar-divider {
                    height: 1px;
                    background: rgba(255, 255, 255, 0.1);
                    margin-bottom: 0.75rem;
                }

                .quick-link {
                    padding: 0.5rem 0.75rem;
                    border-radius: 16px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.03);
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.9rem;
                    text-decoration: none;
                    transition: background 0.2s ease;
                }

                .quick-link:hover {
                    background: rgba(255, 255, 255, 0.06);
                }

                .page-content {
                    min-width: 0;
                }

                .page-footer {
                    margin-top: 2.5rem;
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.35);
                }

                .section-card {
                    border-radius: 24px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.04);
                    padding: 1.5rem;
                    box-shadow: 0 20px 80px rgba(0, 0, 0, 0.35);
                    animation: sectionIn 0.32s ease-out;
                }

                @keyframes sectionIn {
                    from { transform: translateY(12px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }

                .section-heading {
                    margin-bottom: 1.5rem;
                }

                .section-heading h2 {
                    margin: 0;
                    font-size: 1.75rem;
                    font-weight: 600;
                    letter-spacing: -0.02em;
                }

                .section-heading p {
                    margin: 0.5rem 0 0;
                    max-width: 48rem;
                    color: rgba(255, 255, 255, 0.65);
                }

                .cta-button {
                    display: inline-block;
                    padding: 0.75rem 1.25rem;
                    border-radius: 16px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: transparent;
                    color: rgba(255, 255, 255, 0.85);
                    font-size: 0.9rem;
                    font-weight: 500;
                    text-decoration: none;
                    cursor: pointer;
                    transition: background 0.2s ease, opacity 0.2s ease;
                }

                .cta-button:hover {
                    background: rgba(255, 255, 255, 0.05);
                }

                .cta-button.primary {
                    border: none;
                    background: #fff;
                    color: #0f172a;
                }

                .cta-button.primary:hover {
                    background: #fff;
                    opacity: 0.9;
                }

                .tag-row {
                    margin-top: 1rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }

                .tag-chip {
                    font-size: 0.75rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 16px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.04);
                    color: rgba(255, 255, 255, 0.7);
                }

                .bullet-dot {
                    flex-shrink: 0;
                    margin-top: 6px;
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.6);
                }

                @media (max-width: 1024px) {
                    .page-grid {
                        grid-template-columns: 1fr;
                    }

                    .sidebar {
                        position: static;
                    }
                }
                "#}
            </style>
        </main>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
