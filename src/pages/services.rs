use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::{PRICING, SERVICES};
use crate::state::Section;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub on_select: Callback<Section>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let contact_click = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(Section::Contacts))
    };

    html! {
        <div class="services-page">
            <div class="section-card">
                <div class="section-heading">
                    <h2>{"Services"}</h2>
                    <p>{"Exactly what I do. If your task doesn't fit the list, let's talk anyway."}</p>
                </div>

                <div class="services-grid">
                    {
                        SERVICES.iter().map(|service| html! {
                            <div class="service-card" key={service.title}>
                                <div class="service-title">{service.title}</div>
                                <p class="service-desc">{service.desc}</p>
                                <div class="tag-row">
                                    {
                                        service.tags.iter().map(|&tag| html! {
                                            <span class="tag-chip" key={tag}>{tag}</span>
                                        }).collect::<Html>()
                                    }
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <div class="section-card">
                <div class="section-heading">
                    <h2>{"Rough pricing"}</h2>
                    <p>{"These are ballparks. I'll quote an exact price after a short task description."}</p>
                </div>

                <div class="pricing-grid">
                    {
                        PRICING.iter().map(|tier| {
                            let contact_click = contact_click.clone();
                            html! {
                                <div class="pricing-card" key={tier.title}>
                                    <div class="pricing-card-header">
                                        <div class="pricing-title">{tier.title}</div>
                                        <div class="pricing-price">{tier.price}</div>
                                    </div>

                                    <ul class="pricing-items">
                                        {
                                            tier.items.iter().map(|&it| html! {
                                                <li key={it}>
                                                    <span class="bullet-dot"></span>
                                                    <span>{it}</span>
                                                </li>
                                            }).collect::<Html>()
                                        }
                                    </ul>

                                    <div class="pricing-note">{tier.note}</div>

                                    <button class="cta-button primary full-width" onclick={contact_click}>
                                        {"Get in touch"}
                                    </button>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .services-page {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                }

                .service-card {
                    border-radius: 24px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.03);
                    padding: 1.25rem;
                }

                .service-title {
                    font-size: 1.1rem;
                    font-weight: 600;
                    color: #fff;
                }

                .service-desc {
                    margin-top: 0.5rem;
                    font-size: 0.9rem;
                    line-height: 1.6;
                    color: rgba(255, 255, 255, 0.7);
                }

                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.5rem;
                }

                .pricing-card {
                    border-radius: 24px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.03);
                    padding: 1.75rem;
                }

                .pricing-card-header {
                    display: flex;
                    align-items: flex-start;
                    justify-content: space-between;
                    gap: 0.75rem;
                }

                .pricing-title {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #fff;
                }

                .pricing-price {
                    font-size: 0.9rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 16px;
                    background: #fff;
                    color: #0f172a;
                    font-weight: 500;
                    white-space: nowrap;
                }

                .pricing-items {
                    margin-top: 1rem;
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    font-size: 0.9rem;
                    color: rgba(255, 255, 255, 0.7);
                }

                .pricing-items li {
                    display: flex;
                    gap: 0.5rem;
                }

                .pricing-note {
                    margin-top: 1rem;
                    font-size: 0.8rem;
                    color: rgba(255, 255, 255, 0.55);
                }

                .full-width {
                    margin-top: 1.5rem;
                    width: 100%;
                }

                @media (max-width: 968px) {
                    .services-grid {
                        grid-template-columns: 1fr;
                    }

                    .pricing-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
