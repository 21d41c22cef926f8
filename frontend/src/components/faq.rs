use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::FAQS;
use crate::state::AccordionState;

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    // One accordion state for the whole list keeps at most one entry open.
    let accordion = use_state(AccordionState::default);

    html! {
        <section id="duvidas" class="section faq-section" data-testid="section-faq">
            <div class="section-inner">
                <h2 class="section-title light">{"Duvidas Frequentes"}</h2>

                <div class="faq-grid">
                    { for FAQS.iter().enumerate().map(|(i, faq)| {
                        let open = accordion.is_open(i);
                        let toggle = {
                            let accordion = accordion.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                accordion.set(accordion.toggled(i));
                            })
                        };
                        html! {
                            <div
                                class={classes!("faq-item", open.then(|| "open"))}
                                data-testid={format!("faq-item-{}", i)}
                            >
                                <button
                                    class="faq-question"
                                    onclick={toggle}
                                    data-testid={format!("faq-toggle-{}", i)}
                                >
                                    <span class="question-text">{faq.question}</span>
                                    <span class="toggle-icon">{ if open { "−" } else { "+" } }</span>
                                </button>
                                if open {
                                    <div class="faq-answer">
                                        <p>{faq.answer}</p>
                                    </div>
                                }
                            </div>
                        }
                    })}
                </div>
            </div>

            <style>
                {r#"
                .faq-section {
                    background: var(--trampay-blue-dark);
                }

                .faq-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                    align-items: start;
                }

                .faq-item {
                    background: var(--trampay-blue-light);
                    border-radius: 12px;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }

                .faq-item.open {
                    background: #fff;
                }

                .faq-question {
                    width: 100%;
                    padding: 1rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    text-align: left;
                    font-size: 1rem;
                    font-weight: 600;
                    color: var(--trampay-blue-dark);
                    gap: 1rem;
                }

                .toggle-icon {
                    flex-shrink: 0;
                    font-size: 1.2rem;
                    color: var(--trampay-gold);
                }

                .faq-answer {
                    padding: 0 1rem 1rem;
                    animation: fade-in 0.3s ease;
                }

                .faq-answer p {
                    color: #555;
                    line-height: 1.6;
                }

                @media (max-width: 768px) {
                    .faq-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
