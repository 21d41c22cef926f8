use gloo_timers::callback::Interval;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{FEATURE_SLIDES, TESTIMONIALS};
use crate::state::{CarouselAction, CarouselState};

const FEATURE_AUTOPLAY_MS: u32 = 5_000;
const TESTIMONIAL_AUTOPLAY_MS: u32 = 6_000;
const TESTIMONIAL_WINDOW: usize = 3;

// Autoplay advances through the same reducer the arrows and dots use;
// manual navigation neither resets nor cancels the timer. Dropping the
// interval in the effect destructor stops it on unmount.
#[hook]
fn use_autoplay(carousel: UseReducerHandle<CarouselState>, period_ms: u32) {
    use_effect_with_deps(
        move |_| {
            let interval = Interval::new(period_ms, move || {
                carousel.dispatch(CarouselAction::Next);
            });
            move || drop(interval)
        },
        (),
    );
}

#[hook]
fn use_carousel(len: usize, period_ms: u32) -> UseReducerHandle<CarouselState> {
    let carousel = use_reducer(|| CarouselState::new(len));
    use_autoplay(carousel.clone(), period_ms);
    carousel
}

fn nav_callback(
    carousel: &UseReducerHandle<CarouselState>,
    action: fn() -> CarouselAction,
) -> Callback<MouseEvent> {
    let carousel = carousel.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        carousel.dispatch(action());
    })
}

fn dots(carousel: &UseReducerHandle<CarouselState>, testid_prefix: &'static str) -> Html {
    html! {
        <div class="carousel-dots">
            { for (0..carousel.len).map(|i| {
                let onclick = {
                    let carousel = carousel.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        carousel.dispatch(CarouselAction::GoTo(i));
                    })
                };
                html! {
                    <button
                        class={classes!("carousel-dot", (i == carousel.index).then(|| "active"))}
                        {onclick}
                        data-testid={format!("{}-dot-{}", testid_prefix, i)}
                    />
                }
            })}
        </div>
    }
}

#[function_component(FeatureCarousel)]
pub fn feature_carousel() -> Html {
    let carousel = use_carousel(FEATURE_SLIDES.len(), FEATURE_AUTOPLAY_MS);

    let on_prev = nav_callback(&carousel, || CarouselAction::Previous);
    let on_next = nav_callback(&carousel, || CarouselAction::Next);

    html! {
        <section class="section app-carousel-section" data-testid="section-app-carousel">
            <div class="section-inner narrow">
                <h2 class="section-title">{"Conheca as funcionalidades"}</h2>

                <div class="carousel">
                    <button class="carousel-arrow prev" onclick={on_prev} data-testid="app-carousel-prev">{"‹"}</button>

                    <div class="carousel-viewport">
                        <div
                            class="carousel-track"
                            style={format!("transform: translateX(-{}%);", carousel.index * 100)}
                        >
                            { for FEATURE_SLIDES.iter().map(|slide| html! {
                                <div class="carousel-slide">
                                    <div class="feature-card">
                                        <div class="feature-icon">{slide.icon}</div>
                                        <h3>{slide.title}</h3>
                                        <p>{slide.description}</p>
                                    </div>
                                </div>
                            })}
                        </div>
                    </div>

                    <button class="carousel-arrow next" onclick={on_next} data-testid="app-carousel-next">{"›"}</button>
                </div>

                { dots(&carousel, "app-carousel") }
            </div>
        </section>
    }
}

#[function_component(TestimonialsCarousel)]
pub fn testimonials_carousel() -> Html {
    let carousel = use_carousel(TESTIMONIALS.len(), TESTIMONIAL_AUTOPLAY_MS);

    let on_prev = nav_callback(&carousel, || CarouselAction::Previous);
    let on_next = nav_callback(&carousel, || CarouselAction::Next);

    html! {
        <section id="avaliacoes" class="section testimonials-section" data-testid="section-testimonials">
            <div class="section-inner">
                <h2 class="section-title italic">
                    <span class="gold">{"Avaliacoes"}</span>
                    <span class="blue-dark">{" dos nossos usuarios"}</span>
                </h2>

                <div class="carousel">
                    <button class="carousel-arrow prev" onclick={on_prev} data-testid="carousel-prev">{"‹"}</button>

                    <div class="testimonial-grid">
                        { for carousel.window(TESTIMONIAL_WINDOW).into_iter().enumerate().map(|(position, index)| {
                            let testimonial = &TESTIMONIALS[index];
                            html! {
                                <div class="testimonial-card" data-testid={format!("testimonial-card-{}", position)}>
                                    <div class="testimonial-quote">{"\u{201c}"}</div>
                                    <h3>{testimonial.title}</h3>
                                    <p class="testimonial-text">{testimonial.text}</p>
                                    <div class="testimonial-stars">{"★".repeat(testimonial.rating)}</div>
                                    <span class="testimonial-name">{testimonial.name}</span>
                                </div>
                            }
                        })}
                    </div>

                    <button class="carousel-arrow next" onclick={on_next} data-testid="carousel-next">{"›"}</button>
                </div>

                { dots(&carousel, "carousel") }
            </div>
        </section>
    }
}
