use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::carousel::{FeatureCarousel, TestimonialsCarousel};
use crate::components::contact::ContactSection;
use crate::components::faq::FaqSection;
use crate::content::{
    ABOUT_CARDS, CONTACT_EMAIL, DIFFERENTIALS, DOWNLOAD_URL, HISTORY_PARAGRAPHS, INSTAGRAM_HANDLE,
    INSTAGRAM_URL, NAV_LINKS, PLANS, RESEARCH_CARDS,
};

fn scroll_to_section(id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(id) {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

// Adds the `visible` class to every `.animate-on-scroll` element whose top
// edge has entered the viewport. Classes are only ever added, so sections
// stay revealed once seen.
fn reveal_visible_sections(document: &web_sys::Document, viewport_height: f64) {
    if let Ok(nodes) = document.query_selector_all(".animate-on-scroll") {
        for i in 0..nodes.length() {
            if let Some(element) = nodes
                .item(i)
                .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
            {
                let rect = element.get_bounding_client_rect();
                if rect.top() < viewport_height - 50.0 {
                    let _ = element.class_list().add_1("visible");
                }
            }
        }
    }
}

#[function_component(Header)]
fn header() -> Html {
    let is_scrolled = use_state(|| false);
    let menu_open = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 50);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_button = |id: &'static str, label: &'static str, testid_prefix: &str| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(id);
            menu_open.set(false);
        });
        html! {
            <button class="nav-link" {onclick} data-testid={format!("{}-{}", testid_prefix, id)}>
                {label}
            </button>
        }
    };

    let logo_click = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("inicio");
    });

    html! {
        <header
            class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}
            data-testid="header"
        >
            <div class="header-content">
                <div class="logo" onclick={logo_click} data-testid="logo">
                    <span class="logo-mark">{"T"}</span>
                    <span class="logo-name">{"Trampay"}</span>
                </div>

                <nav class="header-nav">
                    { for NAV_LINKS.iter().map(|link| nav_button(link.id, link.label, "nav")) }
                </nav>

                <a
                    href={DOWNLOAD_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="header-download"
                    data-testid="link-download-header"
                >
                    <button class="download-button">{"Baixe o app ›"}</button>
                </a>

                <button class="burger-menu" onclick={toggle_menu} data-testid="mobile-menu-toggle">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            if *menu_open {
                <div class="mobile-menu">
                    { for NAV_LINKS.iter().map(|link| nav_button(link.id, link.label, "mobile-nav")) }
                    <a href={DOWNLOAD_URL} target="_blank" rel="noopener noreferrer">
                        <button class="download-button wide">{"Baixe o app"}</button>
                    </a>
                </div>
            }
        </header>
    }
}

#[function_component(HeroSection)]
fn hero_section() -> Html {
    html! {
        <section id="inicio" class="hero-section" data-testid="section-hero">
            <div class="section-inner hero-grid">
                <div class="hero-copy">
                    <h1>
                        <span class="italic">{"Menos planilhas, mais lucro."}</span>
                        <br />
                        <span class="gold">{"Cadastre-se"}</span>
                        {" e veja a diferenca."}
                    </h1>
                    <p>
                        {"Ideal para autonomos e microempreendedores que buscam praticidade na \
                          gestao do proprio negocio. Simples, acessivel e eficiente. Tudo o que \
                          voce precisa para crescer com organizacao e controle financeiro."}
                    </p>

                    <div class="store-buttons">
                        <a
                            href={DOWNLOAD_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                            data-testid="link-appstore"
                        >
                            <button class="store-button">
                                <span class="store-hint">{"Baixe pela"}</span>
                                <span class="store-name">{"App Store"}</span>
                            </button>
                        </a>
                        <a
                            href={DOWNLOAD_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                            data-testid="link-playstore"
                        >
                            <button class="store-button">
                                <span class="store-hint">{"Baixe pelo"}</span>
                                <span class="store-name">{"Google Play"}</span>
                            </button>
                        </a>
                    </div>
                </div>

                <div class="hero-visual">
                    <div class="phone-mockup" data-testid="phone-mockup">
                        <div class="phone-screen">
                            <div class="phone-logo">{"T"}</div>
                            <h3>{"Dashboard"}</h3>
                            <div class="phone-balance">
                                <p class="balance-value">{"R$0,00"}</p>
                                <p class="balance-label">{"Saldo atual"}</p>
                            </div>
                            <div class="phone-shortcuts">
                                { for ["Agenda", "Servicos", "Clientes"].iter().map(|item| html! {
                                    <div class="phone-shortcut">
                                        <div class="shortcut-icon"></div>
                                        <p>{*item}</p>
                                    </div>
                                })}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(AppIntroSection)]
fn app_intro_section() -> Html {
    html! {
        <section class="section intro-section" data-testid="section-intro">
            <div class="section-inner">
                <div class="animate-on-scroll">
                    <h2 class="section-title">
                        <span class="blue-dark">{"Gestao de financas e servicos"}</span>
                        <br />
                        <span class="blue-dark">{"de "}</span>
                        <span class="gold">{"autonomos e microempreendedores."}</span>
                    </h2>
                    <div class="intro-brand">
                        <span class="logo-mark large">{"T"}</span>
                        <span class="logo-name">{"Trampay"}</span>
                    </div>
                </div>

                <p class="intro-text animate-on-scroll">
                    {"Uma ferramenta "}
                    <strong>{"simples, acessivel e eficiente"}</strong>
                    {", voltada a quem busca organizar o proprio negocio sem depender de \
                      plataformas caras e complexas."}
                </p>
            </div>
        </section>
    }
}

#[function_component(MarketResearchSection)]
fn market_research_section() -> Html {
    html! {
        <section class="section research-section" data-testid="section-research">
            <div class="section-inner">
                <div class="research-cards">
                    { for RESEARCH_CARDS.iter().enumerate().map(|(i, card)| html! {
                        <div
                            class="research-card animate-on-scroll"
                            style={format!("transition-delay: {}s;", 0.1 * (i + 1) as f64)}
                        >
                            <div class="research-icon">{card.icon}</div>
                            <div>
                                <h3>{card.title}</h3>
                                <p>{card.description}</p>
                            </div>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}

#[function_component(PricingSection)]
fn pricing_section() -> Html {
    html! {
        <section class="section pricing-section" data-testid="section-pricing">
            <div class="section-inner narrow">
                <h2 class="section-title animate-on-scroll">{"Compare nossos planos"}</h2>

                <div class="plan-grid">
                    { for PLANS.iter().enumerate().map(|(i, plan)| html! {
                        <div
                            class={classes!(
                                "plan-card",
                                "animate-on-scroll",
                                plan.highlighted.then(|| "highlighted"),
                            )}
                            style={format!("transition-delay: {}s;", 0.2 * (i + 1) as f64)}
                            data-testid={format!("card-plan-{}", plan.name.to_lowercase())}
                        >
                            <div class="plan-heading">
                                <h3>{plan.name}</h3>
                                <p class="plan-description">{plan.description}</p>
                                <p class="plan-price">{plan.price}</p>
                            </div>
                            <p class="plan-access">{"Acesso a:"}</p>
                            <ul class="plan-features">
                                { for plan.features.iter().map(|feature| html! {
                                    <li>
                                        <span class="feature-check">{"✓"}</span>
                                        <span>{*feature}</span>
                                    </li>
                                })}
                            </ul>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
fn about_section() -> Html {
    html! {
        <section id="sobre" class="section about-section" data-testid="section-about">
            <div class="section-inner">
                <h2 class="section-title light">{"Quem Somos"}</h2>
                <p class="about-lead">
                    {"O Trampay nasceu com o proposito de "}
                    <strong class="gold">{"facilitar a vida de microempreendedores e autonomos"}</strong>
                    {", oferecendo uma "}
                    <strong class="gold">{"ferramenta simples e acessivel"}</strong>
                    {" para gestao de servicos e financas."}
                </p>

                <div class="about-cards">
                    { for ABOUT_CARDS.iter().enumerate().map(|(i, card)| html! {
                        <div
                            class="about-card animate-on-scroll"
                            style={format!("transition-delay: {}s;", 0.2 * (i + 1) as f64)}
                            data-testid={format!("card-about-{}", i)}
                        >
                            <div class="about-card-icon">{card.icon}</div>
                            <div class="about-card-body">
                                <h3>{card.title}</h3>
                                <p>{card.description}</p>
                            </div>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}

#[function_component(HistorySection)]
fn history_section() -> Html {
    html! {
        <section class="section history-section" data-testid="section-history">
            <div class="section-inner narrow">
                <h2 class="section-title left">{"Nossa Historia"}</h2>
                { for HISTORY_PARAGRAPHS.iter().map(|paragraph| html! {
                    <p class="history-text">{*paragraph}</p>
                })}
            </div>
        </section>
    }
}

#[function_component(DifferentialsSection)]
fn differentials_section() -> Html {
    html! {
        <section class="section differentials-section" data-testid="section-differentials">
            <div class="section-inner narrow">
                <h2 class="section-title right">{"Nossos Diferenciais"}</h2>

                <div class="differential-pills">
                    { for DIFFERENTIALS.iter().enumerate().map(|(i, item)| html! {
                        <div
                            class="differential-pill animate-on-scroll"
                            style={format!("transition-delay: {}s;", 0.1 * i as f64)}
                            data-testid={format!("differential-{}", i)}
                        >
                            <span class="differential-label">{item.label}{":"}</span>
                            <span class="differential-text">{" "}{item.description}</span>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let footer_link = |id: &'static str, label: &'static str| {
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(id);
        });
        html! {
            <button class="footer-link" {onclick} data-testid={format!("footer-link-{}", id)}>
                {label}
            </button>
        }
    };

    html! {
        <footer class="site-footer" data-testid="footer">
            <div class="section-inner footer-grid">
                <div>
                    <div class="logo">
                        <span class="logo-mark">{"T"}</span>
                        <span class="logo-name light">{"Trampay"}</span>
                    </div>
                    <p class="footer-tagline">
                        {"Gestao de financas e servicos para autonomos e microempreendedores."}
                    </p>
                </div>

                <div>
                    <h4>{"Links Rapidos"}</h4>
                    <nav class="footer-links">
                        { for NAV_LINKS.iter().map(|link| footer_link(link.id, link.label)) }
                    </nav>
                </div>

                <div>
                    <h4>{"Contato"}</h4>
                    <div class="footer-contact">
                        <a href={format!("mailto:{}", CONTACT_EMAIL)} data-testid="footer-email">
                            {CONTACT_EMAIL}
                        </a>
                        <a
                            href={INSTAGRAM_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                            data-testid="footer-instagram"
                        >
                            {INSTAGRAM_HANDLE}
                        </a>
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{"2025 Trampay. Todos os direitos reservados."}</p>
            </div>
        </footer>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // One scroll subscriber per mounted page drives every reveal animation;
    // the listener is removed when the page unmounts.
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            window.scroll_to_with_x_and_y(0.0, 0.0);

            // First pass for content already above the fold.
            let viewport = window
                .inner_height()
                .ok()
                .and_then(|height| height.as_f64())
                .unwrap_or(0.0);
            reveal_visible_sections(&document, viewport);

            let scroll_window = window.clone();
            let scroll_callback = Closure::wrap(Box::new(move || {
                let viewport = scroll_window
                    .inner_height()
                    .ok()
                    .and_then(|height| height.as_f64())
                    .unwrap_or(0.0);
                if let Some(document) = scroll_window.document() {
                    reveal_visible_sections(&document, viewport);
                }
            }) as Box<dyn FnMut()>);

            window
                .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window
                    .remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
            }
        },
        (),
    );

    html! {
        <div class="landing-page">
            <Header />
            <main>
                <HeroSection />
                <AppIntroSection />
                <FeatureCarousel />
                <MarketResearchSection />
                <PricingSection />
                <TestimonialsCarousel />
                <AboutSection />
                <HistorySection />
                <DifferentialsSection />
                <ContactSection />
                <FaqSection />
            </main>
            <Footer />

            <style>
                {r#"
                .landing-page {
                    --trampay-blue-dark: #2C5F7C;
                    --trampay-blue: #3D7A99;
                    --trampay-blue-light: #E8F1F6;
                    --trampay-gold: #FDB913;

                    font-family: 'Poppins', Arial, sans-serif;
                    color: #333;
                    background: #fff;
                }

                .landing-page h1,
                .landing-page h2,
                .landing-page h3,
                .landing-page h4 {
                    margin: 0;
                }

                .section {
                    padding: 5rem 0;
                }

                .section-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .section-inner.narrow {
                    max-width: 960px;
                }

                .section-title {
                    font-size: 2.2rem;
                    font-weight: 700;
                    text-align: center;
                    color: var(--trampay-blue-dark);
                    margin-bottom: 3rem;
                }

                .section-title.left { text-align: left; }
                .section-title.right { text-align: right; }
                .section-title.light { color: #fff; }
                .section-title.italic { font-style: italic; }

                .gold { color: var(--trampay-gold); }
                .blue-dark { color: var(--trampay-blue-dark); }
                .italic { font-style: italic; }

                .animate-on-scroll {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }

                .animate-on-scroll.visible {
                    opacity: 1;
                    transform: none;
                }

                /* Header */

                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: #fff;
                    transition: box-shadow 0.3s ease, background 0.3s ease;
                }

                .site-header.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(8px);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                }

                .header-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 4.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                }

                .logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    cursor: pointer;
                }

                .logo-mark {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 8px;
                    background: var(--trampay-gold);
                    color: var(--trampay-blue-dark);
                    font-weight: 700;
                    font-size: 1.2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .logo-mark.large {
                    width: 3.5rem;
                    height: 3.5rem;
                    font-size: 1.6rem;
                    border-radius: 12px;
                }

                .logo-name {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: var(--trampay-blue-dark);
                }

                .logo-name.light { color: #fff; }

                .header-nav {
                    display: flex;
                    gap: 2rem;
                }

                .nav-link {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 1rem;
                    font-weight: 500;
                    color: var(--trampay-blue-dark);
                    padding: 0.5rem 0;
                    transition: color 0.3s ease;
                }

                .nav-link:hover {
                    color: var(--trampay-gold);
                }

                .download-button {
                    background: var(--trampay-blue-dark);
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    padding: 0.6rem 1.5rem;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: transform 0.3s ease, background 0.3s ease;
                }

                .download-button:hover {
                    background: var(--trampay-blue);
                    transform: scale(1.05);
                }

                .download-button.wide { width: 100%; }

                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    color: var(--trampay-blue-dark);
                    cursor: pointer;
                }

                .mobile-menu {
                    display: none;
                    flex-direction: column;
                    gap: 0.5rem;
                    padding: 1rem 1.5rem;
                    background: #fff;
                    border-top: 1px solid #eee;
                }

                /* Hero */

                .hero-section {
                    padding: 8rem 0 5rem;
                    background: linear-gradient(to bottom, var(--trampay-blue-light), #fff);
                    overflow: hidden;
                }

                .hero-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .hero-copy h1 {
                    font-size: 2.8rem;
                    line-height: 1.2;
                    color: var(--trampay-blue-dark);
                    margin-bottom: 1.5rem;
                }

                .hero-copy p {
                    font-size: 1.1rem;
                    color: #555;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }

                .store-buttons {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }

                .store-button {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    border: 2px solid var(--trampay-blue-dark);
                    border-radius: 10px;
                    background: none;
                    color: var(--trampay-blue-dark);
                    padding: 0.6rem 1.5rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .store-button:hover {
                    background: var(--trampay-blue-dark);
                    color: #fff;
                    transform: scale(1.05);
                }

                .store-hint { font-size: 0.7rem; opacity: 0.7; }
                .store-name { font-weight: 600; }

                .hero-visual {
                    display: flex;
                    justify-content: center;
                }

                .phone-mockup {
                    background: linear-gradient(135deg, #fff, var(--trampay-blue-light));
                    border-radius: 2.5rem;
                    padding: 1rem;
                    box-shadow: 0 24px 48px rgba(44, 95, 124, 0.25);
                    animation: float 4s ease-in-out infinite;
                }

                @keyframes float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-12px); }
                }

                .phone-screen {
                    width: 240px;
                    border: 8px solid #333;
                    border-radius: 2rem;
                    background: #fff;
                    padding: 2rem 1rem;
                    text-align: center;
                }

                .phone-logo {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    border-radius: 1rem;
                    background: var(--trampay-gold);
                    color: var(--trampay-blue-dark);
                    font-size: 1.5rem;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .phone-screen h3 {
                    color: var(--trampay-blue-dark);
                    margin-bottom: 1rem;
                }

                .phone-balance {
                    background: var(--trampay-blue-light);
                    border-radius: 0.75rem;
                    padding: 1rem;
                    margin-bottom: 1rem;
                }

                .balance-value {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: var(--trampay-blue-dark);
                    margin: 0;
                }

                .balance-label {
                    font-size: 0.75rem;
                    color: #888;
                    margin: 0;
                }

                .phone-shortcuts {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 0.5rem;
                }

                .phone-shortcut {
                    background: #f2f2f2;
                    border-radius: 0.5rem;
                    padding: 0.5rem;
                }

                .phone-shortcut p {
                    font-size: 0.6rem;
                    color: #666;
                    margin: 0.25rem 0 0;
                }

                .shortcut-icon {
                    width: 1.5rem;
                    height: 1.5rem;
                    margin: 0 auto;
                    border-radius: 0.35rem;
                    background: rgba(253, 185, 19, 0.3);
                }

                /* Intro */

                .intro-brand {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    margin-top: -1.5rem;
                    margin-bottom: 2rem;
                }

                .intro-text {
                    max-width: 760px;
                    margin: 0 auto;
                    text-align: center;
                    font-size: 1.1rem;
                    color: #555;
                    line-height: 1.7;
                }

                /* Research */

                .research-section {
                    background: var(--trampay-blue-light);
                }

                .research-cards {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .research-card {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    background: #fff;
                    border-radius: 16px;
                    padding: 1.5rem;
                    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.3s ease, transform 0.3s ease,
                        opacity 0.6s ease;
                }

                .research-card:hover {
                    box-shadow: 0 12px 24px rgba(0, 0, 0, 0.1);
                    transform: translateY(-4px);
                }

                .research-icon {
                    flex-shrink: 0;
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 12px;
                    background: var(--trampay-blue-light);
                    font-size: 1.6rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .research-card h3 {
                    color: var(--trampay-blue-dark);
                    margin-bottom: 0.25rem;
                }

                .research-card p {
                    color: #666;
                    margin: 0;
                }

                /* Carousels */

                .carousel {
                    position: relative;
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .carousel-viewport {
                    overflow: hidden;
                    flex: 1;
                }

                .carousel-track {
                    display: flex;
                    transition: transform 0.5s ease-in-out;
                }

                .carousel-slide {
                    min-width: 100%;
                    padding: 0 0.5rem;
                    box-sizing: border-box;
                }

                .feature-card {
                    background: var(--trampay-blue-light);
                    border-radius: 16px;
                    padding: 3rem 2rem;
                    text-align: center;
                }

                .feature-icon {
                    width: 5rem;
                    height: 5rem;
                    margin: 0 auto 1.5rem;
                    border-radius: 1rem;
                    background: var(--trampay-gold);
                    font-size: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .feature-card h3 {
                    font-size: 1.5rem;
                    color: var(--trampay-blue-dark);
                    margin-bottom: 1rem;
                }

                .feature-card p {
                    max-width: 520px;
                    margin: 0 auto;
                    color: #666;
                    line-height: 1.6;
                }

                .carousel-arrow {
                    flex-shrink: 0;
                    width: 3rem;
                    height: 3rem;
                    border: none;
                    border-radius: 50%;
                    background: #fff;
                    color: var(--trampay-blue-dark);
                    font-size: 1.5rem;
                    cursor: pointer;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.15);
                    transition: all 0.3s ease;
                    z-index: 5;
                }

                .carousel-arrow:hover {
                    background: var(--trampay-gold);
                    color: #fff;
                }

                .carousel-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 2rem;
                }

                .carousel-dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border: none;
                    border-radius: 999px;
                    background: #ccc;
                    cursor: pointer;
                    padding: 0;
                    transition: all 0.3s ease;
                }

                .carousel-dot.active {
                    width: 2rem;
                    background: var(--trampay-gold);
                }

                /* Testimonials */

                .testimonial-grid {
                    flex: 1;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }

                .testimonial-card {
                    background: #fff;
                    border-radius: 16px;
                    padding: 1.5rem;
                    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.06);
                    transition: box-shadow 0.5s ease;
                }

                .testimonial-card:hover {
                    box-shadow: 0 12px 24px rgba(0, 0, 0, 0.12);
                }

                .testimonial-quote {
                    font-size: 2.5rem;
                    font-family: Georgia, serif;
                    color: var(--trampay-gold);
                    line-height: 1;
                }

                .testimonial-card h3 {
                    font-size: 1.25rem;
                    color: var(--trampay-blue-dark);
                    margin: 0.5rem 0;
                }

                .testimonial-text {
                    color: #666;
                    line-height: 1.6;
                }

                .testimonial-stars {
                    color: var(--trampay-gold);
                    letter-spacing: 0.2rem;
                    margin-bottom: 0.75rem;
                }

                .testimonial-name {
                    font-size: 0.9rem;
                    color: #888;
                }

                /* Pricing */

                .pricing-section {
                    background: var(--trampay-blue-light);
                }

                .plan-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                }

                .plan-card {
                    background: #fff;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.3s ease, transform 0.3s ease,
                        opacity 0.6s ease;
                }

                .plan-card:hover {
                    box-shadow: 0 16px 32px rgba(0, 0, 0, 0.12);
                    transform: translateY(-6px);
                }

                .plan-card.highlighted {
                    border: 2px solid var(--trampay-gold);
                    box-shadow: 0 8px 24px rgba(253, 185, 19, 0.25);
                }

                .plan-heading {
                    text-align: center;
                    margin-bottom: 1.5rem;
                }

                .plan-heading h3 {
                    font-size: 1.3rem;
                    color: var(--trampay-blue-dark);
                    margin-bottom: 0.5rem;
                }

                .plan-description {
                    font-size: 0.9rem;
                    color: #888;
                    margin-bottom: 1rem;
                }

                .plan-price {
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: var(--trampay-gold);
                    margin: 0;
                }

                .plan-access {
                    font-size: 0.9rem;
                    font-weight: 500;
                    color: #888;
                }

                .plan-features {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .plan-features li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    color: #555;
                }

                .feature-check {
                    flex-shrink: 0;
                    width: 1.25rem;
                    height: 1.25rem;
                    border-radius: 50%;
                    background: var(--trampay-gold);
                    color: #fff;
                    font-size: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-top: 0.15rem;
                }

                /* About */

                .about-section {
                    background: var(--trampay-blue-dark);
                }

                .about-lead {
                    max-width: 760px;
                    margin: -1.5rem auto 3rem;
                    text-align: center;
                    color: var(--trampay-blue-light);
                    line-height: 1.7;
                }

                .about-cards {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .about-card {
                    background: var(--trampay-blue);
                    border-radius: 16px;
                    overflow: hidden;
                    transition: box-shadow 0.3s ease, transform 0.3s ease,
                        opacity 0.6s ease;
                }

                .about-card:hover {
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3);
                    transform: translateY(-6px);
                }

                .about-card-icon {
                    height: 9rem;
                    background: linear-gradient(135deg, var(--trampay-blue), var(--trampay-blue-dark));
                    font-size: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .about-card-body {
                    padding: 1.5rem;
                    text-align: center;
                }

                .about-card-body h3 {
                    color: #fff;
                    margin-bottom: 0.75rem;
                }

                .about-card-body p {
                    color: var(--trampay-blue-light);
                    font-size: 0.9rem;
                    line-height: 1.6;
                    margin: 0;
                }

                /* History */

                .history-text {
                    color: #555;
                    font-size: 1.1rem;
                    line-height: 1.8;
                    margin: 0 0 1rem;
                }

                /* Differentials */

                .differentials-section {
                    background: var(--trampay-blue-light);
                }

                .differential-pills {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                }

                .differential-pill {
                    background: #fff;
                    border: 1px solid #eee;
                    border-radius: 999px;
                    padding: 0.75rem 1.5rem;
                    box-shadow: 0 2px 6px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.3s ease, transform 0.3s ease,
                        opacity 0.6s ease;
                }

                .differential-pill:hover {
                    box-shadow: 0 6px 16px rgba(0, 0, 0, 0.1);
                    transform: scale(1.05);
                }

                .differential-label {
                    font-weight: 600;
                    color: var(--trampay-blue-dark);
                }

                .differential-text {
                    color: #666;
                }

                /* Footer */

                .site-footer {
                    background: var(--trampay-blue-dark);
                    border-top: 1px solid var(--trampay-blue);
                    padding: 3rem 0 0;
                }

                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    padding-bottom: 2rem;
                }

                .footer-tagline {
                    color: var(--trampay-blue-light);
                    font-size: 0.9rem;
                    margin-top: 1rem;
                }

                .site-footer h4 {
                    color: #fff;
                    margin-bottom: 1rem;
                }

                .footer-links {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    gap: 0.5rem;
                }

                .footer-link {
                    background: none;
                    border: none;
                    padding: 0;
                    cursor: pointer;
                    font-size: 1rem;
                    color: var(--trampay-blue-light);
                    transition: color 0.3s ease;
                }

                .footer-link:hover {
                    color: var(--trampay-gold);
                }

                .footer-contact {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .footer-contact a {
                    color: var(--trampay-blue-light);
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .footer-contact a:hover {
                    color: var(--trampay-gold);
                }

                .footer-bottom {
                    border-top: 1px solid var(--trampay-blue);
                    padding: 1.5rem 0;
                    text-align: center;
                }

                .footer-bottom p {
                    color: var(--trampay-blue-light);
                    font-size: 0.9rem;
                    margin: 0;
                }

                @keyframes fade-in {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @media (max-width: 900px) {
                    .hero-grid,
                    .plan-grid,
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }

                    .about-cards {
                        grid-template-columns: 1fr;
                    }

                    .testimonial-grid {
                        grid-template-columns: 1fr;
                    }
                }

                @media (max-width: 768px) {
                    .header-nav,
                    .header-download {
                        display: none;
                    }

                    .burger-menu {
                        display: block;
                    }

                    .mobile-menu {
                        display: flex;
                    }

                    .hero-copy h1 {
                        font-size: 2rem;
                    }

                    .section {
                        padding: 3.5rem 0;
                    }
                }
                "#}
            </style>
        </div>
    }
}
