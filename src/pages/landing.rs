use log::{error, warn};
use yew::prelude::*;

use crate::components::{footer::SiteFooter, header::SiteHeader, legal_modal::LegalModal};
use crate::config::{self, DRIVER_SIGNUP_URL, PASSENGER_SIGNUP_URL};
use crate::content;
use crate::motion::modal::ModalState;
use crate::motion::{PageLifecycle, Scheduler, ViewportHub};
use crate::web::{DomTarget, HostBindings, MathRandom};

const SECTION_COUNT: usize = 4;
const ACTION_COUNT: usize = 4;

type Page = PageLifecycle<DomTarget, MathRandom>;

#[function_component(Landing)]
pub fn landing() -> Html {
    let content = use_memo(|_| content::load(), ());
    let page = use_mut_ref(|| {
        Page::new(
            Scheduler::new(),
            ViewportHub::default(),
            config::motion_config(),
            MathRandom,
        )
    });
    let modal = use_state(ModalState::default);

    let hero_ref = use_node_ref();
    let section_refs = use_memo(|_| [(); SECTION_COUNT].map(|_| NodeRef::default()), ());
    let action_refs = use_memo(|_| [(); ACTION_COUNT].map(|_| NodeRef::default()), ());

    // Start the animations once the elements exist, tear everything down on
    // unmount.
    {
        let page = page.clone();
        let hero_ref = hero_ref.clone();
        let section_refs = section_refs.clone();
        let action_refs = action_refs.clone();
        use_effect_with_deps(
            move |_| {
                let bindings = {
                    let page = page.borrow();
                    HostBindings::attach(page.scheduler(), page.viewport())
                };
                let destructor: Box<dyn FnOnce()> = match bindings {
                    Ok(bindings) => {
                        let mounted = page.borrow_mut().mount(
                            DomTarget::from_node_ref(&hero_ref),
                            section_refs.iter().map(DomTarget::from_node_ref),
                            action_refs.iter().map(DomTarget::from_node_ref),
                        );
                        if let Err(err) = mounted {
                            warn!("landing page: {}", err);
                        }
                        Box::new(move || {
                            if let Err(err) = page.borrow_mut().unmount() {
                                warn!("landing page: {}", err);
                            }
                            drop(bindings);
                        })
                    }
                    Err(err) => {
                        error!("landing page animations disabled: {}", err);
                        Box::new(|| ())
                    }
                };
                destructor
            },
            (),
        );
    }

    let open_legal = {
        let modal = modal.clone();
        Callback::from(move |id: String| {
            let mut next = (*modal).clone();
            next.open(id);
            modal.set(next);
        })
    };
    let close_legal = {
        let modal = modal.clone();
        Callback::from(move |_: ()| {
            let mut next = (*modal).clone();
            next.close();
            modal.set(next);
        })
    };

    let content = match &*content {
        Ok(content) => content,
        Err(err) => {
            error!("{}", err);
            return html! {
                <main class="landing-error">
                    <p>{"Não foi possível carregar a página. Tente novamente mais tarde."}</p>
                </main>
            };
        }
    };

    let open_document = content
        .legal
        .iter()
        .find(|doc| modal.is_open(&doc.id))
        .cloned();

    html! {
        <>
            <SiteHeader />
            <main class="landing">
                <section ref={hero_ref} class="hero">
                    <div
                        class="hero-background"
                        style={format!("background-image: url('{}');", content.hero.background)}
                    ></div>
                    <h1>{content.hero.title.clone()}</h1>
                    <p class="hero-tagline">{content.hero.tagline.clone()}</p>
                    { signup_buttons(&action_refs[0], &action_refs[1], "hero") }
                </section>

                <section ref={section_refs[0].clone()} id="features" class="about">
                    <h2>{content.about.title.clone()}</h2>
                    <p>{content.about.body.clone()}</p>
                </section>

                <section ref={section_refs[1].clone()} class="benefits">
                    <h2>{content.benefits.title.clone()}</h2>
                    <div class="benefits-grid">
                        {
                            content.benefits.cards.iter().map(|card| html! {
                                <div class="benefit-card">
                                    <h3>{card.title.clone()}</h3>
                                    <p>{card.description.clone()}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section ref={section_refs[2].clone()} id="app" class="mockup">
                    <h2>{content.mockup.title.clone()}</h2>
                    <div class="mockup-frame">
                        <img src={content.mockup.image.clone()} alt={content.mockup.alt.clone()} />
                        <p>{content.mockup.caption.clone()}</p>
                    </div>
                </section>

                <section ref={section_refs[3].clone()} id="contato" class="final-cta">
                    <h2>{content.cta.title.clone()}</h2>
                    { signup_buttons(&action_refs[2], &action_refs[3], "cta") }
                </section>

                <SiteFooter brand={content.brand.clone()} on_open_legal={open_legal} />
            </main>
            <LegalModal document={open_document} on_close={close_legal} />
            <style>{LANDING_CSS}</style>
        </>
    }
}

fn signup_buttons(driver: &NodeRef, passenger: &NodeRef, variant: &'static str) -> Html {
    html! {
        <div class={classes!("signup-buttons", variant)}>
            <a
                ref={driver.clone()}
                href={DRIVER_SIGNUP_URL}
                target="_blank"
                rel="noopener noreferrer"
                class="signup-button driver"
            >
                {"Seja Motorista"}
            </a>
            <a
                ref={passenger.clone()}
                href={PASSENGER_SIGNUP_URL}
                target="_blank"
                rel="noopener noreferrer"
                class="signup-button passenger"
            >
                {"Seja Passageiro"}
            </a>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    body {
        margin: 0;
        background: #000;
        color: #fff;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }

    .site-header {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 1rem 1.5rem;
        background: rgba(0, 0, 0, 0.4);
        backdrop-filter: blur(12px);
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    }

    .site-logo img {
        height: 2.5rem;
        object-fit: contain;
    }

    .site-nav {
        display: flex;
        gap: 1.5rem;
        font-size: 0.875rem;
    }

    .site-nav a {
        color: #fff;
        text-decoration: none;
    }

    .site-nav a:hover {
        color: #FF746C;
    }

    .landing {
        min-height: 100vh;
        overflow-x: hidden;
        padding-top: 4rem;
    }

    .hero {
        position: relative;
        height: 100vh;
        display: flex;
        flex-direction: column;
        justify-content: center;
        align-items: center;
        text-align: center;
        padding: 0 1.5rem;
    }

    .hero-background {
        position: absolute;
        inset: 0;
        background-size: cover;
        background-position: center;
        opacity: 0.3;
    }

    .hero h1 {
        position: relative;
        font-size: 4rem;
        margin-bottom: 1rem;
    }

    .hero-tagline {
        position: relative;
        max-width: 42rem;
        font-size: 1.25rem;
        color: #d1d5db;
    }

    .signup-buttons {
        position: relative;
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 1rem;
        margin-top: 1.5rem;
    }

    .signup-button {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        padding: 1rem 2.5rem;
        border-radius: 9999px;
        font-size: 1.125rem;
        font-weight: 600;
        text-decoration: none;
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.3);
    }

    .hero .driver { background: #FF746C; color: #fff; }
    .hero .passenger { background: #fff; color: #000; }
    .cta .driver { background: #000; color: #fff; }
    .cta .passenger { background: #fff; color: #000; }

    .about, .mockup {
        padding: 7rem 1.5rem;
        text-align: center;
    }

    .about p {
        max-width: 48rem;
        margin: 0 auto;
        font-size: 1.125rem;
        color: #d1d5db;
    }

    .benefits {
        padding: 6rem 2rem;
    }

    .benefits h2 {
        text-align: center;
        margin-bottom: 4rem;
    }

    .benefits-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2.5rem;
        max-width: 72rem;
        margin: 0 auto;
    }

    .benefit-card {
        background: #0b0b0b;
        padding: 2.5rem;
        border-radius: 1.5rem;
        border: 1px solid #222;
        transition: transform 0.3s ease;
    }

    .benefit-card:hover {
        transform: translateY(-0.5rem);
    }

    .benefit-card p {
        color: #9ca3af;
        font-size: 0.875rem;
    }

    .mockup-frame {
        max-width: 56rem;
        margin: 0 auto;
        background: #0b0b0b;
        padding: 2.5rem;
        border-radius: 1.5rem;
        border: 1px solid #222;
    }

    .mockup-frame img {
        width: 100%;
        border-radius: 1rem;
        opacity: 0.9;
    }

    .mockup-frame p {
        margin-top: 1.5rem;
        color: #9ca3af;
    }

    .final-cta {
        padding: 8rem 1.5rem;
        text-align: center;
        background: #FF746C;
        color: #000;
    }

    .final-cta h2 {
        font-size: 3rem;
    }

    .site-footer {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1rem;
        margin-top: 8rem;
        padding: 2.5rem 0;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
    }

    .footer-logo {
        height: 3rem;
    }

    .legal-link {
        border: none;
        background: none;
        color: #d1d5db;
        cursor: pointer;
        font-size: 0.875rem;
    }

    .legal-link:hover {
        color: #FF746C;
    }

    .copyright {
        font-size: 0.875rem;
        opacity: 0.7;
    }

    @media (max-width: 768px) {
        .site-nav {
            display: none;
        }

        .hero h1 {
            font-size: 3rem;
        }

        .benefits-grid {
            grid-template-columns: 1fr;
        }
    }
"#;
