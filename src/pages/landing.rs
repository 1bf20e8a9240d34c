use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::demo_modal::DemoModal;
use crate::components::faq::FaqSection;
use crate::components::hubspot;
use crate::components::journey::JourneyCarousel;
use crate::components::roi::RoiCalculator;

#[function_component(Landing)]
pub fn landing() -> Html {
    let modal_open = use_state(|| false);

    // Scroll to top and mount the lead-capture form on initial load.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                hubspot::mount_form();
                || ()
            },
            (),
        );
    }

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            modal_open.set(true);
        })
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(false))
    };

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-content">
                    <span class="hero-brand">{"clinara"}</span>
                    <h1 class="hero-title">{"La ficha clínica se escribe sola"}</h1>
                    <p class="hero-subtitle">
                        {"Clinara automatiza la ficha clínica y la agenda de su centro médico. Sus médicos atienden pacientes; del papeleo nos encargamos nosotros."}
                    </p>
                    <button class="hero-cta open-modal-btn" onclick={open_modal.clone()}>
                        {"Agendar una demo"}
                    </button>
                </div>
            </header>

            <JourneyCarousel />

            <RoiCalculator />

            <FaqSection />

            <section class="final-cta">
                <h2>{"Devuélvale el tiempo a sus médicos"}</h2>
                <p>{"Una demostración de 30 minutos con los datos de su propio centro."}</p>
                <button class="hero-cta open-modal-btn" onclick={open_modal}>
                    {"Agendar una demo"}
                </button>
            </section>

            <footer class="landing-footer">
                <p>{"© 2026 Clinara — Automatización clínica para centros médicos"}</p>
            </footer>

            <DemoModal open={*modal_open} onclose={close_modal} />

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #0f0f0f;
                    color: #ffffff;
                }

                .hero {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    min-height: 80vh;
                    padding: 6rem 2rem 4rem;
                    background: radial-gradient(
                        ellipse at top,
                        rgba(30, 144, 255, 0.15) 0%,
                        rgba(15, 15, 15, 1) 60%
                    );
                }

                .hero-content {
                    max-width: 720px;
                    text-align: center;
                }

                .hero-brand {
                    display: block;
                    font-size: 1.1rem;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: #1E90FF;
                    margin-bottom: 1.5rem;
                }

                .hero-title {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-subtitle {
                    font-size: 1.3rem;
                    color: #999;
                    line-height: 1.6;
                    margin-bottom: 2.5rem;
                }

                .hero-cta {
                    padding: 1rem 2.5rem;
                    border: none;
                    border-radius: 8px;
                    background: linear-gradient(45deg, #1E90FF, #7EB2FF);
                    color: #fff;
                    font-size: 1.1rem;
                    cursor: pointer;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }

                .hero-cta:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 8px 24px rgba(30, 144, 255, 0.3);
                }

                .final-cta {
                    text-align: center;
                    padding: 5rem 2rem;
                    background: rgba(26, 26, 26, 0.85);
                    border-top: 1px solid rgba(30, 144, 255, 0.1);
                }

                .final-cta h2 {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .final-cta p {
                    color: #999;
                    font-size: 1.2rem;
                    margin-bottom: 2rem;
                }

                .landing-footer {
                    text-align: center;
                    padding: 2rem;
                    color: #666;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }

                @media (max-width: 768px) {
                    .hero {
                        padding: 5rem 1rem 3rem;
                    }

                    .hero-title {
                        font-size: 2.5rem;
                    }

                    .hero-subtitle {
                        font-size: 1.1rem;
                    }

                    .final-cta h2 {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
