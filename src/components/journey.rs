use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollToOptions,
};
use yew::prelude::*;

/// Delay between automatic advances.
const AUTO_SCROLL_DELAY_MS: u32 = 6_000;
/// Horizontal gap between slides; must match the CSS below.
const SLIDE_GAP: f64 = 40.0;
/// Used when no slide element is mounted yet.
const FALLBACK_SLIDE_WIDTH: f64 = 340.0;
/// How close to either edge still counts as "at the edge".
const WRAP_TOLERANCE: f64 = 5.0;
/// Fraction of the section that must be visible for auto-scroll to run.
const VISIBILITY_THRESHOLD: f64 = 0.1;
/// Above this percentage the progress bar shows its completed state.
const COMPLETE_THRESHOLD: f64 = 98.0;

const JOURNEY_STEPS: &[(&str, &str)] = &[
    (
        "Agendamiento inteligente",
        "El paciente reserva su hora en línea y la agenda del médico se actualiza al instante, sin llamadas ni planillas.",
    ),
    (
        "Confirmación automática",
        "Recordatorios por WhatsApp y correo reducen las inasistencias y liberan a su equipo de secretaría.",
    ),
    (
        "Llegada y admisión",
        "Los datos del paciente ya están precargados al momento del check-in. La sala de espera se mueve más rápido.",
    ),
    (
        "Consulta sin teclado",
        "El médico conversa con su paciente; Clinara escucha y estructura la ficha clínica en tiempo real.",
    ),
    (
        "Ficha lista al instante",
        "Al terminar la consulta, la nota clínica está completa y lista para firmar. Cero horas extra transcribiendo.",
    ),
    (
        "Seguimiento proactivo",
        "Controles y exámenes pendientes se agendan solos. Ningún paciente queda sin seguimiento.",
    ),
];

/// Scroll geometry of the carousel container, read fresh before every decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

impl ScrollMetrics {
    fn read(container: &Element) -> Self {
        Self {
            scroll_left: container.scroll_left() as f64,
            scroll_width: container.scroll_width() as f64,
            client_width: container.client_width() as f64,
        }
    }

    fn max_scroll(&self) -> f64 {
        self.scroll_width - self.client_width
    }
}

/// One planned scroll movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollStep {
    /// Absolute jump, used when wrapping around either edge.
    JumpTo(f64),
    /// Relative move of one slide width.
    ShiftBy(f64),
}

/// Progress through the carousel as a fill percentage, clamped to [0, 100].
/// Non-overflowing content reads as 0%.
pub fn progress_percent(metrics: ScrollMetrics) -> f64 {
    let max_scroll = metrics.max_scroll();
    if max_scroll <= 0.0 {
        return 0.0;
    }
    (metrics.scroll_left / max_scroll * 100.0).clamp(0.0, 100.0)
}

/// Decides where one advance in `direction` (+1 forward, -1 backward) should
/// land. Within `WRAP_TOLERANCE` of an edge the carousel loops around to the
/// opposite end instead of overshooting. Returns `None` when the content does
/// not overflow, which makes the advance a no-op.
pub fn plan_advance(metrics: ScrollMetrics, slide_width: f64, direction: i32) -> Option<ScrollStep> {
    let max_scroll = metrics.max_scroll();
    if max_scroll <= 0.0 {
        return None;
    }

    if direction > 0 && metrics.scroll_left >= max_scroll - WRAP_TOLERANCE {
        Some(ScrollStep::JumpTo(0.0))
    } else if direction < 0 && metrics.scroll_left <= WRAP_TOLERANCE {
        Some(ScrollStep::JumpTo(max_scroll))
    } else {
        Some(ScrollStep::ShiftBy(direction as f64 * slide_width))
    }
}

/// The auto-scroll loop. Stopped while the handle is `None`, running
/// otherwise. Dropping the `Interval` cancels it, so replacing the option can
/// never leave two timers alive.
#[derive(Default)]
struct AutoScroll {
    handle: Option<Interval>,
}

impl AutoScroll {
    /// Starting always stops first, so calling this while already running
    /// just resets the delay window.
    fn start(&mut self, tick: impl FnMut() + 'static) {
        self.stop();
        self.handle = Some(Interval::new(AUTO_SCROLL_DELAY_MS, tick));
    }

    /// No-op when the timer is not running.
    fn stop(&mut self) {
        self.handle.take();
    }
}

fn start_auto_scroll(
    timer: &Rc<RefCell<AutoScroll>>,
    interacting: &Rc<RefCell<bool>>,
    container_ref: &NodeRef,
) {
    let tick_timer = timer.clone();
    let tick_flag = interacting.clone();
    let tick_container = container_ref.clone();
    timer.borrow_mut().start(move || {
        *tick_flag.borrow_mut() = false;
        advance(&tick_container, 1, &tick_timer, &tick_flag);
    });
}

fn advance(
    container_ref: &NodeRef,
    direction: i32,
    timer: &Rc<RefCell<AutoScroll>>,
    interacting: &Rc<RefCell<bool>>,
) {
    let Some(container) = container_ref.cast::<Element>() else {
        return;
    };

    // A manual trigger resets the delay window, so the next automatic tick
    // is a full delay away instead of firing right after the click.
    if *interacting.borrow() {
        start_auto_scroll(timer, interacting, container_ref);
    }

    let slide_width = container
        .query_selector(".journey-slide")
        .ok()
        .flatten()
        .and_then(|slide| slide.dyn_into::<HtmlElement>().ok())
        .map(|slide| slide.offset_width() as f64 + SLIDE_GAP)
        .unwrap_or(FALLBACK_SLIDE_WIDTH);

    let metrics = ScrollMetrics::read(&container);
    if let Some(step) = plan_advance(metrics, slide_width, direction) {
        apply_step(&container, step);
    }
}

fn apply_step(container: &Element, step: ScrollStep) {
    let options = ScrollToOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    match step {
        ScrollStep::JumpTo(left) => {
            options.set_left(left);
            container.scroll_to_with_scroll_to_options(&options);
        }
        ScrollStep::ShiftBy(delta) => {
            options.set_left(delta);
            container.scroll_by_with_scroll_to_options(&options);
        }
    }
}

#[function_component(JourneyCarousel)]
pub fn journey_carousel() -> Html {
    let section_ref = use_node_ref();
    let container_ref = use_node_ref();
    let percent = use_state(|| 0.0f64);
    let timer = use_mut_ref(AutoScroll::default);
    let interacting = use_mut_ref(|| false);

    // Resolve elements once at mount, seed the indicator, and tie the
    // auto-scroll lifecycle to the section's visibility.
    {
        let section_ref = section_ref.clone();
        let container_ref = container_ref.clone();
        let percent = percent.clone();
        let timer = timer.clone();
        let interacting = interacting.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(container) = container_ref.cast::<Element>() {
                    percent.set(progress_percent(ScrollMetrics::read(&container)));
                } else {
                    warn!("journey container not found, carousel disabled");
                }

                let observer = match section_ref.cast::<Element>() {
                    Some(section) => {
                        let cb_timer = timer.clone();
                        let cb_flag = interacting.clone();
                        let cb_container = container_ref.clone();
                        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if entry.is_intersecting() {
                                    gloo_console::log!("journey section visible, starting auto-scroll");
                                    start_auto_scroll(&cb_timer, &cb_flag, &cb_container);
                                } else {
                                    cb_timer.borrow_mut().stop();
                                }
                            }
                        })
                            as Box<dyn FnMut(js_sys::Array)>);

                        let options = IntersectionObserverInit::new();
                        options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
                        match IntersectionObserver::new_with_options(
                            callback.as_ref().unchecked_ref(),
                            &options,
                        ) {
                            Ok(observer) => {
                                observer.observe(&section);
                                Some((observer, callback))
                            }
                            Err(err) => {
                                warn!("IntersectionObserver unavailable: {:?}", err);
                                None
                            }
                        }
                    }
                    None => {
                        warn!("journey section not found, auto-scroll disabled");
                        None
                    }
                };

                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                    timer.borrow_mut().stop();
                }
            },
            (),
        );
    }

    let on_scroll = {
        let container_ref = container_ref.clone();
        let percent = percent.clone();
        Callback::from(move |_: Event| {
            if let Some(container) = container_ref.cast::<Element>() {
                percent.set(progress_percent(ScrollMetrics::read(&container)));
            }
        })
    };

    let scroll_prev = {
        let container_ref = container_ref.clone();
        let timer = timer.clone();
        let interacting = interacting.clone();
        Callback::from(move |_: MouseEvent| {
            *interacting.borrow_mut() = true;
            advance(&container_ref, -1, &timer, &interacting);
        })
    };

    let scroll_next = {
        let container_ref = container_ref.clone();
        let timer = timer.clone();
        let interacting = interacting.clone();
        Callback::from(move |_: MouseEvent| {
            *interacting.borrow_mut() = true;
            advance(&container_ref, 1, &timer, &interacting);
        })
    };

    let bar_class = classes!(
        "journey-progress-fill",
        (*percent > COMPLETE_THRESHOLD).then_some("complete")
    );

    html! {
        <section class="patient-journey-section" ref={section_ref}>
            <div class="journey-header">
                <h2>{"El viaje de su paciente, sin fricción"}</h2>
                <p>{"Desde la reserva hasta el seguimiento, cada paso se automatiza."}</p>
            </div>

            <div class="journey-container" ref={container_ref} onscroll={on_scroll}>
                { for JOURNEY_STEPS.iter().enumerate().map(|(i, (title, description))| html! {
                    <div class="journey-slide" key={*title}>
                        <span class="journey-step-number">{format!("{:02}", i + 1)}</span>
                        <h3>{*title}</h3>
                        <p>{*description}</p>
                    </div>
                }) }
            </div>

            <div class="journey-controls">
                <button class="journey-nav-btn" onclick={scroll_prev} aria-label="Anterior">{"‹"}</button>
                <div class="journey-progress-track">
                    <div class={bar_class} style={format!("width: {}%;", *percent)}></div>
                </div>
                <button class="journey-nav-btn" onclick={scroll_next} aria-label="Siguiente">{"›"}</button>
            </div>

            <style>
                {r#"
                .patient-journey-section {
                    padding: 5rem 2rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .journey-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .journey-header h2 {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .journey-header p {
                    color: #999;
                    font-size: 1.2rem;
                }

                .journey-container {
                    display: flex;
                    gap: 40px;
                    overflow-x: auto;
                    scroll-snap-type: x proximity;
                    padding: 1rem 0.5rem;
                    scrollbar-width: none;
                }

                .journey-container::-webkit-scrollbar {
                    display: none;
                }

                .journey-slide {
                    flex: 0 0 300px;
                    scroll-snap-align: start;
                    background: rgba(26, 26, 26, 0.85);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    padding: 2rem;
                    transition: border-color 0.3s ease;
                }

                .journey-slide:hover {
                    border-color: rgba(30, 144, 255, 0.3);
                }

                .journey-step-number {
                    font-size: 0.9rem;
                    color: #1E90FF;
                    letter-spacing: 0.2em;
                }

                .journey-slide h3 {
                    color: #7EB2FF;
                    font-size: 1.3rem;
                    margin: 1rem 0;
                }

                .journey-slide p {
                    color: #999;
                    line-height: 1.6;
                }

                .journey-controls {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    margin-top: 2rem;
                }

                .journey-nav-btn {
                    width: 44px;
                    height: 44px;
                    border-radius: 50%;
                    border: 1px solid rgba(30, 144, 255, 0.3);
                    background: none;
                    color: #7EB2FF;
                    font-size: 1.5rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .journey-nav-btn:hover {
                    background: rgba(30, 144, 255, 0.1);
                    color: #fff;
                }

                .journey-progress-track {
                    flex: 1;
                    height: 4px;
                    border-radius: 2px;
                    background: rgba(255, 255, 255, 0.1);
                    overflow: hidden;
                }

                .journey-progress-fill {
                    height: 100%;
                    border-radius: 2px;
                    background: linear-gradient(90deg, #1E90FF, #7EB2FF);
                    transition: width 0.2s ease-out;
                }

                .journey-progress-fill.complete {
                    background: #7EB2FF;
                }

                @media (max-width: 768px) {
                    .patient-journey-section {
                        padding: 3rem 1rem;
                    }

                    .journey-header h2 {
                        font-size: 2rem;
                    }

                    .journey-slide {
                        flex: 0 0 260px;
                        padding: 1.5rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_left: f64, scroll_width: f64, client_width: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_left,
            scroll_width,
            client_width,
        }
    }

    #[test]
    fn progress_stays_within_bounds() {
        assert_eq!(progress_percent(metrics(0.0, 2000.0, 800.0)), 0.0);
        assert_eq!(progress_percent(metrics(600.0, 2000.0, 800.0)), 50.0);
        assert_eq!(progress_percent(metrics(1200.0, 2000.0, 800.0)), 100.0);
        // Overscroll on either side still clamps.
        assert_eq!(progress_percent(metrics(1500.0, 2000.0, 800.0)), 100.0);
        assert_eq!(progress_percent(metrics(-50.0, 2000.0, 800.0)), 0.0);
    }

    #[test]
    fn non_overflowing_content_reads_zero_percent() {
        assert_eq!(progress_percent(metrics(0.0, 800.0, 800.0)), 0.0);
        assert_eq!(progress_percent(metrics(120.0, 500.0, 800.0)), 0.0);
    }

    #[test]
    fn forward_wraps_to_start_near_the_end() {
        // max_scroll = 1200, within tolerance of the end.
        let plan = plan_advance(metrics(1198.0, 2000.0, 800.0), 340.0, 1);
        assert_eq!(plan, Some(ScrollStep::JumpTo(0.0)));
        // Exactly at the tolerance boundary still wraps.
        let plan = plan_advance(metrics(1195.0, 2000.0, 800.0), 340.0, 1);
        assert_eq!(plan, Some(ScrollStep::JumpTo(0.0)));
    }

    #[test]
    fn backward_wraps_to_end_near_the_start() {
        let plan = plan_advance(metrics(3.0, 2000.0, 800.0), 340.0, -1);
        assert_eq!(plan, Some(ScrollStep::JumpTo(1200.0)));
        let plan = plan_advance(metrics(5.0, 2000.0, 800.0), 340.0, -1);
        assert_eq!(plan, Some(ScrollStep::JumpTo(1200.0)));
    }

    #[test]
    fn interior_positions_move_one_slide() {
        let plan = plan_advance(metrics(600.0, 2000.0, 800.0), 340.0, 1);
        assert_eq!(plan, Some(ScrollStep::ShiftBy(340.0)));
        let plan = plan_advance(metrics(600.0, 2000.0, 800.0), 340.0, -1);
        assert_eq!(plan, Some(ScrollStep::ShiftBy(-340.0)));
    }

    #[test]
    fn advance_is_a_noop_without_overflow() {
        assert_eq!(plan_advance(metrics(0.0, 800.0, 800.0), 340.0, 1), None);
        assert_eq!(plan_advance(metrics(0.0, 500.0, 800.0), 340.0, -1), None);
    }
}
