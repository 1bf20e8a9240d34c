use web_sys::MouseEvent;
use yew::prelude::*;

/// Which panel stays open after a question is clicked: clicking the open one
/// closes it, clicking any other closes the current one and opens it.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: String,
    open: bool,
    ontoggle: Callback<usize>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = {
        let ontoggle = props.ontoggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            ontoggle.emit(index);
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button class="faq-question" {onclick}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let open = use_state(|| None::<usize>);

    let ontoggle = {
        let open = open.clone();
        Callback::from(move |index: usize| {
            open.set(toggle_open(*open, index));
        })
    };

    let item = |index: usize, question: &str, body: Html| {
        html! {
            <FaqItem
                {index}
                question={question.to_string()}
                open={*open == Some(index)}
                ontoggle={ontoggle.clone()}
            >
                {body}
            </FaqItem>
        }
    };

    html! {
        <section class="faq-section">
            <h2>{"Preguntas frecuentes"}</h2>

            { item(0, "¿Cuánto demora la implementación?", html! {
                <p>{"Entre una y dos semanas. Clinara se conecta a su agenda actual y el equipo recibe una capacitación de 45 minutos. No hay que migrar fichas históricas para empezar."}</p>
            }) }

            { item(1, "¿Se integra con nuestra ficha clínica electrónica?", html! {
                <p>{"Sí. Trabajamos sobre los sistemas más usados en Chile y, si su centro usa uno propio, exportamos las notas en formato estándar para que su equipo las importe sin digitar nada de nuevo."}</p>
            }) }

            { item(2, "¿Qué pasa con los datos de mis pacientes?", html! {
                <>
                    <p>{"Los datos clínicos se cifran en tránsito y en reposo, y se almacenan en servidores dentro de la región. Nada se usa para entrenar modelos de terceros."}</p>
                    <p>{"Cada acceso queda registrado y su centro puede exportar o eliminar la información cuando lo decida."}</p>
                </>
            }) }

            { item(3, "¿El médico tiene que cambiar su forma de atender?", html! {
                <p>{"No. La consulta transcurre como siempre: el médico conversa con su paciente y revisa la nota propuesta al final. La última palabra sobre la ficha es siempre del profesional."}</p>
            }) }

            { item(4, "¿Cómo se cobra el servicio?", html! {
                <p>{"Una suscripción mensual por médico activo, sin contratos de permanencia. Agende una demo y le preparamos una propuesta con los números de su centro."}</p>
            }) }

            <style>
                {r#"
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                }

                .faq-section h2 {
                    font-size: 2.5rem;
                    margin-bottom: 2rem;
                    text-align: center;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .faq-item {
                    background: rgba(26, 26, 26, 0.85);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }

                .faq-item:hover {
                    border-color: rgba(30, 144, 255, 0.3);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.2rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    transition: all 0.3s ease;
                }

                .faq-question:hover {
                    color: #7EB2FF;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #7EB2FF;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.5s ease;
                    padding: 0 1.5rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 2000px;
                    padding: 0 1.5rem 1.5rem;
                }

                .faq-answer p {
                    color: #999;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }

                @media (max-width: 768px) {
                    .faq-section {
                        padding: 3rem 1rem;
                    }

                    .faq-section h2 {
                        font-size: 2rem;
                    }

                    .faq-question {
                        font-size: 1.1rem;
                        padding: 1rem;
                    }

                    .faq-answer {
                        padding: 0 1rem;
                    }

                    .faq-item.open .faq-answer {
                        padding: 0 1rem 1rem;
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

    #[test]
    fn opening_another_item_closes_the_current_one() {
        let open = Some(0);
        assert_eq!(toggle_open(open, 1), Some(1));
    }

    #[test]
    fn toggling_the_open_item_closes_it() {
        assert_eq!(toggle_open(Some(2), 2), None);
    }

    #[test]
    fn opening_from_all_closed() {
        assert_eq!(toggle_open(None, 3), Some(3));
    }
}
