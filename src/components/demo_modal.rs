use web_sys::{EventTarget, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DemoModalProps {
    pub open: bool,
    pub onclose: Callback<()>,
}

/// A click closes the modal only when it lands on the backdrop itself;
/// clicks inside the content arrive with a different target.
fn click_closes_modal<T: PartialEq>(target: Option<&T>, backdrop: Option<&T>) -> bool {
    matches!((target, backdrop), (Some(target), Some(backdrop)) if target == backdrop)
}

/// Demo-request dialog. The HubSpot form mounts into `#hubspot-form-target`
/// at startup, so the node has to exist even while the modal is hidden; it is
/// kept mounted and toggled with a class instead of being unmounted.
#[function_component(DemoModal)]
pub fn demo_modal(props: &DemoModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let backdrop_ref = backdrop_ref.clone();
        let onclose = props.onclose.clone();
        Callback::from(move |e: MouseEvent| {
            let backdrop = backdrop_ref.get().map(EventTarget::from);
            if click_closes_modal(e.target().as_ref(), backdrop.as_ref()) {
                onclose.emit(());
            }
        })
    };

    let on_close_click = {
        let onclose = props.onclose.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            onclose.emit(());
        })
    };

    html! {
        <div
            class={classes!("modal-overlay", (!props.open).then_some("hidden"))}
            ref={backdrop_ref}
            onclick={on_backdrop_click}
        >
            <div class="modal-content">
                <button class="close-modal" onclick={on_close_click}>{"×"}</button>
                <h3>{"Agende una demo"}</h3>
                <p>{"Cuéntenos sobre su centro y coordinamos una demostración de 30 minutos."}</p>
                <div id="hubspot-form-target"></div>
            </div>

            <style>
                {r#"
                .modal-overlay {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    background: rgba(0, 0, 0, 0.85);
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    z-index: 1000;
                }

                .modal-overlay.hidden {
                    display: none;
                }

                .modal-content {
                    position: relative;
                    background: #1a1a1a;
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    border-radius: 12px;
                    padding: 2rem;
                    max-width: 500px;
                    width: 90%;
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.3);
                }

                .modal-content h3 {
                    color: #7EB2FF;
                    margin-bottom: 1rem;
                }

                .modal-content p {
                    color: #CCC;
                    margin-bottom: 1rem;
                }

                .close-modal {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: #999;
                    font-size: 1.5rem;
                    cursor: pointer;
                    transition: color 0.3s ease;
                }

                .close-modal:hover {
                    color: #fff;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_click_closes() {
        assert!(click_closes_modal(Some(&"overlay"), Some(&"overlay")));
    }

    #[test]
    fn content_click_stays_open() {
        assert!(!click_closes_modal(Some(&"content"), Some(&"overlay")));
    }

    #[test]
    fn missing_nodes_never_close() {
        assert!(!click_closes_modal(None::<&&str>, Some(&"overlay")));
        assert!(!click_closes_modal(Some(&"overlay"), None));
    }
}
