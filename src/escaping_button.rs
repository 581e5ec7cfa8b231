use js_sys::Math;
use valentine_core::{EvadeState, Rect, Viewport};
use web_sys::Element;
use yew::prelude::*;

use crate::live_state::LiveState;

#[derive(Properties, PartialEq)]
pub(crate) struct EscapingButtonProps {
    pub(crate) margin: f64,
}

fn viewport_size() -> Option<Viewport> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport { width, height })
}

fn element_bounds(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// The "Oui" that runs away. It has no outcome of its own.
#[function_component(EscapingButton)]
pub(crate) fn escaping_button(props: &EscapingButtonProps) -> Html {
    let button_ref = use_node_ref();
    let state = use_state(EvadeState::default);
    let live = use_mut_ref(EvadeState::default);
    let evade = LiveState::new(state, live);

    let on_mouse_enter = {
        let evade = evade.clone();
        let button_ref = button_ref.clone();
        let margin = props.margin;
        Callback::from(move |_: MouseEvent| {
            let Some(element) = button_ref.cast::<Element>() else {
                return;
            };
            let Some(viewport) = viewport_size() else {
                return;
            };
            let bounds = element_bounds(&element);
            let sample = (Math::random(), Math::random());
            evade.update(|state| state.relocate(bounds, viewport, margin, sample));
        })
    };
    let on_click = Callback::from(|event: MouseEvent| event.prevent_default());

    html! {
        <button
            id="escaping-button"
            ref={button_ref}
            class="card-button card-button-escape"
            type="button"
            style={evade.rendered().style()}
            onmouseenter={on_mouse_enter}
            onclick={on_click}
        >
            { "Oui" }
        </button>
    }
}
