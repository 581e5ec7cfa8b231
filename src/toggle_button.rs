use valentine_core::{PointerKind, ToggleOutcome, TogglePolicy, ToggleState};
use web_sys::{PointerEvent, TouchEvent};
use yew::prelude::*;

use crate::live_state::LiveState;

#[derive(Properties, PartialEq)]
pub(crate) struct ToggleButtonProps {
    pub(crate) policy: TogglePolicy,
    pub(crate) on_trigger: Callback<()>,
}

#[function_component(ToggleButton)]
pub(crate) fn toggle_button(props: &ToggleButtonProps) -> Html {
    let policy = props.policy;
    let state = use_state(|| ToggleState::new(policy));
    let live = use_mut_ref(|| ToggleState::new(policy));
    let toggle = LiveState::new(state, live);

    let on_pointer_enter = {
        let toggle = toggle.clone();
        Callback::from(move |event: PointerEvent| {
            let kind = PointerKind::from_pointer_type(&event.pointer_type());
            toggle.update(|state| state.pointer_enter(kind));
        })
    };
    let on_pointer_leave = {
        let toggle = toggle.clone();
        Callback::from(move |event: PointerEvent| {
            let kind = PointerKind::from_pointer_type(&event.pointer_type());
            toggle.update(|state| state.pointer_leave(kind));
        })
    };
    let on_touch_start = {
        let toggle = toggle.clone();
        Callback::from(move |_: TouchEvent| toggle.update(ToggleState::touch_start))
    };
    let on_touch_end = {
        let toggle = toggle.clone();
        Callback::from(move |_: TouchEvent| toggle.update(ToggleState::touch_end))
    };
    let on_click = {
        let toggle = toggle.clone();
        let on_trigger = props.on_trigger.clone();
        Callback::from(move |_: MouseEvent| {
            if toggle.update(ToggleState::click) == ToggleOutcome::Triggered {
                on_trigger.emit(());
            }
        })
    };

    html! {
        <button
            id="toggle-button"
            class="card-button card-button-toggle"
            type="button"
            onpointerenter={on_pointer_enter}
            onpointerleave={on_pointer_leave}
            ontouchstart={on_touch_start}
            ontouchend={on_touch_end}
            onclick={on_click}
        >
            { toggle.rendered().label() }
        </button>
    }
}
