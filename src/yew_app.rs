use std::rc::Rc;

use valentine_core::{deliver_then_advance, CardConfig, FormData, ModalEvent, ModalFlow, ModalState};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app_runtime;
use crate::escaping_button::EscapingButton;
use crate::heart::Heart;
use crate::identity_modal::IdentityModal;
use crate::notify;
use crate::success_modal::SuccessModal;
use crate::toggle_button::ToggleButton;

#[derive(Clone, Debug, Default, PartialEq)]
struct ModalStore {
    flow: ModalFlow,
}

impl Reducible for ModalStore {
    type Action = ModalEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.flow.apply(action);
        if next == self.flow {
            if let ModalEvent::IdentityValidated { generation } = action {
                gloo::console::warn!("dropping stale identity validation", generation);
            }
            return self;
        }
        gloo::console::log!("modal", self.flow.state.label(), "->", next.state.label());
        Rc::new(Self { flow: next })
    }
}

#[derive(Properties)]
struct AppProps {
    config: Rc<CardConfig>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config)
    }
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let modal = use_reducer(ModalStore::default);

    let on_affirmative = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.dispatch(ModalEvent::AffirmativeTriggered))
    };
    let on_close = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.dispatch(ModalEvent::Closed))
    };
    let on_identity_validated = {
        let dispatcher = modal.dispatcher();
        let endpoint = config.notify_endpoint.clone();
        // The form that is open at render time is the one that can submit.
        let generation = modal.flow.generation;
        Callback::from(move |data: FormData| {
            let dispatcher = dispatcher.clone();
            let endpoint = endpoint.clone();
            spawn_local(async move {
                let delivery = deliver_then_advance(
                    generation,
                    endpoint.as_deref(),
                    &data,
                    notify::send_notification,
                )
                .await;
                if let Some(err) = delivery.failure {
                    gloo::console::warn!(
                        "notification failed, continuing to success",
                        err.to_string()
                    );
                }
                dispatcher.dispatch(delivery.event);
            });
        })
    };

    let overlay = match modal.flow.state {
        ModalState::None => html! {},
        ModalState::Identity => html! {
            <IdentityModal on_continue={on_identity_validated} on_close={on_close.clone()} />
        },
        ModalState::Success => html! { <SuccessModal on_close={on_close.clone()} /> },
    };

    html! {
        <main class="card">
            <div class="card-backdrop">
                <div class="glow glow-top"></div>
                <div class="glow glow-bottom"></div>
            </div>
            <h1 class="card-title">{ "Veux-tu être ma valentine?" }</h1>
            <div class="card-heart">
                <Heart />
            </div>
            <div class="card-buttons">
                <div class="card-slot">
                    <EscapingButton margin={config.evade_margin} />
                </div>
                <div class="card-slot">
                    <ToggleButton policy={config.toggle_policy} on_trigger={on_affirmative} />
                </div>
            </div>
            {overlay}
        </main>
    }
}

pub(crate) fn run() {
    let config = app_runtime::init_config();
    gloo::console::log!(
        "valentine start",
        config.toggle_policy.as_str(),
        config.evade_margin,
        config.notify_endpoint.is_some()
    );
    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
