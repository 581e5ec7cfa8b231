use valentine_core::identity::{day_choices, month_choices, year_choices};
use valentine_core::{FormData, FormField, IdentityForm, SubmitOutcome};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::live_state::LiveState;

#[derive(Properties, PartialEq)]
pub(crate) struct IdentityModalProps {
    pub(crate) on_continue: Callback<FormData>,
    pub(crate) on_close: Callback<()>,
}

fn on_text_input(form: LiveState<IdentityForm>, field: FormField) -> Callback<InputEvent> {
    Callback::from(move |event: InputEvent| {
        let input: HtmlInputElement = event.target_unchecked_into();
        form.update(|state| state.edit(field, input.value()));
    })
}

fn on_select_change(form: LiveState<IdentityForm>, field: FormField) -> Callback<Event> {
    Callback::from(move |event: Event| {
        let select: HtmlSelectElement = event.target_unchecked_into();
        form.update(|state| state.edit(field, select.value()));
    })
}

fn select_options(choices: Vec<String>, selected: &str) -> Html {
    choices
        .into_iter()
        .map(|value| {
            let is_selected = value == selected;
            html! {
                <option value={value.clone()} selected={is_selected}>{ value }</option>
            }
        })
        .collect::<Html>()
}

fn spinner() -> Html {
    html! {
        <span class="busy">
            <svg class="spinner" viewBox="0 0 24 24" aria-hidden="true">
                <circle class="spinner-track" cx="12" cy="12" r="10" />
                <path class="spinner-head" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z" />
            </svg>
            { "Vérification en cours..." }
        </span>
    }
}

#[function_component(IdentityModal)]
pub(crate) fn identity_modal(props: &IdentityModalProps) -> Html {
    let state = use_state(IdentityForm::default);
    let live = use_mut_ref(IdentityForm::default);
    let form = LiveState::new(state, live);

    let on_address_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlTextAreaElement = event.target_unchecked_into();
            form.update(|state| state.edit(FormField::Address, input.value()));
        })
    };
    let on_submit = {
        let form = form.clone();
        let on_continue = props.on_continue.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match form.update(IdentityForm::submit) {
                SubmitOutcome::Accepted(data) => {
                    gloo::console::log!("identity verified");
                    on_continue.emit(data);
                }
                SubmitOutcome::Rejected(err) => {
                    gloo::console::log!("identity rejected", err.to_string());
                }
                SubmitOutcome::Ignored => {}
            }
        })
    };
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop = Callback::from(|event: MouseEvent| event.stop_propagation());

    let view = form.rendered().clone();
    let busy = view.is_submitting();
    let data = view.data;

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class="modal-card" onclick={stop}>
                <h2 class="modal-title">{ "Vérifier l'identité" }</h2>
                { if let Some(message) = view.error {
                    html! { <div id="identity-error" class="form-error">{ message }</div> }
                } else {
                    html! {}
                }}
                <form id="identity-form" class="identity-form" onsubmit={on_submit}>
                    <div class="field">
                        <label for="first-name">{ "Prénom" }</label>
                        <input
                            id="first-name"
                            type="text"
                            required={true}
                            disabled={busy}
                            value={data.first_name.clone()}
                            oninput={on_text_input(form.clone(), FormField::FirstName)}
                            placeholder="Ex: Maëva"
                        />
                    </div>
                    <div class="field">
                        <label for="last-name">{ "Nom" }</label>
                        <input
                            id="last-name"
                            type="text"
                            required={true}
                            disabled={busy}
                            value={data.last_name.clone()}
                            oninput={on_text_input(form.clone(), FormField::LastName)}
                            placeholder="Ex: Bagur"
                        />
                    </div>
                    <div class="field">
                        <label for="dob-day">{ "Date de naissance" }</label>
                        <div class="date-row">
                            <select
                                id="dob-day"
                                disabled={busy}
                                onchange={on_select_change(form.clone(), FormField::DobDay)}
                            >
                                { select_options(day_choices(), &data.dob_day) }
                            </select>
                            <select
                                id="dob-month"
                                disabled={busy}
                                onchange={on_select_change(form.clone(), FormField::DobMonth)}
                            >
                                { select_options(month_choices(), &data.dob_month) }
                            </select>
                            <select
                                id="dob-year"
                                disabled={busy}
                                onchange={on_select_change(form.clone(), FormField::DobYear)}
                            >
                                { select_options(year_choices(), &data.dob_year) }
                            </select>
                        </div>
                    </div>
                    <div class="field">
                        <label for="address">{ "Adresse" }</label>
                        <textarea
                            id="address"
                            rows="3"
                            required={true}
                            disabled={busy}
                            value={data.address.clone()}
                            oninput={on_address_input}
                            placeholder="Où habites-tu ?"
                        />
                    </div>
                    <button id="identity-submit" class="submit-button" type="submit" disabled={busy}>
                        { if busy { spinner() } else { html! { "Continuer" } } }
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(on_continue: Callback<FormData>) -> Element {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let root = document.create_element("div").expect("create test root");
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append test root");
        yew::Renderer::<IdentityModal>::with_root_and_props(
            root.clone(),
            IdentityModalProps {
                on_continue,
                on_close: Callback::noop(),
            },
        )
        .render();
        root
    }

    fn find<T: JsCast>(root: &Element, selector: &str) -> T {
        root.query_selector(selector)
            .expect("query")
            .unwrap_or_else(|| panic!("{selector} rendered"))
            .dyn_into::<T>()
            .unwrap_or_else(|_| panic!("{selector} type"))
    }

    fn type_into(root: &Element, selector: &str, value: &str) {
        let input: HtmlInputElement = find(root, selector);
        input.set_value(value);
        let event = Event::new("input").expect("event");
        input.dispatch_event(&event).expect("dispatch");
    }

    fn choose(root: &Element, selector: &str, value: &str) {
        let select: HtmlSelectElement = find(root, selector);
        select.set_value(value);
        let event = Event::new("change").expect("event");
        select.dispatch_event(&event).expect("dispatch");
    }

    async fn fill(root: &Element, day: &str) {
        TimeoutFuture::new(10).await;
        type_into(root, "#first-name", "maeva");
        type_into(root, "#last-name", "BAGUR");
        choose(root, "#dob-day", day);
        choose(root, "#dob-month", "01");
        choose(root, "#dob-year", "2001");
        let address: HtmlTextAreaElement = find(root, "#address");
        address.set_value("sous le pont");
        address
            .dispatch_event(&Event::new("input").expect("event"))
            .expect("dispatch");
        TimeoutFuture::new(10).await;
    }

    #[wasm_bindgen_test(async)]
    async fn wrong_date_shows_rejection_and_keeps_values() {
        let accepted = Rc::new(RefCell::new(None::<FormData>));
        let sink = accepted.clone();
        let root = mount(Callback::from(move |data| *sink.borrow_mut() = Some(data)));
        fill(&root, "26").await;

        find::<HtmlElement>(&root, "#identity-submit").click();
        TimeoutFuture::new(10).await;

        let error: Element = find(&root, "#identity-error");
        assert_eq!(
            error.text_content().unwrap_or_default(),
            valentine_core::REJECTION_MESSAGE
        );
        assert_eq!(find::<HtmlInputElement>(&root, "#first-name").value(), "maeva");
        assert_eq!(find::<HtmlSelectElement>(&root, "#dob-day").value(), "26");
        assert!(!find::<HtmlInputElement>(&root, "#first-name").disabled());
        assert!(accepted.borrow().is_none());
        root.remove();
    }

    #[wasm_bindgen_test(async)]
    async fn correct_identity_locks_form_and_hands_over_data() {
        let accepted = Rc::new(RefCell::new(None::<FormData>));
        let sink = accepted.clone();
        let root = mount(Callback::from(move |data| *sink.borrow_mut() = Some(data)));
        fill(&root, "27").await;

        find::<HtmlElement>(&root, "#identity-submit").click();
        TimeoutFuture::new(10).await;

        let data = accepted.borrow().clone().expect("callback invoked");
        assert_eq!(data.address, "sous le pont");
        assert!(find::<HtmlInputElement>(&root, "#first-name").disabled());
        assert!(root.query_selector("#identity-error").expect("query").is_none());
        root.remove();
    }
}
