use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Window};

use valentine_core::embed::{
    plan_embed, script_selector, EmbedPlan, EMBED_GLOBAL, EMBED_REDRAW, EMBED_SCRIPT_URL,
};

/// Adds the sticker script once per document and redraws embeds when the
/// script is already loaded from an earlier mount.
pub(crate) fn ensure_embed() -> EmbedPlan {
    let Some(window) = web_sys::window() else {
        return EmbedPlan::default();
    };
    let Some(document) = window.document() else {
        return EmbedPlan::default();
    };
    let present = script_present(&document);
    let redraw = redraw_entry(&window);
    let plan = plan_embed(present, redraw.is_some());
    if plan.inject_script {
        inject_script(&document);
    }
    if let Some((target, draw)) = redraw {
        if let Err(err) = draw.call0(&target) {
            gloo::console::warn!("embed redraw failed", err);
        }
    }
    plan
}

fn script_present(document: &Document) -> bool {
    matches!(document.query_selector(&script_selector()), Ok(Some(_)))
}

fn inject_script(document: &Document) {
    let Some(body) = document.body() else {
        return;
    };
    let Ok(script) = document.create_element("script") else {
        return;
    };
    if script.set_attribute("src", EMBED_SCRIPT_URL).is_err() {
        return;
    }
    // Without the flag the script still loads, only blocking.
    if let Err(err) = script.set_attribute("async", "") {
        gloo::console::warn!("embed script async flag rejected", err);
    }
    if body.append_child(&script).is_ok() {
        gloo::console::log!("embed script injected", EMBED_SCRIPT_URL);
    }
}

fn redraw_entry(window: &Window) -> Option<(JsValue, Function)> {
    let global = Reflect::get(window, &JsValue::from_str(EMBED_GLOBAL)).ok()?;
    if global.is_null() || global.is_undefined() {
        return None;
    }
    let draw = Reflect::get(&global, &JsValue::from_str(EMBED_REDRAW))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    Some((global, draw))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use js_sys::Object;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn script_count() -> u32 {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.query_selector_all(&script_selector()).ok())
            .map(|list| list.length())
            .unwrap_or(0)
    }

    #[wasm_bindgen_test]
    fn repeated_mounts_inject_once_and_redraw() {
        let window = web_sys::window().expect("window available");
        let calls = std::rc::Rc::new(std::cell::Cell::new(0u32));
        let calls_in_draw = calls.clone();
        let draw = Closure::<dyn Fn()>::new(move || {
            calls_in_draw.set(calls_in_draw.get() + 1);
        });
        let fake = Object::new();
        Reflect::set(&fake, &JsValue::from_str(EMBED_REDRAW), draw.as_ref())
            .expect("set draw");
        Reflect::set(&window, &JsValue::from_str(EMBED_GLOBAL), &fake).expect("set global");

        ensure_embed();
        let second = ensure_embed();

        assert_eq!(script_count(), 1);
        let script = window
            .document()
            .and_then(|document| document.query_selector(&script_selector()).ok().flatten())
            .expect("injected script");
        assert!(script.has_attribute("async"));
        assert!(!second.inject_script);
        assert!(second.redraw);
        assert_eq!(calls.get(), 2);
        draw.forget();
    }
}
