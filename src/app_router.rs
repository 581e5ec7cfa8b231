use valentine_core::{CardConfig, QUERY_KEYS};
use web_sys::UrlSearchParams;

pub(crate) fn load_init_config() -> CardConfig {
    let config = CardConfig::default().with_endpoint_override(default_notify_endpoint());
    match location_search() {
        Some(search) => apply_search(config, &search),
        None => config,
    }
}

fn default_notify_endpoint() -> Option<&'static str> {
    option_env!("VALENTINE_NOTIFY_ENDPOINT")
        .or(option_env!("TRUNK_PUBLIC_VALENTINE_NOTIFY_ENDPOINT"))
}

fn location_search() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    if search.trim().is_empty() {
        return None;
    }
    Some(search)
}

fn apply_search(mut config: CardConfig, search: &str) -> CardConfig {
    let Ok(params) = UrlSearchParams::new_with_str(search.trim()) else {
        gloo::console::warn!("ignoring unparsable query", search);
        return config;
    };
    for key in QUERY_KEYS {
        let Some(value) = params.get(key) else {
            continue;
        };
        if let Err(err) = config.apply_override(key, &value) {
            gloo::console::warn!("ignoring config override", err.to_string());
        }
    }
    config
}
