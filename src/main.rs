mod app_router;
mod app_runtime;
mod embed;
mod escaping_button;
mod heart;
mod identity_modal;
mod live_state;
mod notify;
mod success_modal;
mod toggle_button;
mod yew_app;

fn main() {
    console_error_panic_hook::set_once();
    app_runtime::set_init_config(app_router::load_init_config());
    yew_app::run();
}
