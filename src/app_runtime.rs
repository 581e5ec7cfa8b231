use std::cell::RefCell;

use valentine_core::CardConfig;

use crate::app_router;

thread_local! {
    static INIT_CONFIG: RefCell<Option<CardConfig>> = RefCell::new(None);
}

pub(crate) fn set_init_config(config: CardConfig) {
    INIT_CONFIG.with(|slot| {
        *slot.borrow_mut() = Some(config);
    });
}

pub(crate) fn init_config() -> CardConfig {
    INIT_CONFIG.with(|slot| slot.borrow().clone())
        .unwrap_or_else(app_router::load_init_config)
}
