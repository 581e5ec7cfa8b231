use std::cell::RefCell;
use std::rc::Rc;

use yew::UseStateHandle;

/// Render state plus a live copy that event handlers read, so two events
/// landing before the next render still see each other's writes.
pub(crate) struct LiveState<T: 'static> {
    state: UseStateHandle<T>,
    live: Rc<RefCell<T>>,
}

impl<T: 'static> Clone for LiveState<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            live: self.live.clone(),
        }
    }
}

impl<T: Clone + 'static> LiveState<T> {
    pub(crate) fn new(state: UseStateHandle<T>, live: Rc<RefCell<T>>) -> Self {
        Self { state, live }
    }

    pub(crate) fn rendered(&self) -> &T {
        &self.state
    }

    pub(crate) fn update<R>(&self, apply: impl FnOnce(&mut T) -> R) -> R {
        let (next, out) = {
            let mut live = self.live.borrow_mut();
            let out = apply(&mut live);
            (live.clone(), out)
        };
        self.state.set(next);
        out
    }
}
