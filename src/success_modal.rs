use valentine_core::embed::{
    STICKER_POST_ID, STICKER_SEARCH_TITLE, STICKER_SEARCH_URL, STICKER_TITLE, STICKER_URL,
};
use yew::prelude::*;

use crate::embed;

#[derive(Properties, PartialEq)]
pub(crate) struct SuccessModalProps {
    pub(crate) on_close: Callback<()>,
}

#[function_component(SuccessModal)]
pub(crate) fn success_modal(props: &SuccessModalProps) -> Html {
    use_effect_with((), |_| {
        embed::ensure_embed();
        || ()
    });

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div id="success-modal" class="modal-backdrop modal-backdrop-success" onclick={on_backdrop}>
            <div class="modal-card modal-card-success" onclick={stop}>
                <div class="modal-glow"></div>
                <h2 class="success-title">{ "Parfait, puisque y'a que toi qui le mérite" }</h2>
                <div class="sticker-frame">
                    <div
                        class="tenor-gif-embed"
                        data-postid={STICKER_POST_ID}
                        data-share-method="host"
                        data-aspect-ratio="1"
                        data-width="100%"
                    >
                        <a href={STICKER_URL}>{ STICKER_TITLE }</a>
                        { " from " }
                        <a href={STICKER_SEARCH_URL}>{ STICKER_SEARCH_TITLE }</a>
                    </div>
                </div>
            </div>
        </div>
    }
}
