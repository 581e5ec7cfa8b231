pub const EMBED_SCRIPT_URL: &str = "https://tenor.com/embed.js";
pub const EMBED_GLOBAL: &str = "Tenor";
pub const EMBED_REDRAW: &str = "draw";

pub const STICKER_POST_ID: &str = "13935913557128666445";
pub const STICKER_URL: &str =
    "https://tenor.com/view/love-i-love-you-i-love-you-so-much-gif-13935913557128666445";
pub const STICKER_TITLE: &str = "Love I Love You Sticker";
pub const STICKER_SEARCH_URL: &str = "https://tenor.com/search/love-stickers";
pub const STICKER_SEARCH_TITLE: &str = "Love Stickers";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmbedPlan {
    pub inject_script: bool,
    pub redraw: bool,
}

/// Ensure-then-redraw: inject only when the script tag is missing, redraw
/// whenever the global entry point is already loaded. Running the plan twice
/// never adds a second tag.
pub fn plan_embed(script_present: bool, redraw_available: bool) -> EmbedPlan {
    EmbedPlan {
        inject_script: !script_present,
        redraw: redraw_available,
    }
}

pub fn script_selector() -> String {
    format!("script[src=\"{EMBED_SCRIPT_URL}\"]")
}
