use dioxus::prelude::*;
use tracing::debug;

use crate::ui::routes::Route;

/// Unknown paths land on Setup.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();
    use_effect(move || {
        debug!(path = %segments.join("/"), "unknown route, redirecting to setup");
        let _ = navigator.replace(Route::Setup {});
    });

    rsx! {}
}
