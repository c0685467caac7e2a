use dioxus::prelude::*;

use crate::ui::routes::Route;

#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
