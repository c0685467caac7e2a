use dioxus::prelude::*;

use crate::ui::shell::Shell;
use crate::ui::views::endpoint::Endpoint;
use crate::ui::views::not_found::NotFound;
use crate::ui::views::setup::Setup;
use crate::ui::views::threats::Threats;
use crate::ui::views::vulnerabilities::Vulnerabilities;

#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Setup {},
        #[route("/threats")]
        Threats {},
        #[route("/vulnerabilities")]
        Vulnerabilities {},
        #[route("/endpoint/:id")]
        Endpoint { id: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
