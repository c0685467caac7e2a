use dioxus::prelude::*;

use crate::ui::routes::Route;
use crate::ui::services::Services;

const NAV_LINK_STYLE: &str = "display: block; padding: 10px 16px; color: #1f1f1f; text-decoration: none;";

#[component]
pub fn Shell() -> Element {
    let services = use_context::<Services>();
    let mut table_names = use_signal(|| None::<Vec<String>>);

    let queries = services.queries.clone();
    use_future(move || {
        let queries = queries.clone();
        async move {
            if let Ok(names) = queries.list_tables().await {
                table_names.set(Some(names));
            }
        }
    });

    let backend_label = match table_names() {
        Some(names) => format!("backend: {} tables", names.len()),
        None => String::new(),
    };

    rsx! {
        div { style: "font-family: sans-serif; min-height: 100vh; display: flex; flex-direction: column;",
            header { style: "background: #001529; color: #fff; padding: 12px 24px; display: flex; justify-content: space-between; align-items: center;",
                span { style: "font-size: 25px;", "LYDIAN" }
                span { style: "font-size: 12px; color: #bfbfbf;", "{backend_label}" }
            }
            div { style: "display: flex; flex: 1;",
                nav { style: "width: 200px; background: #fff; border-right: 1px solid #f0f0f0;",
                    Link { to: Route::Setup {}, style: NAV_LINK_STYLE, "Setup" }
                    Link { to: Route::Threats {}, style: NAV_LINK_STYLE, "Threats" }
                    Link { to: Route::Vulnerabilities {}, style: NAV_LINK_STYLE, "Vulnerabilities" }
                }
                main { style: "flex: 1; padding: 24px; background: #f0f2f5;",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
