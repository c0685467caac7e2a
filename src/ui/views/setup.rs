use dioxus::prelude::*;

use crate::ui::components::columns::endpoint_columns;
use crate::ui::components::data_table::DataTable;
use crate::ui::components::primary_table::PrimaryNodeTable;
use crate::ui::components::table_model::project;
use crate::ui::routes::Route;
use crate::ui::services::Services;
use crate::ui::state::app_state::SetupState;

#[component]
pub fn Setup() -> Element {
    let services = use_context::<Services>();
    let navigator = use_navigator();
    let SetupState {
        mut primary,
        mut endpoints,
    } = SetupState::new();

    let queries = services.queries.clone();
    use_future(move || {
        let queries = queries.clone();
        async move {
            if let Ok(records) = queries.load_runner().await {
                primary.write().load(records);
            }
        }
    });

    let queries = services.queries.clone();
    use_future(move || {
        let queries = queries.clone();
        async move {
            let result = queries.load_endpoints().await;
            endpoints.write().complete(result);
        }
    });

    let columns = endpoint_columns();
    let endpoint_rows = project(endpoints.read().rows(), &columns);
    let caption = endpoints.read().caption();

    rsx! {
        div {
            div { style: "max-width: 720px; margin: 0 auto 30px;",
                PrimaryNodeTable { table: primary }
            }
            DataTable {
                title: "Endpoints Data",
                columns,
                rows: endpoint_rows,
                caption,
                on_row_click: move |index: usize| {
                    let endpoint = endpoints
                        .read()
                        .rows()
                        .get(index)
                        .map(|row| row.endpoint.clone());
                    if let Some(id) = endpoint {
                        let _ = navigator.push(Route::Endpoint { id });
                    }
                },
            }
        }
    }
}
