use dioxus::prelude::*;

use crate::domain::entities::rows::ThreatRow;
use crate::ui::components::columns::threat_columns;
use crate::ui::components::data_table::DataTable;
use crate::ui::components::table_model::project;
use crate::ui::services::Services;
use crate::ui::state::table_slice::TableSlice;

#[component]
pub fn Threats() -> Element {
    let services = use_context::<Services>();
    let mut threats = use_signal(TableSlice::<ThreatRow>::default);

    let queries = services.queries.clone();
    use_future(move || {
        let queries = queries.clone();
        async move {
            let result = queries.load_threats().await;
            threats.write().complete(result);
        }
    });

    let columns = threat_columns();
    let rows = project(threats.read().rows(), &columns);
    let caption = threats.read().caption();

    rsx! {
        div { style: "max-width: 960px; margin: 0 auto;",
            DataTable { title: "Threats Data", columns, rows, caption }
        }
    }
}
