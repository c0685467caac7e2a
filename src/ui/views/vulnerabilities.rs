use dioxus::prelude::*;

use crate::domain::entities::rows::RiskRow;
use crate::ui::components::columns::risk_columns;
use crate::ui::components::data_table::DataTable;
use crate::ui::components::table_model::project;
use crate::ui::services::Services;
use crate::ui::state::table_slice::TableSlice;

#[component]
pub fn Vulnerabilities() -> Element {
    let services = use_context::<Services>();
    let mut risks = use_signal(TableSlice::<RiskRow>::default);

    let queries = services.queries.clone();
    use_future(move || {
        let queries = queries.clone();
        async move {
            let result = queries.load_risks().await;
            risks.write().complete(result);
        }
    });

    let columns = risk_columns();
    let rows = project(risks.read().rows(), &columns);
    let caption = risks.read().caption();

    rsx! {
        div { style: "max-width: 960px; margin: 0 auto;",
            DataTable { title: "Vulnerabilities Data", columns, rows, caption }
        }
    }
}
