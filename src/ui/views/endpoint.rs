use dioxus::prelude::*;

use crate::ui::components::columns::{
    interface_columns, risk_columns, service_columns, threat_columns,
};
use crate::ui::components::data_table::DataTable;
use crate::ui::components::table_model::project;
use crate::ui::routes::Route;
use crate::ui::services::Services;
use crate::ui::state::app_state::EndpointState;

/// Detail tables of one endpoint. The four loads run independently and each
/// fills its own table when it lands.
#[component]
pub fn Endpoint(id: String) -> Element {
    let services = use_context::<Services>();
    let EndpointState {
        mut interfaces,
        services: mut service_rows,
        mut threats,
        mut vulnerabilities,
    } = EndpointState::new();

    let queries = services.queries.clone();
    let endpoint = id.clone();
    use_future(move || {
        let queries = queries.clone();
        let endpoint = endpoint.clone();
        async move {
            let result = queries.load_endpoint_interfaces(&endpoint).await;
            interfaces.write().complete(result);
        }
    });

    let queries = services.queries.clone();
    let endpoint = id.clone();
    use_future(move || {
        let queries = queries.clone();
        let endpoint = endpoint.clone();
        async move {
            let result = queries.load_endpoint_services(&endpoint).await;
            service_rows.write().complete(result);
        }
    });

    let queries = services.queries.clone();
    let endpoint = id.clone();
    use_future(move || {
        let queries = queries.clone();
        let endpoint = endpoint.clone();
        async move {
            let result = queries.load_endpoint_threats(&endpoint).await;
            threats.write().complete(result);
        }
    });

    let queries = services.queries.clone();
    let endpoint = id.clone();
    use_future(move || {
        let queries = queries.clone();
        let endpoint = endpoint.clone();
        async move {
            let result = queries.load_endpoint_risks(&endpoint).await;
            vulnerabilities.write().complete(result);
        }
    });

    let interface_cols = interface_columns();
    let interface_rows = project(interfaces.read().rows(), &interface_cols);
    let service_cols = service_columns();
    let service_view = project(service_rows.read().rows(), &service_cols);
    let threat_cols = threat_columns();
    let threat_rows = project(threats.read().rows(), &threat_cols);
    let risk_cols = risk_columns();
    let risk_rows = project(vulnerabilities.read().rows(), &risk_cols);

    rsx! {
        div { style: "max-width: 960px; margin: 0 auto;",
            Link { to: Route::Setup {}, style: "font-size: 24px; color: #000; text-decoration: none;", "← Back" }
            h2 { style: "text-align: center;", "Endpoint {id}" }
            DataTable {
                title: "Interfaces Data",
                columns: interface_cols,
                rows: interface_rows,
                caption: interfaces.read().caption(),
            }
            DataTable {
                title: "Services Data",
                columns: service_cols,
                rows: service_view,
                caption: service_rows.read().caption(),
            }
            DataTable {
                title: "Threats Data",
                columns: threat_cols,
                rows: threat_rows,
                caption: threats.read().caption(),
            }
            DataTable {
                title: "Vulnerabilities Data",
                columns: risk_cols,
                rows: risk_rows,
                caption: vulnerabilities.read().caption(),
            }
        }
    }
}
