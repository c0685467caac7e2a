use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::rows::{EndpointRow, InterfaceRow, RiskRow, ServiceRow, ThreatRow};
use crate::ui::state::table_slice::TableSlice;
use crate::usecase::primary_table::PrimaryTable;

/// Setup view: the editable primary node table and the endpoint list.
pub struct SetupState {
    pub primary: Signal<PrimaryTable>,
    pub endpoints: Signal<TableSlice<EndpointRow>>,
}

impl SetupState {
    pub fn new() -> Self {
        Self {
            primary: use_signal(PrimaryTable::new),
            endpoints: use_signal(TableSlice::default),
        }
    }
}

/// Detail view of a single endpoint.
pub struct EndpointState {
    pub interfaces: Signal<TableSlice<InterfaceRow>>,
    pub services: Signal<TableSlice<ServiceRow>>,
    pub threats: Signal<TableSlice<ThreatRow>>,
    pub vulnerabilities: Signal<TableSlice<RiskRow>>,
}

impl EndpointState {
    pub fn new() -> Self {
        Self {
            interfaces: use_signal(TableSlice::default),
            services: use_signal(TableSlice::default),
            threats: use_signal(TableSlice::default),
            vulnerabilities: use_signal(TableSlice::default),
        }
    }
}
