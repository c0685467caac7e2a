use crate::domain::entities::record::{KEY_FIELD, VALUE_FIELD};
use crate::ui::components::table_model::ColumnDef;

pub fn primary_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("Key", KEY_FIELD),
        ColumnDef::new("Value", VALUE_FIELD),
    ]
}

pub fn endpoint_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("Endpoint", "endpoint").filterable(),
        ColumnDef::new("Hostname", "hostname"),
        ColumnDef::new("Host Type", "host_type").host_type(),
        ColumnDef::new("Mgmt Ifname", "mgmt_ifname"),
        ColumnDef::new("Mgmt Mac", "mgmt_mac"),
    ]
}

pub fn threat_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("Host", "host"),
        ColumnDef::new("Severity", "severity"),
        ColumnDef::new("Message", "message"),
    ]
}

pub fn risk_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("Host", "host"),
        ColumnDef::new("Tool", "tool"),
        ColumnDef::new("Req ID", "reqid"),
        ColumnDef::new("Severity", "severity"),
        ColumnDef::new("Message", "message"),
    ]
}

pub fn interface_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("Host", "host"),
        ColumnDef::new("If Name", "ifname"),
        ColumnDef::new("IP", "ip"),
        ColumnDef::new("Mac", "mac"),
    ]
}

pub fn service_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("Host", "host"),
        ColumnDef::new("Svc Name", "service"),
        ColumnDef::new("Status", "status"),
        ColumnDef::new("Description", "description"),
    ]
}
