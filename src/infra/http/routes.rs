use reqwest::Url;

use crate::usecase::ports::backend::EndpointTable;

pub const RUNNER: &str = "api/v1/tables/runner";
pub const ENDPOINTS: &str = "api/v1/tables/endpoints";
pub const THREATS: &str = "api/v1/tables/threats";
pub const RISKS: &str = "api/v1/tables/risks";
pub const TABLE_NAMES: &str = "tables";

/// Writes go to the bare table path; the server only looks at the segment
/// after `tables`.
pub const RUNNER_WRITE: &str = "tables/runner";

const ENDPOINTS_PREFIX: [&str; 3] = ["api", "v1", "endpoints"];

/// Appends `api/v1/endpoints/{endpoint}/{table}` to `base`. The endpoint id
/// is pushed as a single percent-encoded segment.
///
/// Returns `None` for bases that cannot carry a path, such as `mailto:` URLs.
pub fn endpoint_table(base: &Url, endpoint: &str, table: EndpointTable) -> Option<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .extend(ENDPOINTS_PREFIX)
        .push(endpoint.trim())
        .push(table.segment());
    Some(url)
}

/// Joins a relative path onto a base URL that ends with `/`.
pub fn join(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url, path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(url: &str) -> Url {
        Url::parse(url).expect("base url should parse")
    }

    fn endpoint_url(base_url: &str, endpoint: &str, table: EndpointTable) -> String {
        endpoint_table(&base(base_url), endpoint, table)
            .expect("http base should take path segments")
            .to_string()
    }

    #[test]
    fn endpoint_table_paths_follow_backend_layout() {
        assert_eq!(
            endpoint_url("http://localhost:8008/", "10.1.1.5", EndpointTable::Interfaces),
            "http://localhost:8008/api/v1/endpoints/10.1.1.5/interfaces"
        );
        assert_eq!(
            endpoint_url("http://localhost:8008/", " 10.1.1.5 ", EndpointTable::Risks),
            "http://localhost:8008/api/v1/endpoints/10.1.1.5/risks"
        );
        assert_eq!(
            endpoint_url("http://lydian:9000/ui/", "node-7", EndpointTable::Services),
            "http://lydian:9000/ui/api/v1/endpoints/node-7/services"
        );
    }

    #[test]
    fn endpoint_id_is_encoded_as_one_path_segment() {
        let url = endpoint_table(&base("http://localhost:8008/"), "a/b?c#d e", EndpointTable::Threats)
            .expect("http base should take path segments");

        assert_eq!(url.path(), "/api/v1/endpoints/a%2Fb%3Fc%23d%20e/threats");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
        assert_eq!(url.path_segments().map(|s| s.count()), Some(5));
    }

    #[test]
    fn cannot_be_a_base_url_yields_no_endpoint_path() {
        assert_eq!(
            endpoint_table(&base("mailto:ops@lydian.io"), "10.1.1.5", EndpointTable::Threats),
            None
        );
    }

    #[test]
    fn join_does_not_double_slashes() {
        assert_eq!(
            join("http://localhost:8008/", "/api/v1/tables/runner"),
            "http://localhost:8008/api/v1/tables/runner"
        );
        assert_eq!(
            join("http://lydian:9000/ui/", RUNNER_WRITE),
            "http://lydian:9000/ui/tables/runner"
        );
    }
}
