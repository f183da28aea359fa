//! REST client tests: endpoint construction and error-detail extraction.

use dashtop::api::{error_detail, ApiClient, ContainerAction};
use reqwest::StatusCode;
use url::Url;

fn client() -> ApiClient {
    ApiClient::new(Url::parse("http://pi.local:8000").unwrap())
}

#[test]
fn endpoints_hang_off_the_api_base() {
    let c = client();
    assert_eq!(
        c.endpoint("system/hostname").as_str(),
        "http://pi.local:8000/api/system/hostname"
    );
    assert_eq!(
        c.endpoint("processes/kill/42").as_str(),
        "http://pi.local:8000/api/processes/kill/42"
    );
}

#[test]
fn base_path_and_query_are_discarded() {
    let c = ApiClient::new(Url::parse("http://pi.local:8000/some/page?x=1").unwrap());
    assert_eq!(c.base().as_str(), "http://pi.local:8000/");
}

#[test]
fn container_delete_url_carries_force_only_when_asked() {
    let c = client();
    let forced = c.container_delete_url("abc123", true);
    assert_eq!(
        forced.as_str(),
        "http://pi.local:8000/api/docker/container/abc123?force=true"
    );
    let plain = c.container_delete_url("abc123", false);
    assert_eq!(plain.query(), None, "exited containers must not send force");
}

#[test]
fn container_actions_map_to_path_segments() {
    assert_eq!(ContainerAction::Start.as_str(), "start");
    assert_eq!(ContainerAction::Stop.as_str(), "stop");
    assert_eq!(ContainerAction::Restart.as_str(), "restart");
}

#[test]
fn error_detail_surfaces_the_server_message_verbatim() {
    let detail = error_detail(
        StatusCode::FORBIDDEN,
        r#"{"detail": "Cannot kill critical system process"}"#,
    );
    assert_eq!(detail, "Cannot kill critical system process");
}

#[test]
fn error_detail_falls_back_to_a_generic_message() {
    let detail = error_detail(StatusCode::BAD_GATEWAY, "<html>gateway error</html>");
    assert!(detail.contains("502"), "{detail}");
    let empty = error_detail(StatusCode::NOT_FOUND, r#"{"detail": ""}"#);
    assert!(empty.contains("404"), "{empty}");
}
