use std::net::{IpAddr, Ipv4Addr};

use super::*;

fn config(site_root: Option<&str>) -> ServerConfig {
    ServerConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 3000,
        log_filter: "info".to_owned(),
        site_root: site_root.map(PathBuf::from),
    }
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn pkg_dir_uses_leptos_site_root_by_default() {
    assert_eq!(pkg_dir(&config(None), "target/site", "pkg"), PathBuf::from("target/site/pkg"));
}

#[test]
fn pkg_dir_prefers_configured_site_root() {
    assert_eq!(pkg_dir(&config(Some("/srv/desk")), "target/site", "pkg"), PathBuf::from("/srv/desk/pkg"));
}
