use super::*;

use std::collections::HashMap;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = SiteConfig::from_lookup(lookup(&[])).expect("defaults should parse");
    assert_eq!(config.addr(), "0.0.0.0:3000".parse().expect("literal addr"));
    assert_eq!(config.assets_dir, PathBuf::from("public"));
}

#[test]
fn reads_overrides() {
    let config = SiteConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", "8080"), ("ASSETS_DIR", "/srv/site")]))
        .expect("overrides should parse");
    assert_eq!(config.addr(), "127.0.0.1:8080".parse().expect("literal addr"));
    assert_eq!(config.assets_dir, PathBuf::from("/srv/site"));
}

#[test]
fn accepts_ipv6_host() {
    let config = SiteConfig::from_lookup(lookup(&[("HOST", "::1")])).expect("ipv6 should parse");
    assert!(config.host.is_ipv6());
}

#[test]
fn rejects_bad_port() {
    for raw in ["abc", "70000", "0", "-1", ""] {
        let err = SiteConfig::from_lookup(lookup(&[("PORT", raw)])).expect_err("port should be rejected");
        assert_eq!(err, ConfigError::InvalidPort(raw.to_owned()));
    }
}

#[test]
fn rejects_bad_host() {
    let err = SiteConfig::from_lookup(lookup(&[("HOST", "localhost")])).expect_err("hostname is not an ip");
    assert_eq!(err, ConfigError::InvalidHost("localhost".to_owned()));
}

#[test]
fn blank_assets_dir_falls_back() {
    let config = SiteConfig::from_lookup(lookup(&[("ASSETS_DIR", "  ")])).expect("blank dir should parse");
    assert_eq!(config.assets_dir, PathBuf::from(DEFAULT_ASSETS_DIR));
}
