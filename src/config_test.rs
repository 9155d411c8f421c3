use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.addr, SocketAddr::new(DEFAULT_BIND_ADDR, DEFAULT_PORT));
    assert!(cfg.assets_dir.ends_with("client/public"));
}

#[test]
fn explicit_values_are_used() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1"), ("ASSETS_DIR", "/srv/assets")]))
        .unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/assets"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", "  "), ("BIND_ADDR", "")])).unwrap();
    assert_eq!(cfg.addr.port(), DEFAULT_PORT);
    assert_eq!(cfg.addr.ip(), DEFAULT_BIND_ADDR);
}

#[test]
fn ipv6_bind_addr_is_accepted() {
    let cfg = HostConfig::from_lookup(lookup(&[("BIND_ADDR", "::1")])).unwrap();
    assert!(cfg.addr.is_ipv6());
}

#[test]
fn invalid_port_is_rejected() {
    for value in ["abc", "70000", "-1"] {
        let err = HostConfig::from_lookup(lookup(&[("PORT", value)])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }), "{value}");
        assert!(err.to_string().starts_with("invalid PORT"));
    }
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBindAddr { ref value, .. } if value == "localhost"));
}
