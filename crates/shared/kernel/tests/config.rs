use serial_test::serial;
use sledger_domain::config::ApiConfig;
use sledger_kernel::config::load_config;
use std::fs;
use tempfile::tempdir;

#[test]
#[serial]
fn explicit_file_is_loaded() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("server.toml");
    fs::write(
        &path,
        "[server]\nport = 9100\n\n[orders]\nprice_per_kg = 42.0\ntop_destinations = 3\n",
    )?;

    let cfg: ApiConfig = load_config(Some(&path))?;
    assert_eq!(cfg.server.port, 9100);
    assert!((cfg.orders.price_per_kg - 42.0).abs() < f64::EPSILON);
    assert_eq!(cfg.orders.top_destinations, 3);
    assert_eq!(cfg.shipments.default_transit_days, 5);
    Ok(())
}

#[test]
#[serial]
fn missing_explicit_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let result = load_config::<ApiConfig>(Some(dir.path().join("absent.toml")));
    assert!(result.is_err());
}

#[test]
#[serial]
fn default_file_is_optional() {
    let cfg: ApiConfig = load_config(None::<&str>).expect("defaults without a file");
    assert!(cfg.server.port > 0);
}
