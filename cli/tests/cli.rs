use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// `kiosk` run from an empty directory with no config and no KIOSK_* variables
fn kiosk(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kiosk").unwrap();
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env("HOME", dir.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    for name in [
        "KIOSK_BASE_PATH",
        "KIOSK_API_URL",
        "KIOSK_SNAPSHOT",
        "KIOSK_CYCLE_SECS",
        "KIOSK_REFRESH_SECS",
        "KIOSK_LIMIT",
    ] {
        cmd.env_remove(name);
    }
    cmd
}

const SNAPSHOT: &str = r#"{
    "bus_station": [
        {
            "stop": {"bay": "B7"},
            "service": "Skylink",
            "destination": "East Midlands Airport",
            "via": "Castle Donington",
            "scheduled": "10:00",
            "expected": "10:04",
            "operator": "Kinchbus"
        }
    ],
    "cathedral_quarter": []
}"#;

#[test]
fn routes_lists_the_table() {
    let dir = TempDir::new().unwrap();
    kiosk(&dir)
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("cathedralQuarter"))
        .stdout(predicate::str::contains("/cq"))
        .stdout(predicate::str::contains("BusStationView"));
}

#[test]
fn resolve_under_base_path() {
    let dir = TempDir::new().unwrap();
    kiosk(&dir)
        .args(["--base-path", "/app/", "resolve", "/app/bs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("busStation"));

    kiosk(&dir)
        .args(["--base-path", "/app/", "resolve", "/app/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HomeView"));
}

#[test]
fn resolve_unknown_location_fails() {
    let dir = TempDir::new().unwrap();
    kiosk(&dir)
        .args(["resolve", "/unknown"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No route matches '/unknown'"));
}

#[test]
fn base_path_from_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("kiosk.json"), r#"{"base_path": "/kiosk"}"#).unwrap();

    kiosk(&dir)
        .args(["resolve", "/kiosk/cq"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cathedralQuarter"));
}

#[test]
fn base_path_from_environment() {
    let dir = TempDir::new().unwrap();
    kiosk(&dir)
        .env("KIOSK_BASE_PATH", "/app/")
        .args(["resolve", "/app/bs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("busStation"));

    kiosk(&dir)
        .env("KIOSK_BASE_PATH", "/app/")
        .args(["resolve", "/bs"])
        .assert()
        .code(1);
}

#[test]
fn non_numeric_environment_value_fails() {
    let dir = TempDir::new().unwrap();
    kiosk(&dir)
        .env("KIOSK_LIMIT", "abc")
        .arg("routes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("KIOSK_LIMIT is not a number: abc"));

    kiosk(&dir)
        .env("KIOSK_CYCLE_SECS", "soon")
        .arg("routes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("KIOSK_CYCLE_SECS"));
}

#[test]
fn show_prints_board_from_snapshot() {
    let dir = TempDir::new().unwrap();
    let snapshot = dir.path().join("snapshot.json");
    fs::write(&snapshot, SNAPSHOT).unwrap();

    kiosk(&dir)
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["show", "/bs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bus Station"))
        .stdout(predicate::str::contains("East Midlands Airport"))
        .stdout(predicate::str::contains("via Castle Donington"))
        .stdout(predicate::str::contains("Data From bustimes.org"));
}

#[test]
fn show_by_name_reports_empty_board() {
    let dir = TempDir::new().unwrap();
    let snapshot = dir.path().join("snapshot.json");
    fs::write(&snapshot, SNAPSHOT).unwrap();

    kiosk(&dir)
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["show", "--name", "cathedralQuarter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No departures scheduled"));
}

#[test]
fn show_unknown_location_fails() {
    let dir = TempDir::new().unwrap();
    kiosk(&dir)
        .args(["show", "/nowhere"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Route Not Found"));
}
