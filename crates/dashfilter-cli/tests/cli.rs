use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

const SCHEMA: &str = r#"{
    "years": {
        "type": "Single",
        "label": "Year",
        "defaultValue": "2025",
        "options": [{"id": "2024", "label": "2024"}, {"id": "2025", "label": "2025"}]
    },
    "devices": {
        "type": "Multi",
        "label": "Devices",
        "defaultValue": ["all"],
        "options": [
            {"id": "all", "label": "All devices"},
            {"id": "device-a", "label": "Meter A"},
            {"id": "device-b", "label": "Meter B"}
        ],
        "multipleSelectionConfig": {"selectedAllLabel": "All devices", "selectedAllId": "all"}
    }
}"#;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Runs the binary inside `dir` with config env vars cleared.
fn dashfilter(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("dashfilter").unwrap();
    cmd.current_dir(dir)
        .env_remove("DASHFILTER_CHIP_COUNT_TEMPLATE")
        .env_remove("DASHFILTER_CHIP_MAX_WIDTH")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn check_valid_schema() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(dir.path(), "schema.json", SCHEMA);

    dashfilter(dir.path())
        .arg("check")
        .arg(&schema)
        .assert()
        .success()
        .stdout(predicate::str::contains("Schema is valid (2 filters)"));
}

#[test]
fn check_rejects_missing_default_option() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(
        dir.path(),
        "bad.json",
        &SCHEMA.replace("\"defaultValue\": \"2025\"", "\"defaultValue\": \"1999\""),
    );

    dashfilter(dir.path())
        .arg("check")
        .arg(&schema)
        .assert()
        .failure()
        .stderr(predicate::str::contains("1999"));
}

#[test]
fn check_rejects_mismatched_default_shape() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(
        dir.path(),
        "bad.json",
        &SCHEMA.replace("\"defaultValue\": \"2025\"", "\"defaultValue\": [\"2025\"]"),
    );

    dashfilter(dir.path())
        .arg("check")
        .arg(&schema)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn defaults_prints_default_state() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(dir.path(), "schema.json", SCHEMA);

    dashfilter(dir.path())
        .arg("defaults")
        .arg(&schema)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"years\": \"2025\""))
        .stdout(predicate::str::contains("\"all\""));
}

#[test]
fn toggle_from_defaults_selects_device() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(dir.path(), "schema.json", SCHEMA);

    dashfilter(dir.path())
        .arg("toggle")
        .arg(&schema)
        .arg("devices")
        .arg("device-a")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"device-a\""))
        .stdout(predicate::str::contains("\"all\"").not());
}

#[test]
fn toggle_off_last_device_falls_back_to_all() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(dir.path(), "schema.json", SCHEMA);
    let state = write(
        dir.path(),
        "state.json",
        r#"{"years": "2025", "devices": ["device-a"]}"#,
    );

    dashfilter(dir.path())
        .arg("toggle")
        .arg(&schema)
        .arg("--state")
        .arg(&state)
        .arg("devices")
        .arg("device-a")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"all\""))
        .stdout(predicate::str::contains("device-a").not());
}

#[test]
fn toggle_unknown_filter_fails() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(dir.path(), "schema.json", SCHEMA);

    dashfilter(dir.path())
        .arg("toggle")
        .arg(&schema)
        .arg("sites")
        .arg("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown filter: sites"));
}

#[test]
fn chips_for_active_filters() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(dir.path(), "schema.json", SCHEMA);
    let state = write(
        dir.path(),
        "state.json",
        r#"{"years": "2024", "devices": ["device-a", "device-b"]}"#,
    );

    dashfilter(dir.path())
        .arg("chips")
        .arg(&schema)
        .arg("-s")
        .arg(&state)
        .assert()
        .success()
        .stdout(predicate::str::contains("Year: 2024"))
        .stdout(predicate::str::contains("Devices: 2 selected"));
}

#[test]
fn chips_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(dir.path(), "schema.json", SCHEMA);
    let state = write(dir.path(), "state.json", r#"{"devices": ["device-b"]}"#);

    dashfilter(dir.path())
        .arg("chips")
        .arg(&schema)
        .arg("--state")
        .arg(&state)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"key\": \"devices\""))
        .stdout(predicate::str::contains("\"value\": 1"));
}

#[test]
fn chips_use_project_config() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(dir.path(), "schema.json", SCHEMA);
    let state = write(dir.path(), "state.json", r#"{"devices": ["device-b"]}"#);
    std::fs::create_dir(dir.path().join(".dashfilter")).unwrap();
    write(
        &dir.path().join(".dashfilter"),
        "dashfilter.toml",
        "chip_count_template = \"{count} meters\"\n",
    );

    dashfilter(dir.path())
        .arg("chips")
        .arg(&schema)
        .arg("--state")
        .arg(&state)
        .assert()
        .success()
        .stdout(predicate::str::contains("Devices: 1 meters"));
}

#[test]
fn chips_config_from_env() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(dir.path(), "schema.json", SCHEMA);
    let state = write(dir.path(), "state.json", r#"{"devices": ["device-b"]}"#);

    dashfilter(dir.path())
        .env("DASHFILTER_CHIP_COUNT_TEMPLATE", "x{count}")
        .arg("chips")
        .arg(&schema)
        .arg("--state")
        .arg(&state)
        .assert()
        .success()
        .stdout(predicate::str::contains("Devices: x1"));
}

#[test]
fn chips_max_width_from_env() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(
        dir.path(),
        "schema.json",
        &SCHEMA.replace(
            r#"{"id": "2024", "label": "2024"}"#,
            r#"{"id": "2024", "label": "Fiscal year 2024"}"#,
        ),
    );
    let state = write(dir.path(), "state.json", r#"{"years": "2024"}"#);

    dashfilter(dir.path())
        .env("DASHFILTER_CHIP_MAX_WIDTH", "8")
        .arg("chips")
        .arg(&schema)
        .arg("--state")
        .arg(&state)
        .assert()
        .success()
        .stdout(predicate::str::contains("Year: Fiscal …"))
        .stdout(predicate::str::contains("2024").not());
}

#[test]
fn chips_max_width_must_be_a_number() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(dir.path(), "schema.json", SCHEMA);

    dashfilter(dir.path())
        .env("DASHFILTER_CHIP_MAX_WIDTH", "wide")
        .arg("chips")
        .arg(&schema)
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn reset_single_filter() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(dir.path(), "schema.json", SCHEMA);
    let state = write(
        dir.path(),
        "state.json",
        r#"{"years": "2024", "devices": ["device-a"]}"#,
    );

    dashfilter(dir.path())
        .arg("reset")
        .arg(&schema)
        .arg("--state")
        .arg(&state)
        .arg("years")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"years\": \"2025\""))
        .stdout(predicate::str::contains("\"device-a\""));
}

#[test]
fn reset_all_filters() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(dir.path(), "schema.json", SCHEMA);
    let state = write(
        dir.path(),
        "state.json",
        r#"{"years": "2024", "devices": ["device-a"]}"#,
    );

    dashfilter(dir.path())
        .arg("reset")
        .arg(&schema)
        .arg("--state")
        .arg(&state)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"years\": \"2025\""))
        .stdout(predicate::str::contains("device-a").not());
}

#[test]
fn status_with_preset() {
    let dir = tempfile::tempdir().unwrap();
    let state = write(dir.path(), "state.json", r#"{"months": ["03"]}"#);

    dashfilter(dir.path())
        .arg("status")
        .arg("preset:reports")
        .arg("--state")
        .arg(&state)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"is_default\": false"))
        .stdout(predicate::str::contains("\"months\""));
}

#[test]
fn unknown_preset_fails() {
    let dir = tempfile::tempdir().unwrap();
    dashfilter(dir.path())
        .arg("defaults")
        .arg("preset:billing")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown preset: billing"));
}

#[test]
fn presets_are_listed() {
    let dir = tempfile::tempdir().unwrap();
    dashfilter(dir.path())
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("reports"))
        .stdout(predicate::str::contains("summaries"))
        .stdout(predicate::str::contains("device-table"));
}

#[test]
fn toml_schema_file() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(
        dir.path(),
        "schema.toml",
        r#"
[period]
type = "Single"
label = "Period"
defaultValue = "monthly"
options = [{ id = "daily", label = "Daily" }, { id = "monthly", label = "Monthly" }]
"#,
    );

    dashfilter(dir.path())
        .arg("select")
        .arg(&schema)
        .arg("period")
        .arg("daily")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"period\": \"daily\""));
}
