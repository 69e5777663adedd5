use assert_cmd::Command;
use predicates::prelude::*;

fn catalogue(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("catalogue").unwrap();
    cmd.env("CATALOGUE_HOME", home).env("NO_COLOR", "1");
    cmd
}

fn script(lines: &[&str]) -> String {
    let mut s = lines.join("\n");
    s.push('\n');
    s
}

#[test]
fn test_add_then_list_all() {
    let temp_dir = tempfile::tempdir().unwrap();

    catalogue(temp_dir.path())
        .write_stdin(script(&["1", "Widget", "100", "Tools", "9.99", "2", "1", "0"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Successfully (0): Widget"))
        .stdout(predicate::str::contains(
            "0: Widget (code 100) [Tools] 9.99 - Active",
        ))
        .stdout(predicate::str::contains("Exiting"));
}

#[test]
fn test_archive_guard_through_menu() {
    let temp_dir = tempfile::tempdir().unwrap();

    let input = script(&[
        "1", "Gadget", "200", "Elec", "19.99", // item 0
        "6", "0", "wiring", // TODO status
        "5", "0", // refused
        "7", "0", "0", "wiring", "1", // mark complete
        "5", "0", // archived
        "2", "3", // list archived
        "0",
    ]);

    catalogue(temp_dir.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Archive NOT Successful"))
        .stdout(predicate::str::contains("Archive Successful (0): Gadget"))
        .stdout(predicate::str::contains(
            "0: Gadget (code 200) [Elec] 19.99 - Archived",
        ))
        .stdout(predicate::str::contains("\t0: wiring (Complete)"));
}

#[test]
fn test_non_numeric_input_is_reprompted() {
    let temp_dir = tempfile::tempdir().unwrap();

    catalogue(temp_dir.path())
        .write_stdin(script(&["menu", "1", "Lamp", "ten", "10", "Home", "25", "0"]))
        .assert()
        .success()
        .stderr(predicate::str::contains("Enter a number please."))
        .stdout(predicate::str::contains("Added Successfully (0): Lamp"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let temp_dir = tempfile::tempdir().unwrap();

    catalogue(temp_dir.path())
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No items are available. Please add an item first",
        ))
        .stdout(predicate::str::contains("Exiting").not());
}

#[test]
fn test_searches_report_misses() {
    let temp_dir = tempfile::tempdir().unwrap();

    catalogue(temp_dir.path())
        .write_stdin(script(&["9", "anything", "10", "anything", "0"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("No items found matching: anything"))
        .stdout(predicate::str::contains("Status not found"));
}

#[test]
fn test_session_writes_log_file() {
    let temp_dir = tempfile::tempdir().unwrap();

    catalogue(temp_dir.path())
        .write_stdin("0\n")
        .assert()
        .success();

    let logs = temp_dir.path().join("logs");
    let has_log = std::fs::read_dir(&logs)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .any(|entry| entry.file_name().to_string_lossy().starts_with("catalogue"));
    assert!(has_log, "expected a log file in {}", logs.display());
}

#[test]
fn test_config_set_and_show() {
    let temp_dir = tempfile::tempdir().unwrap();

    catalogue(temp_dir.path())
        .args(["config", "line-width", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("line-width = 60"));

    assert!(temp_dir.path().join("config.json").exists());

    catalogue(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("log-level = info"))
        .stdout(predicate::str::contains("line-width = 60"))
        .stdout(predicate::str::contains("color = true"));
}

#[test]
fn test_config_rejects_unknown_key() {
    let temp_dir = tempfile::tempdir().unwrap();

    catalogue(temp_dir.path())
        .args(["config", "editor", "vim"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown config key `editor`"));
}

#[test]
fn test_narrow_line_width_truncates_items() {
    let temp_dir = tempfile::tempdir().unwrap();

    catalogue(temp_dir.path())
        .args(["config", "line-width", "20"])
        .assert()
        .success();

    catalogue(temp_dir.path())
        .write_stdin(script(&[
            "1",
            "A very long item name indeed",
            "1",
            "Misc",
            "0.50",
            "2",
            "1",
            "0",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains("0: A very long item…"));
}

#[test]
fn test_invalid_config_file_stops_startup() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{ "line-width": 0, "log-level": "loud" }"#,
    )
    .unwrap();

    catalogue(temp_dir.path())
        .write_stdin(script(&["1", "Widget", "100", "Tools", "9.99", "0"]))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Config error:"))
        .stdout(predicate::str::contains("Added Successfully").not());
}
