//! Integration tests for the `satlink` CLI binary.
//!
//! Data commands run against a temporary asset directory, so no network
//! service is needed.
#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a command with env isolation: no inherited `SATLINK_*` values and
/// a config path that does not exist.
fn satlink_cmd(config_dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("satlink");
    cmd.env("SATLINK_CONFIG", config_dir.join("config.toml"))
        .env("NO_COLOR", "1")
        .env_remove("SATLINK_URL")
        .env_remove("SATLINK_ASSETS")
        .env_remove("SATLINK_OUTPUT")
        .env_remove("SATLINK_INSECURE")
        .env_remove("SATLINK_TIMEOUT")
        .env_remove("SATLINK_RNG_SEED")
        .env_remove("RUST_LOG");
    cmd
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

/// An asset bundle with two satellites; only satellite 1 has positions.
fn bundle() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("satellite-list.json"),
        r#"[
            {"id": 1, "active": false, "name": "Starship-1"},
            {"id": 2, "active": true, "name": "Dragon-1"}
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("satellite-detail.json"),
        r#"[
            {"id": 1, "cost_per_launch": 7200000, "first_flight": "2021-12-01", "height": 118, "mass": 1167000},
            {"id": 2, "cost_per_launch": 5000000, "first_flight": "2010-06-04", "height": 8, "mass": 4200}
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("positions.json"),
        r#"{"list": [
            {"id": "1", "positions": [{"posX": 0.5, "posY": 0.25}]}
        ]}"#,
    )
    .unwrap();
    dir
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let home = tempfile::tempdir().unwrap();
    let output = satlink_cmd(home.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    assert!(combined_output(&output).contains("Usage"));
}

#[test]
fn test_help_lists_commands() {
    let home = tempfile::tempdir().unwrap();
    satlink_cmd(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("detail"))
                .and(predicate::str::contains("config")),
        );
}

#[test]
fn test_version_flag() {
    let home = tempfile::tempdir().unwrap();
    satlink_cmd(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("satlink"));
}

#[test]
fn test_completions_zsh() {
    let home = tempfile::tempdir().unwrap();
    satlink_cmd(home.path())
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_url_and_assets_conflict() {
    let home = tempfile::tempdir().unwrap();
    satlink_cmd(home.path())
        .args(["--url", "http://localhost", "--assets", "/tmp", "list"])
        .assert()
        .code(2);
}

// ── Source resolution ───────────────────────────────────────────────

#[test]
fn test_list_without_source_explains_how_to_configure() {
    let home = tempfile::tempdir().unwrap();
    let output = satlink_cmd(home.path()).arg("list").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let text = combined_output(&output);
    assert!(text.contains("No satellite source configured"), "{text}");
    assert!(text.contains("--assets"), "{text}");
}

// ── list ────────────────────────────────────────────────────────────

#[test]
fn test_list_table() {
    let home = tempfile::tempdir().unwrap();
    let assets = bundle();
    satlink_cmd(home.path())
        .arg("--assets")
        .arg(assets.path())
        .arg("list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Starship-1")
                .and(predicate::str::contains("Dragon-1"))
                .and(predicate::str::contains("Active")),
        );
}

#[test]
fn test_list_json() {
    let home = tempfile::tempdir().unwrap();
    let assets = bundle();
    let output = satlink_cmd(home.path())
        .arg("--assets")
        .arg(assets.path())
        .args(["-o", "json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let list = parsed.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["id"], "1");
    assert_eq!(list[1]["active"], true);
}

#[test]
fn test_list_plain_prints_ids() {
    let home = tempfile::tempdir().unwrap();
    let assets = bundle();
    satlink_cmd(home.path())
        .arg("--assets")
        .arg(assets.path())
        .args(["-o", "plain", "list"])
        .assert()
        .success()
        .stdout("1\n2\n");
}

#[test]
fn test_list_with_missing_bundle_reports_unavailable() {
    let home = tempfile::tempdir().unwrap();
    let empty = tempfile::tempdir().unwrap();
    let output = satlink_cmd(home.path())
        .arg("--assets")
        .arg(empty.path())
        .arg("list")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(combined_output(&output).contains("could not retrieve satellites"));
}

// ── detail ──────────────────────────────────────────────────────────

#[test]
fn test_detail_formats_fields_and_streams_positions() {
    let home = tempfile::tempdir().unwrap();
    let assets = bundle();
    satlink_cmd(home.path())
        .arg("--assets")
        .arg(assets.path())
        .args(["--interval-ms", "10", "detail", "1", "--updates", "2"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Starship-1")
                .and(predicate::str::contains("Height/Mass: 118 / 1167000"))
                .and(predicate::str::contains("01.12.2021"))
                .and(predicate::str::contains("Cost: 7.200.000"))
                .and(predicate::str::contains("Last Position: (0.5,0.25)").count(2)),
        );
}

#[test]
fn test_detail_json_streams_ndjson_positions() {
    let home = tempfile::tempdir().unwrap();
    let assets = bundle();
    let output = satlink_cmd(home.path())
        .arg("--assets")
        .arg(assets.path())
        .args(["-o", "json-compact", "--interval-ms", "10", "detail", "1", "-n", "1"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    let detail: serde_json::Value = serde_json::from_str(lines.next().unwrap()).unwrap();
    assert_eq!(detail["display"]["cost"], "Cost: 7.200.000");
    assert_eq!(detail["display"]["first_flight"], "01.12.2021");

    let position: serde_json::Value = serde_json::from_str(lines.next().unwrap()).unwrap();
    assert_eq!(position["id"], "1");
    assert_eq!(position["pos_x"], 0.5);
}

#[test]
fn test_detail_updates_zero_prints_detail_only() {
    let home = tempfile::tempdir().unwrap();
    let assets = bundle();
    satlink_cmd(home.path())
        .arg("--assets")
        .arg(assets.path())
        .args(["detail", "2", "--updates", "0"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Dragon-1")
                .and(predicate::str::contains("04.06.2010"))
                .and(predicate::str::contains("Last Position").not()),
        );
}

#[test]
fn test_detail_unknown_id_exits_not_found() {
    let home = tempfile::tempdir().unwrap();
    let assets = bundle();
    let output = satlink_cmd(home.path())
        .arg("--assets")
        .arg(assets.path())
        .args(["detail", "99"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
    let text = combined_output(&output);
    assert!(text.contains("could not retrieve detail"), "{text}");
}

#[test]
fn test_detail_uses_string_overrides_from_config() {
    let home = tempfile::tempdir().unwrap();
    let assets = bundle();
    fs::write(
        home.path().join("config.toml"),
        "[strings]\ncost = \"Price: \"\nlast_position = \"At: \"\n",
    )
    .unwrap();

    satlink_cmd(home.path())
        .arg("--assets")
        .arg(assets.path())
        .args(["--interval-ms", "10", "detail", "1", "-n", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Price: 7.200.000")
                .and(predicate::str::contains("At: (0.5,0.25)")),
        );
}

// ── config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path_honours_env() {
    let home = tempfile::tempdir().unwrap();
    let expected = home.path().join("config.toml");
    satlink_cmd(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn test_config_init_then_list_uses_saved_source() {
    let home = tempfile::tempdir().unwrap();
    let assets = bundle();

    satlink_cmd(home.path())
        .arg("--assets")
        .arg(assets.path())
        .args(["--interval-ms", "1500", "config", "init"])
        .assert()
        .success();

    let written = fs::read_to_string(home.path().join("config.toml")).unwrap();
    assert!(written.contains("assets_dir"), "{written}");
    assert!(written.contains("poll_interval_ms = 1500"), "{written}");

    satlink_cmd(home.path())
        .args(["-o", "plain", "list"])
        .assert()
        .success()
        .stdout("1\n2\n");
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join("config.toml"), "").unwrap();

    satlink_cmd(home.path())
        .args(["config", "init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_config_show_reflects_env() {
    let home = tempfile::tempdir().unwrap();
    satlink_cmd(home.path())
        .env("SATLINK_DEFAULTS__TIMEOUT", "5")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("timeout = 5"));
}
