use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;

/// folioctl with an isolated working directory and no FOLIO_* overrides, so
/// a developer's own config or .env never leaks into the run.
fn folioctl(dir: &tempfile::TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("folioctl");
    cmd.current_dir(dir.path())
        .env_remove("FOLIO_CONFIG_PATH")
        .env_remove("FOLIO_CONFIG_JSON")
        .env_remove("FOLIO_API_URL")
        .env_remove("FOLIO_API_TIMEOUT")
        .env("RUST_LOG", "warn");
    cmd
}

fn summary(cmd: &mut assert_cmd::Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("summary is json")
}

#[test]
fn help_lists_subcommands() {
    let dir = tempfile::tempdir().expect("tempdir");
    folioctl(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("fetch"));

    folioctl(&dir)
        .args(["simulate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--hover-at"))
        .stdout(predicate::str::contains("--pointer-x"));
}

#[test]
fn auto_mode_wraps_after_one_pass() {
    let dir = tempfile::tempdir().expect("tempdir");
    let value = summary(folioctl(&dir).args([
        "simulate", "--mode", "auto", "--speed", "1", "--count", "3",
        "--item-width", "10", "--gap", "0", "--viewport", "20",
        "--frames", "40", "--json",
    ]));
    assert_eq!(value["mode"], "auto");
    assert_eq!(value["pass_width"], 30.0);
    assert_eq!(value["frames"], 40);
    assert_eq!(value["position"], 10.0);
    assert_eq!(value["cells"], 9);
    assert_eq!(value["item_at_origin"], 2);
}

#[test]
fn damped_hover_comes_to_rest() {
    let dir = tempfile::tempdir().expect("tempdir");
    let value = summary(folioctl(&dir).args([
        "simulate", "--carousel", "cover-arts", "--hover-at", "0",
        "--frames", "200", "--json",
    ]));
    assert_eq!(value["mode"], "damped");
    assert_eq!(value["velocity"], 0.0);
}

#[test]
fn untitled_items_render_as_fallback_cells() {
    let dir = tempfile::tempdir().expect("tempdir");
    let items = dir.path().join("items.json");
    std::fs::write(
        &items,
        r#"[{"id": 1, "title": "One"}, {"id": 2, "width": 300}, {"id": 3, "title": "Three"}]"#,
    )
    .expect("write items");

    let value = summary(folioctl(&dir).args([
        "simulate", "--mode", "auto", "--frames", "1", "--json", "--items",
    ])
    .arg(&items));
    assert_eq!(value["items"], 3);
    assert_eq!(value["cells"], 9);
    assert_eq!(value["fallback_cells"], 3);
}

#[test]
fn empty_item_list_animates_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let items = dir.path().join("items.json");
    std::fs::write(&items, "[]").expect("write items");

    folioctl(&dir)
        .args(["simulate", "--frames", "10", "--items"])
        .arg(&items)
        .assert()
        .success()
        .stdout(predicate::str::contains("no items"));
}

#[test]
fn hover_zone_rejects_short_tracks() {
    let dir = tempfile::tempdir().expect("tempdir");
    folioctl(&dir)
        .args(["simulate", "--mode", "hover-zone", "--repeat", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid carousel settings"));
}

#[test]
fn config_file_in_working_directory_is_used() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("folio.toml"),
        "[carousels.representative_works]\nmode = \"auto\"\nbase_speed = 4.0\n",
    )
    .expect("write config");

    let value = summary(folioctl(&dir).args([
        "simulate", "--frames", "5", "--count", "2", "--item-width", "100",
        "--json",
    ]));
    assert_eq!(value["mode"], "auto");
    assert_eq!(value["position"], 20.0);
}
