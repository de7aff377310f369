use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn footer_cmd(cwd: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ruwaid-footer").unwrap();
    cmd.current_dir(cwd.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn render_page_to_stdout() {
    let dir = TempDir::new().unwrap();
    footer_cmd(&dir)
        .args(["render", "--year", "2025"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains(
            "2025 Ruwaid's Clothing. All rights reserved.",
        ));
}

#[test]
fn render_fragment_to_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("footer.html");

    footer_cmd(&dir)
        .args(["render", "--fragment", "--year", "2025", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(!html.contains("<!DOCTYPE html>"));
    assert!(html.contains(r#"href="/shop?brand=Gul Ahmed""#));
}

#[test]
fn footer_toml_in_working_dir_is_picked_up() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("footer.toml"),
        "year = 2040\nstore_name = \"Test Store\"\n",
    )
    .unwrap();

    footer_cmd(&dir)
        .args(["render", "--fragment"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2040 Test Store. All rights reserved."));
}

#[test]
fn year_flag_beats_config_year() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("footer.toml"), "year = 2040\n").unwrap();

    footer_cmd(&dir)
        .args(["render", "--fragment", "--year", "2027"])
        .assert()
        .success()
        .stdout(predicate::str::contains("© 2027"))
        .stdout(predicate::str::contains("© 2040").not());
}

#[test]
fn explicit_missing_config_fails() {
    let dir = TempDir::new().unwrap();
    footer_cmd(&dir)
        .args(["render", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn duplicate_keys_in_config_fail() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("dup.toml");
    std::fs::write(&config, "brands = [\"Khaadi\", \"Khaadi\"]\n").unwrap();

    footer_cmd(&dir)
        .args(["links", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate key"));
}

#[test]
fn links_lists_targets_as_tsv() {
    let dir = TempDir::new().unwrap();
    footer_cmd(&dir)
        .arg("links")
        .assert()
        .success()
        .stdout(predicate::str::contains("quick-links\tHome\t/\n"))
        .stdout(predicate::str::contains(
            "customer-service\tTrack Order\t/track-order\n",
        ))
        .stdout(predicate::str::contains(
            "brands\tGul Ahmed\t/shop?brand=Gul Ahmed\n",
        ));
}

#[test]
fn links_json_has_fourteen_targets() {
    let dir = TempDir::new().unwrap();
    let output = footer_cmd(&dir)
        .args(["links", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let targets: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let targets = targets.as_array().unwrap();
    assert_eq!(targets.len(), 14);
    assert_eq!(targets[8]["href"], "/shop?brand=Gul Ahmed");
    assert_eq!(targets[8]["list"], "brands");
}
