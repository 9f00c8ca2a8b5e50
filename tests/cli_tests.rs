mod test_helpers;

use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, TempDir};
use test_helpers::{bj_command, write_kjv_dataset, KJV_FILE};

struct Env {
    data: TempDir,
    state: TempDir,
}

impl Env {
    fn new() -> Self {
        let env = Env {
            data: tempdir().unwrap(),
            state: tempdir().unwrap(),
        };
        write_kjv_dataset(env.data.path());
        env
    }

    fn cmd(&self) -> assert_cmd::Command {
        bj_command(self.data.path(), self.state.path())
    }
}

#[test]
fn test_cli_lookup_resolves_number() {
    let env = Env::new();

    env.cmd()
        .args(["lookup", "0007"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gen 1:7 — #7 (KJV)"))
        .stdout(predicate::str::contains(
            "Verse: And God made the firmament, and divided the waters",
        ))
        .stdout(predicate::str::contains("Extended Reflection: Line one\nLine two"));
}

#[test]
fn test_cli_lookup_unescapes_quotes() {
    let env = Env::new();

    env.cmd()
        .args(["lookup", "#12"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Verse: And the earth brought forth \"grass\"",
        ));
}

#[test]
fn test_cli_lookup_invalid_input() {
    let env = Env::new();

    env.cmd()
        .args(["lookup", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter a number (digits only)."));
}

#[test]
fn test_cli_lookup_not_found() {
    let env = Env::new();

    env.cmd()
        .args(["lookup", "999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not found — #999 (KJV)"))
        .stdout(predicate::str::contains(
            "No verse text found for this number in the selected translation.",
        ));
}

#[test]
fn test_cli_lookup_empty_verse_text() {
    let env = Env::new();

    env.cmd()
        .args(["lookup", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No verse text found."));
}

#[test]
fn test_cli_lookup_dataset_unavailable() {
    let env = Env::new();

    env.cmd()
        .args(["lookup", "7", "-t", "asv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Could not load ASV CSV. Tried: FullNumbers_WithVerses_ASV Time Complete.csv.",
        ));
}

#[test]
fn test_cli_lookup_lists_every_kjv_candidate() {
    let env = Env::new();
    fs::remove_file(env.data.path().join(KJV_FILE)).unwrap();

    env.cmd()
        .args(["lookup", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Tried: Bible_Journey JKV Time complete.csv | Bible_Journey KJV Time Complete.csv.",
        ));
}

#[test]
fn test_cli_uses_default_translation_from_env() {
    let env = Env::new();

    env.cmd()
        .env("BJ_TRANSLATION", "web")
        .args(["lookup", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not load WEB CSV."));
}

#[test]
fn test_cli_save_and_list() {
    let env = Env::new();

    env.cmd()
        .args(["save", "7", "--themes", "order", "--reflection", "Grateful today"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to Journal (local on this device)."));

    assert!(env.state.path().join("bj_journal_v3.json").exists());

    env.cmd()
        .args(["save", "12"])
        .assert()
        .success();

    let output = env.cmd().arg("list").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    // Newest first
    let newest = stdout.find("Gen 1:12 — #12 (KJV)").unwrap();
    let oldest = stdout.find("Gen 1:7 — #7 (KJV)").unwrap();
    assert!(newest < oldest);
    assert!(stdout.contains("My Themes: order"));
    assert!(stdout.contains("My Reflection: Grateful today"));
}

#[test]
fn test_cli_save_without_digits() {
    let env = Env::new();

    env.cmd()
        .args(["save", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter a number first."));
}

#[test]
fn test_cli_save_refuses_unresolved_number() {
    let env = Env::new();

    env.cmd()
        .args(["save", "999"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Resolve the number first (no verse text available).",
        ));

    env.cmd()
        .args(["save", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resolve the number first"));

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet."));
}

#[test]
fn test_cli_list_empty() {
    let env = Env::new();

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet."));
}

#[test]
fn test_cli_export_selected_empty_journal() {
    let env = Env::new();

    env.cmd()
        .args(["export", "selected"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No entries to share yet - save one first.",
        ));
}

#[test]
fn test_cli_export_csv_to_directory() {
    let env = Env::new();
    let out = tempdir().unwrap();

    env.cmd().args(["save", "7"]).assert().success();

    env.cmd()
        .args(["export", "csv", "-o"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let csv = fs::read_to_string(out.path().join("bible_journey_journal.csv")).unwrap();
    assert!(csv.starts_with("\u{feff}Date,Number,Reference,Verse,"));
    assert!(csv.contains("\r\n"));
    assert!(csv.contains(",7,Gen 1:7,\"And God made the firmament, and divided the waters\","));
    assert!(csv.contains("\"Line one\nLine two\""));
}

#[test]
fn test_cli_export_selected_fields_to_stdout() {
    let env = Env::new();
    env.cmd().args(["save", "7", "--reflection", "Mine"]).assert().success();

    env.cmd()
        .args(["export", "selected", "--field", "prayer", "--field", "My Reflection"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Prayer: Amen\nMy Reflection: Mine\n"))
        .stdout(predicate::str::contains("Verse:").not());
}

#[test]
fn test_cli_export_selected_unknown_field_prints_headers_only() {
    let env = Env::new();
    env.cmd().args(["save", "7"]).assert().success();

    env.cmd()
        .args(["export", "selected", "--field", "bogus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gen 1:7 — #7 (KJV)\nDate: "))
        .stdout(predicate::str::contains("Verse:").not())
        .stdout(predicate::str::contains("Prayer:").not());
}

#[test]
fn test_cli_export_text() {
    let env = Env::new();
    env.cmd().args(["save", "7"]).assert().success();

    env.cmd()
        .args(["export", "text"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("My Bible Journey Journal\n\nGen 1:7 — #7 (KJV)\n"))
        .stdout(predicate::str::contains("Source: Manual\nTranslation: KJV\n"));
}

#[test]
fn test_cli_clear_with_yes() {
    let env = Env::new();
    env.cmd().args(["save", "7"]).assert().success();

    env.cmd()
        .args(["clear", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Journal cleared on this device."));

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet."));
}

#[test]
fn test_cli_clear_declined_at_prompt() {
    let env = Env::new();
    env.cmd().args(["save", "7"]).assert().success();

    env.cmd()
        .arg("clear")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[y/N]"))
        .stdout(predicate::str::contains("Journal left unchanged."));

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gen 1:7"));
}

#[test]
fn test_cli_migrates_legacy_journal() {
    let env = Env::new();
    fs::write(
        env.state.path().join("bj_journal_v2.json"),
        r#"[{"date":"2023-05-01T10:00:00.000Z","number":3,"reference":"Ps 23:1","verse":"The LORD is my shepherd","translation":"KJV"}]"#,
    )
    .unwrap();

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ps 23:1 — #3 (KJV)"));

    assert!(env.state.path().join("bj_journal_v3.json").exists());

    // Clearing removes the legacy copy too, so nothing comes back
    env.cmd().args(["clear", "--yes"]).assert().success();
    assert!(!env.state.path().join("bj_journal_v2.json").exists());
    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet."));
}

#[test]
fn test_cli_corrupt_journal_reads_as_empty() {
    let env = Env::new();
    fs::write(env.state.path().join("bj_journal_v3.json"), "{broken").unwrap();

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet."));
}

#[test]
fn test_cli_relative_storage_dir_rejected() {
    let env = Env::new();

    env.cmd()
        .env("BJ_DIR", "relative/state")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_cli_logs_root_span_as_json() {
    let env = Env::new();

    env.cmd()
        .args(["--log-format", "json", "lookup", "7"])
        .assert()
        .success()
        .stderr(predicate::str::contains("app_invocation"))
        .stderr(predicate::str::contains("correlation_id"))
        .stderr(predicate::str::contains("Loaded 3 rows from"));
}

#[test]
fn test_cli_no_subcommand_fails() {
    let env = Env::new();
    env.cmd().assert().failure();
}
