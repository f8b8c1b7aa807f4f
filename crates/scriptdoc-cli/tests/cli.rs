//! End-to-end tests running the `scriptdoc` binary against a temporary
//! rules directory and game installation.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

const EVENT: &str = "country_event = { trigger = { owner = ROOT owns = 118 } }\n";

fn binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_scriptdoc"))
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "rules/operators.txt", "equal: exactly\nmore: more than\n");
    write(
        root,
        "rules/eu4/localisation/conditions.txt",
        "trigger: Trigger conditions:\nowner: Owned by %s\n",
    );
    write(root, "rules/eu4/lookupRules.txt", "province: owns\n");
    write(root, "rules/eu4/namedSections.txt", "country_event: title\n");
    write(root, "rules/eu4/exceptions.txt", "");
    write(root, "rules/eu4/parentExceptions.txt", "");
    write(root, "rules/eu4/variations.txt", "");
    write(root, "game/events/a.txt", EVENT);
    dir
}

/// Runs the binary inside `dir` with the given arguments.
fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(binary())
        .current_dir(dir)
        .env_remove("SCRIPTDOC_GAME_PATH")
        .env_remove("RUST_LOG")
        .arg("--color")
        .arg("never")
        .args(args)
        .output()
        .unwrap()
}

/// Runs a command that needs the rule sources, passing them as flags.
fn run_with_sources(dir: &Path, command: &str, extra: &[&str]) -> Output {
    let game = dir.join("game");
    let rules = dir.join("rules");
    let mut args = vec![
        command,
        "--game-path",
        game.to_str().unwrap(),
        "--game",
        "eu4",
        "--rules",
        rules.to_str().unwrap(),
    ];
    args.extend_from_slice(extra);
    run(dir, &args)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =============================================================================
// render
// =============================================================================

#[test]
fn render_writes_documents_and_error_list() {
    let dir = fixture();
    let out = dir.path().join("out");
    let output = run_with_sources(dir.path(), "render", &["--output", out.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        fs::read_to_string(out.join("a.txt")).unwrap(),
        "\n== country_event ==\n\n\n'''Trigger conditions:'''\n\n* Owned by our country\n* owns: 118\n"
    );
    assert_eq!(
        fs::read_to_string(out.join("errors.txt")).unwrap(),
        "country_event\nowns\n"
    );
}

#[test]
fn render_reports_broken_files_and_continues() {
    let dir = fixture();
    write(dir.path(), "game/events/b.txt", "country_event = {\n");
    let out = dir.path().join("out");
    let output = run_with_sources(dir.path(), "render", &["--output", out.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(65));
    assert!(out.join("a.txt").is_file());
    assert!(!out.join("b.txt").exists());
    assert!(stderr(&output).contains("never closed"));
}

// =============================================================================
// check
// =============================================================================

#[test]
fn check_accepts_valid_scripts() {
    let dir = fixture();
    let output = run(dir.path(), &["check", "game/events/a.txt"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("ok"));
}

#[test]
fn check_reports_errors_as_json() {
    let dir = fixture();
    write(dir.path(), "broken.txt", "trigger = {\n}\n}\n");
    let output = run(
        dir.path(),
        &["check", "--json", "game/events/a.txt", "broken.txt"],
    );

    assert_eq!(output.status.code(), Some(65));
    let results: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(results[0]["ok"], true);
    assert_eq!(results[1]["ok"], false);
    assert!(
        results[1]["error"]
            .as_str()
            .unwrap()
            .contains("unmatched '}'")
    );
}

// =============================================================================
// eval
// =============================================================================

#[test]
fn eval_renders_a_snippet_as_json() {
    let dir = fixture();
    let output = run_with_sources(
        dir.path(),
        "eval",
        &["--json", "--script", "country_event = { trigger = { owner = ROOT } }"],
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let result: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(result["document"]["lines"][2], "* Owned by our country");
    assert_eq!(result["document"]["kinds"][0], "header");
    assert_eq!(result["unresolved"][0], "country_event");
}

#[test]
fn eval_rejects_broken_snippets() {
    let dir = fixture();
    let output = run_with_sources(dir.path(), "eval", &["--script", "a = { b = c"]);
    assert_eq!(output.status.code(), Some(65));
}

#[test]
fn eval_reads_settings_file() {
    let dir = fixture();
    let settings = format!(
        "game_path = {:?}\ngame = \"EU4\"\nrules = {:?}\n",
        dir.path().join("game").to_str().unwrap(),
        dir.path().join("rules").to_str().unwrap(),
    );
    write(dir.path(), "settings.toml", &settings);

    let output = run(
        dir.path(),
        &["eval", "--script", "country_event = { trigger = { owner = ROOT } }"],
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "\n== country_event ==\n\n\n'''Trigger conditions:'''\n\n* Owned by our country\n"
    );
}

#[test]
fn missing_game_path_is_an_error() {
    let dir = fixture();
    let output = run(dir.path(), &["eval", "--game", "eu4", "--script", "a = b"]);
    assert_ne!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("no game_path configured"));
}

// =============================================================================
// coverage
// =============================================================================

#[test]
fn coverage_lists_unresolved_statements_with_suggestions() {
    let dir = fixture();
    let output = run_with_sources(dir.path(), "coverage", &["--json", "--strict"]);

    assert_eq!(output.status.code(), Some(65));
    let report: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["files"], 1);
    assert_eq!(report["templates"], 2);
    assert_eq!(report["unresolved"][1]["kind"], "owns");
    assert_eq!(report["unresolved"][1]["suggestions"][0], "owner");
}

#[test]
fn coverage_without_strict_succeeds() {
    let dir = fixture();
    let output = run_with_sources(dir.path(), "coverage", &[]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("owns"));
}
