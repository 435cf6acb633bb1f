//! CLI integration tests for the mentora binary
//!
//! Drives the compiled binary end to end: listing canned replies in both
//! output formats, rejecting bad configuration, and running short scripted
//! chat sessions over piped stdin.

use assert_cmd::Command;
use predicates::prelude::*;

mod common;

/// `replies --json` prints a JSON array that parses back into the canned
/// reply set, with nothing else on stdout.
#[test]
fn test_replies_json_output_parseable() {
    let mut cmd = Command::cargo_bin("mentora").unwrap();
    cmd.arg("replies").arg("--json");

    let assert = cmd.assert().success();
    let stdout = assert.get_output().stdout.clone();
    let parsed: Vec<String> = serde_json::from_slice(&stdout).expect("stdout must be valid JSON");

    let expected: Vec<String> = mentora::CANNED_REPLIES
        .iter()
        .map(|reply| reply.to_string())
        .collect();
    assert_eq!(parsed, expected);
}

/// The table listing names the reply count.
#[test]
fn test_replies_table_output() {
    let mut cmd = Command::cargo_bin("mentora").unwrap();
    cmd.arg("replies");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Canned replies (5 total):"));
}

/// --help advertises both subcommands.
#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("mentora").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("chat").and(predicate::str::contains("replies")));
}

/// An unknown responder type in the config file fails validation.
#[test]
fn test_invalid_responder_type_rejected() {
    let (_temp_dir, config_path) = common::temp_config_file("responder:\n  type: oracle\n");

    let mut cmd = Command::cargo_bin("mentora").unwrap();
    cmd.arg("--config").arg(config_path).arg("replies");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid responder type"));
}

/// A reply delay above the cap fails validation.
#[test]
fn test_excessive_delay_rejected() {
    let (_temp_dir, config_path) =
        common::temp_config_file("responder:\n  type: canned\n  reply_delay_ms: 120000\n");

    let mut cmd = Command::cargo_bin("mentora").unwrap();
    cmd.arg("--config").arg(config_path).arg("replies");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("reply_delay_ms"));
}

/// A missing config file falls back to defaults and still runs.
#[test]
fn test_missing_config_uses_defaults() {
    let mut cmd = Command::cargo_bin("mentora").unwrap();
    cmd.arg("--config")
        .arg("definitely/not/here.yaml")
        .arg("replies");

    cmd.assert().success();
}

/// Typing `exit` ends the chat session cleanly.
#[test]
fn test_chat_exits_on_exit_command() {
    let (_temp_dir, config_path) =
        common::temp_config_file("responder:\n  type: canned\n  reply_delay_ms: 0\n");

    let mut cmd = Command::cargo_bin("mentora").unwrap();
    cmd.arg("--config")
        .arg(config_path)
        .arg("chat")
        .write_stdin("exit\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}

/// A submission produces the processing notice and an assistant reply
/// drawn from the canned set.
#[test]
fn test_chat_submission_gets_canned_reply() {
    let (_temp_dir, config_path) =
        common::temp_config_file("responder:\n  type: canned\n  reply_delay_ms: 0\n");

    let mut cmd = Command::cargo_bin("mentora").unwrap();
    cmd.arg("--config")
        .arg(config_path)
        .arg("chat")
        .write_stdin("What is machine learning?\nexit\n");

    cmd.assert().success().stdout(
        predicate::str::contains("Processing...").and(predicate::str::contains("Assistant:")),
    );
}

/// `/status` reports session counters inside the chat session.
#[test]
fn test_chat_status_command() {
    let (_temp_dir, config_path) =
        common::temp_config_file("responder:\n  type: canned\n  reply_delay_ms: 0\n");

    let mut cmd = Command::cargo_bin("mentora").unwrap();
    cmd.arg("--config")
        .arg(config_path)
        .arg("chat")
        .write_stdin("/status\nexit\n");

    cmd.assert().success().stdout(
        predicate::str::contains("Mentora Session Status")
            .and(predicate::str::contains("Next Chat Title: Chat 1")),
    );
}

/// `/history` on a fresh session reports no archives.
#[test]
fn test_chat_history_empty() {
    let (_temp_dir, config_path) =
        common::temp_config_file("responder:\n  type: canned\n  reply_delay_ms: 0\n");

    let mut cmd = Command::cargo_bin("mentora").unwrap();
    cmd.arg("--config")
        .arg(config_path)
        .arg("chat")
        .write_stdin("/history\nexit\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No chat history yet"));
}

/// Archiving and re-opening a chat works end to end over piped stdin.
#[test]
fn test_chat_archive_and_reopen_flow() {
    let (_temp_dir, config_path) =
        common::temp_config_file("responder:\n  type: canned\n  reply_delay_ms: 0\n");

    let mut cmd = Command::cargo_bin("mentora").unwrap();
    cmd.arg("--config")
        .arg(config_path)
        .arg("chat")
        .write_stdin("Explain decision trees\n/new\n/history\n/open 0\nexit\n");

    cmd.assert().success().stdout(
        predicate::str::contains("Archived Chat 1 as id 0.")
            .and(predicate::str::contains("Chat history (1 archived):"))
            .and(predicate::str::contains("Re-opened chat 0 (2 messages):")),
    );
}

/// An unknown slash command prints an error and keeps the session alive.
#[test]
fn test_chat_unknown_command_keeps_running() {
    let (_temp_dir, config_path) =
        common::temp_config_file("responder:\n  type: canned\n  reply_delay_ms: 0\n");

    let mut cmd = Command::cargo_bin("mentora").unwrap();
    cmd.arg("--config")
        .arg(config_path)
        .arg("chat")
        .write_stdin("/frobnicate\nexit\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"))
        .stderr(predicate::str::contains("Unknown command: /frobnicate"));
}
