use assert_cmd::Command;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("dataurl"))
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("decode").and(contains("media-type")));
}

#[test]
fn decode_writes_payload_to_stdout() {
    cmd()
        .arg("decode")
        .arg("data:,A%20brief%20note")
        .assert()
        .success()
        .stdout("A brief note");
}

#[test]
fn decode_reads_uri_from_stdin() {
    cmd()
        .arg("decode")
        .arg("-")
        .write_stdin("data:text/plain;base64,VGhpcyBpcyBhIHRlc3Qh\n")
        .assert()
        .success()
        .stdout("This is a test!");
}

#[test]
fn decode_info_outputs_json() {
    let assert = cmd()
        .arg("decode")
        .arg("data:;charset=utf-8,This%20is%20a%20test%21")
        .arg("--info")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["media_type"], "text/plain;charset=utf-8");
    assert_eq!(value["bytes"], 15);
    assert_eq!(value["utf8"], true);
    assert_eq!(value["text"], "This is a test!");
}

#[test]
fn decode_info_omits_text_for_binary_payloads() {
    let assert = cmd()
        .arg("decode")
        .arg("data:text/plain;charset=iso-8859-7,%b8%f7%fe")
        .arg("--info")
        .arg("--pretty")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["utf8"], false);
    assert!(value.get("text").is_none());
}

#[test]
fn decode_writes_binary_output_file() {
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("nested").join("payload.bin");
    let payload = [0u8, 159, 146, 150, 255];
    let uri = format!("data:application/octet-stream;base64,{}", STANDARD.encode(payload));

    cmd()
        .arg("decode")
        .arg(uri)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stderr(contains("OK:"));

    assert_eq!(std::fs::read(&output).expect("read output"), payload);
}

#[test]
fn quiet_suppresses_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("payload.txt");

    cmd()
        .arg("decode")
        .arg("data:,quiet")
        .arg("-o")
        .arg(&output)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(contains("OK:").not());
}

#[test]
fn info_and_output_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("payload.txt");

    cmd()
        .arg("decode")
        .arg("data:,x")
        .arg("--info")
        .arg("-o")
        .arg(output)
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn not_a_data_uri_shows_error_and_hint() {
    cmd()
        .arg("decode")
        .arg("datum:,")
        .assert()
        .code(2)
        .stderr(contains("error: bad request: not a data URI").and(contains("hint:")));
}

#[test]
fn missing_comma_is_a_syntax_error() {
    cmd()
        .arg("decode")
        .arg("data:text/plain")
        .assert()
        .code(2)
        .stderr(contains("syntax error"));
}

#[test]
fn media_type_is_normalized() {
    cmd()
        .arg("media-type")
        .arg(";name=file.txt")
        .assert()
        .success()
        .stdout("text/plain;name=file.txt;charset=US-ASCII\n");
}

#[test]
fn bad_media_type_fails() {
    cmd()
        .arg("media-type")
        .arg("apple/banana/cherry")
        .assert()
        .code(2)
        .stderr(contains("bad media type"));
}
