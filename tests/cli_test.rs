//! End-to-end runs of both binaries against a temporary working directory

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(missing_docs)]

use std::fs;
use std::path::Path;
use std::process::{
    Command,
    Output,
};

use googletest::prelude::*;
use locale_tools::locale::load_locale;
use locale_tools::tree::flatten_keys;
use locale_tools::vocab::VOCAB_ENTRIES;
use serde_json::{
    Value,
    json,
};
use tempfile::TempDir;

fn run(binary: &str, workdir: &Path) -> Output {
    Command::new(binary).current_dir(workdir).env_remove("RUST_LOG").output().unwrap()
}

fn write_locale(workdir: &Path, language: &str, content: &str) {
    let dir = workdir.join("locales");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{language}.json")), content).unwrap();
}

#[googletest::test]
fn compare_prints_missing_keys_per_language() {
    let temp_dir = TempDir::new().unwrap();
    write_locale(temp_dir.path(), "en", r#"{"a": {"b": "1"}, "c": "2"}"#);
    write_locale(temp_dir.path(), "zh", r#"{"a": {}}"#);
    write_locale(temp_dir.path(), "vi", r#"{"a": {"b": "1"}, "c": "2", "extra": "x"}"#);
    write_locale(temp_dir.path(), "mn", r#"{"a": {"b": "1"}}"#);

    let output = run(env!("CARGO_BIN_EXE_compare-i18n"), temp_dir.path());

    expect_that!(output.status.success(), eq(true));
    expect_that!(
        String::from_utf8(output.stdout).unwrap(),
        eq(concat!(
            "--- Missing keys in zh (2) ---\n",
            "a.b\n",
            "c\n",
            "--- Missing keys in vi (0) ---\n",
            "--- Missing keys in mn (1) ---\n",
            "c\n"
        ))
    );
}

#[googletest::test]
fn compare_fails_when_a_locale_is_missing() {
    let temp_dir = TempDir::new().unwrap();
    write_locale(temp_dir.path(), "en", r#"{"a": "1"}"#);
    write_locale(temp_dir.path(), "zh", r#"{"a": "1"}"#);
    write_locale(temp_dir.path(), "vi", r#"{"a": "1"}"#);

    let output = run(env!("CARGO_BIN_EXE_compare-i18n"), temp_dir.path());

    expect_that!(output.status.success(), eq(false));
    expect_that!(output.stdout, is_empty());
    expect_that!(String::from_utf8(output.stderr).unwrap(), contains_substring("mn.json"));
}

#[googletest::test]
fn compare_fails_on_malformed_locale() {
    let temp_dir = TempDir::new().unwrap();
    for language in ["en", "zh", "vi"] {
        write_locale(temp_dir.path(), language, "{}");
    }
    write_locale(temp_dir.path(), "mn", "{\"a\": ");

    let output = run(env!("CARGO_BIN_EXE_compare-i18n"), temp_dir.path());

    expect_that!(output.status.success(), eq(false));
    expect_that!(String::from_utf8(output.stderr).unwrap(), contains_substring("Failed to parse"));
}

#[googletest::test]
fn compare_honours_config_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".locale-tools.json"),
        r#"{"localesDir": "i18n", "languages": ["en", "ja"]}"#,
    )
    .unwrap();
    fs::create_dir_all(temp_dir.path().join("i18n")).unwrap();
    fs::write(temp_dir.path().join("i18n/en.json"), r#"{"x": "1", "y": "2"}"#).unwrap();
    fs::write(temp_dir.path().join("i18n/ja.json"), r#"{"x": "1"}"#).unwrap();

    let output = run(env!("CARGO_BIN_EXE_compare-i18n"), temp_dir.path());

    expect_that!(output.status.success(), eq(true));
    expect_that!(
        String::from_utf8(output.stdout).unwrap(),
        eq("--- Missing keys in ja (1) ---\ny\n")
    );
}

#[googletest::test]
fn update_writes_vocab_into_existing_locales() {
    let temp_dir = TempDir::new().unwrap();
    write_locale(temp_dir.path(), "en", r#"{"home": {"title": "Home"}, "vocab": {"flip": "Old"}}"#);
    write_locale(temp_dir.path(), "zh", "{}");

    let output = run(env!("CARGO_BIN_EXE_update-vocab-locales"), temp_dir.path());

    expect_that!(output.status.success(), eq(true));
    expect_that!(
        String::from_utf8(output.stdout).unwrap(),
        eq("Updated locales/en.json\nUpdated locales/zh.json\n")
    );
    expect_that!(temp_dir.path().join("locales/vi.json").exists(), eq(false));
    expect_that!(temp_dir.path().join("locales/mn.json").exists(), eq(false));

    let en = load_locale(&temp_dir.path().join("locales/en.json")).unwrap();
    let keys: Vec<String> = en.keys().cloned().collect();
    expect_that!(keys, elements_are![eq("home"), eq("vocab")]);
    expect_that!(en.get("home"), some(eq(&json!({ "title": "Home" }))));
    expect_that!(en.get("vocab").and_then(|v| v.get("flip")), some(eq(&json!("Flip"))));
    expect_that!(flatten_keys(&en, ".").len(), eq(VOCAB_ENTRIES.len() + 1));

    let zh_text = fs::read_to_string(temp_dir.path().join("locales/zh.json")).unwrap();
    expect_that!(zh_text, contains_substring("\"flashcard\": \"单词卡\""));
    expect_that!(zh_text, starts_with("{\n  \"vocab\": {\n    \"flashcard\""));
}

#[googletest::test]
fn update_twice_gives_same_content() {
    let temp_dir = TempDir::new().unwrap();
    write_locale(temp_dir.path(), "mn", r#"{"common": {"ok": "OK"}}"#);

    let first = run(env!("CARGO_BIN_EXE_update-vocab-locales"), temp_dir.path());
    let after_first = fs::read_to_string(temp_dir.path().join("locales/mn.json")).unwrap();
    let second = run(env!("CARGO_BIN_EXE_update-vocab-locales"), temp_dir.path());
    let after_second = fs::read_to_string(temp_dir.path().join("locales/mn.json")).unwrap();

    expect_that!(first.status.success(), eq(true));
    expect_that!(second.status.success(), eq(true));
    expect_that!(after_second, eq(&after_first));
    let parsed: Value = serde_json::from_str(&after_second).unwrap();
    expect_that!(parsed.pointer("/vocab/pos/noun"), some(eq(&json!("Нэр үг"))));
}

#[googletest::test]
fn update_with_no_locales_does_nothing() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(env!("CARGO_BIN_EXE_update-vocab-locales"), temp_dir.path());

    expect_that!(output.status.success(), eq(true));
    expect_that!(output.stdout, is_empty());
    expect_that!(temp_dir.path().join("locales").exists(), eq(false));
}

#[googletest::test]
fn update_fails_on_malformed_locale() {
    let temp_dir = TempDir::new().unwrap();
    write_locale(temp_dir.path(), "en", "not json");

    let output = run(env!("CARGO_BIN_EXE_update-vocab-locales"), temp_dir.path());

    expect_that!(output.status.success(), eq(false));
    expect_that!(
        fs::read_to_string(temp_dir.path().join("locales/en.json")).unwrap(),
        eq("not json")
    );
}
