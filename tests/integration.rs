use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn labmark_cmd() -> Command {
    Command::cargo_bin("labmark").unwrap()
}

/// Write a Markdown file into the temp dir and return its path as a string.
fn write_md(tmp: &TempDir, name: &str, content: &str) -> String {
    let path = tmp.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

// --- render command ---

#[test]
fn test_render_to_stdout() {
    let tmp = TempDir::new().unwrap();
    let input = write_md(&tmp, "bio.md", "# Alice\n\n{{papers: 1,2}}\n");

    labmark_cmd()
        .args(["render", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Alice</h1>"))
        .stdout(predicate::str::contains("papers-list-container"))
        .stdout(predicate::str::contains("data-paper-ids=\"1,2\""));
}

#[test]
fn test_render_to_output_file() {
    let tmp = TempDir::new().unwrap();
    let input = write_md(&tmp, "bio.md", "{{research: AI, Systems}}\n");
    let output = tmp.path().join("bio.html");

    labmark_cmd()
        .args(["render", &input, "-o", &output.to_string_lossy()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered"));

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("research-tags-container"));
    assert!(html.contains("Research Areas:"));
}

#[test]
fn test_render_external_links_hardened() {
    let tmp = TempDir::new().unwrap();
    let input = write_md(
        &tmp,
        "news.md",
        "[external](https://example.com) and [internal](/papers)\n",
    );

    labmark_cmd()
        .args(["render", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"<a href="https://example.com" target="_blank" rel="noopener noreferrer">"#,
        ))
        .stdout(predicate::str::contains(r#"<a href="/papers">"#));
}

#[test]
fn test_render_lang_flag_localizes_output() {
    let tmp = TempDir::new().unwrap();
    let input = write_md(&tmp, "bio.md", "{{research: 机器学习}}\n");

    labmark_cmd()
        .args(["render", &input, "--lang", "zh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("研究领域："));
}

#[test]
fn test_render_json_envelope() {
    let tmp = TempDir::new().unwrap();
    let input = write_md(&tmp, "bio.md", "## Bio\n\n{{papers: 7, x, 8}}\n");

    let output = labmark_cmd()
        .args(["render", &input, "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["ok"], true);
    assert_eq!(value["data"]["paper_ids"][0], "7");
    assert_eq!(value["data"]["paper_ids"][1], "8");
    assert!(value["data"]["html"]
        .as_str()
        .unwrap()
        .contains("papers-list-container"));
    assert!(value["data"]["summary"]
        .as_str()
        .unwrap()
        .starts_with("Bio"));
}

#[test]
fn test_render_missing_input_fails() {
    labmark_cmd()
        .args(["render", "/nonexistent/input.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("✗"));
}

#[test]
fn test_render_missing_input_fails_with_json_envelope() {
    let output = labmark_cmd()
        .args(["render", "/nonexistent/input.md", "--json"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["ok"], false);
    assert!(value["error"].is_string());
}

#[test]
fn test_render_rejects_unknown_lang() {
    let tmp = TempDir::new().unwrap();
    let input = write_md(&tmp, "bio.md", "hello\n");

    labmark_cmd()
        .args(["render", &input, "--lang", "fr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported language"));
}

#[test]
fn test_render_with_config_file() {
    let tmp = TempDir::new().unwrap();
    let input = write_md(&tmp, "bio.md", "{{research: A, B}}\n");
    let config = tmp.path().join("labmark.toml");
    fs::write(
        &config,
        "language = \"zh\"\n\n[tags]\npalette = [\"#111111\", \"#222222\"]\n",
    )
    .unwrap();

    labmark_cmd()
        .args(["render", &input, "--config", &config.to_string_lossy()])
        .assert()
        .success()
        .stdout(predicate::str::contains("研究领域："))
        .stdout(predicate::str::contains("#111111"))
        .stdout(predicate::str::contains("#222222"));
}

#[test]
fn test_render_invalid_config_fails() {
    let tmp = TempDir::new().unwrap();
    let input = write_md(&tmp, "bio.md", "hello\n");
    let config = tmp.path().join("labmark.toml");
    fs::write(&config, "[tags]\npalette = [\"red\"]\n").unwrap();

    labmark_cmd()
        .args(["render", &input, "--config", &config.to_string_lossy()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[cfg(feature = "math")]
#[test]
fn test_render_math_spans() {
    let tmp = TempDir::new().unwrap();
    let input = write_md(&tmp, "note.md", "Euler: $e^{i\\pi}+1=0$\n");

    labmark_cmd()
        .args(["render", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("math-inline"))
        .stdout(predicate::str::contains("katex"));
}

// --- template command ---

#[test]
fn test_template_default_english() {
    labmark_cmd()
        .args(["template"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Profile"))
        .stdout(predicate::str::contains("{{research:"))
        .stdout(predicate::str::contains("{{papers: 1,2,3}}"));
}

#[test]
fn test_template_chinese() {
    labmark_cmd()
        .args(["template", "--lang", "zh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## 个人简介"));
}

#[test]
fn test_template_unknown_lang_fails() {
    labmark_cmd()
        .args(["template", "--lang", "xx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported language"));
}

#[test]
fn test_template_json_envelope() {
    let output = labmark_cmd()
        .args(["template", "--lang", "zh-TW", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["ok"], true);
    assert_eq!(value["data"]["language"], "zh-TW");
    assert!(value["data"]["template"]
        .as_str()
        .unwrap()
        .contains("個人簡介"));
}

// --- template output round-trips through render ---

#[test]
fn test_template_renders_through_pipeline() {
    let tmp = TempDir::new().unwrap();

    let template = labmark_cmd()
        .args(["template", "--lang", "en"])
        .output()
        .unwrap();
    let input = write_md(
        &tmp,
        "starter.md",
        std::str::from_utf8(&template.stdout).unwrap(),
    );

    labmark_cmd()
        .args(["render", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("research-tags-container"))
        .stdout(predicate::str::contains("homepage-github"))
        .stdout(predicate::str::contains("data-paper-ids=\"1,2,3\""));
}
