use std::io::Write;
use std::process::{Command, Stdio};

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_aeromode"));
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute aeromode");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("mode indicator widget"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_aeromode"));
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute aeromode");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("aeromode"));
}

#[test]
fn render_argument_produces_the_fragment() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_aeromode"));
    cmd.args(["render", "resize"]);

    // Act
    let output = cmd.output().expect("failed to execute aeromode");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<div class=\"aerospace-mode resize\">RESIZE</div>"));
}

#[test]
fn render_empty_argument_falls_back_to_main() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_aeromode"));
    cmd.args(["render", ""]);

    // Act
    let output = cmd.output().expect("failed to execute aeromode");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<div class=\"aerospace-mode main\">MAIN</div>"));
}

#[test]
fn render_reads_stdin_and_trims() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_aeromode"));
    cmd.args(["render", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped());

    // Act
    let mut child = cmd.spawn().expect("failed to spawn aeromode");
    child
        .stdin
        .take()
        .expect("stdin not captured")
        .write_all(b"media\n")
        .expect("failed to write stdin");
    let output = child.wait_with_output().expect("failed to wait on aeromode");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<div class=\"aerospace-mode media\">MEDIA</div>"));
}

#[test]
fn render_json_emits_class_and_text() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_aeromode"));
    cmd.args(["render", "custom", "--json"]);

    // Act
    let output = cmd.output().expect("failed to execute aeromode");

    // Assert
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("invalid JSON fragment");
    assert_eq!(value["class"], "aerospace-mode custom");
    assert_eq!(value["text"], "CUSTOM");
}

#[test]
fn css_prints_the_stylesheet() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_aeromode"));
    cmd.arg("css");

    // Act
    let output = cmd.output().expect("failed to execute aeromode");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(".aerospace-mode {"));
    assert!(stdout.contains(".aerospace-mode.service {"));
}

#[test]
fn widget_emits_parseable_json() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_aeromode"));
    cmd.arg("widget");

    // Act
    let output = cmd.output().expect("failed to execute aeromode");

    // Assert
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("invalid JSON manifest");
    assert!(value["command"].is_string());
    assert!(value["refreshFrequency"].is_u64());
    assert!(value["className"].as_str().unwrap().contains(".aerospace-mode"));
}
