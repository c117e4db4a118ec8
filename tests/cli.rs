use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn autoscribe_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("autoscribe").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn help_prints_usage() {
    let temp = TempDir::new().unwrap();
    autoscribe_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Render a single annotation to a PNG image",
        ));
}

#[test]
fn renders_png_at_device_resolution() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("circle.png");

    autoscribe_cmd(&temp)
        .args(["--shape", "circle", "--bounds", "10,10,110,60", "--edit"])
        .args(["--ratio", "2", "--width", "120", "--height", "80", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let mut file = std::fs::File::open(&output).unwrap();
    let image = cairo::ImageSurface::create_from_png(&mut file).unwrap();
    assert_eq!((image.width(), image.height()), (240, 160));
}

#[test]
fn ratio_comes_from_config_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    std::fs::write(&config, "[display]\ndevice_pixel_ratio = 3.0\n").unwrap();
    let output = temp.path().join("rect.png");

    autoscribe_cmd(&temp)
        .args(["--shape", "rect", "--bounds", "5,5,20,20", "--width", "30", "--height", "30"])
        .arg("--config")
        .arg(&config)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let mut file = std::fs::File::open(&output).unwrap();
    let image = cairo::ImageSurface::create_from_png(&mut file).unwrap();
    assert_eq!(image.width(), 90);
}

#[test]
fn text_shape_reads_json_block() {
    let temp = TempDir::new().unwrap();
    let text = temp.path().join("lines.json");
    std::fs::write(
        &text,
        r#"[{"line":"Hello","size":90,"total":40},{"line":"there","size":80,"total":75}]"#,
    )
    .unwrap();
    let output = temp.path().join("text.png");

    autoscribe_cmd(&temp)
        .args(["--shape", "text", "--bounds", "0,0,200,100", "--color", "#3366ff"])
        .arg("--text")
        .arg(&text)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();
    assert!(output.exists());
}

#[test]
fn text_shape_without_block_fails() {
    let temp = TempDir::new().unwrap();
    autoscribe_cmd(&temp)
        .args(["--shape", "text", "--bounds", "0,0,10,10", "--output"])
        .arg(temp.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--shape text needs --text"));
}

#[test]
fn unknown_color_is_reported() {
    let temp = TempDir::new().unwrap();
    autoscribe_cmd(&temp)
        .args(["--shape", "rect", "--bounds", "0,0,10,10", "--color", "mauve"])
        .arg("--output")
        .arg(temp.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown color 'mauve'"));
}

#[test]
fn malformed_bounds_are_reported() {
    let temp = TempDir::new().unwrap();
    autoscribe_cmd(&temp)
        .args(["--shape", "arrow", "--bounds", "1,2,3", "--output"])
        .arg(temp.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected 4 comma-separated coordinates"));
}
