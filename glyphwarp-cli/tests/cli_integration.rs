use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

struct TestDir {
    path: PathBuf,
}

impl TestDir {
    fn new(tag: &str) -> Self {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let path = std::env::temp_dir().join(format!(
            "glyphwarp_cli_{tag}_{}_{}",
            std::process::id(),
            ts
        ));
        fs::create_dir_all(&path).expect("create temp test dir");
        Self { path }
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_glyphwarp(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_glyphwarp"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("run glyphwarp")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn render_writes_a_200px_png() {
    let dir = TestDir::new("render");
    let output = run_glyphwarp(&["render", "a", "-p", "shear_x=20", "-o", "out/a.png"], &dir.path);
    assert!(output.status.success(), "process failed: {output:?}");

    let png = dir.path.join("out/a.png");
    assert!(png.is_file(), "expected output file at {png:?}");
    let img = image::open(&png).expect("decode png").into_luma8();
    assert_eq!(img.dimensions(), (200, 200));
    assert!(img.pixels().any(|p| p.0[0] == 255));
    assert!(stdout(&output).contains("distance to canonical"));
}

#[test]
fn identical_renders_have_zero_distance() {
    let dir = TestDir::new("distance");
    for name in ["one.png", "two.png"] {
        let out = run_glyphwarp(&["render", "X", "-o", name], &dir.path);
        assert!(out.status.success(), "render failed: {out:?}");
    }
    let output = run_glyphwarp(&["distance", "one.png", "two.png"], &dir.path);
    assert!(output.status.success(), "process failed: {output:?}");
    assert_eq!(stdout(&output).trim(), "0.000000");
}

#[test]
fn distance_rejects_missing_file() {
    let dir = TestDir::new("missing");
    let output = run_glyphwarp(&["distance", "nope.png", "nope.png"], &dir.path);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error:"), "got: {stderr}");
}

#[test]
fn strict_mode_rejects_unknown_parameter() {
    let dir = TestDir::new("strict");
    let lenient = run_glyphwarp(&["render", "W", "-p", "slant=3"], &dir.path);
    assert!(lenient.status.success(), "lenient failed: {lenient:?}");

    let strict = run_glyphwarp(&["--strict", "render", "W", "-p", "slant=3"], &dir.path);
    assert!(!strict.status.success());
    let stderr = String::from_utf8_lossy(&strict.stderr);
    assert!(stderr.contains("slant"), "got: {stderr}");
}

#[test]
fn sweep_prints_one_row_per_step() {
    let dir = TestDir::new("sweep");
    let output = run_glyphwarp(
        &["sweep", "C", "cut_top", "--steps", "5", "--out", "frames"],
        &dir.path,
    );
    assert!(output.status.success(), "process failed: {output:?}");
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6, "header plus five rows: {text}");
    assert!(lines[0].starts_with("t\tcut_top"));
    assert!(lines[1].starts_with("0.000\t-60"));
    assert!(dir.path.join("frames/C_cut_top_004.png").is_file());
}

#[test]
fn grid_walks_every_parameter_combination() {
    let dir = TestDir::new("grid");
    let output = run_glyphwarp(
        &[
            "grid",
            "C",
            "--params",
            "cut_top,vertical_squash",
            "--steps",
            "3",
            "--out",
            "frames",
        ],
        &dir.path,
    );
    assert!(output.status.success(), "process failed: {output:?}");
    let rows: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect();
    assert_eq!(rows.len(), 9, "three combinations of three steps");

    let families: Vec<&str> = rows
        .iter()
        .step_by(3)
        .map(|v| v["family"].as_str().unwrap())
        .collect();
    assert_eq!(families, ["cut_top", "vertical_squash", "cut_top+vertical_squash"]);

    // The first step of the cut_top family moves only cut_top.
    assert_eq!(rows[0]["params"]["cut_top"].as_f64(), Some(-60.0));
    assert_eq!(rows[0]["params"]["vertical_squash"].as_f64(), Some(1.0));
    for v in &rows {
        let d = v["distance"].as_f64().expect("distance");
        assert!((0.0..=1.0).contains(&d));
    }
    assert!(dir.path.join("frames/cut_top+vertical_squash/002.png").is_file());

    let bad = run_glyphwarp(&["grid", "C", "--params", "slant"], &dir.path);
    assert!(!bad.status.success());
}

#[test]
fn sample_is_reproducible() {
    let dir = TestDir::new("sample");
    let first = run_glyphwarp(&["sample", "F", "--count", "3", "--seed", "7"], &dir.path);
    let second = run_glyphwarp(&["sample", "F", "--count", "3", "--seed", "7"], &dir.path);
    assert!(first.status.success(), "process failed: {first:?}");
    assert_eq!(first.stdout, second.stdout);

    for line in stdout(&first).lines() {
        let v: serde_json::Value = serde_json::from_str(line).expect("json line");
        assert_eq!(v["letter"], "F");
        let d = v["distance"].as_f64().expect("distance");
        assert!((0.0..=1.0).contains(&d));
    }
}

#[test]
fn matrix_json_has_unit_diagonal() {
    let dir = TestDir::new("matrix");
    let output = run_glyphwarp(&["matrix", "--json"], &dir.path);
    assert!(output.status.success(), "process failed: {output:?}");
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    for l in ["A", "B", "C", "F", "X", "W"] {
        assert_eq!(v[l][l].as_f64(), Some(1.0), "{l}");
    }
    assert_eq!(v["A"]["B"], v["B"]["A"]);
}

#[test]
fn config_overrides_ranges() {
    let dir = TestDir::new("config");
    fs::write(
        dir.path.join("schema.json"),
        r#"{ "C": { "cut_top": { "min": 0, "max": 10, "default": 0 } } }"#,
    )
    .expect("write schema");
    let output = run_glyphwarp(
        &["--config", "schema.json", "sweep", "C", "cut_top", "--steps", "2"],
        &dir.path,
    );
    assert!(output.status.success(), "process failed: {output:?}");
    let text = stdout(&output);
    assert!(text.contains("\n0.000\t0\t"), "got: {text}");
    assert!(text.contains("\n1.000\t10\t"), "got: {text}");

    fs::write(dir.path.join("bad.json"), "{ \"Q\": {} }").expect("write schema");
    let bad = run_glyphwarp(&["--config", "bad.json", "matrix"], &dir.path);
    assert!(!bad.status.success());
}
