//! Integration tests for the benchplot binary.
//!
//! Each test runs the compiled binary inside a temporary directory against
//! the CSV fixtures under `tests/fixtures/`.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Run benchplot with `args` from `dir`.
fn benchplot(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_benchplot"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to execute benchplot")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "benchplot failed (exit={:?}):\nstdout:\n{}\nstderr:\n{}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ---------------------------------------------------------------------------
// plot
// ---------------------------------------------------------------------------

#[test]
fn default_run_plots_default_input() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::copy(
        fixture("benchmark-boost-raw.csv"),
        dir.path().join("benchmark-boost-raw.csv"),
    )
    .unwrap();

    let output = benchplot(dir.path(), &[]);
    assert_success(&output);

    let svg = std::fs::read_to_string(dir.path().join("benchmark-boost.svg")).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Boost cpp_int benchmarks"));
    assert!(svg.contains("Addition"));
    assert!(svg.contains("Division"));
    assert!(stdout(&output).contains("Loaded 4 series x 11 rows"));
}

#[test]
fn plot_with_flags() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture("benchmark-boost-raw.csv");

    let output = benchplot(
        dir.path(),
        &[
            "plot",
            "-i",
            input.to_str().unwrap(),
            "-o",
            "custom.svg",
            "--title",
            "cpp_int fixed",
            "--width",
            "640",
            "--height",
            "480",
        ],
    );
    assert_success(&output);

    let svg = std::fs::read_to_string(dir.path().join("custom.svg")).unwrap();
    assert!(svg.contains("cpp_int fixed"));
    assert!(stdout(&output).contains("custom.svg"));
}

#[test]
fn divided_plot_prints_cut_offs_when_verbose() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture("benchmark-boost-raw.csv");

    let output = benchplot(
        dir.path(),
        &["-v", "plot", "-i", input.to_str().unwrap(), "--mode", "divided"],
    );
    assert_success(&output);

    let out = stdout(&output);
    assert!(out.contains("Addition cut-offs: [4, 6, 8]"), "{out}");
    assert!(dir.path().join("benchmark-boost.svg").exists());
}

#[test]
fn divided_plot_fails_when_threshold_is_never_crossed() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture("benchmark-boost-raw.csv");

    let output = benchplot(
        dir.path(),
        &[
            "plot",
            "-i",
            input.to_str().unwrap(),
            "--mode",
            "divided",
            "--threshold",
            "200",
            "--threshold",
            "100000",
        ],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("crosses 1 of 2"));
    assert!(!dir.path().join("benchmark-boost.svg").exists());
}

#[test]
fn quiet_plot_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture("small.csv");

    let output = benchplot(dir.path(), &["-q", "plot", "-i", input.to_str().unwrap()]);
    assert_success(&output);
    assert!(stdout(&output).is_empty());
    assert!(dir.path().join("benchmark-boost.svg").exists());
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

#[test]
fn config_file_is_picked_up_from_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture("small.csv");
    std::fs::write(
        dir.path().join("benchplot.toml"),
        format!(
            "input = {:?}\noutput = \"from-config.svg\"\n\n[plot]\ntitle = \"Configured\"\n",
            input.to_str().unwrap()
        ),
    )
    .unwrap();

    let output = benchplot(dir.path(), &["plot"]);
    assert_success(&output);

    let svg = std::fs::read_to_string(dir.path().join("from-config.svg")).unwrap();
    assert!(svg.contains("Configured"));
}

#[test]
fn flags_override_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture("small.csv");
    std::fs::write(
        dir.path().join("settings.toml"),
        "output = \"from-config.svg\"\n\n[plot]\ntitle = \"Configured\"\n",
    )
    .unwrap();

    let output = benchplot(
        dir.path(),
        &[
            "--config",
            "settings.toml",
            "plot",
            "-i",
            input.to_str().unwrap(),
            "--title",
            "Flagged",
        ],
    );
    assert_success(&output);

    let svg = std::fs::read_to_string(dir.path().join("from-config.svg")).unwrap();
    assert!(svg.contains("Flagged"));
    assert!(!svg.contains("Configured"));
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = benchplot(dir.path(), &["--config", "nope.toml", "plot"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("nope.toml"));
}

#[test]
fn unknown_config_key_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("benchplot.toml"), "[plot]\ncolour = \"red\"\n").unwrap();

    let output = benchplot(dir.path(), &["plot"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("benchplot.toml"));
}

// ---------------------------------------------------------------------------
// errors
// ---------------------------------------------------------------------------

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = benchplot(dir.path(), &[]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("benchmark-boost-raw.csv"));
}

#[test]
fn malformed_row_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture("malformed.csv");

    let output = benchplot(dir.path(), &["plot", "-i", input.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("line 3: expected 4 fields, found 3"));
    assert!(!dir.path().join("benchmark-boost.svg").exists());
}

// ---------------------------------------------------------------------------
// table
// ---------------------------------------------------------------------------

#[test]
fn table_shows_adjusted_times() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture("small.csv");

    let output = benchplot(dir.path(), &["-q", "table", "-i", input.to_str().unwrap()]);
    assert_success(&output);

    let out = stdout(&output);
    assert!(out.starts_with("| Bits              | Addition          | Multiplication    |"));
    assert!(out.contains("| 32 bits           | 1.5000            | 2.0000            |"));
}

#[test]
fn raw_table_shows_measured_times() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture("small.csv");

    let output = benchplot(
        dir.path(),
        &["-q", "table", "--raw", "-i", input.to_str().unwrap()],
    );
    assert_success(&output);
    assert!(stdout(&output).contains("| 32 bits           | 3.0000            | 4.0000            |"));
}
