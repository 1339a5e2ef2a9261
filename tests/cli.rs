use std::io::Write;

use assert_cmd::Command; // Run programs, feed stdin
use predicates::prelude::*; // Used for writing assertions

fn ages_csv() -> Result<tempfile::NamedTempFile, Box<dyn std::error::Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "category,age")?;
    writeln!(file, "#,10")?;
    writeln!(file, "+,1")?;
    writeln!(file, "-,2")?;
    writeln!(file, ".,20")?;
    Ok(file)
}

#[test]
fn test_weekly_bins() -> Result<(), Box<dyn std::error::Error>> {
    let file = ages_csv()?;
    let mut cmd = Command::cargo_bin("flagged-histogram")?;

    cmd.arg("csv")
        .arg(file.path())
        .args(["--bin-size", "7", "--width", "20", "--positive", "+-"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("base 0, bin width 7"))
        .stdout(predicate::str::contains(" 0 -  6 2 ++++++++++----------"))
        .stdout(predicate::str::contains(" 7 - 13 0 ##########"))
        .stdout(predicate::str::contains("14 - 20 0 .........."));

    Ok(())
}

#[test]
fn test_interval_rows_from_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("flagged-histogram")?;

    cmd.args(["csv", "-", "--bin-size", "7", "--width", "10"])
        .write_stdin("#,1,15\n.,20\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(" 0 -  6 1 ##########"))
        .stdout(predicate::str::contains(" 7 - 13 1 ##########"))
        .stdout(predicate::str::contains("14 - 20 1 .........."));

    Ok(())
}

#[test]
fn test_missing_binning_fails() -> Result<(), Box<dyn std::error::Error>> {
    let file = ages_csv()?;
    let mut cmd = Command::cargo_bin("flagged-histogram")?;

    cmd.arg("csv").arg(file.path()).args(["--width", "20"]);
    cmd.assert().failure().stderr(predicate::str::contains(
        "must supply positive bin width or bin count",
    ));

    Ok(())
}

#[test]
fn test_empty_input_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("flagged-histogram")?;

    cmd.args(["csv", "-", "--bins", "4"]).write_stdin("category,age\n");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no samples or intervals to bin"));

    Ok(())
}

#[test]
fn test_bad_row_reports_line() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("flagged-histogram")?;

    cmd.args(["csv", "-", "--bins", "4"])
        .write_stdin("+,1\n+,abc\n");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("line 2: value is not a number: 'abc'"));

    Ok(())
}

#[test]
fn test_demo_is_reproducible() -> Result<(), Box<dyn std::error::Error>> {
    let run = || -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        let out = Command::cargo_bin("flagged-histogram")?
            .args(["demo", "--seed", "11", "--items", "300", "--width", "30", "--spans"])
            .output()?;
        assert!(out.status.success());
        Ok(out.stdout)
    };
    let first = run()?;
    assert_eq!(first, run()?);
    assert!(String::from_utf8(first)?.contains("bin width 7"));

    Ok(())
}

#[test]
fn test_examples() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("flagged-histogram")?;

    cmd.arg("examples");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Example invocations"));

    Ok(())
}

#[test]
fn test_infinite_min_scale_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("flagged-histogram")?;

    cmd.args(["csv", "-", "--bins", "2", "--width", "10", "--min-scale", "inf"])
        .write_stdin("+,1\n+,9\n");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid scale bound `min_scale`: inf"));

    Ok(())
}
