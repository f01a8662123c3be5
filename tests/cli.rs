use assert_cmd::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;

use gridplace::output::read_coordinates;

fn write_input(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("edges.txt");
    fs::write(&path, contents).expect("write input");
    path
}

fn gridplace() -> Command {
    Command::new(assert_cmd::cargo_bin!("gridplace"))
}

#[test]
fn writes_coordinates_for_every_node() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_input(tmp.path(), "1,2:5\nabc\n2,3:1\n");
    let out = tmp.path().join("out.csv");

    gridplace()
        .args(["--seed", "1", "-e", "200", "-W", "2", "-H", "2", "-o"])
        .arg(&out)
        .arg(&input)
        .assert()
        .success();

    let text = fs::read_to_string(&out).expect("read output");
    assert!(text.starts_with("id,x,y\n"));
    let rows = read_coordinates(text.as_bytes()).expect("parse output");
    let ids: Vec<i64> = rows.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(rows.iter().all(|(_, p)| (0..2).contains(&p.x) && (0..2).contains(&p.y)));
}

#[test]
fn zero_end_condition_writes_identity_coordinates() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_input(tmp.path(), "1,2:5\n2,3:1\n");
    let out = tmp.path().join("out.csv");

    gridplace()
        .args(["-e", "0", "-o"])
        .arg(&out)
        .arg(&input)
        .assert()
        .success();

    let text = fs::read_to_string(&out).expect("read output");
    assert_eq!(text, "id,x,y\n1,0,0\n2,1,0\n3,0,1\n");
}

#[test]
fn runs_without_output_path() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_input(tmp.path(), "1,2:5\n2,3:1\n3,4:2\n");

    gridplace()
        .args(["--seed", "3", "-g", "-d", "-m", "3", "--unweighted", "-vv", "-e", "100"])
        .arg(&input)
        .assert()
        .success();
}

#[test]
fn help_is_a_usage_exit() {
    gridplace().arg("--help").assert().code(2);
}

#[test]
fn unknown_flag_is_a_usage_exit() {
    gridplace().args(["--bogus", "edges.txt"]).assert().code(2);
}

#[test]
fn window_below_two_is_a_usage_exit() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_input(tmp.path(), "1,2:5\n");

    gridplace().args(["-m", "1"]).arg(&input).assert().code(2);
}

#[test]
fn grid_too_small_fails_before_optimizing() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_input(tmp.path(), "1,2:5\n2,3:1\n");
    let out = tmp.path().join("out.csv");

    gridplace()
        .args(["-W", "1", "-H", "2", "-o"])
        .arg(&out)
        .arg(&input)
        .assert()
        .code(1);
    assert!(!out.exists());
}

#[test]
fn missing_input_fails() {
    let tmp = tempfile::tempdir().expect("tempdir");
    gridplace()
        .arg(tmp.path().join("missing.txt"))
        .assert()
        .code(1);
}
