//! Integration tests for the `list` and `run` commands.

mod common;

use common::{check_stdout, pdt, temp_file};
use expect_test::expect;
use predicates::prelude::*;

// ============================================================================
// list
// ============================================================================

#[test]
fn list_append_and_pop_at() {
    check_stdout(
        &["list", "append 1; append 2; append 3; len; pop 1"],
        None,
        expect![[r#"
            3
            2
            {1, 3}
        "#]],
    );
}

#[test]
fn list_remove_and_reverse_with_init() {
    check_stdout(
        &["list", "--init", "1,2,3", "remove 2; remove 99; reverse"],
        None,
        expect![[r#"
            {3, 1}
        "#]],
    );
}

#[test]
fn list_verbose_shows_capacity() {
    check_stdout(
        &["list", "-v", "append 1; append 2; append 3; append 4"],
        None,
        expect![[r#"
            # append 1             len=1 capacity=1
            # append 2             len=2 capacity=2
            # append 3             len=3 capacity=3
            # append 4             len=4 capacity=4
            {1, 2, 3, 4}
        "#]],
    );
}

#[test]
fn list_pop_empty_prints_none() {
    check_stdout(&["list", "pop"], None, expect![[r#"
        None
        {}
    "#]]);
}

#[test]
fn list_runtime_error_is_rendered() {
    pdt()
        .args(["--no-color", "list", "append 1; insert 7 5"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("index 5 out of range for length 1"))
        .stderr(predicate::str::contains("<inline>:1:11"));
}

#[test]
fn list_parse_error_is_rendered() {
    pdt()
        .args(["--no-color", "list", "append 1; shuffle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown operation `shuffle`"));
}

#[test]
fn list_bad_init() {
    pdt()
        .args(["--no-color", "list", "--init", "1,two", "len"])
        .assert()
        .failure()
        .stderr("error: --init: invalid integer `two`\n");
}

// ============================================================================
// run
// ============================================================================

#[test]
fn run_file_with_comments() {
    let file = temp_file(
        "#!/usr/bin/env -S pdt run\n\
         extend 5, 1, 5  # seed\n\
         count 5\n\
         at 1; show\n",
    );
    check_stdout(
        &["run", file.path().to_str().unwrap()],
        None,
        expect![[r#"
            2
            1
            {5, 1, 5}
            {5, 1, 5}
        "#]],
    );
}

#[test]
fn run_from_stdin() {
    check_stdout(&["run", "-"], Some("append 9\nappend 8\n"), expect![[r#"
        {9, 8}
    "#]]);
}

#[test]
fn run_error_names_file() {
    let file = temp_file("append 1\npop 3\n");
    let path = file.path().to_str().unwrap().to_string();
    pdt()
        .args(["--no-color", "run", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!("{path}:2:1")));
}

#[test]
fn run_missing_file() {
    pdt()
        .args(["--no-color", "run", "/nonexistent/script.pdt"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: /nonexistent/script.pdt:"));
}

// ============================================================================
// completions
// ============================================================================

#[test]
fn completions_bash() {
    pdt()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_pdt"));
}
