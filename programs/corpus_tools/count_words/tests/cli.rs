use std::io::Write;
use std::process::{Command, Output, Stdio};

fn count_words(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_count_words"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn counts_stdin() {
    let out = count_words(
        &["--grouping", "stem", "--num-words=1"],
        "run\nrunning\nrunning\nfox\n",
    );
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "3\trunning\n");
}

#[test]
fn bad_flags_exit_2_with_usage() {
    for args in [
        &["--counting", "mean"][..],
        &["--num-words", "lots"][..],
        &["--colour", "red"][..],
        &["words.txt"][..],
    ] {
        let out = count_words(args, "");
        assert_eq!(out.status.code(), Some(2), "{:?}", args);
        assert!(out.stdout.is_empty());
        let err = String::from_utf8(out.stderr).unwrap();
        assert!(err.contains("usage: count_words"), "{}", err);
    }
    let err = String::from_utf8(count_words(&["--counting", "mean"], "").stderr).unwrap();
    assert!(err.contains("sum, sqrt, log"), "{}", err);
}

#[test]
fn help_exits_0() {
    let out = count_words(&["--help"], "");
    assert_eq!(out.status.code(), Some(0));
    let usage = String::from_utf8(out.stdout).unwrap();
    assert!(usage.contains("--counting <Counting>"), "{}", usage);
    assert!(usage.contains("[default: 100]"), "{}", usage);
}
