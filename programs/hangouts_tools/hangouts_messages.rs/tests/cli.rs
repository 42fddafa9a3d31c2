use std::io::Write;
use std::process::{Command, Output, Stdio};

fn hangouts_messages(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_hangouts_messages"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

const EXPORT: &str = r#"{"conversations": [
    {"conversation": {"conversation": {"participant_data": [{"id": {"gaia_id": 7}}]}},
     "events": [{"chat_message": {"message_content": {"segment": [{"text": "seven"}]}}}]},
    {"conversation": {"conversation": {"participant_data": [{"id": {"gaia_id": "8"}}]}},
     "events": [{"chat_message": {"message_content": {"segment": [{"text": "eight"}]}}}]}
]}"#;

#[test]
fn filters_by_gaia_id() {
    let out = hangouts_messages(&["--gaia-id", "7"], EXPORT);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "seven\n");

    let out = hangouts_messages(&[], EXPORT);
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "seven\neight\n");
}

#[test]
fn malformed_export_exits_1() {
    for input in ["not json", r#"{"conversations": [{"events": []}]}"#] {
        let out = hangouts_messages(&[], input);
        assert_eq!(out.status.code(), Some(1), "{}", input);
        assert!(out.stdout.is_empty());
        assert!(String::from_utf8(out.stderr).unwrap().contains("error"));
    }
}
