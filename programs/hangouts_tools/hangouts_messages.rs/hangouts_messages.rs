//!
//! ```cargo
//! [dependencies]
//! term_macros = { path = "../../shared/term_macros"  }
//! hangouts = { path = "../../shared/hangouts"  }
//! log = "0.4"
//! ```
//!
//! Prints the text of every chat message in a Hangouts.json export, one
//! segment per line. `--gaia-id` keeps only conversations with those people.

use hangouts::Takeout;
use std::collections::HashSet;
use std::error::Error;
use term_macros::*;

fn write_messages<W: Write>(
    wtr: &mut W,
    takeout: &Takeout,
    gaia_ids: &HashSet<String>,
) -> std::io::Result<usize> {
    let mut written = 0;
    for text in takeout.conversations_with(gaia_ids).flat_map(|c| c.texts()) {
        wtr.write_all(text.as_bytes())?;
        wtr.write_all(b"\n")?;
        written += 1;
    }
    Ok(written)
}

fn run(gaia_id: Vec<String>) -> Result<(), Box<dyn Error>> {
    let gaia_ids: HashSet<String> = gaia_id.into_iter().collect();
    if !gaia_ids.is_empty() {
        log::info!("restricting to conversations with {} gaia ids", gaia_ids.len());
    }
    let takeout = Takeout::from_reader(std::io::stdin().lock())?;

    let mut wtr = std::io::BufWriter::new(std::io::stdout().lock());
    let written = write_messages(&mut wtr, &takeout, &gaia_ids)?;
    wtr.flush()?;
    log::debug!("{} segments written", written);
    Ok(())
}

fn main() {
    tool! {
        args:
            - gaia_id: Vec<String>;
        ;

        body: || {
            run(gaia_id)
        }
    }
}

#[test]
fn writes_one_segment_per_line() {
    let takeout = Takeout::from_reader(
        r#"{"conversations": [
            {"conversation": {"conversation": {"participant_data": [{"id": {"gaia_id": "1"}}]}},
             "events": [{"chat_message": {"message_content": {"segment": [{"text": "hi"}, {"text": "you"}]}}}]},
            {"conversation": {"conversation": {"participant_data": [{"id": {"gaia_id": "2"}}]}},
             "events": [{"chat_message": {"message_content": {"segment": [{"text": "other"}]}}}]}
        ]}"#
        .as_bytes(),
    )
    .unwrap();

    let mut out = Vec::new();
    assert_eq!(write_messages(&mut out, &takeout, &HashSet::new()).unwrap(), 3);
    assert_eq!(String::from_utf8(out).unwrap(), "hi\nyou\nother\n");

    let mut out = Vec::new();
    let only_two: HashSet<String> = vec!["2".to_string()].into_iter().collect();
    write_messages(&mut out, &takeout, &only_two).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "other\n");
}
