//!
//! ```cargo
//! [dependencies]
//! term_macros = { path = "../../shared/term_macros"  }
//! hangouts = { path = "../../shared/hangouts"  }
//! log = "0.4"
//! ```
//!
//! Lists who appears in a Hangouts.json export, for picking the ids to pass
//! to `hangouts_messages --gaia-id`.
//!
//! ```text
//! $ gaia_ids <Hangouts.json
//! Jane Doe                                 291251231251231231231
//! John Smith                               123123124123123123123
//! ```

use hangouts::Takeout;
use std::error::Error;
use term_macros::*;

const NAME_WIDTH: usize = 40;

fn identity_line(name: &str, gaia_id: &str) -> String {
    format!("{:<width$} {}", name, gaia_id, width = NAME_WIDTH)
}

fn run() -> Result<(), Box<dyn Error>> {
    let takeout = Takeout::from_reader(std::io::stdin().lock())?;
    let identities = takeout.identities();
    log::info!("{} distinct participants", identities.len());

    let mut wtr = std::io::BufWriter::new(std::io::stdout().lock());
    for (name, gaia_id) in identities.iter() {
        wtr.write_all(identity_line(name, gaia_id).as_bytes())?;
        wtr.write_all(b"\n")?;
    }
    wtr.flush()?;
    Ok(())
}

fn main() {
    tool! {
        args:
        ;

        body: || {
            run()
        }
    }
}

#[test]
fn pads_names_to_forty_columns() {
    assert_eq!(
        identity_line("Jane Doe", "111"),
        format!("Jane Doe{} 111", " ".repeat(32))
    );
    let long = "x".repeat(45);
    assert_eq!(identity_line(&long, "1"), format!("{} 1", long));
    assert_eq!(identity_line("Zoë", "7").find('7'), Some(42));
}
