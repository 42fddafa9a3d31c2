use term_macros::*;
mod select;
mod tagger;
mod tokenizer;
use select::*;
use std::error::Error;
use tagger::LexiconTagger;
use tokenizer::tokenize;

fn write_words<W: Write>(wtr: &mut W, words: &[String]) -> std::io::Result<()> {
    for word in words {
        wtr.write_all(word.as_bytes())?;
        wtr.write_all(b"\n")?;
    }
    Ok(())
}

fn run(strategy: InterestingWords) -> Result<(), Box<dyn Error>> {
    log::debug!("selecting words with strategy '{}'", strategy);
    let tagger = LexiconTagger;
    readin!(wtr, |line: &[u8]| {
        let text = String::from_utf8_lossy(line);
        let words = strategy.select(&tagger, tokenize(text.trim()));
        write_words(&mut wtr, &words)
    })?;
    Ok(())
}

fn main() {
    tool! {
        args:
            - interesting_words: InterestingWords = InterestingWords::All;
        ;

        body: || {
            run(interesting_words)
        }
    }
}

#[test]
fn one_word_per_line() {
    let mut out = Vec::new();
    let words = InterestingWords::Nouns.select(&LexiconTagger, tokenize("The rain on the plane."));
    write_words(&mut out, &words).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "rain\nplane\n");
}
