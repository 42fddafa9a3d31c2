use term_macros::*;
mod counts;
mod weighting;
use counts::*;
use std::error::Error;
use weighting::*;

// ./count_words --grouping stem <<EOF
// run
// running
// running
// running
// runs
// runs
// fox
// foxes
// EOF
// 6	running
// 2	fox

/// A trimmed input line; blank lines carry no word.
fn word_of(line: &[u8]) -> Option<String> {
    let line = String::from_utf8_lossy(line);
    let word = line.trim();
    (!word.is_empty()).then(|| word.to_string())
}

fn weighted_lines(
    counts: &WordCounts,
    num_words: usize,
    counting: Counting,
) -> Result<Vec<String>, WeightError> {
    counts
        .top(num_words)
        .into_iter()
        .map(|(word, count)| {
            counting
                .weigh(count)
                .map(|weight| format!("{}\t{}", rounded(weight), word))
        })
        .collect()
}

fn run(num_words: usize, grouping: Grouping, counting: Counting) -> Result<(), Box<dyn Error>> {
    let mut words: Vec<String> = Vec::new();
    readin!(_wtr, |line: &[u8]| {
        words.extend(word_of(line));
    })?;

    let counts = WordCounts::tally(
        grouping.normalizer().as_ref(),
        words.iter().map(String::as_str),
    );
    log::info!(
        "{} words in {} groups (grouping {}, counting {})",
        words.len(),
        counts.len(),
        grouping,
        counting
    );

    let mut wtr = std::io::BufWriter::new(std::io::stdout().lock());
    for line in weighted_lines(&counts, num_words, counting)? {
        wtr.write_all(line.as_bytes())?;
        wtr.write_all(b"\n")?;
    }
    wtr.flush()?;
    Ok(())
}

fn main() {
    tool! {
        args:
            - num_words: usize = 100;
            - grouping: Grouping = Grouping::None;
            - counting: Counting = Counting::Sum;
        ;

        body: || {
            run(num_words, grouping, counting)
        }
    }
}

#[test]
fn documented_example() {
    let words = ["run", "running", "running", "running", "runs", "runs", "fox", "foxes"];
    let counts = WordCounts::tally(&Stemmed::english(), words.iter().copied());
    assert_eq!(
        weighted_lines(&counts, 100, Counting::Sum).unwrap(),
        vec!["6\trunning", "2\tfox"]
    );
    assert_eq!(
        weighted_lines(&counts, 1, Counting::Sqrt).unwrap(),
        vec!["2\trunning"]
    );
    assert_eq!(
        weighted_lines(&counts, 5, Counting::Log).unwrap(),
        vec!["1\trunning", "0\tfox"]
    );
    assert!(weighted_lines(&counts, 0, Counting::Sum).unwrap().is_empty());
}

#[test]
fn blank_lines_are_not_words() {
    let input = "a\n\n  \n\t\na \n";
    let words: Vec<String> = input.split_inclusive('\n').filter_map(|l| word_of(l.as_bytes())).collect();
    assert_eq!(words, vec!["a", "a"]);
    let counts = WordCounts::tally(&Exact, words.iter().map(String::as_str));
    assert_eq!(weighted_lines(&counts, 100, Counting::Sum).unwrap(), vec!["2\ta"]);
}
