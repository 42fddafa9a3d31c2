use fnv::FnvHashMap;
use rust_stemmers::{Algorithm, Stemmer};
use std::borrow::Cow;
use term_macros::*;

pub trait Normalize {
    /// The key under which variants of `word` are counted together.
    fn key<'a>(&self, word: &'a str) -> Cow<'a, str>;
}

pub struct Exact;

impl Normalize for Exact {
    fn key<'a>(&self, word: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(word)
    }
}

pub struct Lowercase;

impl Normalize for Lowercase {
    fn key<'a>(&self, word: &'a str) -> Cow<'a, str> {
        Cow::Owned(word.to_lowercase())
    }
}

pub struct Stemmed(Stemmer);

impl Stemmed {
    pub fn english() -> Stemmed {
        Stemmed(Stemmer::create(Algorithm::English))
    }
}

impl Normalize for Stemmed {
    fn key<'a>(&self, word: &'a str) -> Cow<'a, str> {
        Cow::Owned(self.0.stem(&word.to_lowercase()).into_owned())
    }
}

choices! {
    pub enum Grouping {
        None => "none",
        Case => "case",
        Stem => "stem",
    }
}

impl Grouping {
    pub fn normalizer(&self) -> Box<dyn Normalize> {
        match self {
            Grouping::None => Box::new(Exact),
            Grouping::Case => Box::new(Lowercase),
            Grouping::Stem => Box::new(Stemmed::english()),
        }
    }
}

/// Surface forms sharing one key, in order of first appearance.
#[derive(Debug, Default)]
pub struct VariantGroup {
    variants: Vec<(String, u64)>,
    index: FnvHashMap<String, usize>,
}

impl VariantGroup {
    fn add(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&i) => self.variants[i].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.variants.len());
                self.variants.push((word.to_string(), 1));
            }
        }
    }

    /// The most frequent variant; the earliest one wins a tie.
    pub fn representative(&self) -> &str {
        let mut best: Option<&(String, u64)> = None;
        for variant in self.variants.iter() {
            match best {
                Some(b) if b.1 >= variant.1 => {}
                _ => best = Some(variant),
            }
        }
        best.map(|(word, _)| word.as_str()).unwrap_or("")
    }

    pub fn total(&self) -> u64 {
        self.variants.iter().map(|(_, count)| count).sum()
    }
}

#[derive(Debug, Default)]
pub struct WordCounts {
    groups: Vec<VariantGroup>,
    index: FnvHashMap<String, usize>,
}

impl WordCounts {
    pub fn tally<'a, N, I>(normalizer: &N, words: I) -> WordCounts
    where
        N: Normalize + ?Sized,
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts = WordCounts::default();
        for word in words {
            let key = normalizer.key(word);
            let slot = match counts.index.get(key.as_ref()) {
                Some(&i) => i,
                None => {
                    counts.index.insert(key.into_owned(), counts.groups.len());
                    counts.groups.push(VariantGroup::default());
                    counts.groups.len() - 1
                }
            };
            counts.groups[slot].add(word);
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// (representative, count) by descending count; equal counts keep the
    /// order in which their groups first appeared.
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut ranked: Vec<_> = self
            .groups
            .iter()
            .map(|g| (g.representative(), g.total()))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top(grouping: Grouping, words: &[&str], n: usize) -> Vec<(String, u64)> {
        WordCounts::tally(grouping.normalizer().as_ref(), words.iter().copied())
            .top(n)
            .into_iter()
            .map(|(w, c)| (w.to_string(), c))
            .collect()
    }

    fn pairs(expected: &[(&str, u64)]) -> Vec<(String, u64)> {
        expected.iter().map(|(w, c)| (w.to_string(), *c)).collect()
    }

    const RUNNING: &[&str] = &[
        "run", "running", "running", "running", "runs", "runs", "fox", "foxes",
    ];

    #[test]
    fn stem_grouping() {
        assert_eq!(
            top(Grouping::Stem, RUNNING, 100),
            pairs(&[("running", 6), ("fox", 2)])
        );
    }

    #[test]
    fn no_grouping() {
        assert_eq!(
            top(Grouping::None, RUNNING, 100),
            pairs(&[("running", 3), ("runs", 2), ("run", 1), ("fox", 1), ("foxes", 1)])
        );
    }

    #[test]
    fn case_grouping() {
        let words = ["Apple", "apple", "APPLE", "apple", "pear", "Pear", "Pear"];
        assert_eq!(
            top(Grouping::Case, &words, 100),
            pairs(&[("apple", 4), ("Pear", 3)])
        );
    }

    #[test]
    fn earliest_variant_wins_ties() {
        assert_eq!(top(Grouping::Case, &["Dog", "dog"], 10), pairs(&[("Dog", 2)]));
        assert_eq!(top(Grouping::Case, &["dog", "Dog"], 10), pairs(&[("dog", 2)]));
        assert_eq!(
            top(Grouping::None, &["b", "a", "c", "a", "b"], 10),
            pairs(&[("b", 2), ("a", 2), ("c", 1)])
        );
    }

    #[test]
    fn at_most_n_groups() {
        for n in 0..8 {
            for grouping in [Grouping::None, Grouping::Case, Grouping::Stem] {
                let counts = WordCounts::tally(grouping.normalizer().as_ref(), RUNNING.iter().copied());
                assert_eq!(counts.top(n).len(), n.min(counts.len()));
            }
        }
        assert!(WordCounts::tally(&Exact, std::iter::empty()).is_empty());
    }

    #[test]
    fn ranking_ignores_creation_order() {
        // groups appear as c, b, a but rank a, b, c
        let words = ["c", "b", "a", "a", "b", "a", "B", "A", "Runs", "running"];
        assert_eq!(
            top(Grouping::None, &words, 10),
            pairs(&[("a", 3), ("b", 2), ("c", 1), ("B", 1), ("A", 1), ("Runs", 1), ("running", 1)])
        );
        assert_eq!(
            top(Grouping::Case, &words, 10),
            pairs(&[("a", 4), ("b", 3), ("c", 1), ("Runs", 1), ("running", 1)])
        );
        assert_eq!(
            top(Grouping::Stem, &words, 3),
            pairs(&[("a", 4), ("b", 3), ("Runs", 2)])
        );
    }

    #[test]
    fn stem_keys_are_lowercase() {
        let stemmer = Stemmed::english();
        assert_eq!(stemmer.key("Running"), "run");
        assert_eq!(stemmer.key("FOXES"), "fox");
        assert_eq!(Lowercase.key("MiXeD"), "mixed");
        assert_eq!(Exact.key("MiXeD"), "MiXeD");
    }
}
