use crate::tagger::Tagger;
use once_cell::sync::Lazy;
use regex::Regex;
use term_macros::*;

/// Fragments, contractions and filler that are never interesting, lowercase.
pub const BLACKLIST: &[&str] = &[
    "%", "'ll", "'m", "'s", "are", "be", "bit", "could", "do", "he", "https", "i", "is", "it",
    "n't", "not", "t", "was", "â€™",
];

static NOUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:NN.*)").unwrap());

static NON_BORING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:(FW)|(JJ.*)|(NN.*)|(RB.*)|(UH)|(WB.*))").unwrap());

pub fn is_blacklisted(word: &str) -> bool {
    let lower = word.to_lowercase();
    BLACKLIST.contains(&lower.as_str())
}

choices! {
    pub enum InterestingWords {
        All => "all",
        NonBlacklist => "non-blacklist",
        NonBoring => "non-boring",
        Nouns => "nouns",
    }
}

impl InterestingWords {
    /// Tags a token must start with to be kept, when tags matter at all.
    pub fn tag_pattern(&self) -> Option<&'static Regex> {
        match self {
            InterestingWords::All | InterestingWords::NonBlacklist => None,
            InterestingWords::Nouns => Some(&*NOUNS),
            InterestingWords::NonBoring => Some(&*NON_BORING),
        }
    }

    pub fn select<T: Tagger + ?Sized>(&self, tagger: &T, tokens: Vec<String>) -> Vec<String> {
        match (self, self.tag_pattern()) {
            (InterestingWords::All, _) => tokens,
            (_, None) => tokens.into_iter().filter(|t| !is_blacklisted(t)).collect(),
            (_, Some(pattern)) => {
                let tags = tagger.tags(&tokens);
                tokens
                    .into_iter()
                    .zip(tags)
                    .filter(|(token, tag)| pattern.is_match(tag) && !is_blacklisted(token))
                    .map(|(token, _)| token)
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::LexiconTagger;
    use crate::tokenizer::tokenize;

    fn pick(strategy: InterestingWords, text: &str) -> Vec<String> {
        strategy.select(&LexiconTagger, tokenize(text))
    }

    #[test]
    fn all_keeps_everything() {
        assert_eq!(
            pick(InterestingWords::All, "It's a bit much."),
            vec!["It", "'s", "a", "bit", "much", "."]
        );
    }

    #[test]
    fn blacklist_ignores_case_and_keeps_casing() {
        let words = pick(
            InterestingWords::NonBlacklist,
            "It IS NOT what I'd call a Bit of HTTPS fun, he said.",
        );
        assert_eq!(words, vec!["what", "'d", "call", "a", "of", "fun", ",", "said", "."]);
        for strategy in [InterestingWords::NonBlacklist, InterestingWords::NonBoring, InterestingWords::Nouns] {
            let words = pick(strategy, "He could do it, but it's 100% not a bit https don’t I'll");
            assert!(words.iter().all(|w| !BLACKLIST.contains(&w.to_lowercase().as_str())), "{:?}", words);
        }
    }

    #[test]
    fn nouns() {
        assert_eq!(
            pick(InterestingWords::Nouns, "The rain on the plane falls mainly in Spain."),
            vec!["rain", "plane", "Spain"]
        );
    }

    #[test]
    fn non_boring() {
        assert_eq!(
            pick(InterestingWords::NonBoring, "The rain on the plane falls mainly in Spain."),
            vec!["rain", "plane", "mainly", "Spain"]
        );
        assert_eq!(
            pick(InterestingWords::NonBoring, "wow, a wonderful day"),
            vec!["wow", "wonderful", "day"]
        );
    }

    #[test]
    fn patterns_match_tag_prefixes() {
        let nouns = InterestingWords::Nouns.tag_pattern().unwrap();
        assert!(nouns.is_match("NN") && nouns.is_match("NNPS"));
        assert!(!nouns.is_match("JJ"));
        let non_boring = InterestingWords::NonBoring.tag_pattern().unwrap();
        for tag in ["FW", "JJ", "JJR", "NNS", "RB", "RBS", "UH"] {
            assert!(non_boring.is_match(tag), "{}", tag);
        }
        for tag in ["VB", "DT", "IN", "PRP", "WRB", "."] {
            assert!(!non_boring.is_match(tag), "{}", tag);
        }
        assert!(InterestingWords::All.tag_pattern().is_none());
    }

    #[test]
    fn strategy_flag_values() {
        assert_eq!("non-boring".parse::<InterestingWords>(), Ok(InterestingWords::NonBoring));
        assert!("verbs".parse::<InterestingWords>().is_err());
    }
}
