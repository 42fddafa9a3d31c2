use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Assigns one Penn Treebank tag per token.
pub trait Tagger {
    fn tags(&self, tokens: &[String]) -> Vec<&'static str>;
}

/// Closed-class lexicon, a list of common verbs and suffix rules, with the
/// previous tag as context. Anything unrecognised is a noun.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconTagger;

static CLOSED_CLASS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let table: &[(&'static str, &[&'static str])] = &[
        ("DT", &["a", "an", "the", "this", "that", "these", "those", "every", "each", "some", "any", "no", "another", "all", "both", "either", "neither"]),
        ("IN", &["in", "on", "at", "of", "for", "with", "by", "from", "about", "as", "into", "like", "through", "after", "over", "between", "against", "during", "without", "before", "under", "around", "among", "upon", "within", "along", "across", "behind", "beyond", "toward", "towards", "since", "until", "than", "because", "though", "although", "while", "if", "whether", "unless", "via", "per", "near", "onto", "out", "off"]),
        ("CC", &["and", "or", "but", "nor", "yet", "plus"]),
        ("PRP", &["i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "myself", "yourself", "himself", "herself", "itself", "ourselves", "themselves", "u"]),
        ("PRP$", &["my", "your", "his", "its", "our", "their"]),
        ("MD", &["can", "could", "will", "would", "shall", "should", "may", "might", "must", "'ll", "'d", "wo", "ca"]),
        ("TO", &["to"]),
        ("VB", &["be"]),
        ("VBP", &["am", "are", "'m", "'re", "have", "'ve", "do"]),
        ("VBZ", &["is", "has", "does"]),
        ("VBD", &["was", "were", "had", "did"]),
        ("VBN", &["been", "done"]),
        ("VBG", &["being", "having", "doing"]),
        ("RB", &["not", "n't", "very", "too", "also", "just", "really", "so", "quite", "rather", "almost", "already", "still", "even", "never", "always", "often", "sometimes", "usually", "again", "ever", "here", "now", "then", "soon", "today", "tomorrow", "tonight", "yesterday", "maybe", "perhaps", "only", "well", "away", "back", "together", "instead", "anyway", "ago", "pretty", "later", "once", "up", "down"]),
        ("WDT", &["which", "whatever", "whichever"]),
        ("WP", &["who", "whom", "what", "whoever"]),
        ("WP$", &["whose"]),
        ("WRB", &["when", "where", "why", "how", "whenever", "wherever"]),
        ("UH", &["oh", "ah", "hey", "hi", "hello", "wow", "yes", "yeah", "yep", "nope", "ok", "okay", "lol", "haha", "hahaha", "hmm", "um", "uh", "thanks", "oops", "ugh", "yay", "bye", "please"]),
        ("JJ", &["good", "bad", "new", "old", "great", "big", "small", "little", "other", "same", "different", "important", "large", "long", "high", "young", "own", "right", "few", "many", "much", "last", "next", "first", "sure", "nice", "happy", "sad", "able", "whole", "late", "early", "real", "free", "full", "hard", "easy", "true", "false", "fine", "cool", "such", "ready", "glad", "sorry", "tired"]),
        ("JJR", &["more", "less", "better", "worse", "fewer"]),
        ("JJS", &["most", "least", "best", "worst"]),
        ("CD", &["zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven", "twelve", "twenty", "hundred", "thousand", "million", "billion"]),
    ];
    table
        .iter()
        .flat_map(|(tag, words)| words.iter().map(move |w| (*w, *tag)))
        .collect()
});

static VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "go", "get", "make", "know", "think", "take", "see", "come", "want", "look", "use", "find",
        "give", "tell", "work", "call", "try", "ask", "need", "feel", "become", "leave", "put",
        "mean", "keep", "let", "begin", "seem", "help", "talk", "turn", "start", "show", "hear",
        "play", "run", "move", "live", "believe", "hold", "bring", "happen", "write", "sit", "stand",
        "lose", "pay", "meet", "include", "continue", "set", "learn", "change", "lead", "understand",
        "watch", "follow", "stop", "create", "speak", "read", "spend", "grow", "open", "walk", "win",
        "offer", "remember", "love", "consider", "appear", "buy", "wait", "serve", "die", "send",
        "expect", "build", "stay", "fall", "cut", "reach", "kill", "remain", "say", "suggest",
        "raise", "pass", "sell", "require", "decide", "pull", "eat", "drink", "sleep", "hope",
        "guess", "miss", "wish", "hate", "agree", "forget", "sound", "check", "drive",
    ]
    .into_iter()
    .collect()
});

static IRREGULAR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let past: &[&'static str] = &[
        "went", "got", "made", "knew", "thought", "took", "saw", "came", "gave", "told", "felt",
        "became", "left", "meant", "kept", "began", "brought", "held", "wrote", "sat", "stood",
        "lost", "paid", "met", "ran", "said", "found", "bought", "sent", "built", "fell", "ate",
        "drank", "slept", "forgot", "drove", "spoke", "heard",
    ];
    let participle: &[&'static str] = &[
        "gone", "known", "taken", "seen", "given", "written", "eaten", "begun", "fallen",
        "forgotten", "driven", "spoken", "gotten",
    ];
    past.iter()
        .map(|w| (*w, "VBD"))
        .chain(participle.iter().map(|w| (*w, "VBN")))
        .collect()
});

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d[\d,.:/]*(st|nd|rd|th|s)?$").unwrap());

const NOT_ING: &[&str] = &["thing", "nothing", "something", "anything", "everything", "morning", "evening", "king", "ring", "spring", "string", "ceiling", "wedding", "building", "meeting", "feeling", "during"];
const NOT_ED: &[&str] = &["bed", "shed", "seed", "feed", "speed", "hundred", "sled", "weed", "breed", "greed", "need", "sacred", "wicked", "naked"];
const NOT_LY: &[&str] = &["family", "reply", "supply", "apply", "italy", "july", "jelly", "belly", "bully", "ally", "rally", "holy", "ugly", "lovely", "friendly", "lonely", "silly", "early", "only", "daily", "weekly", "monthly", "likely"];
const NOT_EST: &[&str] = &["interest", "forest", "request", "guest", "chest", "nest", "rest", "test", "west", "protest", "contest", "honest", "modest", "harvest"];
const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "ical", "less", "ish", "ic", "al"];

/// Tags after which a verb-looking word reads as a noun.
fn nominal_context(prev: Option<&str>) -> bool {
    matches!(
        prev,
        Some("DT" | "PRP$" | "JJ" | "JJR" | "JJS" | "POS" | "IN" | "CD")
    )
}

fn auxiliary(prev: Option<&str>) -> bool {
    matches!(prev, Some("VBZ" | "VBP" | "VBD" | "VB" | "VBN"))
}

fn punctuation_tag(token: &str) -> Option<&'static str> {
    let tag = match token {
        "." | "!" | "?" => ".",
        "," => ",",
        ":" | ";" | "--" | "-" | "..." => ":",
        "(" | "[" | "{" => "(",
        ")" | "]" | "}" => ")",
        "``" | "“" | "‘" | "«" => "``",
        "''" | "”" | "’" | "»" | "'" => "''",
        "$" => "$",
        "#" => "#",
        _ if token.chars().all(|c| !c.is_alphanumeric()) => "SYM",
        _ => return None,
    };
    Some(tag)
}

fn base_verb_tag(prev: Option<&str>) -> &'static str {
    match prev {
        Some("TO" | "MD") => "VB",
        Some("PRP" | "NNS" | "WP" | "WDT") => "VBP",
        p if nominal_context(p) => "NN",
        _ => "VB",
    }
}

fn verb_tag(lower: &str, prev: Option<&str>) -> Option<&'static str> {
    if let Some(tag) = IRREGULAR.get(lower) {
        return Some(*tag);
    }
    if VERBS.contains(lower) {
        return Some(base_verb_tag(prev));
    }
    let third_person = lower
        .strip_suffix("es")
        .filter(|base| VERBS.contains(*base))
        .or_else(|| lower.strip_suffix('s').filter(|base| VERBS.contains(*base)));
    third_person.map(|_| match prev {
        p if nominal_context(p) => "NNS",
        Some(p) if p.starts_with("VB") => "NNS",
        _ => "VBZ",
    })
}

fn suffix_tag(lower: &str, prev: Option<&str>) -> &'static str {
    let len = lower.chars().count();
    if len > 4 && lower.ends_with("ing") && !NOT_ING.contains(&lower) {
        return match prev {
            Some("DT" | "PRP$" | "POS") => "NN",
            _ => "VBG",
        };
    }
    if len > 3 && lower.ends_with("ed") && !NOT_ED.contains(&lower) {
        return if auxiliary(prev) { "VBN" } else { "VBD" };
    }
    if len > 4 && lower.ends_with("ly") && !NOT_LY.contains(&lower) {
        return "RB";
    }
    if len > 5 && lower.ends_with("est") && !NOT_EST.contains(&lower) {
        return "JJS";
    }
    if ADJECTIVE_SUFFIXES
        .iter()
        .any(|suffix| len > suffix.len() + 2 && lower.ends_with(suffix))
    {
        return "JJ";
    }
    if len > 3
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
    {
        return "NNS";
    }
    "NN"
}

fn tag_token(token: &str, prev: Option<&str>, next: Option<&str>) -> &'static str {
    if let Some(tag) = punctuation_tag(token) {
        return tag;
    }
    if NUMBER.is_match(token) {
        return "CD";
    }
    let lower = token.to_lowercase();
    match lower.as_str() {
        "'s" => {
            return match prev {
                Some("PRP" | "EX" | "WP" | "WDT" | "DT") => "VBZ",
                _ => "POS",
            }
        }
        "there" => {
            let existential = next.map_or(false, |n| {
                matches!(n.to_lowercase().as_str(), "is" | "are" | "was" | "were" | "'s" | "be")
            });
            return if existential { "EX" } else { "RB" };
        }
        _ => {}
    }
    if let Some(tag) = CLOSED_CLASS.get(lower.as_str()) {
        return *tag;
    }
    if let Some(tag) = verb_tag(&lower, prev) {
        return tag;
    }
    let sentence_start = matches!(prev, None | Some("." | "``" | ":"));
    if !sentence_start && token.chars().next().map_or(false, char::is_uppercase) {
        return "NNP";
    }
    suffix_tag(&lower, prev)
}

impl Tagger for LexiconTagger {
    fn tags(&self, tokens: &[String]) -> Vec<&'static str> {
        let mut tags: Vec<&'static str> = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            let next = tokens.get(i + 1).map(String::as_str);
            let tag = tag_token(token, tags.last().copied(), next);
            tags.push(tag);
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn tagged(text: &str) -> Vec<(String, &'static str)> {
        let tokens = tokenize(text);
        let tags = LexiconTagger.tags(&tokens);
        tokens.into_iter().zip(tags).collect()
    }

    fn tag_of(text: &str, word: &str) -> &'static str {
        tagged(text)
            .into_iter()
            .find(|(w, _)| w == word)
            .map(|(_, t)| t)
            .unwrap()
    }

    #[test]
    fn one_tag_per_token() {
        let tokens = tokenize("Well, I guess we'll see what happens tomorrow at 5pm!");
        assert_eq!(LexiconTagger.tags(&tokens).len(), tokens.len());
        assert!(LexiconTagger.tags(&[]).is_empty());
    }

    #[test]
    fn closed_classes() {
        let tags: Vec<_> = tagged("The rain on the plane falls mainly in Spain.")
            .into_iter()
            .map(|(_, t)| t)
            .collect();
        assert_eq!(tags, vec!["DT", "NN", "IN", "DT", "NN", "VBZ", "RB", "IN", "NNP", "."]);
    }

    #[test]
    fn verbs_in_context() {
        assert_eq!(tag_of("I want to run", "run"), "VB");
        assert_eq!(tag_of("they run fast", "run"), "VBP");
        assert_eq!(tag_of("a good run", "run"), "NN");
        assert_eq!(tag_of("she runs", "runs"), "VBZ");
        assert_eq!(tag_of("the runs", "runs"), "NNS");
        assert_eq!(tag_of("we went home", "went"), "VBD");
        assert_eq!(tag_of("it was painted", "painted"), "VBN");
        assert_eq!(tag_of("he painted it", "painted"), "VBD");
    }

    #[test]
    fn open_classes_by_shape() {
        assert_eq!(tag_of("a wonderful day", "wonderful"), "JJ");
        assert_eq!(tag_of("it moved quickly", "quickly"), "RB");
        assert_eq!(tag_of("the biggest cats", "biggest"), "JJS");
        assert_eq!(tag_of("the biggest cats", "cats"), "NNS");
        assert_eq!(tag_of("we met Alice", "Alice"), "NNP");
        assert_eq!(tag_of("lunch with 12 people", "12"), "CD");
        assert_eq!(tag_of("wow that is neat", "wow"), "UH");
        assert_eq!(tag_of("there is hope", "there"), "EX");
        assert_eq!(tag_of("over there", "there"), "RB");
    }

    #[test]
    fn clitics() {
        assert_eq!(tag_of("it's late", "'s"), "VBZ");
        assert_eq!(tag_of("John's car", "'s"), "POS");
        assert_eq!(tag_of("I don't know", "n't"), "RB");
    }
}
