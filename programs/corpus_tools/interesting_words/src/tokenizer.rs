use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

type Rules = Vec<(Regex, &'static str)>;

fn rules(table: &[(&str, &'static str)]) -> Rules {
    table
        .iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
        .collect()
}

// Penn Treebank conventions, applied to one sentence at a time.
static BEFORE_PADDING: Lazy<Rules> = Lazy::new(|| {
    rules(&[
        // opening quotes
        (r#"([«“‘„]|`+)"#, " $1 "),
        (r#"^""#, "``"),
        (r#"(``)"#, " $1 "),
        (r#"([ (\[{<])("|'')"#, "$1 `` "),
        // punctuation, the final period only
        (r#"([^.])(\.)([\])}>"']*)\s*$"#, "$1 $2$3 "),
        (r#"([:,])([^\d])"#, " $1 $2"),
        (r#"([:,])$"#, " $1 "),
        (r#"\.{2,}"#, " $0 "),
        (r#"[;@#$%&]"#, " $0 "),
        (r#"([^.])(\.)([\])}>"']*)\s*$"#, "$1 $2$3 "),
        (r#"[?!]"#, " $0 "),
        (r#"([^'])' "#, "$1 ' "),
        (r#"[*]"#, " $0 "),
        (r#"[\]\[(){}<>]"#, " $0 "),
        (r#"--"#, " -- "),
    ])
});

static AFTER_PADDING: Lazy<Rules> = Lazy::new(|| {
    rules(&[
        // closing quotes and clitics
        (r#"([»”’])"#, " $1 "),
        (r#"""#, " '' "),
        (r#"(\S)('')"#, "$1 $2 "),
        (r#"([^' ])('[sS]|'[mM]|'[dD]|') "#, "$1 $2 "),
        (r#"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) "#, "$1 $2 "),
        // words that are two tokens
        (r#"(?i)\b(can)(not)\b"#, " $1 $2 "),
        (r#"(?i)\b(d)('ye)\b"#, " $1 $2 "),
        (r#"(?i)\b(gim)(me)\b"#, " $1 $2 "),
        (r#"(?i)\b(gon)(na)\b"#, " $1 $2 "),
        (r#"(?i)\b(got)(ta)\b"#, " $1 $2 "),
        (r#"(?i)\b(lem)(me)\b"#, " $1 $2 "),
        (r#"(?i)\b(more)('n)\b"#, " $1 $2 "),
        (r#"(?i)\b(wan)(na)\s"#, " $1 $2 "),
        (r#"(?i) ('t)(is)\b"#, " $1 $2 "),
        (r#"(?i) ('t)(was)\b"#, " $1 $2 "),
    ])
});

fn apply(rules: &Rules, text: String) -> String {
    rules.iter().fold(text, |text, (pattern, replacement)| {
        pattern.replace_all(&text, *replacement).into_owned()
    })
}

pub fn tokenize_sentence(sentence: &str) -> Vec<String> {
    let sentence = sentence.trim();
    if sentence.is_empty() {
        return Vec::new();
    }
    let text = apply(&BEFORE_PADDING, sentence.to_string());
    let text = apply(&AFTER_PADDING, format!(" {} ", text));
    text.split_whitespace().map(str::to_string).collect()
}

/// Lowercase, without the final period.
const ABBREVIATIONS: &[&str] = &[
    "dr", "e.g", "etc", "i.e", "jr", "mr", "mrs", "ms", "prof", "sr", "st", "vs",
];

fn ends_with_abbreviation(sentence: &str) -> bool {
    sentence
        .split_whitespace()
        .last()
        .and_then(|word| word.strip_suffix('.'))
        .map_or(false, |word| ABBREVIATIONS.contains(&word.to_lowercase().as_str()))
}

/// Unicode sentence boundaries, except after a known abbreviation.
pub fn sentences(text: &str) -> Vec<String> {
    let mut sentences: Vec<String> = Vec::new();
    let mut glued = false;
    for piece in text.unicode_sentences() {
        match sentences.last_mut() {
            Some(last) if glued => last.push_str(piece),
            _ => sentences.push(piece.to_string()),
        }
        glued = ends_with_abbreviation(piece);
    }
    sentences
}

/// Splits text into sentences, then each sentence into Treebank tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    sentences(text).iter().flat_map(|s| tokenize_sentence(s)).collect()
}
