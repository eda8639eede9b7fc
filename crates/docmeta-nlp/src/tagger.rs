//! Lexicon and suffix-rule part-of-speech tagger.
//!
//! Tags follow the Universal Dependencies coarse tag set. Closed-class words
//! come from small lexicons; open-class words are guessed from suffixes and
//! then adjusted with a few left-context rules.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::lemmatizer;
use crate::tokenizer::{Token, TokenKind};

/// Universal part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum PosTag {
    Noun,
    Propn,
    Verb,
    Aux,
    Adj,
    Adv,
    Pron,
    Det,
    Adp,
    Cconj,
    Sconj,
    Part,
    Num,
    Punct,
    Sym,
    Space,
    X,
}

impl PosTag {
    /// Open-class tags that can carry keywords.
    pub fn is_content(&self) -> bool {
        matches!(self, Self::Noun | Self::Adj | Self::Verb | Self::Propn)
    }

    /// Tags allowed inside a noun chunk before its head.
    pub fn is_nominal_modifier(&self) -> bool {
        matches!(self, Self::Det | Self::Adj | Self::Num | Self::Noun | Self::Propn)
    }
}

static LEXICON: Lazy<HashMap<&'static str, PosTag>> = Lazy::new(|| {
    let mut map = HashMap::new();
    let mut add = |tag: PosTag, words: &[&'static str]| {
        for word in words {
            map.insert(*word, tag);
        }
    };

    add(
        PosTag::Det,
        &[
            "the", "a", "an", "this", "that", "these", "those", "each", "every", "some", "any",
            "no", "all", "both", "another", "either", "neither", "my", "your", "his", "its",
            "our", "their", "whose",
        ],
    );
    add(
        PosTag::Pron,
        &[
            "i", "me", "you", "he", "him", "she", "her", "it", "we", "us", "they", "them",
            "myself", "yourself", "himself", "herself", "itself", "ourselves", "themselves",
            "who", "whom", "what", "which", "something", "anything", "nothing", "everything",
            "someone", "anyone", "everyone", "nobody", "somebody", "mine", "yours", "ours",
            "theirs", "hers",
        ],
    );
    add(
        PosTag::Adp,
        &[
            "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
            "through", "during", "before", "after", "above", "below", "from", "up", "down",
            "over", "under", "around", "among", "within", "without", "across", "toward",
            "towards", "upon", "via", "per", "to", "onto", "behind", "beyond", "despite",
            "throughout", "along", "near", "than", "like",
        ],
    );
    add(PosTag::Cconj, &["and", "or", "but", "nor", "plus"]);
    add(
        PosTag::Sconj,
        &[
            "if", "because", "while", "although", "though", "unless", "whereas", "whether",
            "since", "until", "once", "so",
        ],
    );
    add(
        PosTag::Aux,
        &[
            "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had",
            "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may",
            "might", "must", "ca", "'s", "'re", "'m", "'ve", "'ll", "'d",
        ],
    );
    add(PosTag::Part, &["not", "n't", "never"]);
    add(
        PosTag::Adv,
        &[
            "very", "also", "just", "only", "too", "quite", "rather", "always", "often",
            "sometimes", "here", "there", "now", "then", "soon", "already", "still", "again",
            "however", "therefore", "thus", "well", "almost", "even", "ever", "yet", "perhaps",
            "really", "more", "most", "less", "least", "further", "instead", "together",
            "later", "how", "when", "where", "why", "moreover", "furthermore",
        ],
    );
    add(
        PosTag::Num,
        &[
            "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
            "eleven", "twelve", "twenty", "thirty", "fifty", "hundred", "thousand", "million",
            "billion", "trillion",
        ],
    );
    add(
        PosTag::Adj,
        &[
            "good", "great", "new", "old", "big", "small", "high", "low", "large", "long",
            "short", "important", "different", "same", "early", "late", "young", "major",
            "key", "main", "full", "free", "clear", "strong", "poor", "bad", "best", "better",
            "worse", "worst", "other", "such", "many", "much", "few", "several", "own",
            "next", "last", "first", "second", "third", "recent", "current", "annual",
            "quarterly", "monthly", "final", "total", "overall", "excellent", "amazing",
            "wonderful", "fantastic", "terrible", "awful", "horrible", "disappointing",
            "open", "public", "private", "general", "specific", "simple", "complex", "easy",
            "hard", "real", "true", "whole", "sure", "likely", "possible", "available",
        ],
    );

    map
});

/// Base-form verbs recognized without suffix evidence.
static BASE_VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "make", "say", "go", "get", "take", "see", "know", "use", "find", "give", "tell",
        "work", "call", "try", "ask", "need", "feel", "become", "leave", "put", "mean", "keep",
        "let", "begin", "seem", "help", "show", "hear", "play", "run", "move", "live",
        "believe", "bring", "happen", "write", "provide", "sit", "stand", "lose", "pay",
        "meet", "include", "continue", "set", "learn", "change", "lead", "understand",
        "watch", "follow", "stop", "create", "speak", "read", "allow", "add", "spend", "grow",
        "open", "walk", "win", "offer", "remember", "love", "consider", "appear", "buy",
        "wait", "serve", "die", "send", "expect", "build", "stay", "fall", "cut", "reach",
        "kill", "remain", "suggest", "raise", "pass", "sell", "require", "decide", "develop",
        "describe", "discuss", "explain", "improve", "increase", "reduce", "support",
        "review", "analyze", "analyse", "present", "propose", "approve", "deliver", "ensure",
        "identify", "achieve", "focus", "plan", "hold", "think", "want", "look", "come",
        "agree", "sign", "launch", "announce", "report", "measure", "compare", "manage",
    ]
    .into_iter()
    .collect()
});

fn suffix_tag(lower: &str) -> Option<PosTag> {
    const RULES: &[(&str, PosTag)] = &[
        ("ly", PosTag::Adv),
        ("ing", PosTag::Verb),
        ("ed", PosTag::Verb),
        ("ize", PosTag::Verb),
        ("ise", PosTag::Verb),
        ("ify", PosTag::Verb),
        ("tion", PosTag::Noun),
        ("sion", PosTag::Noun),
        ("ment", PosTag::Noun),
        ("ness", PosTag::Noun),
        ("ity", PosTag::Noun),
        ("ance", PosTag::Noun),
        ("ence", PosTag::Noun),
        ("ship", PosTag::Noun),
        ("ism", PosTag::Noun),
        ("ist", PosTag::Noun),
        ("ogy", PosTag::Noun),
        ("ous", PosTag::Adj),
        ("ful", PosTag::Adj),
        ("ive", PosTag::Adj),
        ("able", PosTag::Adj),
        ("ible", PosTag::Adj),
        ("less", PosTag::Adj),
        ("ical", PosTag::Adj),
        ("al", PosTag::Adj),
        ("ic", PosTag::Adj),
        ("ish", PosTag::Adj),
    ];

    if lower.chars().count() <= 3 {
        return None;
    }
    RULES
        .iter()
        .find(|(suffix, _)| lower.ends_with(suffix) && lower.len() > suffix.len() + 1)
        .map(|(_, tag)| *tag)
}

/// Whether the word is an inflection of a verb the lexicons know about.
fn known_verb(lower: &str) -> bool {
    BASE_VERBS.contains(lower)
        || lemmatizer::irregular_verb(lower).is_some()
        || BASE_VERBS.contains(lemmatizer::lemmatize(lower, PosTag::Verb).as_str())
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn is_all_caps(word: &str) -> bool {
    word.chars().filter(|c| c.is_alphabetic()).count() >= 2
        && word.chars().all(|c| !c.is_alphabetic() || c.is_uppercase())
}

/// Lexical tag ignoring context; the bool marks a suffix or default guess.
fn lexical_tag(token: &Token<'_>) -> (PosTag, bool) {
    match token.kind {
        TokenKind::Space => return (PosTag::Space, false),
        TokenKind::Punct => return (PosTag::Punct, false),
        TokenKind::Symbol => return (PosTag::Sym, false),
        TokenKind::Number => return (PosTag::Num, false),
        TokenKind::Word => {}
    }

    let lower = token.text.to_lowercase().replace('\u{2019}', "'");
    if let Some(tag) = LEXICON.get(lower.as_str()) {
        return (*tag, false);
    }
    if known_verb(&lower) {
        return (PosTag::Verb, false);
    }
    match suffix_tag(&lower) {
        Some(tag) => (tag, true),
        None => (PosTag::Noun, true),
    }
}

const MODALS: &[&str] = &[
    "will", "would", "shall", "should", "can", "could", "may", "might", "must", "ca", "do",
    "does", "did",
];

/// Tag every token; the output is parallel to `tokens`.
pub fn tag(tokens: &[Token<'_>]) -> Vec<PosTag> {
    let lexical: Vec<(PosTag, bool)> = tokens.iter().map(lexical_tag).collect();
    let mut tags: Vec<PosTag> = lexical.iter().map(|(t, _)| *t).collect();

    // Index of the previous non-space token
    let mut prev: Option<usize> = None;

    for i in 0..tokens.len() {
        if tags[i] == PosTag::Space {
            continue;
        }

        let token = &tokens[i];
        let guessed = lexical[i].1;
        let sentence_start = match prev {
            None => true,
            Some(p) => matches!(tokens[p].text, "." | "!" | "?" | ":" | ";"),
        };

        if token.kind == TokenKind::Word {
            let lower = token.text.to_lowercase();
            let prev_lower = prev.map(|p| tokens[p].text.to_lowercase());
            let prev_tag = prev.map(|p| tags[p]);

            if guessed && (is_all_caps(token.text) || (is_capitalized(token.text) && !sentence_start)) {
                tags[i] = PosTag::Propn;
            } else if prev_lower.as_deref() == Some("to")
                && (known_verb(&lower) || (guessed && tags[i] == PosTag::Noun))
            {
                tags[i] = PosTag::Verb;
                if let Some(p) = prev {
                    tags[p] = PosTag::Part;
                }
            } else if prev_lower
                .as_deref()
                .is_some_and(|w| MODALS.contains(&w))
                && guessed
                && tags[i] == PosTag::Noun
            {
                tags[i] = PosTag::Verb;
            } else if tags[i] == PosTag::Verb
                && matches!(prev_tag, Some(PosTag::Det) | Some(PosTag::Adj))
            {
                tags[i] = if guessed && lower.ends_with("ed") {
                    PosTag::Adj
                } else {
                    PosTag::Noun
                };
            }
        }

        prev = Some(i);
    }

    tags
}

/// Make sure the lexicons are built.
pub(crate) fn warm_up() {
    Lazy::force(&LEXICON);
    Lazy::force(&BASE_VERBS);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn tagged(text: &str) -> Vec<(&str, PosTag)> {
        let tokens = tokenize(text);
        let tags = tag(&tokens);
        tokens
            .iter()
            .zip(tags)
            .filter(|(_, t)| *t != PosTag::Space)
            .map(|(tok, t)| (tok.text, t))
            .collect()
    }

    #[test]
    fn test_closed_class() {
        let tags = tagged("The report and the data");
        assert_eq!(tags[0].1, PosTag::Det);
        assert_eq!(tags[1].1, PosTag::Noun);
        assert_eq!(tags[2].1, PosTag::Cconj);
    }

    #[test]
    fn test_proper_nouns_mid_sentence() {
        let tags = tagged("We met Alice in Berlin.");
        assert_eq!(tags[2], ("Alice", PosTag::Propn));
        assert_eq!(tags[4], ("Berlin", PosTag::Propn));
        assert_eq!(tags[5], (".", PosTag::Punct));
    }

    #[test]
    fn test_sentence_initial_capital_is_not_propn() {
        let tags = tagged("Revenue increased sharply.");
        assert_eq!(tags[0], ("Revenue", PosTag::Noun));
        assert_eq!(tags[1], ("increased", PosTag::Verb));
        assert_eq!(tags[2], ("sharply", PosTag::Adv));
    }

    #[test]
    fn test_to_infinitive() {
        let tags = tagged("We plan to expand operations");
        assert_eq!(tags[2], ("to", PosTag::Part));
        assert_eq!(tags[3], ("expand", PosTag::Verb));
        assert_eq!(tags[4], ("operations", PosTag::Noun));
    }

    #[test]
    fn test_gerund_after_determiner_is_noun() {
        let tags = tagged("the meeting was long");
        assert_eq!(tags[1], ("meeting", PosTag::Noun));
        assert_eq!(tags[2], ("was", PosTag::Aux));
    }

    #[test]
    fn test_numbers_and_symbols() {
        let tags = tagged("$ 42");
        assert_eq!(tags[0].1, PosTag::Sym);
        assert_eq!(tags[1].1, PosTag::Num);
    }
}
