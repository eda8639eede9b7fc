//! Rule lemmatizer: irregular tables plus inflection suffix rules.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::tagger::PosTag;

static IRREGULAR_VERBS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("is", "be"), ("am", "be"), ("are", "be"), ("was", "be"), ("were", "be"),
        ("been", "be"), ("being", "be"), ("'s", "be"), ("'re", "be"), ("'m", "be"),
        ("has", "have"), ("had", "have"), ("having", "have"), ("'ve", "have"),
        ("does", "do"), ("did", "do"), ("done", "do"), ("doing", "do"),
        ("went", "go"), ("gone", "go"), ("goes", "go"), ("made", "make"), ("said", "say"),
        ("took", "take"), ("taken", "take"), ("saw", "see"), ("seen", "see"),
        ("knew", "know"), ("known", "know"), ("got", "get"), ("gotten", "get"),
        ("gave", "give"), ("given", "give"), ("found", "find"), ("thought", "think"),
        ("told", "tell"), ("became", "become"), ("began", "begin"), ("begun", "begin"),
        ("kept", "keep"), ("held", "hold"), ("brought", "bring"), ("wrote", "write"),
        ("written", "write"), ("ran", "run"), ("met", "meet"), ("led", "lead"),
        ("left", "leave"), ("felt", "feel"), ("built", "build"), ("sent", "send"),
        ("spent", "spend"), ("stood", "stand"), ("understood", "understand"),
        ("paid", "pay"), ("bought", "buy"), ("sold", "sell"), ("chose", "choose"),
        ("chosen", "choose"), ("drove", "drive"), ("driven", "drive"), ("ate", "eat"),
        ("eaten", "eat"), ("fell", "fall"), ("fallen", "fall"), ("grew", "grow"),
        ("grown", "grow"), ("shown", "show"), ("spoke", "speak"), ("spoken", "speak"),
        ("won", "win"), ("lost", "lose"), ("meant", "mean"), ("heard", "hear"),
        ("sat", "sit"), ("rose", "rise"), ("risen", "rise"), ("taught", "teach"),
        ("caught", "catch"), ("sought", "seek"), ("dealt", "deal"), ("drew", "draw"),
        ("drawn", "draw"), ("forgot", "forget"), ("forgotten", "forget"),
    ]
    .into_iter()
    .collect()
});

static IRREGULAR_NOUNS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("children", "child"), ("men", "man"), ("women", "woman"), ("people", "person"),
        ("mice", "mouse"), ("feet", "foot"), ("teeth", "tooth"), ("geese", "goose"),
        ("analyses", "analysis"), ("crises", "crisis"), ("theses", "thesis"),
        ("criteria", "criterion"), ("phenomena", "phenomenon"), ("indices", "index"),
        ("lives", "life"), ("wives", "wife"), ("knives", "knife"), ("leaves", "leaf"),
        ("halves", "half"), ("shelves", "shelf"),
    ]
    .into_iter()
    .collect()
});

/// Base form of an irregular verb, if `lower` is one.
pub fn irregular_verb(lower: &str) -> Option<&'static str> {
    IRREGULAR_VERBS.get(lower).copied()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Whether a stripped verb stem needs its silent `e` back (`mak` -> `make`).
fn needs_e(stem: &str) -> bool {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    if n < 2 {
        return false;
    }
    if n == 2 {
        return is_vowel(chars[0]) && !is_vowel(chars[1]);
    }
    if ["at", "iz", "yz", "ur", "ac", "as", "ys", "ns", "os", "aus"].iter().any(|s| stem.ends_with(s)) {
        return true;
    }
    let last = chars[n - 1];
    if matches!(last, 'v' | 'c') || (last == 'g' && chars[n - 2] != 'n') {
        return true;
    }
    // Short consonant-vowel-consonant stems: mak, bas, writ
    n <= 4
        && !is_vowel(chars[n - 1])
        && !matches!(chars[n - 1], 'w' | 'x' | 'y')
        && is_vowel(chars[n - 2])
        && !is_vowel(chars[n - 3])
}

/// Undo consonant doubling (`stopp` -> `stop`).
fn undouble(stem: &str) -> Option<String> {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    if n >= 3 && chars[n - 1] == chars[n - 2] && !is_vowel(chars[n - 1]) {
        if matches!(chars[n - 1], 'l' | 's' | 'z' | 'f') {
            return None;
        }
        return Some(chars[..n - 1].iter().collect());
    }
    None
}

fn strip_verb_suffix(word: &str, suffix: &str) -> Option<String> {
    let stem = word.strip_suffix(suffix)?;
    if stem.chars().count() < 2 || !stem.chars().any(is_vowel_or_y) {
        return None;
    }
    if let Some(undoubled) = undouble(stem) {
        return Some(undoubled);
    }
    if needs_e(stem) {
        return Some(format!("{}e", stem));
    }
    Some(stem.to_string())
}

fn is_vowel_or_y(c: char) -> bool {
    is_vowel(c) || c == 'y'
}

fn lemmatize_verb(lower: &str) -> String {
    if let Some(base) = irregular_verb(lower) {
        return base.to_string();
    }
    if let Some(stem) = lower.strip_suffix("ied") {
        return format!("{}y", stem);
    }
    if let Some(stem) = lower.strip_suffix("ies") {
        return format!("{}y", stem);
    }
    if lower.ends_with("ing") && lower.len() > 4 {
        if let Some(stem) = strip_verb_suffix(lower, "ing") {
            return stem;
        }
    }
    if lower.ends_with("ed") && lower.len() > 3 && !lower.ends_with("eed") {
        if let Some(stem) = strip_verb_suffix(lower, "ed") {
            return stem;
        }
    }
    for suffix in ["ches", "shes", "sses", "xes"] {
        if lower.ends_with(suffix) {
            return lower[..lower.len() - 2].to_string();
        }
    }
    if lower.ends_with('s') && !lower.ends_with("ss") && lower.len() > 3 {
        return lower[..lower.len() - 1].to_string();
    }
    lower.to_string()
}

fn lemmatize_noun(lower: &str) -> String {
    if let Some(base) = IRREGULAR_NOUNS.get(lower) {
        return base.to_string();
    }
    if lower.len() > 4 {
        if let Some(stem) = lower.strip_suffix("ies") {
            return format!("{}y", stem);
        }
    }
    for suffix in ["ches", "shes", "sses", "xes"] {
        if lower.ends_with(suffix) {
            return lower[..lower.len() - 2].to_string();
        }
    }
    if lower.len() > 3
        && lower.ends_with('s')
        && !["ss", "us", "is", "ics"].iter().any(|s| lower.ends_with(s))
    {
        return lower[..lower.len() - 1].to_string();
    }
    lower.to_string()
}

/// Lemma of `word` given its tag.
///
/// Proper nouns keep their surface form; everything else is lower-cased.
pub fn lemmatize(word: &str, tag: PosTag) -> String {
    let lower = word.to_lowercase().replace('\u{2019}', "'");
    match tag {
        PosTag::Propn => word.to_string(),
        PosTag::Verb | PosTag::Aux => lemmatize_verb(&lower),
        PosTag::Noun => lemmatize_noun(&lower),
        PosTag::Part if lower == "n't" => "not".to_string(),
        _ => lower,
    }
}

pub(crate) fn warm_up() {
    Lazy::force(&IRREGULAR_VERBS);
    Lazy::force(&IRREGULAR_NOUNS);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irregular_verbs() {
        assert_eq!(lemmatize("was", PosTag::Aux), "be");
        assert_eq!(lemmatize("Went", PosTag::Verb), "go");
        assert_eq!(lemmatize("written", PosTag::Verb), "write");
    }

    #[test]
    fn test_regular_verbs() {
        assert_eq!(lemmatize("making", PosTag::Verb), "make");
        assert_eq!(lemmatize("stopped", PosTag::Verb), "stop");
        assert_eq!(lemmatize("created", PosTag::Verb), "create");
        assert_eq!(lemmatize("developing", PosTag::Verb), "develop");
        assert_eq!(lemmatize("analyzed", PosTag::Verb), "analyze");
        assert_eq!(lemmatize("studied", PosTag::Verb), "study");
        assert_eq!(lemmatize("worked", PosTag::Verb), "work");
        assert_eq!(lemmatize("needs", PosTag::Verb), "need");
        assert_eq!(lemmatize("based", PosTag::Verb), "base");
        assert_eq!(lemmatize("used", PosTag::Verb), "use");
        assert_eq!(lemmatize("increased", PosTag::Verb), "increase");
        assert_eq!(lemmatize("proposed", PosTag::Verb), "propose");
        assert_eq!(lemmatize("focused", PosTag::Verb), "focus");
    }

    #[test]
    fn test_nouns() {
        assert_eq!(lemmatize("reports", PosTag::Noun), "report");
        assert_eq!(lemmatize("companies", PosTag::Noun), "company");
        assert_eq!(lemmatize("boxes", PosTag::Noun), "box");
        assert_eq!(lemmatize("analysis", PosTag::Noun), "analysis");
        assert_eq!(lemmatize("status", PosTag::Noun), "status");
        assert_eq!(lemmatize("children", PosTag::Noun), "child");
        assert_eq!(lemmatize("business", PosTag::Noun), "business");
    }

    #[test]
    fn test_proper_nouns_keep_case() {
        assert_eq!(lemmatize("Acme", PosTag::Propn), "Acme");
        assert_eq!(lemmatize("Systems", PosTag::Propn), "Systems");
    }
}
