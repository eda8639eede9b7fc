//! Pattern and gazetteer named-entity recognizer.
//!
//! Rules run in priority order. A match that overlaps a span claimed by an
//! earlier rule is dropped, so `Q1 2024` is one date rather than a date plus
//! a bare year.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::EntityLabel;

/// An entity occurrence with byte offsets into the analyzed text.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySpan {
    pub label: EntityLabel,
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub confidence: f64,
}

struct NerRule {
    label: EntityLabel,
    pattern: Regex,
    /// Capture group holding the entity text.
    group: usize,
    confidence: f64,
    strip_article: bool,
}

impl NerRule {
    fn new(label: EntityLabel, pattern: &str, confidence: f64) -> Self {
        Self {
            label,
            pattern: Regex::new(pattern).expect("entity pattern"),
            group: 0,
            confidence,
            strip_article: false,
        }
    }

    fn group(mut self, group: usize) -> Self {
        self.group = group;
        self
    }

    fn strip_article(mut self) -> Self {
        self.strip_article = true;
        self
    }
}

const MONTHS: &str = "January|February|March|April|May|June|July|August|September|October|November|December|Jan|Feb|Mar|Apr|Jun|Jul|Aug|Sept|Sep|Oct|Nov|Dec";

const ORG_SUFFIXES: &str = "Incorporated|Inc|Corporation|Corp|LLC|LLP|Ltd|Limited|Company|Co|Group|Holdings|Technologies|Systems|Solutions|Foundation|Institute|University|Association|Agency|Bank|Labs|Partners|Industries|Enterprises|Ventures|Consulting|Council|Committee|Department|Ministry";

const KNOWN_ORGS: &[&str] = &[
    "Google", "Microsoft", "Apple", "Amazon", "Meta", "Facebook", "IBM", "Intel", "Oracle",
    "Tesla", "Netflix", "Nvidia", "OpenAI", "Adobe", "Salesforce", "Samsung", "Sony",
    "Toyota", "Walmart", "Deloitte", "McKinsey", "Goldman Sachs", "JPMorgan", "Morgan Stanley",
    "NASA", "FBI", "CIA", "NATO", "UNESCO", "UNICEF", "WHO", "IMF", "OECD", "United Nations",
    "European Union", "World Bank", "Federal Reserve", "Bank of America", "Congress",
    "Parliament", "Harvard", "Stanford", "MIT", "Oxford University", "Cambridge University",
    "Red Cross", "Wikipedia", "Reuters", "Bloomberg",
];

const FIRST_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
    "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark", "Donald", "Steven",
    "Paul", "Andrew", "Joshua", "Kenneth", "Kevin", "Brian", "George", "Edward", "Ronald",
    "Timothy", "Jason", "Jeffrey", "Ryan", "Jacob", "Gary", "Eric", "Stephen", "Peter",
    "Henry", "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan",
    "Jessica", "Sarah", "Karen", "Nancy", "Lisa", "Betty", "Margaret", "Sandra", "Ashley",
    "Emily", "Donna", "Michelle", "Carol", "Amanda", "Melissa", "Deborah", "Stephanie",
    "Rebecca", "Laura", "Helen", "Anna", "Emma", "Olivia", "Sophia", "Alice", "Jane",
    "Maria", "Julia", "Rachel", "Catherine", "Anne", "Kate", "Tom", "Bob", "Alex", "Sam",
    "Chris", "Mike", "Dave", "Tim", "Joe", "Ben", "Nick", "Adam", "Hannah", "Grace",
];

const PLACES: &[&str] = &[
    // Countries
    "United States", "United Kingdom", "United Arab Emirates", "South Africa", "South Korea",
    "North Korea", "New Zealand", "Saudi Arabia", "Czech Republic", "USA", "US", "UK",
    "America", "Canada", "Mexico", "Brazil", "Argentina", "Chile", "Peru", "Colombia",
    "England", "Scotland", "Wales", "Ireland", "France", "Germany", "Spain", "Portugal",
    "Italy", "Netherlands", "Belgium", "Switzerland", "Austria", "Sweden", "Norway",
    "Denmark", "Finland", "Poland", "Greece", "Turkey", "Russia", "Ukraine", "China",
    "Japan", "Korea", "India", "Pakistan", "Bangladesh", "Indonesia", "Vietnam", "Thailand",
    "Singapore", "Malaysia", "Philippines", "Australia", "Egypt", "Nigeria", "Kenya",
    "Israel", "Iran", "Iraq",
    // Cities
    "New York", "Los Angeles", "San Francisco", "San Diego", "Hong Kong", "Rio de Janeiro",
    "Buenos Aires", "Mexico City", "Chicago", "Houston", "Boston", "Seattle", "Miami",
    "Atlanta", "Denver", "Dallas", "Austin", "Philadelphia", "London", "Paris", "Berlin",
    "Madrid", "Rome", "Amsterdam", "Brussels", "Vienna", "Zurich", "Geneva", "Dublin",
    "Edinburgh", "Stockholm", "Oslo", "Copenhagen", "Helsinki", "Warsaw", "Prague",
    "Moscow", "Istanbul", "Tokyo", "Beijing", "Shanghai", "Seoul", "Mumbai", "Delhi",
    "Bangalore", "Sydney", "Melbourne", "Toronto", "Vancouver", "Montreal", "Dubai", "Cairo",
    "Nairobi", "Lagos",
    // US states
    "California", "Texas", "Florida", "Washington", "Oregon", "Nevada", "Arizona", "Colorado",
    "Utah", "Illinois", "Ohio", "Michigan", "Pennsylvania", "New Jersey", "Massachusetts",
    "Virginia", "North Carolina", "South Carolina", "Georgia", "Tennessee", "Minnesota",
    "Wisconsin", "Missouri", "Louisiana", "Alabama", "Kentucky", "Oklahoma", "Iowa",
    "Kansas", "Alaska", "Hawaii", "Maryland", "Connecticut",
];

/// `\b(?:a|b|c)\b` with longer names tried first.
fn gazetteer(names: &[&str]) -> String {
    let mut sorted: Vec<&str> = names.to_vec();
    sorted.sort_by_key(|name| std::cmp::Reverse(name.len()));
    let alternatives: Vec<String> = sorted.iter().map(|name| regex::escape(name)).collect();
    format!(r"\b(?:{})\b", alternatives.join("|"))
}

static RULES: Lazy<Vec<NerRule>> = Lazy::new(|| {
    let first_names = FIRST_NAMES.join("|");
    vec![
        NerRule::new(
            EntityLabel::Money,
            r"[$€£¥][ ]?\d[\d,]*(?:\.\d+)?(?:[ ]?(?:million|billion|trillion|thousand|[MBK]\b))?|\b\d[\d,]*(?:\.\d+)?[ ]?(?:million |billion )?(?:dollars|euros|pounds|USD|EUR|GBP)\b",
            0.95,
        ),
        NerRule::new(
            EntityLabel::Percent,
            r"\b\d+(?:\.\d+)?[ ]?(?:%|percent\b|per cent\b)",
            0.95,
        ),
        NerRule::new(
            EntityLabel::Time,
            r"\b(?:[01]?\d|2[0-3]):[0-5]\d(?:[ ]?(?:[AaPp]\.[Mm]\.|[AaPp][Mm]\b))?|\b(?:1[0-2]|0?[1-9])[ ]?(?:[AaPp]\.[Mm]\.|[AaPp][Mm]\b)|\b(?:noon|midnight)\b",
            0.85,
        ),
        NerRule::new(
            EntityLabel::Date,
            &format!(
                r"\b(?:{m})\.?[ ]+\d{{1,2}}(?:st|nd|rd|th)?(?:,?[ ]+\d{{4}})?\b|\b\d{{1,2}}(?:st|nd|rd|th)?[ ]+(?:of[ ]+)?(?:{m})\.?(?:,?[ ]+\d{{4}})?\b|\b(?:{m})\.?[ ]+\d{{4}}\b|\b\d{{4}}-\d{{2}}-\d{{2}}\b|\b\d{{1,2}}/\d{{1,2}}/\d{{2,4}}\b|\bQ[1-4][ ]+\d{{4}}\b|\b(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday)\b|\b(?i:today|tomorrow|yesterday)\b",
                m = MONTHS
            ),
            0.9,
        ),
        NerRule::new(EntityLabel::Date, r"\b(?:19|20)\d{2}\b", 0.7),
        NerRule::new(
            EntityLabel::Org,
            &format!(
                r"\b(?:[A-Z][A-Za-z0-9&'-]*[ \t]+){{1,4}}(?:{})\b|\bUniversity[ ]+of(?:[ ]+[A-Z][a-z]+){{1,2}}\b",
                ORG_SUFFIXES
            ),
            0.8,
        )
        .strip_article(),
        NerRule::new(EntityLabel::Org, &gazetteer(KNOWN_ORGS), 0.85),
        NerRule::new(
            EntityLabel::Person,
            r"\b(?:Professor|President|Mrs|Mr|Ms|Miss|Dr|Prof|Sir|Dame|Rev)\.?[ ]+([A-Z][A-Za-z'-]+(?:[ ]+[A-Z][A-Za-z'-]+){0,2})",
            0.9,
        )
        .group(1),
        NerRule::new(
            EntityLabel::Person,
            &format!(r"\b(?:{})[ ]+[A-Z][a-z]+(?:-[A-Z][a-z]+)?\b", first_names),
            0.75,
        ),
        NerRule::new(EntityLabel::Gpe, &gazetteer(PLACES), 0.85),
    ]
});

fn overlaps(claimed: &[(usize, usize)], start: usize, end: usize) -> bool {
    claimed.iter().any(|&(s, e)| start < e && s < end)
}

/// Find entities in `text`, ordered by position.
pub fn recognize(text: &str) -> Vec<EntitySpan> {
    let mut spans: Vec<EntitySpan> = Vec::new();
    let mut claimed: Vec<(usize, usize)> = Vec::new();

    for rule in RULES.iter() {
        for caps in rule.pattern.captures_iter(text) {
            let Some(m) = caps.get(rule.group) else {
                continue;
            };
            let mut start = m.start();
            let mut matched = m.as_str();

            if rule.strip_article {
                if let Some(rest) = matched.strip_prefix("The ") {
                    // "The Company" alone names nothing
                    if !rest.contains(char::is_whitespace) {
                        continue;
                    }
                    start += 4;
                    matched = rest;
                }
            }
            let end = start + matched.len();

            if matched.is_empty() || overlaps(&claimed, start, end) {
                continue;
            }

            claimed.push((start, end));
            spans.push(EntitySpan {
                label: rule.label,
                text: matched.to_string(),
                start,
                end,
                confidence: rule.confidence,
            });
        }
    }

    spans.sort_by_key(|span| span.start);
    spans
}

/// Character offset of the byte offset `byte` in `text`.
pub fn char_offset(text: &str, byte: usize) -> usize {
    text.get(..byte).map_or(0, |prefix| prefix.chars().count())
}

pub(crate) fn warm_up() {
    Lazy::force(&RULES);
}
