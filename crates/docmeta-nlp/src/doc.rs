//! Annotated document produced by the rule-based pipeline.

use std::ops::Range;

use crate::lemmatizer::lemmatize;
use crate::ner::{self, EntitySpan};
use crate::sentences::split_sentences;
use crate::stopwords::is_stop_word;
use crate::tagger::{tag, PosTag};
use crate::tokenizer::{tokenize, TokenKind};

/// A token with its linguistic annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedToken<'a> {
    pub text: &'a str,
    /// Byte span in the source text.
    pub span: Range<usize>,
    pub pos: PosTag,
    pub lemma: String,
    pub is_stop: bool,
    pub is_punct: bool,
    pub is_space: bool,
}

/// A base noun phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounChunk<'a> {
    pub text: &'a str,
    /// Index of the head token in [`Doc::tokens`].
    pub root: usize,
}

/// Text annotated with tokens, sentences and entities.
#[derive(Debug, Clone)]
pub struct Doc<'a> {
    pub text: &'a str,
    pub tokens: Vec<AnalyzedToken<'a>>,
    pub sentences: Vec<Range<usize>>,
    pub entities: Vec<EntitySpan>,
}

impl<'a> Doc<'a> {
    /// Run tokenization, tagging, lemmatization, segmentation and NER.
    pub fn parse(text: &'a str) -> Self {
        let raw = tokenize(text);
        let tags = tag(&raw);

        let tokens = raw
            .iter()
            .zip(tags)
            .map(|(token, pos)| AnalyzedToken {
                text: token.text,
                span: token.start..token.end,
                lemma: lemmatize(token.text, pos),
                is_stop: token.kind == TokenKind::Word && is_stop_word(token.text),
                is_punct: token.kind == TokenKind::Punct,
                is_space: token.kind == TokenKind::Space,
                pos,
            })
            .collect();

        Self {
            text,
            tokens,
            sentences: split_sentences(text),
            entities: ner::recognize(text),
        }
    }

    /// Sentence strings in order.
    pub fn sentence_texts(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.sentences.iter().map(|r| &self.text[r.clone()])
    }

    /// Base noun phrases: runs of determiners, adjectives, numbers and nouns
    /// that end in a noun, plus standalone pronouns.
    pub fn noun_chunks(&self) -> Vec<NounChunk<'a>> {
        let mut chunks = Vec::new();
        let mut run_start: Option<usize> = None;
        let mut last_noun: Option<usize> = None;

        let flush = |start: Option<usize>, head: Option<usize>, out: &mut Vec<NounChunk<'a>>| {
            if let (Some(s), Some(h)) = (start, head) {
                let span = self.tokens[s].span.start..self.tokens[h].span.end;
                out.push(NounChunk {
                    text: &self.text[span],
                    root: h,
                });
            }
        };

        for (i, token) in self.tokens.iter().enumerate() {
            // Single spaces join words inside a chunk
            if token.is_space && token.text == " " && run_start.is_some() {
                continue;
            }

            // A determiner always opens a new phrase
            if token.pos == PosTag::Det && run_start.is_some() {
                flush(run_start.take(), last_noun.take(), &mut chunks);
            }

            if token.pos.is_nominal_modifier() {
                if run_start.is_none() {
                    run_start = Some(i);
                }
                if matches!(token.pos, PosTag::Noun | PosTag::Propn) {
                    last_noun = Some(i);
                }
                continue;
            }

            flush(run_start.take(), last_noun.take(), &mut chunks);

            if token.pos == PosTag::Pron {
                chunks.push(NounChunk {
                    text: token.text,
                    root: i,
                });
            }
        }
        flush(run_start, last_noun, &mut chunks);

        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_flags() {
        let doc = Doc::parse("The reports, however, grew.");
        let the = &doc.tokens[0];
        assert!(the.is_stop);
        assert_eq!(the.pos, PosTag::Det);

        let reports = &doc.tokens[2];
        assert_eq!(reports.lemma, "report");
        assert!(!reports.is_stop);

        let comma = &doc.tokens[3];
        assert!(comma.is_punct);
        assert!(doc.tokens[1].is_space);
    }

    #[test]
    fn test_noun_chunks() {
        let doc = Doc::parse("The quarterly report shows new market growth. We approved it.");
        let chunks: Vec<&str> = doc.noun_chunks().iter().map(|c| c.text).collect();
        assert_eq!(
            chunks,
            vec!["The quarterly report", "new market growth", "We", "it"]
        );
    }

    #[test]
    fn test_chunk_ends_at_last_noun() {
        let doc = Doc::parse("a very large budget");
        let chunks = doc.noun_chunks();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "large budget");
        assert_eq!(doc.tokens[chunks[0].root].text, "budget");
    }

    #[test]
    fn test_sentences_are_exposed() {
        let doc = Doc::parse("One sentence here. Another one there.");
        assert_eq!(doc.sentence_texts().count(), 2);
    }
}
