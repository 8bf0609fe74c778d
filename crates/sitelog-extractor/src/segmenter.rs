//! Rule-based sentence segmentation
//!
//! Daily logs are line-oriented: headers, bullet items and short notes each
//! sit on their own line. Every line break is therefore a hard boundary, and
//! inside a line a sentence ends at `.`, `!` or `?` followed by whitespace and
//! something that can open a new sentence.

use crate::gazetteer::GazetteerTagger;
use sitelog_domain::traits::{EntityTagger, SentenceSegmenter};
use sitelog_domain::Sentence;
use std::collections::HashSet;
use std::sync::LazyLock;

static ABBREVIATIONS: &[&str] = &[
    "approx.", "no.", "nos.", "mr.", "mrs.", "ms.", "dr.", "eng.", "st.", "e.g.", "i.e.",
    "etc.", "vs.", "dept.", "est.", "min.", "max.", "qty.", "ref.", "co.", "ltd.", "inc.",
    "jr.", "sr.", "fig.", "ca.",
];

static ABBREVIATIONS_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ABBREVIATIONS.iter().copied().collect());

/// Sentence segmenter with a pluggable entity tagger
#[derive(Debug, Clone)]
pub struct RuleSegmenter<T = GazetteerTagger> {
    tagger: T,
}

impl<T: EntityTagger> RuleSegmenter<T> {
    /// Create a segmenter that tags each sentence with `tagger`
    pub fn new(tagger: T) -> Self {
        Self { tagger }
    }

    /// The entity tagger
    pub fn tagger(&self) -> &T {
        &self.tagger
    }

    fn push_sentence(&self, text: &str, start: usize, end: usize, out: &mut Vec<Sentence>) {
        let slice = &text[start..end];
        let trimmed = slice.trim();
        if trimmed.is_empty() {
            return;
        }
        let lead = slice.len() - slice.trim_start().len();
        let start = start + lead;
        out.push(Sentence {
            text: trimmed.to_string(),
            start,
            end: start + trimmed.len(),
            entities: self.tagger.tag(trimmed),
        });
    }
}

impl<T: EntityTagger> SentenceSegmenter for RuleSegmenter<T> {
    fn segment(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        let mut line_start = 0;

        for line in text.split_inclusive('\n') {
            let content = line.trim_end_matches(['\n', '\r']);
            for (start, end) in split_line(content) {
                self.push_sentence(text, line_start + start, line_start + end, &mut sentences);
            }
            line_start += line.len();
        }

        sentences
    }
}

/// Byte ranges of the sentences inside one line
fn split_line(line: &str) -> Vec<(usize, usize)> {
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut ranges = Vec::new();
    let mut seg_start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];
        if !is_terminator(c) {
            i += 1;
            continue;
        }

        // Absorb "?!", "...", and closing quotes or brackets
        let mut j = i + 1;
        while j < chars.len() && (is_terminator(chars[j].1) || is_closer(chars[j].1)) {
            j += 1;
        }
        if j >= chars.len() || !chars[j].1.is_whitespace() {
            i = j;
            continue;
        }

        let mut k = j;
        while k < chars.len() && chars[k].1.is_whitespace() {
            k += 1;
        }
        if k >= chars.len() {
            break;
        }

        let candidate = &line[seg_start..pos + c.len_utf8()];
        if opens_sentence(chars[k].1) && !(c == '.' && is_protected(candidate)) {
            ranges.push((seg_start, chars[j].0));
            seg_start = chars[k].0;
        }
        i = k;
    }

    if seg_start < line.len() {
        ranges.push((seg_start, line.len()));
    }
    ranges
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{201D}' | '\u{2019}')
}

fn opens_sentence(c: char) -> bool {
    c.is_uppercase()
        || c.is_ascii_digit()
        || matches!(c, '"' | '\'' | '(' | '-' | '\u{2022}' | '\u{201C}' | '\u{2018}')
}

/// A period that ends an abbreviation or a list ordinal ("1.", "b.") does not
/// end the sentence
fn is_protected(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    let Some(last) = trimmed.split_whitespace().last() else {
        return false;
    };
    let token = last
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    if ABBREVIATIONS_SET.contains(token.as_str()) {
        return true;
    }
    is_ordinal_marker(trimmed)
}

fn is_ordinal_marker(segment: &str) -> bool {
    let Some(body) = segment.strip_suffix('.') else {
        return false;
    };
    if body.is_empty() || body.contains(char::is_whitespace) {
        return false;
    }
    body.chars().all(|c| c.is_ascii_digit()) || (body.chars().count() == 1 && body.chars().all(char::is_alphabetic))
}
