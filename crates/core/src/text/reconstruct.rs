//! Rejoining of words that a PDF text layer split into one glyph per token.
//!
//! Some fonts make the extractor emit `"H e l l o World"` instead of
//! `"Hello World"`. A line is treated as fragmented when a strict majority of
//! its tokens are single characters; runs of single characters on such a line
//! are glued back together while multi-character tokens are left alone.
//!
//! The majority vote is a heuristic with known false negatives: `"a cat s
//! toy"` has exactly half single-character tokens and is left untouched.

/// A line of normalized text split on single spaces.
///
/// Empty tokens (produced by leading, trailing or doubled spaces) are kept in
/// the sequence and count towards [`Line::token_count`], but never towards
/// [`Line::single_char_count`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> Line<'a> {
    pub fn parse(line: &'a str) -> Self {
        Line {
            tokens: line.split(' ').collect(),
        }
    }

    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Number of non-blank tokens made of exactly one character.
    pub fn single_char_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| !t.trim().is_empty() && is_char_token(t))
            .count()
    }

    /// `true` when the line has more than one token and single-character
    /// tokens are a strict majority. Exactly half does not qualify.
    pub fn is_fragmented(&self) -> bool {
        let total = self.token_count();
        // single > total / 2, kept in integers.
        total > 1 && self.single_char_count() * 2 > total
    }

    /// Rebuild the line.
    ///
    /// Fragmented lines have each run of single-character tokens concatenated
    /// into one word; every other token is emitted unchanged and closes the
    /// current run. Lines that are not fragmented are returned as-is.
    pub fn rejoin(&self) -> String {
        if !self.is_fragmented() {
            return self.tokens.join(" ");
        }

        let mut words: Vec<String> = Vec::with_capacity(self.tokens.len());
        let mut pending = String::new();

        for token in &self.tokens {
            if is_char_token(token) {
                pending.push_str(token);
            } else {
                if !pending.is_empty() {
                    words.push(std::mem::take(&mut pending));
                }
                words.push((*token).to_string());
            }
        }

        if !pending.is_empty() {
            words.push(pending);
        }

        words.join(" ")
    }
}

fn is_char_token(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next().is_some() && chars.next().is_none()
}

/// Run every line of `text` through [`Line::rejoin`], then drop lines that are
/// blank, trim the rest and join them with `\n`.
pub fn reconstruct_words(text: &str) -> String {
    text.split('\n')
        .map(|line| Line::parse(line).rejoin())
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.trim().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
