//! Metadata summarizer
//!
//! Turns extracted text into a [`MetadataRecord`]. Tokens are maximal runs
//! of non-separator characters and are compared byte for byte: no case
//! folding, no punctuation stripping. Separators are Unicode whitespace
//! plus the ASCII information separators U+001C to U+001F.

use crate::metadata::MetadataRecord;
use indexmap::IndexMap;

/// Number of distinct tokens listed under `Top Keywords`
pub const TOP_KEYWORDS: usize = 5;

/// Number of tokens kept in `Preview`
pub const PREVIEW_WORDS: usize = 40;

/// Title used when the text has no tokens
pub const UNTITLED: &str = "N/A";

/// Summarize extracted text into a metadata record
///
/// # Examples
///
/// ```
/// use docmeta_domain::summarize;
///
/// let record = summarize("a a a b b c");
/// assert_eq!(record.title, "a");
/// assert_eq!(record.top_keywords, "a, b, c");
/// assert_eq!(record.word_count, 6);
/// assert_eq!(record.preview, "a a a b b c");
/// ```
pub fn summarize(text: &str) -> MetadataRecord {
    let tokens = tokenize(text);

    let title = tokens.first().copied().unwrap_or(UNTITLED).to_string();

    let top_keywords = keyword_frequencies(&tokens)
        .into_iter()
        .take(TOP_KEYWORDS)
        .map(|(token, _)| token)
        .collect::<Vec<_>>()
        .join(", ");

    let preview = tokens
        .iter()
        .take(PREVIEW_WORDS)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    MetadataRecord {
        title,
        top_keywords,
        word_count: tokens.len(),
        preview,
    }
}

/// Split text into tokens, dropping empty pieces
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(is_separator).filter(|token| !token.is_empty()).collect()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Count each distinct token, most frequent first
///
/// Tokens with equal counts keep the order of their first appearance.
pub fn keyword_frequencies<'a>(tokens: &[&'a str]) -> Vec<(&'a str, usize)> {
    let mut counts: IndexMap<&'a str, usize> = IndexMap::new();
    for token in tokens {
        *counts.entry(*token).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&'a str, usize)> = counts.into_iter().collect();
    // sort_by is stable, so ties stay in first-appearance order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: word count matches a whitespace split of the source
        #[test]
        fn test_word_count_matches_tokens(text in "[a-c \\n\\t\\x1c-\\x1f]{0,120}") {
            let record = summarize(&text);
            let expected = text
                .split(|c: char| c.is_ascii_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
                .filter(|t| !t.is_empty())
                .count();
            prop_assert_eq!(record.word_count, expected);
        }

        /// Property: preview is a token prefix of the source
        #[test]
        fn test_preview_is_token_prefix(text in "[a-e ]{0,300}") {
            let record = summarize(&text);
            let preview_tokens: Vec<&str> = record.preview.split_whitespace().collect();
            let source_tokens: Vec<&str> = text.split_whitespace().collect();
            prop_assert!(preview_tokens.len() <= PREVIEW_WORDS);
            prop_assert_eq!(&source_tokens[..preview_tokens.len()], &preview_tokens[..]);
        }

        /// Property: frequencies never increase down the ranking
        #[test]
        fn test_frequencies_non_increasing(text in "[a-f ]{0,200}") {
            let tokens: Vec<&str> = text.split_whitespace().collect();
            let freq = keyword_frequencies(&tokens);
            for pair in freq.windows(2) {
                prop_assert!(pair[0].1 >= pair[1].1);
            }
            prop_assert_eq!(freq.iter().map(|(_, n)| n).sum::<usize>(), tokens.len());
        }
    }
}
