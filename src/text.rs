//! Text splitting and word validation.
//!
//! Documents and queries use the same minimal tokenization: split on runs of
//! ASCII space, drop empty tokens, reject anything carrying a control
//! character. No casefolding, no stemming, no Unicode segmentation.

/// Split `text` on ASCII spaces into a lazy sequence of borrowed words.
///
/// Runs of spaces produce no empty tokens. The iterator borrows from `text`,
/// so the input must outlive the iteration.
pub fn split_into_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|word| !word.is_empty())
}

/// A word is valid iff it contains no byte in `[0x00, 0x1F]`.
///
/// The empty string is valid; it simply never survives tokenization.
pub fn is_valid_word(word: &str) -> bool {
    !word.bytes().any(|byte| byte < 0x20)
}
