use crate::dict::{Dictionary, Phrase};
use crate::tokenizer::{Token, TokenKind};
use crate::unicode::has_line_break;

/// Longest phrase whose words start at `tokens[i]`, with the index one past
/// its last token.
///
/// Words must be separated by whitespace alone, on one line; punctuation
/// between them breaks the phrase.
pub(crate) fn match_at<'d>(
    dict: &'d Dictionary,
    tokens: &[Token<'_>],
    i: usize,
) -> Option<(&'d Phrase, usize)> {
    let first = tokens.get(i)?;
    if first.kind != TokenKind::Word {
        return None;
    }
    let candidates = dict.phrases().starting_with(&first.text.to_lowercase());
    candidates
        .iter()
        .find_map(|phrase| words_match(phrase, tokens, i).map(|end| (phrase, end)))
}

fn words_match(phrase: &Phrase, tokens: &[Token<'_>], i: usize) -> Option<usize> {
    let mut pos = i;
    for (n, word) in phrase.words.iter().enumerate() {
        if n > 0 {
            let gap = tokens.get(pos)?;
            if gap.kind != TokenKind::Whitespace || has_line_break(gap.text) {
                return None;
            }
            pos += 1;
        }
        let token = tokens.get(pos)?;
        if token.kind != TokenKind::Word || token.text.to_lowercase() != *word {
            return None;
        }
        pos += 1;
    }
    Some(pos)
}
