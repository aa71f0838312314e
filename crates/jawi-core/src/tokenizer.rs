//! Splits raw text into typed tokens.
//!
//! Total over any input: concatenating the token texts always reproduces
//! the input exactly, and every downstream pass respects these boundaries.

use std::ops::Range;

use serde::Serialize;

use crate::unicode::{is_combining_mark, is_numeral_digit, is_rumi_letter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    Word,
    Whitespace,
    Punctuation,
    Numeral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte range in the input.
    pub span: Range<usize>,
}

pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let byte_at = |i: usize| chars.get(i).map_or(text.len(), |&(b, _)| b);

    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let start = i;
        let c = chars[i].1;
        let kind = if is_numeral_digit(c) {
            i = scan_numeral(&chars, i);
            TokenKind::Numeral
        } else if is_rumi_letter(c) {
            while i < chars.len() && continues_word(chars[i].1) {
                i += 1;
            }
            TokenKind::Word
        } else if c.is_whitespace() {
            while i < chars.len() && chars[i].1.is_whitespace() {
                i += 1;
            }
            TokenKind::Whitespace
        } else {
            while i < chars.len() && is_punctuation_char(chars[i].1) {
                i += 1;
            }
            TokenKind::Punctuation
        };
        let span = byte_at(start)..byte_at(i);
        tokens.push(Token {
            kind,
            text: &text[span.clone()],
            span,
        });
    }
    tokens
}

fn continues_word(c: char) -> bool {
    is_rumi_letter(c) || is_combining_mark(c)
}

fn is_punctuation_char(c: char) -> bool {
    !is_numeral_digit(c) && !is_rumi_letter(c) && !c.is_whitespace()
}

/// Digits with `.`/`,` allowed only between digits, then an optional `%`.
fn scan_numeral(chars: &[(usize, char)], mut i: usize) -> usize {
    loop {
        while i < chars.len() && is_numeral_digit(chars[i].1) {
            i += 1;
        }
        let separator = chars.get(i).is_some_and(|&(_, c)| c == '.' || c == ',');
        let digit_follows = chars
            .get(i + 1)
            .is_some_and(|&(_, c)| is_numeral_digit(c));
        if separator && digit_follows {
            i += 1;
        } else {
            break;
        }
    }
    if chars.get(i).is_some_and(|&(_, c)| c == '%') {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn kinds_and_texts(text: &str) -> Vec<(TokenKind, &str)> {
        tokenize(text).into_iter().map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn test_words_and_spaces() {
        use TokenKind::*;
        assert_eq!(
            kinds_and_texts("makan  nasi"),
            vec![(Word, "makan"), (Whitespace, "  "), (Word, "nasi")]
        );
    }

    #[test]
    fn test_numeral_with_separators() {
        use TokenKind::*;
        assert_eq!(
            kinds_and_texts("makan nasi, 3.5kg"),
            vec![
                (Word, "makan"),
                (Whitespace, " "),
                (Word, "nasi"),
                (Punctuation, ","),
                (Whitespace, " "),
                (Numeral, "3.5"),
                (Word, "kg"),
            ]
        );
        assert_eq!(kinds_and_texts("1,000.50%"), vec![(Numeral, "1,000.50%")]);
    }

    #[test]
    fn test_trailing_separator_is_punctuation() {
        use TokenKind::*;
        assert_eq!(
            kinds_and_texts("2020."),
            vec![(Numeral, "2020"), (Punctuation, ".")]
        );
        assert_eq!(
            kinds_and_texts("1,,2"),
            vec![(Numeral, "1"), (Punctuation, ",,"), (Numeral, "2")]
        );
    }

    #[test]
    fn test_extended_latin_word() {
        use TokenKind::*;
        assert_eq!(kinds_and_texts("café!"), vec![(Word, "café"), (Punctuation, "!")]);
    }

    #[test]
    fn test_decomposed_accent_stays_in_word() {
        use TokenKind::*;
        assert_eq!(
            kinds_and_texts("cafe\u{301} enak"),
            vec![(Word, "cafe\u{301}"), (Whitespace, " "), (Word, "enak")]
        );
        // A mark with no letter before it is not a word.
        assert_eq!(
            kinds_and_texts("\u{301}a"),
            vec![(Punctuation, "\u{301}"), (Word, "a")]
        );
    }

    #[test]
    fn test_jawi_is_not_a_word() {
        use TokenKind::*;
        assert_eq!(
            kinds_and_texts("ماکن nasi"),
            vec![(Punctuation, "ماکن"), (Whitespace, " "), (Word, "nasi")]
        );
    }

    #[test]
    fn test_hyphenated() {
        use TokenKind::*;
        assert_eq!(
            kinds_and_texts("kanak-kanak"),
            vec![(Word, "kanak"), (Punctuation, "-"), (Word, "kanak")]
        );
    }

    #[test]
    fn test_spans_are_byte_ranges() {
        let text = "ç 12";
        let tokens = tokenize(text);
        assert_eq!(tokens[0].span, 0..2);
        assert_eq!(tokens[2].span, 3..5);
        for t in &tokens {
            assert_eq!(&text[t.span.clone()], t.text);
        }
    }

    #[test]
    fn test_empty() {
        assert!(tokenize("").is_empty());
    }

    proptest! {
        #[test]
        fn tokens_concatenate_to_input(text in "\\PC{0,40}") {
            let joined: String = tokenize(&text).iter().map(|t| t.text).collect();
            prop_assert_eq!(joined, text);
        }

        #[test]
        fn adjacent_tokens_differ_or_are_numerals(text in "[a-z0-9 .,%!-]{0,40}") {
            let tokens = tokenize(&text);
            for pair in tokens.windows(2) {
                // Only a numeral may directly follow another numeral (e.g. "1,,2" is split).
                if pair[0].kind == pair[1].kind {
                    prop_assert_eq!(pair[0].kind, TokenKind::Numeral);
                }
            }
        }
    }
}
