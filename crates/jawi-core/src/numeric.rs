//! Numeral groups.
//!
//! A numeral token (plus, optionally, a unit glued to it such as `3.5kg`)
//! is emitted verbatim, never rewritten by the letter or punctuation passes,
//! and optionally wrapped in directional isolates so that right-to-left
//! context cannot reorder its digits. A group that already sits inside an
//! isolate pair is not wrapped again.

use std::ops::Range;

use crate::settings::NumeralSettings;
use crate::tokenizer::{Token, TokenKind};
use crate::unicode::{LEFT_TO_RIGHT_ISOLATE, POP_DIRECTIONAL_ISOLATE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NumeralGroup {
    pub output: String,
    /// Byte range in the input, unit included.
    pub span: Range<usize>,
    /// Tokens consumed starting at the numeral.
    pub consumed: usize,
    pub has_unit: bool,
}

/// Assemble the group starting at `tokens[i]`, which must be a numeral.
pub(crate) fn numeral_group(
    tokens: &[Token<'_>],
    i: usize,
    settings: &NumeralSettings,
) -> NumeralGroup {
    let numeral = &tokens[i];
    let unit = tokens
        .get(i + 1)
        .filter(|t| settings.attach_units && t.kind == TokenKind::Word);

    let consumed = 1 + usize::from(unit.is_some());
    let end = unit.map_or(numeral.span.end, |t| t.span.end);
    let mut body = String::from(numeral.text);
    if let Some(unit) = unit {
        body.push_str(unit.text);
    }

    NumeralGroup {
        output: if settings.isolate && !is_isolated(tokens, i, consumed) {
            isolate(&body)
        } else {
            body
        },
        span: numeral.span.start..end,
        consumed,
        has_unit: unit.is_some(),
    }
}

/// The tokens around `tokens[i..i + len]` end with LRI and start with PDI.
fn is_isolated(tokens: &[Token<'_>], i: usize, len: usize) -> bool {
    let opened = i
        .checked_sub(1)
        .and_then(|p| tokens.get(p))
        .is_some_and(|t| t.text.ends_with(LEFT_TO_RIGHT_ISOLATE));
    let closed = tokens
        .get(i + len)
        .is_some_and(|t| t.text.starts_with(POP_DIRECTIONAL_ISOLATE));
    opened && closed
}

/// Wrap in LEFT-TO-RIGHT ISOLATE … POP DIRECTIONAL ISOLATE.
pub fn isolate(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 6);
    out.push(LEFT_TO_RIGHT_ISOLATE);
    out.push_str(text);
    out.push(POP_DIRECTIONAL_ISOLATE);
    out
}
