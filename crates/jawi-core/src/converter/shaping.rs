//! Context rules applied after every token has been resolved.
//!
//! Only segments produced from word tokens are rewritten. Whitespace,
//! punctuation, numerals and Jawi already present in the input are left
//! alone, and no rule joins segments across a line break.

use serde::Serialize;

use crate::settings::{CarrierRewrite, ContractionSettings, HamzaSettings, ShapingSettings};
use crate::tokenizer::TokenKind;
use crate::unicode::{has_line_break, is_jawi_letter};

use super::Segment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapingRule {
    Hamza,
    Reduplication,
    Contraction,
}

pub(crate) fn shape(
    mut segments: Vec<Segment>,
    text: &str,
    settings: &ShapingSettings,
) -> Vec<Segment> {
    for seg in segments.iter_mut().filter(|s| s.kind == TokenKind::Word) {
        if let Some(shaped) = place_hamza(&seg.output, &settings.hamza) {
            seg.output = shaped;
            seg.shaping.push(ShapingRule::Hamza);
        }
    }
    let segments = reduplicate(segments, text, &settings.reduplication_mark);
    contract(segments, &settings.contraction)
}

/// Rewrite the free-standing hamza of one converted word, or `None` when
/// nothing changes.
///
/// Dictionary output is shaped as well: once markers are configured, a root
/// whose value holds a medial hamza converts to the marked form rather than
/// to its stored value.
pub fn place_hamza(word: &str, hamza: &HamzaSettings) -> Option<String> {
    if !word.contains(hamza.letter) || hamza.exceptions.iter().any(|w| w == word) {
        return None;
    }
    let shaped = hamza.shaped();
    if shaped.chars().eq(std::iter::once(hamza.letter)) {
        return None;
    }
    let always = hamza.always.iter().any(|w| w == word);
    let chars: Vec<char> = word.chars().collect();

    let mut out = String::with_capacity(word.len() + shaped.len());
    let mut changed = false;
    for (i, &c) in chars.iter().enumerate() {
        let between_letters = i > 0
            && i + 1 < chars.len()
            && is_jawi_letter(chars[i - 1])
            && is_jawi_letter(chars[i + 1]);
        if c == hamza.letter && (always || between_letters) {
            out.push_str(&shaped);
            changed = true;
        } else {
            out.push(c);
        }
    }
    changed.then_some(out)
}

/// `word-word` with both halves spelled the same becomes the word followed
/// by the repetition mark.
fn reduplicate(segments: Vec<Segment>, text: &str, mark: &str) -> Vec<Segment> {
    if mark.is_empty() {
        return segments;
    }
    let mut out: Vec<Segment> = Vec::with_capacity(segments.len());
    for seg in segments {
        out.push(seg);
        let n = out.len();
        if n < 3 || !is_reduplication(&out[n - 3..], text) {
            continue;
        }
        let tail = out.split_off(n - 2);
        if let (Some(first), [_, second]) = (out.last_mut(), tail.as_slice()) {
            first.output.push_str(mark);
            first.span.end = second.span.end;
            first.shaping.push(ShapingRule::Reduplication);
        }
    }
    out
}

fn is_reduplication(window: &[Segment], text: &str) -> bool {
    let [first, dash, second] = window else {
        return false;
    };
    first.kind == TokenKind::Word
        && second.kind == TokenKind::Word
        && dash.kind == TokenKind::Punctuation
        && dash.source(text) == "-"
        && first.source(text).to_lowercase() == second.source(text).to_lowercase()
}

/// A contracting word (`ک`, `د`) followed by a space and a word that opens
/// with a vowel carrier: the space goes and the carrier takes its hamza
/// form.
fn contract(segments: Vec<Segment>, contraction: &ContractionSettings) -> Vec<Segment> {
    if contraction.letters.is_empty() {
        return segments;
    }
    let mut out: Vec<Segment> = Vec::with_capacity(segments.len());
    for seg in segments {
        out.push(seg);
        let n = out.len();
        if n < 3 {
            continue;
        }
        let Some(carrier) = contraction_carrier(&out[n - 3..], contraction) else {
            continue;
        };
        let tail = out.split_off(n - 2);
        if let (Some(first), [_, second]) = (out.last_mut(), tail.as_slice()) {
            first.output.push_str(&carrier.to);
            first.output.push_str(&second.output[carrier.from.len()..]);
            first.span.end = second.span.end;
            first.shaping.push(ShapingRule::Contraction);
        }
    }
    out
}

fn contraction_carrier<'s>(
    window: &[Segment],
    contraction: &'s ContractionSettings,
) -> Option<&'s CarrierRewrite> {
    let [first, space, second] = window else {
        return None;
    };
    let joins = first.kind == TokenKind::Word
        && second.kind == TokenKind::Word
        && space.kind == TokenKind::Whitespace
        && !has_line_break(&space.output)
        && contraction.letters.iter().any(|l| *l == first.output);
    if !joins {
        return None;
    }
    contraction.carrier_for(&second.output)
}
