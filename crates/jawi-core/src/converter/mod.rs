//! Rumi-to-Jawi conversion.
//!
//! Tokenizes the input, resolves each word through the dictionary (phrase,
//! then root + affixes) or the letter-level fallback, keeps numerals and
//! unmapped punctuation verbatim, and finally applies the shaping rules.

pub mod explain;
mod fallback;
mod phrase;
mod resolver;
pub mod shaping;
mod stream;

#[cfg(test)]
mod tests;

use std::ops::Range;

use tracing::debug_span;

use crate::cache::ConversionCache;
use crate::dict::Dictionary;
use crate::numeric::numeral_group;
use crate::script::ScriptTables;
use crate::settings::{settings, Settings};
use crate::tokenizer::{tokenize, Token, TokenKind};

pub use explain::TokenTrace;
pub use fallback::transliterate;
pub use resolver::Resolution;
pub use shaping::{place_hamza, ShapingRule};
pub use stream::ChunkedConverter;

pub const DEFAULT_MODE: &str = "default";

/// A resolved stretch of the input: one token, a phrase spanning several,
/// or tokens joined by a shaping rule.
#[derive(Debug, Clone)]
pub(crate) struct Segment {
    pub kind: TokenKind,
    pub span: Range<usize>,
    pub output: String,
    pub resolution: Option<Resolution>,
    pub shaping: Vec<ShapingRule>,
}

impl Segment {
    fn new(kind: TokenKind, span: Range<usize>, output: String) -> Self {
        Self {
            kind,
            span,
            output,
            resolution: None,
            shaping: Vec::new(),
        }
    }

    fn resolved(mut self, resolution: Resolution) -> Self {
        self.resolution = Some(resolution);
        self
    }

    pub fn source<'t>(&self, text: &'t str) -> &'t str {
        &text[self.span.clone()]
    }
}

/// Converts text against one dictionary and one configuration.
///
/// Holds only shared references, so a single converter can serve any
/// number of threads.
#[derive(Clone)]
pub struct Converter<'a> {
    dict: &'a Dictionary,
    tables: &'a ScriptTables,
    settings: &'a Settings,
    mode: String,
}

impl<'a> Converter<'a> {
    pub fn new(dict: &'a Dictionary, tables: &'a ScriptTables, settings: &'a Settings) -> Self {
        Self {
            dict,
            tables,
            settings,
            mode: DEFAULT_MODE.to_string(),
        }
    }

    /// Global script tables and settings.
    pub fn with_defaults(dict: &'a Dictionary) -> Self {
        Self::new(dict, ScriptTables::global(), settings())
    }

    /// Label this configuration for cache keys.
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn dict(&self) -> &'a Dictionary {
        self.dict
    }

    pub fn tables(&self) -> &'a ScriptTables {
        self.tables
    }

    pub fn settings(&self) -> &'a Settings {
        self.settings
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn convert(&self, text: &str) -> String {
        self.segments(text)
            .into_iter()
            .map(|s| s.output)
            .collect()
    }

    /// `convert`, memoized in a caller-owned cache under this converter's
    /// mode.
    pub fn convert_cached(&self, cache: &mut ConversionCache, text: &str) -> String {
        if let Some(hit) = cache.get(&self.mode, text) {
            return hit.to_string();
        }
        let output = self.convert(text);
        cache.insert(&self.mode, text, output.clone());
        output
    }

    /// Resolve a single word, without any context rules.
    pub fn convert_word(&self, word: &str) -> String {
        self.resolve_word(word).0
    }

    pub fn resolve_word(&self, word: &str) -> (String, Resolution) {
        resolver::resolve_word(
            self.dict,
            self.tables,
            self.settings.resolver.root_search,
            word,
        )
    }

    pub fn explain(&self, text: &str) -> Vec<TokenTrace> {
        self.segments(text)
            .into_iter()
            .map(|s| TokenTrace::from_segment(s, text))
            .collect()
    }

    pub fn chunked(&self) -> ChunkedConverter<'_, 'a> {
        ChunkedConverter::new(self)
    }

    fn segments(&self, text: &str) -> Vec<Segment> {
        let _span = debug_span!("convert", len = text.len()).entered();

        let tokens = tokenize(text);
        let segments = self.resolve_tokens(&tokens);
        shaping::shape(segments, text, &self.settings.shaping)
    }

    fn resolve_tokens(&self, tokens: &[Token<'_>]) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            let token = &tokens[i];
            match token.kind {
                TokenKind::Word => {
                    if let Some((phrase, end)) = phrase::match_at(self.dict, tokens, i) {
                        let span = token.span.start..tokens[end - 1].span.end;
                        let output = self.tables.render(&phrase.entry.target);
                        segments.push(
                            Segment::new(TokenKind::Word, span, output).resolved(
                                Resolution::Phrase {
                                    key: phrase.key.clone(),
                                },
                            ),
                        );
                        i = end;
                        continue;
                    }
                    let (output, resolution) = self.resolve_word(token.text);
                    segments.push(
                        Segment::new(TokenKind::Word, token.span.clone(), output)
                            .resolved(resolution),
                    );
                }
                TokenKind::Numeral => {
                    let group = numeral_group(tokens, i, &self.settings.numerals);
                    let mut segment = Segment::new(TokenKind::Numeral, group.span, group.output);
                    if group.has_unit {
                        segment = segment.resolved(Resolution::Unit);
                    }
                    segments.push(segment);
                    i += group.consumed;
                    continue;
                }
                TokenKind::Whitespace => segments.push(Segment::new(
                    token.kind,
                    token.span.clone(),
                    token.text.to_string(),
                )),
                TokenKind::Punctuation => segments.push(Segment::new(
                    token.kind,
                    token.span.clone(),
                    self.tables.map_punctuation(token.text),
                )),
            }
            i += 1;
        }
        segments
    }
}

/// Convert with the global tables and settings.
pub fn convert(dict: &Dictionary, text: &str) -> String {
    Converter::with_defaults(dict).convert(text)
}
