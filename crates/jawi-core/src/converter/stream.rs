use crate::unicode::is_line_break;

use super::Converter;

/// Converts text that arrives in pieces.
///
/// Everything up to the last line break seen so far is converted as soon
/// as it arrives; the unfinished line is held back. No rule reaches across
/// a line break, so the concatenated output equals a single `convert` of
/// the concatenated input.
pub struct ChunkedConverter<'c, 'a> {
    converter: &'c Converter<'a>,
    pending: String,
}

impl<'c, 'a> ChunkedConverter<'c, 'a> {
    pub fn new(converter: &'c Converter<'a>) -> Self {
        Self {
            converter,
            pending: String::new(),
        }
    }

    pub fn push(&mut self, chunk: &str) -> String {
        self.pending.push_str(chunk);
        let Some(cut) = last_line_end(&self.pending) else {
            return String::new();
        };
        let rest = self.pending.split_off(cut);
        let ready = std::mem::replace(&mut self.pending, rest);
        self.converter.convert(&ready)
    }

    /// Convert whatever is still buffered.
    pub fn finish(&mut self) -> String {
        let rest = std::mem::take(&mut self.pending);
        self.converter.convert(&rest)
    }

    #[cfg(test)]
    pub(crate) fn pending(&self) -> &str {
        &self.pending
    }
}

/// Byte offset just past the last line-break character.
fn last_line_end(text: &str) -> Option<usize> {
    text.char_indices()
        .rev()
        .find(|&(_, c)| is_line_break(c))
        .map(|(i, c)| i + c.len_utf8())
}
