use std::collections::HashMap;
use std::sync::OnceLock;

use super::config::{parse_script_toml, ScriptConfigError};
use super::table::DEFAULT_SCRIPT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Codes live in Supplementary Private Use Area-A, which neither Rumi input
/// nor Jawi dictionary text ever contains.
const CODE_BASE: u32 = 0xF0000;
pub(super) const MAX_CODES: usize = 0xFFFE;

/// An opaque symbol for one letter/sound class.
///
/// Carried inside intermediate strings as a single private-use `char`, so a
/// composed word (affix text + root text + fallback codes) stays a plain
/// `String` until [`ScriptTables::render`] replaces the codes with glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntermediateCode(char);

impl IntermediateCode {
    pub(super) fn from_index(index: usize) -> Self {
        let cp = CODE_BASE + index.min(MAX_CODES) as u32;
        Self(char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    pub fn from_char(c: char) -> Option<Self> {
        let cp = c as u32;
        (CODE_BASE..=CODE_BASE + MAX_CODES as u32)
            .contains(&cp)
            .then_some(Self(c))
    }

    pub fn as_char(self) -> char {
        self.0
    }

    fn index(self) -> usize {
        (self.0 as u32 - CODE_BASE) as usize
    }
}

type CodeSeq = Vec<IntermediateCode>;

#[derive(Debug, Clone)]
pub struct ScriptTables {
    /// index → (code name, glyph)
    codes: Vec<(String, String)>,
    letters: HashMap<char, CodeSeq>,
    /// Longest first; equal lengths keep table order.
    digraphs: Vec<(Vec<char>, CodeSeq)>,
    front: (Vec<char>, CodeSeq),
    back: (Vec<char>, CodeSeq),
    finals: HashMap<char, CodeSeq>,
    punctuation: HashMap<char, String>,
    initial_digraphs: bool,
}

impl ScriptTables {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), ScriptConfigError> {
        // Validate eagerly
        parse_script_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| ScriptConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static ScriptTables {
        static INSTANCE: OnceLock<ScriptTables> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_SCRIPT_TOML);
            parse_script_toml(toml_str).expect("script TOML must be valid")
        })
    }

    pub(super) fn from_parts(
        codes: Vec<(String, String)>,
        letters: HashMap<char, CodeSeq>,
        mut digraphs: Vec<(Vec<char>, CodeSeq)>,
        front: (Vec<char>, CodeSeq),
        back: (Vec<char>, CodeSeq),
        finals: HashMap<char, CodeSeq>,
        punctuation: HashMap<char, String>,
    ) -> Self {
        digraphs.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self {
            codes,
            letters,
            digraphs,
            front,
            back,
            finals,
            punctuation,
            initial_digraphs: false,
        }
    }

    pub(super) fn with_initial_digraphs(mut self, enabled: bool) -> Self {
        self.initial_digraphs = enabled;
        self
    }

    /// Whether a word may open with a digraph.
    pub fn initial_digraphs(&self) -> bool {
        self.initial_digraphs
    }

    /// Codes for a single base letter. `Some(&[])` marks a silent letter.
    pub fn letter(&self, c: char) -> Option<&[IntermediateCode]> {
        self.letters.get(&c).map(Vec::as_slice)
    }

    /// Longest digraph starting at `pos`, as (letters consumed, codes).
    pub fn digraph_at(&self, chars: &[char], pos: usize) -> Option<(usize, &[IntermediateCode])> {
        let rest = chars.get(pos..)?;
        self.digraphs
            .iter()
            .find(|(key, _)| rest.starts_with(key))
            .map(|(key, codes)| (key.len(), codes.as_slice()))
    }

    /// Carrier sequence for a word-initial vowel (front class checked first).
    pub fn initial_vowel(&self, c: char) -> Option<&[IntermediateCode]> {
        if self.front.0.contains(&c) {
            Some(&self.front.1)
        } else if self.back.0.contains(&c) {
            Some(&self.back.1)
        } else {
            None
        }
    }

    /// Override for a letter standing last in a word.
    pub fn final_letter(&self, c: char) -> Option<&[IntermediateCode]> {
        self.finals.get(&c).map(Vec::as_slice)
    }

    pub fn punctuation(&self, c: char) -> Option<&str> {
        self.punctuation.get(&c).map(String::as_str)
    }

    /// Replace every mapped punctuation mark; everything else is kept.
    pub fn map_punctuation(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match self.punctuation(c) {
                Some(mapped) => out.push_str(mapped),
                None => out.push(c),
            }
        }
        out
    }

    pub fn code(&self, name: &str) -> Option<IntermediateCode> {
        self.codes
            .iter()
            .position(|(n, _)| n == name)
            .map(IntermediateCode::from_index)
    }

    pub fn code_name(&self, code: IntermediateCode) -> Option<&str> {
        self.codes.get(code.index()).map(|(n, _)| n.as_str())
    }

    pub fn glyph(&self, code: IntermediateCode) -> Option<&str> {
        self.codes.get(code.index()).map(|(_, g)| g.as_str())
    }

    /// Render an intermediate string: codes become glyphs, any other
    /// character (dictionary text, unmapped letters) passes through.
    pub fn render(&self, intermediate: &str) -> String {
        let mut out = String::with_capacity(intermediate.len());
        for c in intermediate.chars() {
            match IntermediateCode::from_char(c) {
                Some(code) => match self.glyph(code) {
                    Some(glyph) => out.push_str(glyph),
                    None => out.push(c),
                },
                None => out.push(c),
            }
        }
        out
    }

    pub fn render_codes(&self, codes: &[IntermediateCode]) -> String {
        codes
            .iter()
            .map(|&code| self.glyph(code).unwrap_or_default())
            .collect()
    }
}
