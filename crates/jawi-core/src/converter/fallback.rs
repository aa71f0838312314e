use crate::script::{IntermediateCode, ScriptTables};
use crate::unicode::is_combining_mark;

/// Letter-level transliteration for words the dictionary cannot resolve.
///
/// A word-initial front/back vowel becomes its carrier sequence, and any
/// other first letter maps on its own unless the tables let digraphs open
/// a word. After that, digraphs are taken longest first and remaining
/// letters go through the base table. The last letter of a multi-letter
/// word uses its word-final override when one exists. Unmapped characters
/// pass through.
pub fn transliterate(tables: &ScriptTables, word: &str) -> String {
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    let Some(&first) = chars.first() else {
        return String::new();
    };

    let mut intermediate = String::with_capacity(chars.len() * 4);
    let mut i = 0;
    if let Some(codes) = tables.initial_vowel(first) {
        push_codes(&mut intermediate, codes);
        i = 1;
    } else if !tables.initial_digraphs() {
        push_letter(&mut intermediate, tables.letter(first), first);
        i = 1;
    }

    // Trailing combining marks do not move the word-final letter.
    let last = chars
        .iter()
        .rposition(|&c| !is_combining_mark(c))
        .unwrap_or(chars.len() - 1);
    while i < chars.len() {
        if let Some((len, codes)) = tables.digraph_at(&chars, i) {
            push_codes(&mut intermediate, codes);
            i += len;
            continue;
        }
        let c = chars[i];
        let codes = if i == last && last > 0 {
            tables.final_letter(c).or_else(|| tables.letter(c))
        } else {
            tables.letter(c)
        };
        push_letter(&mut intermediate, codes, c);
        i += 1;
    }

    tables.render(&intermediate)
}

fn push_codes(out: &mut String, codes: &[IntermediateCode]) {
    out.extend(codes.iter().map(|code| code.as_char()));
}

fn push_letter(out: &mut String, codes: Option<&[IntermediateCode]>, c: char) {
    match codes {
        Some(codes) => push_codes(out, codes),
        None => out.push(c),
    }
}
