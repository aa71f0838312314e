//! Character-level Unicode classification for Rumi and Jawi text.

pub const LEFT_TO_RIGHT_ISOLATE: char = '\u{2066}';
pub const POP_DIRECTIONAL_ISOLATE: char = '\u{2069}';

/// Latin-script letter: ASCII, Latin-1 Supplement, Latin Extended-A/B and
/// Latin Extended Additional. Only these form Word tokens; letters of other
/// scripts (including Jawi already in the input) are never re-converted.
pub fn is_rumi_letter(c: char) -> bool {
    if c.is_ascii_alphabetic() {
        return true;
    }
    c.is_alphabetic()
        && (('\u{00C0}'..='\u{024F}').contains(&c) || ('\u{1E00}'..='\u{1EFF}').contains(&c))
}

/// Combining Diacritical Marks. They carry on a word already begun, so
/// decomposed text (`e` + U+0301) tokenizes like its precomposed form.
pub fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Decimal digit allowed inside a Numeral token. Arabic-Indic digits are
/// deliberately excluded: they are already target-script text.
pub fn is_numeral_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Arabic block letters plus the Arabic Supplement and Extended-A blocks,
/// which hold the Jawi-specific letters (چ ڠ ڤ ݢ ڽ ۏ).
pub fn is_jawi_letter(c: char) -> bool {
    let arabic_letter = ('\u{0620}'..='\u{064A}').contains(&c)
        || ('\u{066E}'..='\u{06D3}').contains(&c)
        || c == '\u{06D5}'
        || ('\u{06EE}'..='\u{06EF}').contains(&c)
        || ('\u{06FA}'..='\u{06FC}').contains(&c);
    arabic_letter
        || ('\u{0750}'..='\u{077F}').contains(&c)
        || ('\u{08A0}'..='\u{08C7}').contains(&c)
}

/// True when the string is non-empty and every letter in it is Jawi.
pub fn is_jawi_text(s: &str) -> bool {
    let mut letters = s.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(is_jawi_letter)
}

pub fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}

/// Whitespace run that ends a line; rules that join words never cross it.
pub fn has_line_break(s: &str) -> bool {
    s.chars().any(is_line_break)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rumi_letters() {
        assert!(is_rumi_letter('a'));
        assert!(is_rumi_letter('Z'));
        assert!(is_rumi_letter('é'));
        assert!(is_rumi_letter('ş'));
        assert!(is_rumi_letter('ạ'));
        assert!(!is_rumi_letter('×'));
        assert!(!is_rumi_letter('1'));
        assert!(!is_rumi_letter('ب'));
        assert!(!is_rumi_letter('漢'));
    }

    #[test]
    fn test_combining_marks() {
        assert!(is_combining_mark('\u{0301}'));
        assert!(is_combining_mark('\u{0327}'));
        assert!(!is_combining_mark('é'));
        assert!(!is_combining_mark('\u{064E}'));
    }

    #[test]
    fn test_jawi_letters() {
        for c in "ابتثجحخدذرزسشصضطظعغفقکلمنوهيچڠڤݢڽۏء".chars() {
            assert!(is_jawi_letter(c), "{c} should be a Jawi letter");
        }
        assert!(!is_jawi_letter('،'));
        assert!(!is_jawi_letter('٢'));
        assert!(!is_jawi_letter('a'));
    }

    #[test]
    fn test_jawi_text() {
        assert!(is_jawi_text("ماکن نسي"));
        assert!(is_jawi_text("ساتو، دوا"));
        assert!(!is_jawi_text("makan"));
        assert!(!is_jawi_text("123"));
        assert!(!is_jawi_text(""));
    }

    #[test]
    fn test_line_break() {
        assert!(has_line_break(" \n "));
        assert!(has_line_break("\r\n"));
        assert!(!has_line_break(" \t "));
    }
}
