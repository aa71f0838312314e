use super::*;
use crate::cache::ConversionCache;
use crate::converter::{convert, Converter, Resolution};
use crate::dict::Dictionary;
use crate::script::ScriptTables;
use crate::settings::RootSearch;
use crate::tokenizer::TokenKind;

#[test]
fn test_words_punctuation_and_numeral() {
    let dict = roots(&[("makan", "A"), ("nasi", "B")]);
    let settings = plain_settings();
    let conv = Converter::new(&dict, ScriptTables::global(), &settings);
    assert_eq!(conv.convert("makan nasi, 3.5kg"), "A B، 3.5kg");
}

#[test]
fn test_longest_prefix_selected() {
    let dict = sample_dict();
    let settings = plain_settings();
    let conv = Converter::new(&dict, ScriptTables::global(), &settings);
    assert_eq!(conv.convert("mengeluarkan"), "مڠلوارکن");

    let trace = conv.explain("mengeluarkan");
    assert_eq!(trace.len(), 1);
    assert_eq!(
        trace[0].resolution,
        Some(Resolution::Dictionary {
            prefixes: vec!["menge".to_string()],
            root: "luar".to_string(),
            suffixes: vec!["kan".to_string()],
        })
    );
}

#[test]
fn test_unknown_word_is_stable() {
    let dict = sample_dict();
    let conv = Converter::with_defaults(&dict);
    let first = conv.convert("xyzzy");
    assert_eq!(first, "کسيززي");
    assert_eq!(conv.convert("xyzzy"), first);
    assert_eq!(conv.resolve_word("xyzzy").1, Resolution::Fallback);
}

#[test]
fn test_numeral_isolated_by_default() {
    let dict = roots(&[("harga", "هرݢ")]);
    assert_eq!(
        convert(&dict, "harga 3.5kg"),
        "هرݢ \u{2066}3.5kg\u{2069}"
    );
    assert_eq!(convert(&dict, "10%"), "\u{2066}10%\u{2069}");
}

#[test]
fn test_reconverting_output_keeps_one_isolate() {
    let dict = roots(&[("harga", "هرݢ")]);
    let once = convert(&dict, "10%");
    assert_eq!(convert(&dict, &once), once);

    let once = convert(&dict, "harga 3.5kg, 12 orang?");
    assert_eq!(once.matches('\u{2066}').count(), 2);
    assert_eq!(convert(&dict, &once), once);
}

#[test]
fn test_unit_not_attached_when_disabled() {
    let dict = roots(&[("kg", "کݢ")]);
    let mut settings = plain_settings();
    settings.numerals.attach_units = false;
    let conv = Converter::new(&dict, ScriptTables::global(), &settings);
    assert_eq!(conv.convert("3kg"), "3کݢ");
}

#[test]
fn test_phrase_beats_single_words() {
    let dict = Dictionary::build(
        pairs(&[
            ("kuala", "K"),
            ("lumpur", "L"),
            ("kuala lumpur", "کوالا لومڤور"),
        ]),
        vec![],
        vec![],
    );
    let conv = Converter::with_defaults(&dict);
    assert_eq!(conv.convert("Kuala Lumpur"), "کوالا لومڤور");
    assert_eq!(conv.convert("ke Kuala  Lumpur"), "کي کوالا لومڤور");
    assert_eq!(conv.convert("kuala, lumpur"), "K، L");
    assert_eq!(conv.convert("kuala\nlumpur"), "K\nL");

    let trace = conv.explain("di kuala lumpur");
    let last = trace.last().unwrap();
    assert_eq!(last.source, "kuala lumpur");
    assert_eq!(
        last.resolution,
        Some(Resolution::Phrase {
            key: "kuala lumpur".to_string()
        })
    );
}

#[test]
fn test_affix_remainder_must_fully_match() {
    let dict = sample_dict();
    let conv = Converter::with_defaults(&dict);
    // "ber" is not a prefix, so "berluar" is never built from "luar".
    assert_eq!(conv.resolve_word("berluar").1, Resolution::Fallback);
    assert_eq!(conv.convert("berluar"), "برلوار");
    assert_eq!(conv.convert("dimakan"), "دماکن");
    assert_eq!(conv.convert("mempermainkannya"), "ممڤرماٴينکنڽ");
}

#[test]
fn test_root_search_setting() {
    let dict = Dictionary::build(
        pairs(&[("makan", "X"), ("kanan", "Y")]),
        pairs(&[("ma", "M")]),
        vec![],
    );
    let settings = plain_settings();
    let first = Converter::new(&dict, ScriptTables::global(), &settings);
    assert_eq!(first.resolve_word("makanan").1, Resolution::Fallback);

    let mut retry = plain_settings();
    retry.resolver.root_search = RootSearch::Backtrack;
    let backtrack = Converter::new(&dict, ScriptTables::global(), &retry);
    assert_eq!(backtrack.convert("makanan"), "MY");
}

#[test]
fn test_empty_dictionary_uses_fallback() {
    let dict = Dictionary::empty();
    let conv = Converter::with_defaults(&dict);
    assert_eq!(conv.convert("makan"), "ماکان");
    assert_eq!(conv.convert("Batu!"), "باتو!");
}

#[test]
fn test_passthrough() {
    let dict = sample_dict();
    let conv = Converter::with_defaults(&dict);
    assert_eq!(conv.convert(""), "");
    assert_eq!(conv.convert("  \n\t"), "  \n\t");
    assert_eq!(conv.convert("(@#)"), "(@#)");
    assert_eq!(conv.convert("ماکن نسي، دوءا"), "ماکن نسي، دوءا");
}

#[test]
fn test_question_and_semicolon() {
    let dict = sample_dict();
    let conv = Converter::with_defaults(&dict);
    assert_eq!(conv.convert("makan?"), "ماکن؟");
    assert_eq!(conv.convert("nasi; makan"), "نسي؛ ماکن");
}

#[test]
fn test_explain_kinds() {
    let dict = sample_dict();
    let settings = plain_settings();
    let conv = Converter::new(&dict, ScriptTables::global(), &settings);
    let trace = conv.explain("makan 2kg, xyz");
    let kinds: Vec<TokenKind> = trace.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Word,
            TokenKind::Whitespace,
            TokenKind::Numeral,
            TokenKind::Punctuation,
            TokenKind::Whitespace,
            TokenKind::Word,
        ]
    );
    assert_eq!(trace[2].source, "2kg");
    assert_eq!(trace[2].resolution, Some(Resolution::Unit));
    assert_eq!(trace[3].output, "،");
    assert_eq!(trace[5].resolution, Some(Resolution::Fallback));
    assert_eq!((trace[5].start, trace[5].end), (11, 14));

    let joined: String = trace.iter().map(|t| t.output.as_str()).collect();
    assert_eq!(joined, conv.convert("makan 2kg, xyz"));
}

#[test]
fn test_explain_serializes() {
    let dict = sample_dict();
    let conv = Converter::with_defaults(&dict);
    let json = serde_json::to_value(conv.explain("dimakan")).unwrap();
    assert_eq!(json[0]["kind"], "Word");
    assert_eq!(json[0]["resolution"]["type"], "dictionary");
    assert_eq!(json[0]["resolution"]["prefixes"][0], "di");
    assert_eq!(json[0]["resolution"]["root"], "makan");
    assert!(json[0].get("shaping").is_none());
}

#[test]
fn test_convert_cached() {
    let dict = sample_dict();
    let conv = Converter::with_defaults(&dict);
    let mut cache = ConversionCache::new(8);
    let out = conv.convert_cached(&mut cache, "makan nasi");
    assert_eq!(out, "ماکن نسي");
    assert_eq!(cache.get("default", "makan nasi"), Some("ماکن نسي"));
    assert_eq!(conv.convert_cached(&mut cache, "makan nasi"), out);
    assert_eq!(cache.len(), 1);

    let other = conv.clone().with_mode("variant");
    other.convert_cached(&mut cache, "makan nasi");
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_chunked_matches_whole() {
    let dict = sample_dict();
    let conv = Converter::with_defaults(&dict);
    let text = "ke atas\nkanak-kanak makan\ndi ibu 3.5kg";
    let mut chunked = conv.chunked();
    let mut out = String::new();
    for piece in ["ke at", "as\nkanak-", "kanak makan\ndi ", "ibu 3.5", "kg"] {
        out.push_str(&chunked.push(piece));
    }
    assert_eq!(chunked.pending(), "di ibu 3.5kg");
    out.push_str(&chunked.finish());
    assert_eq!(out, conv.convert(text));
    assert!(chunked.pending().is_empty());
}
