use super::*;

fn codes(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn parse_symbols_and_spaces() {
    assert_eq!(
        parse_text_to_glyph_codes("A {heart} B"),
        codes(&["A", "space", "heart", "space", "B"])
    );
}

#[test]
fn parse_unterminated_brace_is_literal() {
    assert_eq!(
        parse_text_to_glyph_codes("{open"),
        codes(&["{", "o", "p", "e", "n"])
    );
}

#[test]
fn parse_edge_cases() {
    assert!(parse_text_to_glyph_codes("").is_empty());
    assert_eq!(parse_text_to_glyph_codes("{}"), codes(&[""]));
    assert_eq!(parse_text_to_glyph_codes(".,"), codes(&[".", ","]));
    assert_eq!(
        parse_text_to_glyph_codes("x{a}{b"),
        codes(&["x", "a", "{", "b"])
    );
    assert_eq!(parse_text_to_glyph_codes("é!"), codes(&["é", "!"]));
}

#[test]
fn builtin_table_loads_and_is_five_rows() {
    let t = GlyphTable::builtin().unwrap();
    assert!(t.len() > 40);
    for code in t.codes() {
        assert_eq!(t.lookup(code).unwrap().height(), 5, "{code}");
    }
    assert_eq!(t.lookup(SPACE_CODE).unwrap().width(), 3);
    for sym in ["heart", "smile", "skull", "wing-left", "wing-right"] {
        assert!(t.lookup(sym).is_some(), "{sym}");
    }
}

#[test]
fn lookup_falls_back_to_upper_case() {
    let t = GlyphTable::builtin().unwrap();
    assert_eq!(t.lookup("a"), t.lookup("A"));
    assert!(t.lookup("a").is_some());
    assert!(t.lookup("HEART").is_none());
    assert!(t.lookup("nope").is_none());
}

#[test]
fn exact_match_wins_over_upper_case() {
    let mut t = GlyphTable::default();
    t.insert("A", GlyphBitmap::from_rows("A", &["1"]).unwrap());
    t.insert("a", GlyphBitmap::from_rows("a", &["11"]).unwrap());
    assert_eq!(t.lookup("a").unwrap().width(), 2);
}

#[test]
fn ragged_or_empty_bitmaps_are_rejected() {
    assert!(GlyphTable::from_json_str(r#"{"x": ["10", "1"]}"#).is_err());
    assert!(GlyphTable::from_json_str(r#"{"x": []}"#).is_err());
    assert!(GlyphTable::from_json_str(r#"{"x": [""]}"#).is_err());
    assert!(GlyphTable::from_json_str(r#"{"x": ["12"]}"#).is_err());
    assert!(matches!(
        GlyphTable::from_json_str("not json"),
        Err(DotMatrixError::Serde(_))
    ));
}

#[test]
fn filled_positions_are_row_major() {
    let b = GlyphBitmap::from_rows("t", &["10", "01"]).unwrap();
    assert_eq!(
        b.filled_positions(GridCoord::new(5, 7)),
        vec![GridCoord::new(5, 7), GridCoord::new(6, 8)]
    );
    assert!(!b.is_filled(2, 0));
    assert!(!b.is_filled(-1, 0));
}
