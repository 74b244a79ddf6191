use serde_json::json;
use toonpack::EncodeOptions;
use toonpack::encode::scalars::{format_string, needs_quoting};

#[test]
fn quoted_inline_array() -> Result<(), Box<dyn std::error::Error>> {
    let v = json!(["a b", "true", "x,y"]);
    let out = toonpack::encode(&v, &EncodeOptions::default())?;
    assert_eq!(out, "[3]: \"a b\",\"true\",\"x,y\"");
    Ok(())
}

#[test]
fn reserved_literals_are_quoted_as_strings() -> Result<(), Box<dyn std::error::Error>> {
    let v = json!({"s1": "true", "s2": "false", "s3": "null"});
    let out = toonpack::encode(&v, &EncodeOptions::default())?;
    assert_eq!(out, "s1: \"true\"\ns2: \"false\"\ns3: \"null\"");
    Ok(())
}

#[test]
fn real_literals_stay_bare() -> Result<(), Box<dyn std::error::Error>> {
    let v = json!([true, false, null]);
    let out = toonpack::encode(&v, &EncodeOptions::default())?;
    assert_eq!(out, "[3]: true,false,null");
    Ok(())
}

#[test]
fn interior_quotes_are_escaped() -> Result<(), Box<dyn std::error::Error>> {
    let v = json!({"say": "he said \"hi\""});
    let out = toonpack::encode(&v, &EncodeOptions::default())?;
    assert_eq!(out, "say: \"he said \\\"hi\\\"\"");
    Ok(())
}

#[test]
fn comma_always_triggers_quoting() {
    // Even when the active delimiter is a tab, a comma in the text quotes it.
    assert!(needs_quoting("x,y", '\t'));
    assert_eq!(format_string("x,y", '\t'), "\"x,y\"");
}

#[test]
fn active_delimiter_triggers_quoting() {
    assert!(needs_quoting("a|b", '|'));
    assert!(!needs_quoting("a|b", ';'));
    assert!(needs_quoting("a;b", ';'));
}

#[test]
fn whitespace_triggers_quoting() {
    assert!(needs_quoting("two words", ','));
    assert!(needs_quoting("tab\there", ','));
    assert!(needs_quoting("line\nbreak", ','));
}

#[test]
fn closed_set_leaves_structure_lookalikes_bare() {
    // Colons, brackets, braces, hyphens, and numeric look-alikes are outside
    // the quoting set and pass through unquoted.
    for s in ["a:b", "[3]", "{x}", "-dash", "-", "007", "1e5"] {
        assert!(!needs_quoting(s, ','), "{s:?} should stay bare");
        assert_eq!(format_string(s, ','), s);
    }
}

#[test]
fn empty_string_is_not_quoted() {
    assert!(!needs_quoting("", ','));
    assert_eq!(format_string("", ','), "");
}

#[test]
fn empty_string_entry_is_dropped_like_an_empty_object() -> Result<(), Box<dyn std::error::Error>> {
    let v = json!({"k": "", "kept": 1});
    let out = toonpack::encode(&v, &EncodeOptions::default())?;
    assert_eq!(out, "kept: 1");
    Ok(())
}

#[test]
fn quoting_round_trips() {
    let cases = [
        "a b",
        "true",
        "x,y",
        "he said \"hi\"",
        "\"leading and trailing\"",
        " padded ",
        "mixed, \"all\" of\tit",
    ];
    for original in cases {
        let formatted = format_string(original, ',');
        assert!(formatted.starts_with('"') && formatted.ends_with('"'));
        let inner = &formatted[1..formatted.len() - 1];
        let recovered = inner.replace("\\\"", "\"");
        assert_eq!(recovered, original, "round trip failed for {original:?}");
    }
}

#[test]
fn unicode_passes_through() -> Result<(), Box<dyn std::error::Error>> {
    let v = json!({"name": "café", "city": "Zürich"});
    let out = toonpack::encode(&v, &EncodeOptions::default())?;
    assert_eq!(out, "name: café\ncity: Zürich");
    Ok(())
}

#[test]
fn embedded_newline_is_quoted_but_not_escaped() -> Result<(), Box<dyn std::error::Error>> {
    // Only double quotes are ever escaped, so a newline survives inside the
    // quoted text and the value spans lines.
    let out = toonpack::encode(&json!(["a\nb"]), &EncodeOptions::default())?;
    assert!(out.starts_with("[1]: \"a"));
    assert!(out.contains("a\nb"));
    Ok(())
}
