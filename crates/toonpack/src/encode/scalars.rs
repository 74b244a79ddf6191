use serde_json::Value;

/// Renders a single value as delimiter-safe cell text. Never recurses.
///
/// Scalars follow the literal rules below; array and object inputs degrade to
/// their compact JSON form, which is how nested containers survive inside a
/// table row without breaking its one-line shape.
pub fn format_scalar(value: &Value, delimiter: char) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(b) => String::from(if *b { "true" } else { "false" }),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format_string(s, delimiter),
        container => container.to_string(),
    }
}

/// Quotes `s` when [`needs_quoting`] says so, otherwise passes it through
/// verbatim.
pub fn format_string(s: &str, delimiter: char) -> String {
    if needs_quoting(s, delimiter) {
        quote(s)
    } else {
        s.to_string()
    }
}

/// String quoting predicate. True iff `s` contains the active delimiter, a
/// double quote, a space, a newline, a tab, or a literal comma, or is exactly
/// one of the reserved literals `true`, `false`, `null`.
///
/// The set is closed: colons, brackets, braces, leading hyphens, numeric
/// look-alikes, and the empty string all pass through unquoted even though a
/// reader cannot always tell them apart from structure. Known limitation of
/// the format, kept for output compatibility.
pub fn needs_quoting(s: &str, delimiter: char) -> bool {
    s.contains(delimiter)
        || s.contains('"')
        || s.contains(' ')
        || s.contains('\n')
        || s.contains('\t')
        || s.contains(',')
        || matches!(s, "true" | "false" | "null")
}

/// Wraps `s` in double quotes, escaping interior double quotes with a
/// backslash. No other character is escaped, so stripping the wrapper and
/// collapsing `\"` back to `"` recovers the input exactly.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        if ch == '"' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}
