//! Measurement and table rendering for the comparison reports.

use serde_json::Value;

use crate::tokens::TokenCountService;

/// Longest dataset sample printed by `compare`.
pub const SAMPLE_LIMIT: usize = 400;

/// Longest model response excerpt printed by `llm-bench`.
pub const EXCERPT_LIMIT: usize = 300;

/// One rendering of a dataset with its size metrics.
pub struct FormatStats {
    pub name: &'static str,
    pub text: String,
    pub bytes: usize,
    pub chars: usize,
    pub lines: usize,
    pub tokens: usize,
}

/// Measures one rendered format under the given tokenizer model.
pub fn analyze(
    name: &'static str,
    text: String,
    service: &TokenCountService,
    model: &str,
) -> FormatStats {
    let bytes = text.len();
    let chars = text.chars().count();
    let lines = text.split('\n').count();
    let tokens = service.count(&text, model);
    FormatStats {
        name,
        text,
        bytes,
        chars,
        lines,
        tokens,
    }
}

/// Renders `data` in the five standard formats and measures each: compact and
/// pretty JSON, then TOON with comma, tab, and pipe delimiters.
pub fn measure_formats(
    data: &Value,
    service: &TokenCountService,
    model: &str,
) -> anyhow::Result<Vec<FormatStats>> {
    let comma = toonpack::encode(data, &toonpack::EncodeOptions::default())?;
    let tab = toonpack::encode(
        data,
        &toonpack::EncodeOptions {
            delimiter: '\t',
            ..Default::default()
        },
    )?;
    let pipe = toonpack::encode(
        data,
        &toonpack::EncodeOptions {
            delimiter: '|',
            ..Default::default()
        },
    )?;

    Ok(vec![
        analyze("JSON (Compact)", serde_json::to_string(data)?, service, model),
        analyze("JSON (Pretty)", serde_json::to_string_pretty(data)?, service, model),
        analyze("TOON (Comma)", comma, service, model),
        analyze("TOON (Tab)", tab, service, model),
        analyze("TOON (Pipe)", pipe, service, model),
    ])
}

/// Prints the fixed-width metric table for one dataset.
pub fn print_table(results: &[FormatStats]) {
    println!();
    println!(
        "{:<20}{:>12}{:>12}{:>12}{:>12}",
        "", "Bytes", "Chars", "Lines", "Tokens"
    );
    println!("{}", "-".repeat(80));
    for stats in results {
        println!(
            "{:<20}{:>12}{:>12}{:>12}{:>12}",
            stats.name, stats.bytes, stats.chars, stats.lines, stats.tokens
        );
    }
}

/// TOON rendering with the lowest token count, first listed on ties.
pub fn best_toon(results: &[FormatStats]) -> Option<&FormatStats> {
    results
        .iter()
        .filter(|stats| stats.name.starts_with("TOON"))
        .min_by_key(|stats| stats.tokens)
}

/// Percentage saved going from `from` to `to`, negative when `to` is larger.
pub fn reduction_percent(from: usize, to: usize) -> f64 {
    if from == 0 {
        return 0.0;
    }
    (from as f64 - to as f64) / from as f64 * 100.0
}

/// First `limit` characters of `text`, with a trailing ellipsis when cut.
pub fn excerpt(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    format!("{cut}...")
}
