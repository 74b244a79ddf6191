//! TOON encoding strategies over `serde_json::Value` trees.

pub mod scalars;

use serde_json::{Map, Value};

use crate::classify::{is_primitive, uniform_object_keys};
use crate::encode::scalars::format_scalar;
use crate::error::{Error, Result};
use crate::options::EncodeOptions;

/// Encodes `value` as a TOON text block.
///
/// Lines are joined with `\n` and the result carries no trailing newline.
/// Encoding is pure and deterministic: equal input under equal options yields
/// byte-identical output, and concurrent calls share nothing. Options are
/// validated before the input is touched.
pub fn encode(value: &Value, options: &EncodeOptions) -> Result<String> {
    options.validate()?;
    encode_value(value, options, 0)
}

fn encode_value(value: &Value, opts: &EncodeOptions, depth: usize) -> Result<String> {
    if depth > opts.max_depth {
        return Err(Error::DepthExceeded {
            max_depth: opts.max_depth,
        });
    }
    match value {
        Value::Array(items) => encode_array(items, opts, depth),
        Value::Object(map) => encode_object(map, opts, depth),
        scalar => Ok(format_scalar(scalar, opts.delimiter)),
    }
}

/// Array dispatch, probing shapes in the same order as
/// [`classify`](crate::classify::classify): empty, uniform-object,
/// all-primitive, mixed.
fn encode_array(items: &[Value], opts: &EncodeOptions, depth: usize) -> Result<String> {
    if items.is_empty() {
        return Ok(format!("[{}0]:", opts.length_marker));
    }
    if let Some(keys) = uniform_object_keys(items) {
        return Ok(encode_tabular(items, &keys, opts, depth));
    }
    if items.iter().all(is_primitive) {
        return Ok(encode_inline(items, opts));
    }
    encode_list(items, opts, depth)
}

/// Uniform-object arrays become a table: a header declaring the count and the
/// key set (taken raw from the first element, in its order), then one
/// delimiter-joined row per element one level below the header.
///
/// Rows never recurse. A nested container inside a row degrades to compact
/// JSON through the scalar formatter, keeping the row on a single line.
fn encode_tabular(items: &[Value], keys: &[&str], opts: &EncodeOptions, depth: usize) -> String {
    let delim = opts.delimiter;
    let mut out = format!(
        "{}[{}{}{}]{{",
        indent_for(opts, depth),
        opts.length_marker,
        items.len(),
        delim
    );
    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            out.push(delim);
        }
        out.push_str(key);
    }
    out.push_str("}:");
    let row_indent = indent_for(opts, depth + 1);
    for item in items {
        let row = item.as_object().expect("uniform array elements are objects");
        out.push('\n');
        out.push_str(&row_indent);
        for (i, key) in keys.iter().enumerate() {
            if i > 0 {
                out.push(delim);
            }
            let cell = row
                .get(*key)
                .expect("uniform key set covers every header key");
            out.push_str(&format_scalar(cell, delim));
        }
    }
    out
}

/// All-primitive arrays collapse to one line: count header, then the
/// formatted values joined by the delimiter.
fn encode_inline(items: &[Value], opts: &EncodeOptions) -> String {
    let delim = opts.delimiter;
    let mut out = format!("[{}{}]: ", opts.length_marker, items.len());
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(delim);
        }
        out.push_str(&format_scalar(item, delim));
    }
    out
}

/// Mixed arrays keep general recursion: a count header, then one `- ` bullet
/// per element, so the bullet count always equals the declared length.
///
/// Elements are encoded two levels below the header, putting continuation
/// lines under the bullet content; the first line's own indentation is
/// dropped because the bullet already places it. An element that encodes to
/// nothing leaves a bare `-`.
fn encode_list(items: &[Value], opts: &EncodeOptions, depth: usize) -> Result<String> {
    let mut out = format!(
        "{}[{}{}]:",
        indent_for(opts, depth),
        opts.length_marker,
        items.len()
    );
    let bullet_indent = indent_for(opts, depth + 1);
    for item in items {
        let rendered = encode_value(item, opts, depth + 2)?;
        out.push('\n');
        out.push_str(&bullet_indent);
        out.push('-');
        let mut lines = rendered.split('\n');
        if let Some(first) = lines.next() {
            let first = first.trim_start();
            if !first.is_empty() {
                out.push(' ');
                out.push_str(first);
            }
        }
        for line in lines {
            out.push('\n');
            out.push_str(line);
        }
    }
    Ok(out)
}

/// Objects emit one entry block per key in insertion order, keys raw.
///
/// A single-line value sits on the key's line after `: `. A multi-line value
/// starts below a bare `key:` line with every non-blank line re-indented by
/// the object's own level. An entry whose value encodes to nothing (an empty
/// object) is dropped entirely instead of leaving a dangling key line.
fn encode_object(map: &Map<String, Value>, opts: &EncodeOptions, depth: usize) -> Result<String> {
    let own_indent = indent_for(opts, depth);
    let mut blocks: Vec<String> = Vec::with_capacity(map.len());
    for (key, value) in map {
        let rendered = encode_value(value, opts, depth + 1)?;
        if rendered.trim().is_empty() {
            continue;
        }
        let mut block = String::with_capacity(own_indent.len() + key.len() + rendered.len() + 2);
        block.push_str(&own_indent);
        block.push_str(key);
        if rendered.contains('\n') {
            block.push(':');
            for line in rendered.split('\n') {
                block.push('\n');
                if !line.trim().is_empty() {
                    block.push_str(&own_indent);
                }
                block.push_str(line);
            }
        } else {
            block.push_str(": ");
            block.push_str(&rendered);
        }
        blocks.push(block);
    }
    Ok(blocks.join("\n"))
}

fn indent_for(opts: &EncodeOptions, depth: usize) -> String {
    " ".repeat(opts.indent * depth)
}
