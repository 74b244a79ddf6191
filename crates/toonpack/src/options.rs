use crate::error::{Error, Result};

/// Characters with structural meaning in TOON output. A delimiter drawn from
/// this set would collide with array headers, key terminators, or list
/// markers, and the quoting rule cannot protect it.
const STRUCTURAL: [char; 6] = ['[', ']', '{', '}', ':', '-'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Spaces per nesting level (default: 2, must be at least 1)
    pub indent: usize,
    /// Cell and header-key separator (default: `,`)
    pub delimiter: char,
    /// Prefix emitted before the element count inside every `[..]` segment
    pub length_marker: String,
    /// Container nesting accepted before encoding fails with
    /// [`Error::DepthExceeded`] instead of overflowing the stack
    pub max_depth: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            delimiter: ',',
            length_marker: String::new(),
            max_depth: 128,
        }
    }
}

impl EncodeOptions {
    /// Checks every `encode` entry point runs before touching the input.
    pub fn validate(&self) -> Result<()> {
        if self.indent == 0 {
            return Err(Error::InvalidConfiguration(
                "indent must be at least 1 space per level".to_string(),
            ));
        }
        if STRUCTURAL.contains(&self.delimiter) {
            return Err(Error::InvalidConfiguration(format!(
                "delimiter {:?} is a structural character",
                self.delimiter
            )));
        }
        if self.delimiter == '\n' || self.delimiter == '\r' {
            return Err(Error::InvalidConfiguration(
                "delimiter must not be a line break".to_string(),
            ));
        }
        Ok(())
    }
}
