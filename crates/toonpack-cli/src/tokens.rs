//! Token counting for the comparison reports.
//!
//! Exact tokenizers differ per model and ship as large data files, so the
//! service keeps a registry of counting functions keyed by model name and
//! falls back to a character-based estimate for everything else.

use std::collections::HashMap;

/// Counting function registered for one model name.
pub type CounterFn = Box<dyn Fn(&str) -> usize + Send + Sync>;

/// Whether counts for a model come from a registered counter or the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Exact,
    Estimate,
}

/// Registry of per-model token counters with an estimating fallback.
#[derive(Default)]
pub struct TokenCountService {
    counters: HashMap<String, CounterFn>,
}

impl TokenCountService {
    pub fn new() -> Self {
        Self {
            counters: HashMap::new(),
        }
    }

    /// Registers a counter for `model`, replacing any existing one.
    pub fn register<F>(&mut self, model: &str, counter: F)
    where
        F: Fn(&str) -> usize + Send + Sync + 'static,
    {
        self.counters.insert(model.to_string(), Box::new(counter));
    }

    /// Tells callers up front how counts for `model` will be produced, so a
    /// report can print a single notice instead of one per measurement.
    pub fn resolution(&self, model: &str) -> Resolution {
        if self.counters.contains_key(model) {
            Resolution::Exact
        } else {
            Resolution::Estimate
        }
    }

    /// Counts tokens in `text` for `model`. Unregistered models fall back to
    /// [`estimate_tokens`], so this never fails.
    pub fn count(&self, text: &str, model: &str) -> usize {
        match self.counters.get(model) {
            Some(counter) => counter(text),
            None => estimate_tokens(text),
        }
    }
}

/// Rough token estimate at four characters per token, rounded up.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(4)
}
