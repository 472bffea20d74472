//! Loading a grammar from rule text.
//!
//! Each rule line has the form `LHS -> alt1 | alt2 | ...`, with symbols
//! inside an alternative separated by whitespace. Lines without the arrow
//! are silently skipped, which permits blank and comment lines.

use std::error::Error;
use std::fmt;

use log::debug;

use ll1_symbol::Symbol;

use crate::grammar::{Grammar, GrammarRule};

/// Represents an error for rule text in which no line has the
/// `LHS -> RHS` shape, so no start symbol can be determined.
#[derive(Debug, Clone)]
pub struct GrammarFormatError {
    /// Human-readable reason for the error.
    pub reason: String,
}

impl fmt::Display for GrammarFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "grammar format error: {}", self.reason)
    }
}

impl Error for GrammarFormatError {}

impl Grammar {
    /// Parses rule lines into a grammar.
    ///
    /// The start symbol is fixed to the LHS of the first line that matches
    /// the rule pattern and is never reassigned. Rule lines sharing an LHS
    /// accumulate alternatives. The token `e` denotes epsilon; the stored
    /// right-hand side is then the one-element sequence `[epsilon]`.
    pub fn parse<I, S>(lines: I) -> Result<Grammar, GrammarFormatError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut grammar = Grammar::new();
        let mut num_rules = 0usize;
        for line in lines {
            let Some((lhs, alternatives)) = line.as_ref().split_once("->") else {
                continue;
            };
            let lhs = lhs.trim();
            if lhs.is_empty() {
                continue;
            }
            let lhs = grammar.intern(lhs);
            for alt in alternatives.split('|') {
                let rhs: Vec<Symbol> = alt
                    .split_whitespace()
                    .map(|token| grammar.intern(token))
                    .collect();
                grammar.add_rule(GrammarRule {
                    lhs,
                    rhs: rhs.into(),
                });
                num_rules += 1;
            }
        }
        match grammar.start_symbol() {
            Some(start) => {
                debug!(
                    "parsed {} productions, start symbol {}",
                    num_rules,
                    grammar.name_of(start)
                );
                Ok(grammar)
            }
            None => Err(GrammarFormatError {
                reason: "no line matches the `LHS -> RHS` rule pattern".into(),
            }),
        }
    }
}
