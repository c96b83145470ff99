//! Text-based symbol extraction.

use std::collections::BTreeMap;

use memchr::memmem;
use regex::Regex;
use tracing::trace;

use super::filter::{TokenSpan, immediate_references};
use super::SymbolExtractor;
use crate::ModuleId;

/// Extracts symbols with regular expressions and substring search.
///
/// - The owning symbol is the first identifier matching the file's base name
///   (case-insensitive, dots literal) that is directly followed by `=` and is
///   not itself a property access (`x.Foo = ...`) or a comparison/arrow.
/// - A reference is an occurrence of a universe symbol that is not preceded
///   by an identifier character or `.` and not followed by an identifier
///   character.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexExtractor;

impl RegexExtractor {
    pub fn new() -> Self {
        Self
    }

    fn own_symbol_pattern(base_name: &str) -> Option<Regex> {
        let pattern = format!(
            r"(?i)(?:^|[^\w$.])({})\s*=(?:[^=>]|$)",
            regex::escape(base_name)
        );
        match Regex::new(&pattern) {
            Ok(re) => Some(re),
            Err(err) => {
                trace!(base_name, %err, "own-symbol pattern rejected");
                None
            }
        }
    }
}

impl SymbolExtractor for RegexExtractor {
    fn own_symbol(&self, id: &ModuleId, source: &str) -> Option<String> {
        let base_name = id.base_name().filter(|name| !name.is_empty())?;
        let pattern = Self::own_symbol_pattern(base_name)?;
        pattern
            .captures(source)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    fn references(
        &self,
        source: &str,
        own_symbol: Option<&str>,
        universe: &[String],
    ) -> Vec<String> {
        let mut occurrences: BTreeMap<String, Vec<TokenSpan>> = BTreeMap::new();

        for symbol in universe {
            if symbol.is_empty() || Some(symbol.as_str()) == own_symbol {
                continue;
            }
            let spans = token_spans(source, symbol);
            if !spans.is_empty() {
                occurrences.insert(symbol.clone(), spans);
            }
        }

        immediate_references(&occurrences)
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Spans where `symbol` occurs as a standalone token.
fn token_spans(source: &str, symbol: &str) -> Vec<TokenSpan> {
    memmem::find_iter(source.as_bytes(), symbol.as_bytes())
        .filter_map(|start| {
            let end = start + symbol.len();
            let before = source[..start].chars().next_back();
            let after = source[end..].chars().next();

            let clean_start = before.is_none_or(|c| !is_identifier_char(c) && c != '.');
            let clean_end = after.is_none_or(|c| !is_identifier_char(c));
            (clean_start && clean_end).then(|| TokenSpan::new(start, end))
        })
        .collect()
}
