//! Immediate-dependency filter.
//!
//! A symbol name can be a substring of another known symbol (`Tree` inside
//! `Tree.Node`). Scanning for both would count every use of the longer name as
//! a use of the shorter one too. The filter keeps a shorter symbol only if at
//! least one of its occurrences lies outside every occurrence of a longer
//! collected reference that contains it.

use std::collections::BTreeMap;

/// Byte range of one token occurrence in a source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
}

impl TokenSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn covers(&self, other: &TokenSpan) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// Filter raw occurrences down to the immediately referenced symbols.
///
/// `occurrences` maps each collected symbol to the spans where it occurs as a
/// standalone token; symbols with no spans are ignored. The result is sorted.
pub fn immediate_references(occurrences: &BTreeMap<String, Vec<TokenSpan>>) -> Vec<String> {
    occurrences
        .iter()
        .filter(|(_, spans)| !spans.is_empty())
        .filter(|(symbol, spans)| {
            let enclosing: Vec<&[TokenSpan]> = occurrences
                .iter()
                .filter(|(other, _)| other.len() > symbol.len() && other.contains(symbol.as_str()))
                .map(|(_, other_spans)| other_spans.as_slice())
                .collect();

            if enclosing.is_empty() {
                return true;
            }

            spans.iter().any(|span| {
                !enclosing
                    .iter()
                    .any(|outer| outer.iter().any(|o| o.covers(span)))
            })
        })
        .map(|(symbol, _)| symbol.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occurrences(entries: &[(&str, &[(usize, usize)])]) -> BTreeMap<String, Vec<TokenSpan>> {
        entries
            .iter()
            .map(|(symbol, spans)| {
                (
                    symbol.to_string(),
                    spans.iter().map(|&(s, e)| TokenSpan::new(s, e)).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_nested_only_occurrence_is_dropped() {
        // "Tree.Node.create()": Tree at 0..4 is inside Tree.Node at 0..9
        let occ = occurrences(&[("Tree", &[(0, 4)]), ("Tree.Node", &[(0, 9)])]);
        assert_eq!(immediate_references(&occ), ["Tree.Node"]);
    }

    #[test]
    fn test_standalone_occurrence_is_kept() {
        // "Tree.Node.create(); Tree.walk();"
        let occ = occurrences(&[("Tree", &[(0, 4), (20, 24)]), ("Tree.Node", &[(0, 9)])]);
        assert_eq!(immediate_references(&occ), ["Tree", "Tree.Node"]);
    }

    #[test]
    fn test_unrelated_symbols_pass_through() {
        let occ = occurrences(&[("A", &[(0, 1)]), ("B", &[(5, 6)]), ("C", &[])]);
        assert_eq!(immediate_references(&occ), ["A", "B"]);
    }
}
