//! Symbol extraction.
//!
//! Extraction answers two questions about one file's text: which identifier
//! does it define, and which identifiers from a known universe does it use.
//! [`SymbolExtractor`] is the seam for swapping strategies; the graph builder
//! and resolver only see its output. [`RegexExtractor`] is the text-based
//! implementation.

mod filter;
mod pattern;

pub use self::filter::{TokenSpan, immediate_references};
pub use self::pattern::RegexExtractor;

use crate::ModuleId;

/// Output of extracting one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub own_symbol: Option<String>,
    /// Distinct raw references, sorted. Never contains `own_symbol`.
    pub references: Vec<String>,
}

/// Capability for deriving symbols from source text.
///
/// Implementations must be infallible: "no match" is an empty result, never
/// an error.
pub trait SymbolExtractor {
    /// The identifier the file defines, if any.
    fn own_symbol(&self, id: &ModuleId, source: &str) -> Option<String>;

    /// References to symbols of `universe` found in `source`, excluding
    /// `own_symbol`, after the immediate-dependency filter.
    fn references(
        &self,
        source: &str,
        own_symbol: Option<&str>,
        universe: &[String],
    ) -> Vec<String>;

    /// Run both passes for a single file.
    fn extract(&self, id: &ModuleId, source: &str, universe: &[String]) -> Extraction {
        let own_symbol = self.own_symbol(id, source);
        let references = self.references(source, own_symbol.as_deref(), universe);
        Extraction {
            own_symbol,
            references,
        }
    }
}
