//! Bundle assembly.
//!
//! Joins module contents in resolved order. The assembler performs no
//! ordering of its own.

use nsb_graph::{ResolvedOrder, SourceSet};
use tracing::debug;

use crate::{Error, Result};

/// Directive emitted at the top of a bundle when any source declared it.
pub const STRICT_DIRECTIVE: &str = "'use strict';";

/// Result of assembling one bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembled {
    pub text: String,
    /// Whether a strict directive heads `text`.
    pub hoisted_strict: bool,
}

/// Concatenates sources with a separator, optionally hoisting strict mode.
#[derive(Debug, Clone)]
pub struct Assembler {
    separator: String,
    hoist_strict: bool,
}

impl Default for Assembler {
    fn default() -> Self {
        Self {
            separator: "\n".to_string(),
            hoist_strict: true,
        }
    }
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn hoist_strict(mut self, enabled: bool) -> Self {
        self.hoist_strict = enabled;
        self
    }

    /// Concatenate every module of `order`, reading contents from `sources`.
    ///
    /// When hoisting is enabled, a leading strict directive is removed from
    /// each file and a single one is placed at the top of the bundle if any
    /// file had it. An empty order assembles to an empty string.
    ///
    /// # Errors
    ///
    /// [`Error::MissingSource`] when a module of `order` is absent from
    /// `sources`; no partial bundle is returned.
    pub fn assemble(&self, order: &ResolvedOrder, sources: &SourceSet) -> Result<Assembled> {
        let mut any_strict = false;
        let mut parts: Vec<&str> = Vec::with_capacity(order.len());

        for id in order.ids() {
            let file = sources
                .get(id)
                .ok_or_else(|| Error::MissingSource(id.clone()))?;

            let content: &str = &file.content;
            if self.hoist_strict {
                if let Some(rest) = strip_strict_directive(content) {
                    any_strict = true;
                    parts.push(rest);
                    continue;
                }
            }
            parts.push(content);
        }

        let body = parts.join(self.separator.as_str());
        let hoisted_strict = self.hoist_strict && any_strict;
        let text = if hoisted_strict {
            format!("{STRICT_DIRECTIVE}\n{body}")
        } else {
            body
        };

        debug!(
            modules = parts.len(),
            bytes = text.len(),
            hoisted_strict,
            "assembled bundle"
        );
        Ok(Assembled {
            text,
            hoisted_strict,
        })
    }
}

/// Strip a leading `'use strict'` or `"use strict"` directive.
///
/// Leading whitespace and a byte-order mark are skipped; the directive's
/// optional semicolon and the rest of its line break go with it. Returns
/// `None` when the file does not start with the directive.
pub fn strip_strict_directive(source: &str) -> Option<&str> {
    let trimmed = source.trim_start_matches('\u{feff}').trim_start();

    let rest = ["'use strict'", "\"use strict\""]
        .into_iter()
        .find_map(|directive| trimmed.strip_prefix(directive))?;
    let rest = rest.strip_prefix(';').unwrap_or(rest);
    let rest = rest.trim_start_matches([' ', '\t']);
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
        .unwrap_or(rest);
    Some(rest)
}
