//! Numeric version parsing, ordering, and selector matching.
//!
//! Catalog versions are dotted sequences of unsigned integers
//! (`1.19.10`, `1.19.9.1`). Ordering compares components numerically from
//! left to right, so `1.19.10` sorts above `1.19.2`.
//!
//! A selector is either empty (match anything), or a dotted prefix whose
//! missing trailing components act as wildcards: `1.19` matches every
//! `1.19.*`. Trailing `x`, `X`, or `*` components are explicit wildcards.

use std::fmt;

/// A catalog version parsed into numeric components.
///
/// Field order matters for the derived ordering: components first, then the
/// original text, so `1.2 < 1.2.0` and equal component lists stay totally
/// ordered.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NumericVersion {
    components: Vec<u64>,
    original: String,
}

impl NumericVersion {
    /// Parse a dotted numeric version. Returns `None` for anything else
    /// (empty strings, empty components, non-digit text, pre-release tags).
    pub fn parse(version: &str) -> Option<Self> {
        let components = parse_components(version)?;
        Some(Self {
            components,
            original: version.to_string(),
        })
    }

    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// The string exactly as the catalog reported it.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Whether the leading components equal `prefix`.
    pub fn starts_with(&self, prefix: &[u64]) -> bool {
        self.components.starts_with(prefix)
    }
}

impl fmt::Display for NumericVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

fn parse_components(version: &str) -> Option<Vec<u64>> {
    if version.is_empty() {
        return None;
    }
    version
        .split('.')
        .map(|part| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                None
            } else {
                part.parse::<u64>().ok()
            }
        })
        .collect()
}

/// A parsed version selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Empty selector: the highest version overall.
    Latest,
    /// Leading components that must match exactly.
    Prefix(Vec<u64>),
}

impl Selector {
    /// Parse a selector string. Returns `None` if it is neither empty nor a
    /// dotted numeric prefix (with optional trailing wildcards).
    pub fn parse(selector: &str) -> Option<Self> {
        let selector = selector.trim();
        if selector.is_empty() {
            return Some(Self::Latest);
        }

        let mut prefix = Vec::new();
        let mut wildcard_seen = false;
        for part in selector.split('.') {
            match part {
                "x" | "X" | "*" => wildcard_seen = true,
                _ if wildcard_seen => return None,
                _ => {
                    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                        return None;
                    }
                    prefix.push(part.parse::<u64>().ok()?);
                }
            }
        }

        if prefix.is_empty() {
            Some(Self::Latest)
        } else {
            Some(Self::Prefix(prefix))
        }
    }

    /// Check if a version satisfies this selector.
    pub fn matches(&self, version: &NumericVersion) -> bool {
        match self {
            Self::Latest => true,
            Self::Prefix(prefix) => version.starts_with(prefix),
        }
    }
}
