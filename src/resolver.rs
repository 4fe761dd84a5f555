//! Derives canonical paths from a handler type's inheritance chain.
//!
//! The discovery collaborator walks the live type metadata and hands this
//! module a plain list of [`MappingLevel`]s, ordered from the handler type
//! itself up to (but excluding) the universal base type. The resolver turns
//! that chain into the set of candidate paths for the type, or a single
//! translated token for one of its methods.

use crate::translate::translate_name;

/// Path metadata declared at one level of an inheritance chain.
///
/// A non-empty `root` is absolute: it becomes the whole contribution for its
/// level and stops the upward walk. Otherwise `values` are the declared path
/// alternatives for the level, with the level's own type name as the
/// fallback when none are declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    pub root: String,
    pub values: Vec<String>,
}

impl Mapping {
    /// A declaration carrying no explicit root or values; the level falls
    /// back to its type name.
    pub fn empty() -> Mapping {
        Mapping::default()
    }

    pub fn root(root: impl Into<String>) -> Mapping {
        Mapping {
            root: root.into(),
            values: Vec::new(),
        }
    }

    pub fn values<I, S>(values: I) -> Mapping
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Mapping {
            root: String::new(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// One level of a handler type's inheritance chain, innermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingLevel {
    /// The level's simple type name.
    pub type_name: String,
    /// The level's declared path metadata, `None` when the type carries no
    /// mapping declaration at all.
    pub mapping: Option<Mapping>,
}

impl MappingLevel {
    pub fn new(type_name: impl Into<String>, mapping: Option<Mapping>) -> MappingLevel {
        MappingLevel {
            type_name: type_name.into(),
            mapping,
        }
    }
}

/// Resolves paths for types and methods that carry no explicit declaration.
///
/// `resolve` is provided; implementations only supply the prefix and suffix
/// to trim from type names (`""` / `"Controller"` being the usual
/// convention, see [`ConventionResolver::controllers`]).
pub trait NameResolver {
    /// Prefix trimmed from declared values on every level except the
    /// outermost contribution actually used.
    fn prefix(&self) -> &str;

    /// Suffix trimmed from declared values on every level.
    fn suffix(&self) -> &str;

    /// Resolves the candidate paths for a type (`method` absent) or the
    /// single path token for one of its methods (`method` present).
    ///
    /// Method paths are never composed with the class chain here; the
    /// registration step joins them with [`combine`]. An empty result means
    /// no path information was discoverable and the registration should be
    /// skipped.
    fn resolve(&self, chain: &[MappingLevel], method: Option<&str>) -> Vec<String> {
        match method {
            Some(method) => vec![translate_name(method)],
            None => resolve_chain(chain, self.prefix(), self.suffix()),
        }
    }
}

/// Prefix/suffix convention over owned strings.
#[derive(Debug, Clone)]
pub struct ConventionResolver {
    prefix: String,
    suffix: String,
}

impl ConventionResolver {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> ConventionResolver {
        ConventionResolver {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// The `("", "Controller")` convention.
    pub fn controllers() -> ConventionResolver {
        ConventionResolver::new("", "Controller")
    }
}

impl NameResolver for ConventionResolver {
    fn prefix(&self) -> &str {
        &self.prefix
    }

    fn suffix(&self) -> &str {
        &self.suffix
    }
}

fn resolve_chain(chain: &[MappingLevel], prefix: &str, suffix: &str) -> Vec<String> {
    // Contributions collected from the type upward; the walk stops at the
    // first unmapped level or at an absolute root override.
    let mut levels: Vec<Vec<String>> = Vec::new();
    for level in chain {
        let Some(mapping) = &level.mapping else {
            debug!("{} has no mapping declaration, stopping ascent", level.type_name);
            break;
        };

        if !mapping.root.is_empty() {
            let root = mapping.root.strip_prefix('/').unwrap_or(&mapping.root);
            levels.push(vec![root.to_string()]);
            break;
        }

        if !mapping.values.is_empty() {
            levels.push(mapping.values.clone());
        } else {
            levels.push(vec![level.type_name.clone()]);
        }
    }

    // Assembled outermost-first so the final path reads ancestor to
    // descendant. The outermost contribution keeps its prefix.
    let outermost = levels.len().saturating_sub(1);
    let mut patterns: Vec<String> = Vec::new();
    for (i, values) in levels.into_iter().enumerate().rev() {
        let values: Vec<String> = values
            .iter()
            .map(|value| {
                let mut value = value.as_str();
                if i != outermost {
                    value = value.strip_prefix(prefix).unwrap_or(value);
                }
                value = value.strip_suffix(suffix).unwrap_or(value);
                translate_name(value)
            })
            .collect();
        patterns = combine(&patterns, &values);
    }
    patterns
}

/// Cartesian path composition: every prefix paired with every value, joined
/// with `/` and normalized to a leading separator, deduplicated in order.
///
/// With no prefixes the values themselves are normalized, so the fold over
/// an inheritance chain and the class-path/method-path join both go through
/// here.
pub fn combine(prefixes: &[String], values: &[String]) -> Vec<String> {
    let mut patterns = Vec::with_capacity(prefixes.len().max(1) * values.len());
    if prefixes.is_empty() {
        for value in values {
            push_unique(&mut patterns, normalize(value));
        }
        return patterns;
    }

    for prefix in prefixes {
        for value in values {
            let joined = format!(
                "{}/{}",
                prefix.trim_end_matches('/'),
                value.trim_start_matches('/')
            );
            push_unique(&mut patterns, normalize(&joined));
        }
    }
    patterns
}

fn normalize(pattern: &str) -> String {
    if pattern.starts_with('/') {
        pattern.to_string()
    } else {
        format!("/{pattern}")
    }
}

fn push_unique(patterns: &mut Vec<String>, pattern: String) {
    if !patterns.contains(&pattern) {
        patterns.push(pattern);
    }
}
