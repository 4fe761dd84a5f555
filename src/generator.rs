//! Batch construction and export of the route tree.
//!
//! A discovery pass (outside this crate) enumerates handler classes, their
//! methods, the registered URL patterns and the per-handler request
//! conditions, and hands them over as plain [`DiscoveredClass`] values. The
//! generator derives each class's group path from its name, fans the
//! methods out into [`Handler`] entries, and merges everything into a single
//! tree rooted at the `"@"` sentinel. The tree is built once, on first
//! export, and frozen for the rest of the generator's lifetime; every export
//! works on an independent (optionally owner-filtered) copy.

use crate::export;
use crate::handler::Handler;
use crate::translate::translate_path;
use crate::tree::{OwnerTag, Route};

/// Name of the synthetic export root.
pub const ROOT_NAME: &str = "@";

/// One discovered handler method: its name, the URL patterns it was
/// registered under, and the request conditions extracted for it. Empty
/// condition sets mean "no constraint".
#[derive(Debug, Clone, Default)]
pub struct DiscoveredMethod {
    pub name: String,
    pub patterns: Vec<String>,
    pub methods: Vec<String>,
    pub params: Vec<String>,
    pub headers: Vec<String>,
    pub consumes: Vec<String>,
    pub produces: Vec<String>,
}

impl DiscoveredMethod {
    pub fn new(name: impl Into<String>, patterns: Vec<String>) -> DiscoveredMethod {
        DiscoveredMethod {
            name: name.into(),
            patterns,
            ..DiscoveredMethod::default()
        }
    }
}

/// One discovered handler class. `name` is the simple type name; it doubles
/// as the class's owner tag in the built tree. Types that should not appear
/// (framework internals, excluded handlers) are the discovery side's
/// responsibility to withhold.
#[derive(Debug, Clone)]
pub struct DiscoveredClass {
    pub name: String,
    pub methods: Vec<DiscoveredMethod>,
}

impl DiscoveredClass {
    pub fn new(name: impl Into<String>, methods: Vec<DiscoveredMethod>) -> DiscoveredClass {
        DiscoveredClass {
            name: name.into(),
            methods,
        }
    }

    pub fn tag(&self) -> OwnerTag {
        OwnerTag::new(&self.name)
    }
}

/// Builds the route tree from registered classes and exports it as JSON.
pub struct RoutesGenerator {
    prefix: String,
    suffix: String,
    classes: Vec<DiscoveredClass>,
    root: Option<Route>,
}

impl RoutesGenerator {
    /// `prefix` and `suffix` are trimmed from class names when deriving
    /// group paths; `("", "Controller")` is the usual convention.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> RoutesGenerator {
        RoutesGenerator {
            prefix: prefix.into(),
            suffix: suffix.into(),
            classes: Vec::new(),
            root: None,
        }
    }

    /// Registers a discovered class for the next build.
    ///
    /// The tree is build-once: registrations arriving after the first export
    /// are ignored. There is no reset; a fresh discovery pass gets a fresh
    /// generator.
    pub fn register(&mut self, class: DiscoveredClass) {
        if self.root.is_some() {
            warn!("route tree already built, ignoring registration of {}", class.name);
            return;
        }
        self.classes.push(class);
    }

    /// Exports the whole tree.
    pub fn routes(&mut self) -> serde_json::Result<String> {
        self.routes_for(&[])
    }

    /// Exports the subtrees whose accumulated owner tags intersect
    /// `include`; an empty `include` means no restriction.
    pub fn routes_for(&mut self, include: &[OwnerTag]) -> serde_json::Result<String> {
        let root = self.build();
        let mut tree = Route::group(ROOT_NAME, root.filtered(include));
        tree.clean();
        export::to_json(&tree)
    }

    fn build(&mut self) -> &Route {
        if self.root.is_none() {
            self.root = Some(self.generate());
        }
        match &self.root {
            Some(root) => root,
            None => unreachable!(),
        }
    }

    fn generate(&mut self) -> Route {
        // Deterministic child order: classes merge in type-name order.
        self.classes.sort_by(|a, b| a.name.cmp(&b.name));

        let mut root = Route::group(ROOT_NAME, Vec::new());
        for class in &self.classes {
            let path = translate_path(&class.name, &self.prefix, &self.suffix);

            let mut handlers = Vec::new();
            for method in &class.methods {
                for pattern in &method.patterns {
                    handlers.push(
                        Handler::new(method.name.as_str(), pattern.as_str())
                            .with_methods(method.methods.clone())
                            .with_params(method.params.clone())
                            .with_headers(method.headers.clone())
                            .with_consumes(method.consumes.clone())
                            .with_produces(method.produces.clone()),
                    );
                }
            }

            debug!(
                "mapping {} handlers of {} under {}",
                handlers.len(),
                class.name,
                path
            );
            root.insert(Route::new(path, handlers, class.tag()));
        }
        root.clean();

        info!("built route tree from {} handler classes", self.classes.len());
        root
    }
}
