#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! Convention-based route paths and a compacted route tree.
//!
//! Handler types and methods do not need explicit path declarations: paths
//! are derived from their names (`UserController::getOne` becomes
//! `/user/get-one`), and the flat set of discovered registrations is merged
//! into a shared-prefix tree that can be exported as JSON for documentation
//! or client-route generation.
//!
//! ```rust
//! use routegen::{DiscoveredClass, DiscoveredMethod, RoutesGenerator};
//!
//! let mut generator = RoutesGenerator::new("", "Controller");
//! generator.register(DiscoveredClass::new(
//!     "UserController",
//!     vec![DiscoveredMethod::new("list", vec!["/user/list".into()])],
//! ));
//!
//! let json = generator.routes().unwrap();
//! assert!(json.contains(r#""name":"user""#));
//! ```
//!
//! Discovery itself (which types exist, their inheritance chains, any
//! declared path overrides, per-handler method/param/header/media-type
//! conditions) is a collaborator: it hands this crate plain data and this
//! crate never performs introspection.

pub mod export;
pub mod generator;
pub mod handler;
pub mod resolver;
pub mod translate;
pub mod tree;

#[macro_use]
extern crate log;

pub use generator::{DiscoveredClass, DiscoveredMethod, RoutesGenerator, ROOT_NAME};
pub use handler::Handler;
pub use resolver::{combine, ConventionResolver, Mapping, MappingLevel, NameResolver};
pub use translate::{translate_name, translate_path};
pub use tree::{OwnerTag, Route};
