//! Exported view of a single request handler.

use serde::Serialize;

/// A handler registration as it appears in the exported tree.
///
/// The constraint sets come from the condition-extraction collaborator and
/// are attached as opaque data. An absent set means "no constraint" and is
/// omitted from the serialized form; it is never conflated with an empty
/// one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Handler {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub produces: Option<Vec<String>>,
}

impl Handler {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Handler {
        Handler {
            name: name.into(),
            url: url.into(),
            methods: None,
            params: None,
            headers: None,
            consumes: None,
            produces: None,
        }
    }

    pub fn with_methods(mut self, values: Vec<String>) -> Handler {
        self.methods = constraint(values);
        self
    }

    pub fn with_params(mut self, values: Vec<String>) -> Handler {
        self.params = constraint(values);
        self
    }

    pub fn with_headers(mut self, values: Vec<String>) -> Handler {
        self.headers = constraint(values);
        self
    }

    pub fn with_consumes(mut self, values: Vec<String>) -> Handler {
        self.consumes = constraint(values);
        self
    }

    pub fn with_produces(mut self, values: Vec<String>) -> Handler {
        self.produces = constraint(values);
        self
    }
}

fn constraint(values: Vec<String>) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}
