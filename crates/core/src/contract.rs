// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Contract files
//!
//! A contract declares objects and what each may send or receive:
//!
//! ```toml
//! [objects.list]
//! [objects.editor]
//! prototype = "list"
//! [objects.backend]
//! kind = "server"
//! uri = "http://localhost:8080/events"
//!
//! [[assert]]
//! event = "item-added"
//! object = "list"
//! type = "io"
//! ```
//!
//! Instantiating a contract creates the objects on a hub (prototypes first)
//! and registers every assertion in file order.

use crate::app::App;
use crate::asserted::Asserted;
use crate::assertion::{AssertionType, EventType};
use crate::error::Error;
use crate::hub::Hub;
use crate::server::Server;
use crate::transport::Transport;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading or instantiating a contract
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("failed to read contract {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("assertion {index}: {source}")]
    Assertion {
        index: usize,
        #[source]
        source: Error,
    },
    #[error("assertion {index} refers to unknown object '{object}'")]
    UnknownObject { index: usize, object: String },
    #[error("object '{object}' has unknown prototype '{prototype}'")]
    UnknownPrototype { object: String, prototype: String },
    #[error("prototype cycle through object '{0}'")]
    PrototypeCycle(String),
    #[error("app '{app}' lists unknown member '{member}'")]
    UnknownMember { app: String, member: String },
    #[error("object '{object}' sets '{field}', which only applies to {kind} objects")]
    MisplacedField {
        object: String,
        field: &'static str,
        kind: &'static str,
    },
}

/// What an object declaration builds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    #[default]
    Plain,
    Server,
    App,
}

/// A declared object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectDecl {
    pub name: String,
    pub prototype: Option<String>,
    pub kind: ObjectKind,
    /// Relay target, for servers
    pub uri: Option<String>,
    /// Objects added to an app, in order
    pub members: Vec<String>,
}

/// A declared assertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionDecl {
    pub event_type: EventType,
    pub object: String,
    pub assertion: AssertionType,
}

/// A parsed contract
#[derive(Debug, Clone, Default)]
pub struct Contract {
    /// Declared objects, sorted by name
    pub objects: Vec<ObjectDecl>,
    /// Declared assertions, in file order
    pub assertions: Vec<AssertionDecl>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawContract {
    #[serde(default)]
    objects: BTreeMap<String, RawObject>,
    #[serde(default, rename = "assert")]
    assertions: Vec<RawAssertion>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawObject {
    prototype: Option<String>,
    #[serde(default)]
    kind: ObjectKind,
    uri: Option<String>,
    #[serde(default)]
    members: Vec<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAssertion {
    event: String,
    object: String,
    #[serde(rename = "type")]
    assertion: String,
}

/// Parse a contract from TOML content
pub fn parse_contract(content: &str) -> Result<Contract, ContractError> {
    let raw: RawContract = toml::from_str(content)?;

    let mut objects = Vec::with_capacity(raw.objects.len());
    for (name, object) in raw.objects {
        if object.uri.is_some() && object.kind != ObjectKind::Server {
            return Err(ContractError::MisplacedField {
                object: name,
                field: "uri",
                kind: "server",
            });
        }
        if !object.members.is_empty() && object.kind != ObjectKind::App {
            return Err(ContractError::MisplacedField {
                object: name,
                field: "members",
                kind: "app",
            });
        }
        objects.push(ObjectDecl {
            name,
            prototype: object.prototype,
            kind: object.kind,
            uri: object.uri,
            members: object.members,
        });
    }

    let mut assertions = Vec::with_capacity(raw.assertions.len());
    for (i, assertion) in raw.assertions.into_iter().enumerate() {
        let index = i + 1;
        let parsed = EventType::parse(&assertion.event).and_then(|event_type| {
            let kind: AssertionType = assertion.assertion.parse()?;
            Ok((event_type, kind))
        });
        let (event_type, kind) =
            parsed.map_err(|source| ContractError::Assertion { index, source })?;
        assertions.push(AssertionDecl {
            event_type,
            object: assertion.object,
            assertion: kind,
        });
    }

    Ok(Contract {
        objects,
        assertions,
    })
}

impl Contract {
    /// Read and parse a contract file
    pub fn load(path: &Path) -> Result<Self, ContractError> {
        let content = std::fs::read_to_string(path).map_err(|source| ContractError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse_contract(&content)
    }

    pub fn object(&self, name: &str) -> Option<&ObjectDecl> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Create the declared objects on a hub and register the assertions
    pub fn instantiate(&self, hub: &Hub) -> Result<Instance, ContractError> {
        let objects = self.create_objects(hub)?;

        for decl in self.objects.iter().filter(|o| o.kind == ObjectKind::App) {
            if let Some(member) = decl.members.iter().find(|m| !objects.contains_key(*m)) {
                return Err(ContractError::UnknownMember {
                    app: decl.name.clone(),
                    member: member.clone(),
                });
            }
        }

        for (i, decl) in self.assertions.iter().enumerate() {
            let index = i + 1;
            let object = objects
                .get(&decl.object)
                .ok_or_else(|| ContractError::UnknownObject {
                    index,
                    object: decl.object.clone(),
                })?;
            hub.register([(decl.event_type.as_str(), object, decl.assertion)])
                .map_err(|source| ContractError::Assertion { index, source })?;
        }

        tracing::info!(
            objects = objects.len(),
            assertions = self.assertions.len(),
            "contract instantiated"
        );
        Ok(Instance {
            contract: self.clone(),
            objects,
        })
    }

    /// Create every object after its prototype chain
    fn create_objects(&self, hub: &Hub) -> Result<BTreeMap<String, Asserted>, ContractError> {
        let decls: BTreeMap<&str, &ObjectDecl> =
            self.objects.iter().map(|o| (o.name.as_str(), o)).collect();
        let mut created: BTreeMap<String, Asserted> = BTreeMap::new();

        for name in decls.keys().copied() {
            // Walk up until an existing object or a root declaration
            let mut chain: Vec<&str> = Vec::new();
            let mut base: Option<Asserted> = None;
            let mut cursor = Some(name);
            while let Some(current) = cursor {
                if let Some(existing) = created.get(current) {
                    base = Some(existing.clone());
                    break;
                }
                if chain.contains(&current) {
                    return Err(ContractError::PrototypeCycle(current.to_string()));
                }
                let decl = decls
                    .get(current)
                    .ok_or_else(|| ContractError::UnknownPrototype {
                        object: chain.last().copied().unwrap_or(name).to_string(),
                        prototype: current.to_string(),
                    })?;
                chain.push(current);
                cursor = decl.prototype.as_deref();
            }

            for current in chain.into_iter().rev() {
                let object = match &base {
                    Some(prototype) => prototype.derive(current),
                    None => hub.create(current),
                };
                created.insert(current.to_string(), object.clone());
                base = Some(object);
            }
        }

        Ok(created)
    }
}

/// Objects created from a contract
pub struct Instance {
    contract: Contract,
    objects: BTreeMap<String, Asserted>,
}

impl Instance {
    pub fn get(&self, name: &str) -> Option<&Asserted> {
        self.objects.get(name)
    }

    /// Object names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    /// Build the relay for a declared server
    pub fn server<T: Transport>(&self, name: &str, transport: T) -> Option<Server<T>> {
        let decl = self.contract.object(name)?;
        if decl.kind != ObjectKind::Server {
            return None;
        }
        let server = Server::new(self.objects.get(name)?.clone(), transport);
        Some(match &decl.uri {
            Some(uri) => server.with_uri(uri.clone()),
            None => server,
        })
    }

    /// Build a declared app with its members added in order
    pub fn app(&self, name: &str) -> Option<App> {
        let decl = self.contract.object(name)?;
        if decl.kind != ObjectKind::App {
            return None;
        }
        let mut app = App::new(self.objects.get(name)?.clone());
        for member in &decl.members {
            app.add(self.objects.get(member)?.clone());
        }
        Some(app)
    }
}

#[cfg(test)]
#[path = "contract_tests.rs"]
mod tests;
