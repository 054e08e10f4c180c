// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.

use pj_core::ContractError;
use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct PjError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl PjError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for PjError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for PjError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Builders for the failures the commands report.
impl PjError {
    /// A contract that failed to load or instantiate.
    pub fn contract(path: &Path, err: ContractError) -> Self {
        let base = PjError::new(format!("invalid contract '{}'", path.display()))
            .with_context(err.to_string());

        let base = match &err {
            ContractError::Io { .. } => base.with_suggestion("Check the file path"),
            ContractError::Toml(_) => base
                .with_suggestion("Check the TOML syntax")
                .with_suggestion("Allowed object keys: prototype, kind, uri, members"),
            ContractError::UnknownObject { object, .. } => {
                base.with_suggestion(format!("Declare it with: [objects.{}]", object))
            }
            ContractError::UnknownPrototype { prototype, .. } => {
                base.with_suggestion(format!("Declare the prototype: [objects.{}]", prototype))
            }
            ContractError::PrototypeCycle(_) => {
                base.with_suggestion("Remove one 'prototype' link from the cycle")
            }
            ContractError::Assertion { .. } => base
                .with_suggestion("Event types are lower-case words joined by single hyphens")
                .with_suggestion("Assertion types are: sends, receives, io"),
            ContractError::UnknownMember { .. } | ContractError::MisplacedField { .. } => base,
        };

        base.with_source(err)
    }

    /// An object name the contract does not declare.
    pub fn unknown_object(name: &str, path: &Path) -> Self {
        PjError::new(format!(
            "object '{}' is not declared in '{}'",
            name,
            path.display()
        ))
        .with_suggestion(format!("List registrations: pj check {}", path.display()))
    }

    /// A relay through an object that is not a server.
    pub fn not_a_server(name: &str) -> Self {
        PjError::new(format!("object '{}' is not a server", name))
            .with_suggestion(format!("Set kind = \"server\" under [objects.{}]", name))
    }

    /// A relay through a server without a URI.
    pub fn missing_uri(name: &str) -> Self {
        PjError::new(format!("server '{}' has no uri", name))
            .with_suggestion(format!("Set uri = \"http://...\" under [objects.{}]", name))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_error_display() {
        let err = PjError::new("Something went wrong")
            .with_context("First context")
            .with_context("Second context")
            .with_suggestion("Try this")
            .with_suggestion("Or this");

        let output = format!("{}", err);
        assert!(output.contains("error: Something went wrong"));
        assert!(output.contains("-> First context"));
        assert!(output.contains("-> Second context"));
        assert!(output.contains("1. Try this"));
        assert!(output.contains("2. Or this"));
    }

    #[test]
    fn test_contract_error_keeps_source() {
        let parse_err = pj_core::parse_contract("[objects").unwrap_err();
        let err = PjError::contract(Path::new("app.toml"), parse_err);

        let output = format!("{}", err);
        assert!(output.contains("invalid contract 'app.toml'"));
        assert!(output.contains("Check the TOML syntax"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_unknown_object_suggests_check() {
        let err = PjError::unknown_object("ghost", Path::new("app.toml"));
        let output = format!("{}", err);
        assert!(output.contains("'ghost'"));
        assert!(output.contains("pj check app.toml"));
    }
}
