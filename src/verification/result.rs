// Copyright 2025 Cowboy AI, LLC.

//! Outcome of a law check

use std::fmt;

use schemars::JsonSchema;
use serde::Serialize;

/// Errors and warnings collected by one verification
///
/// `is_valid` is true exactly when there are no errors. Warnings never
/// affect validity. Messages are complete sentences naming the offending
/// entity and are meant to be shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    is_valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Default for VerificationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl VerificationResult {
    /// An empty, valid result
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub(crate) fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.is_valid = false;
    }

    pub(crate) fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// True when no errors were recorded
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Law violations
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Completeness hints
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Append another result's messages
    pub fn merge(&mut self, other: VerificationResult) {
        self.is_valid &= other.is_valid;
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            f.write_str("valid")?;
        } else {
            write!(f, "invalid ({} errors)", self.errors.len())?;
        }
        for error in &self.errors {
            write!(f, "\n  error: {error}")?;
        }
        for warning in &self.warnings {
            write!(f, "\n  warning: {warning}")?;
        }
        Ok(())
    }
}
