// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Logging interceptor configuration

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorContext, Result};
use crate::masking::{MaskingPolicy, MaskingRule};

/// Configuration for [`LoggingInterceptor`](crate::LoggingInterceptor)
///
/// Documents use camelCase keys. Both fields must be present:
///
/// ```json
/// {
///   "includePayload": true,
///   "maskingRules": [{ "name": "authorization", "retainLength": 3 }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Buffer and log response bodies
    #[serde(alias = "shouldIncludePayload")]
    pub include_payload: bool,
    /// Ordered header masking rules
    #[serde(alias = "maskingKeywords")]
    pub masking_rules: Vec<MaskingRule>,
}

impl LoggingConfig {
    /// Create a new config with payload logging off and no rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable/disable response payload logging
    pub fn include_payload(mut self, include: bool) -> Self {
        self.include_payload = include;
        self
    }

    /// Append a masking rule
    pub fn mask(mut self, name: impl Into<String>, retain_length: usize) -> Self {
        self.masking_rules.push(MaskingRule::new(name, retain_length));
        self
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config = serde_json::from_str::<Self>(json)
            .config_context("invalid logging configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .config_context(&format!("failed to read {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Check rule names
    pub fn validate(&self) -> Result<()> {
        for (i, rule) in self.masking_rules.iter().enumerate() {
            if rule.name.trim().is_empty() {
                return Err(Error::config(format!("masking rule #{} has an empty name", i)));
            }
        }
        Ok(())
    }

    /// Build the masking policy for these rules
    pub fn masking_policy(&self) -> MaskingPolicy {
        MaskingPolicy::new(self.masking_rules.clone())
    }
}
