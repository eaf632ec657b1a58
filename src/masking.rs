// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Header masking policy
//!
//! Rules are matched against header names case-insensitively, first match
//! wins. A matching header keeps `retain_length` characters on each side of
//! its value; values too short to keep both ends apart are hidden entirely.

use std::fmt;

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

/// Placeholder substituted for the hidden part of a header value
pub const MASK_TOKEN: &str = "<<***masked***>>";

/// A single masking rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskingRule {
    /// Header name to match (case-insensitive)
    #[serde(alias = "keyword")]
    pub name: String,
    /// Characters kept at each end of the value
    #[serde(alias = "lengthRetainingOriginalString")]
    pub retain_length: usize,
}

impl MaskingRule {
    /// Create a new rule
    pub fn new(name: impl Into<String>, retain_length: usize) -> Self {
        Self {
            name: name.into(),
            retain_length,
        }
    }

    /// Check whether this rule applies to a header name
    pub fn matches(&self, name: &str) -> bool {
        self.name
            .chars()
            .flat_map(char::to_lowercase)
            .eq(name.chars().flat_map(char::to_lowercase))
    }
}

/// Ordered, immutable set of masking rules
#[derive(Debug, Clone, Default)]
pub struct MaskingPolicy {
    rules: Vec<MaskingRule>,
}

impl MaskingPolicy {
    /// Create a policy from an ordered rule list
    pub fn new(rules: Vec<MaskingRule>) -> Self {
        Self { rules }
    }

    /// Rules in match order
    pub fn rules(&self) -> &[MaskingRule] {
        &self.rules
    }

    fn find(&self, name: &str) -> Option<&MaskingRule> {
        self.rules.iter().find(|rule| rule.matches(name))
    }

    /// True if some rule matches `name`
    pub fn should_mask(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Retain length of the first matching rule, 0 when nothing matches
    pub fn retain_length(&self, name: &str) -> usize {
        self.find(name).map(|rule| rule.retain_length).unwrap_or(0)
    }

    /// Mask a single value, keeping `retain_length` characters at each end
    pub fn mask_value(value: &str, retain_length: usize) -> String {
        let len = value.chars().count();
        let threshold = retain_length.saturating_mul(2).saturating_add(1);
        if len <= threshold {
            return MASK_TOKEN.to_string();
        }

        let prefix: String = value.chars().take(retain_length).collect();
        let suffix: String = value.chars().skip(len - retain_length).collect();
        format!("{}{}{}", prefix, MASK_TOKEN, suffix)
    }

    /// Mask every value of a header, or pass them through if no rule matches
    pub fn mask_values<'a, I>(&self, name: &str, values: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        match self.find(name) {
            Some(rule) => values
                .into_iter()
                .map(|v| Self::mask_value(v, rule.retain_length))
                .collect(),
            None => values.into_iter().map(String::from).collect(),
        }
    }

    /// Produce a masked copy of a header map for logging
    pub fn mask_headers(&self, headers: &HeaderMap) -> MaskedHeaders {
        let entries = headers
            .keys()
            .map(|name| {
                let raw: Vec<String> = headers
                    .get_all(name)
                    .iter()
                    .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
                    .collect();
                let values = self.mask_values(name.as_str(), raw.iter().map(String::as_str));
                (name.to_string(), values)
            })
            .collect();

        MaskedHeaders { entries }
    }
}

/// Masked header names and values, in header map order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskedHeaders {
    entries: Vec<(String, Vec<String>)>,
}

impl MaskedHeaders {
    /// All entries
    pub fn entries(&self) -> &[(String, Vec<String>)] {
        &self.entries
    }

    /// Values for a header name
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Display for MaskedHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, values)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}=[{}]", name, values.join(", "))?;
        }
        f.write_str("}")
    }
}
