// ABOUTME: JSON schema description types for tool inputs
// ABOUTME: Lets callers discover tool parameters without reading the source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// JSON schema of a tool's input object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSchema {
    /// Always `object` for tool inputs
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Named properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, PropertySchema>>,
    /// Properties that must be present (after profile defaults are applied)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

/// Schema of a single property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySchema {
    /// JSON type name
    #[serde(rename = "type")]
    pub property_type: String,
    /// What the property means
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropertySchema {
    /// Build a property schema
    #[must_use]
    pub fn new(property_type: &str, description: &str) -> Self {
        Self {
            property_type: property_type.to_owned(),
            description: Some(description.to_owned()),
        }
    }
}

/// Name, description, and input schema of a registered tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool name
    pub name: String,
    /// Tool description
    pub description: String,
    /// Input schema
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonSchema,
}

impl JsonSchema {
    /// Build an object schema from `(name, type, description)` triples
    #[must_use]
    pub fn object(properties: &[(&str, &str, &str)], required: &[&str]) -> Self {
        let properties = properties
            .iter()
            .map(|(name, property_type, description)| {
                ((*name).to_owned(), PropertySchema::new(property_type, description))
            })
            .collect();

        Self {
            schema_type: "object".to_owned(),
            properties: Some(properties),
            required: if required.is_empty() {
                None
            } else {
                Some(required.iter().map(|name| (*name).to_owned()).collect())
            },
        }
    }
}
