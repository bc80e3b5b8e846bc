//! Route shapes the generator can emit.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Target route shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Nested routes with layout nodes, for ruoyi-ui hosts.
    #[default]
    #[serde(alias = "ruoyi")]
    Nested,
    /// A single level of routes, for plain Vue 2 hosts.
    #[serde(alias = "vue2")]
    Flat,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Nested => "nested",
            Variant::Flat => "flat",
        }
    }

    /// Whether routes may carry children.
    pub fn supports_children(&self) -> bool {
        matches!(self, Variant::Nested)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nested" | "ruoyi" => Ok(Variant::Nested),
            "flat" | "vue2" => Ok(Variant::Flat),
            _ => Err(format!(
                "unknown variant '{}', expected 'nested' or 'flat'",
                s
            )),
        }
    }
}
