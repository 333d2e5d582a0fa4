use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

pub const REQUIRED_ROLES: [&str; 9] = [
    "nebula",
    "star_dust",
    "synapse_cyan",
    "dendrite_violet",
    "axon_amber",
    "core_glow",
    "text_bright",
    "text_dim",
    "text_faint",
];

/// Color palette keyed by role name. Renderers look roles up at render
/// time; an absent role is a configuration defect, never silently
/// substituted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    roles: BTreeMap<String, String>,
}

impl Theme {
    pub fn galaxy_core() -> Self {
        let mut roles = BTreeMap::new();
        for (role, value) in [
            ("nebula", "#0B0D21"),
            ("star_dust", "#2A2F4F"),
            ("synapse_cyan", "#22D3EE"),
            ("dendrite_violet", "#A78BFA"),
            ("axon_amber", "#FBBF24"),
            ("core_glow", "#F0ABFC"),
            ("text_bright", "#E2E8F0"),
            ("text_dim", "#94A3B8"),
            ("text_faint", "#64748B"),
        ] {
            roles.insert(role.to_string(), value.to_string());
        }
        Self { roles }
    }

    pub fn from_roles(roles: BTreeMap<String, String>) -> Self {
        Self { roles }
    }

    pub fn color(&self, role: &str) -> Result<&str, RenderError> {
        self.roles
            .get(role)
            .map(String::as_str)
            .ok_or_else(|| RenderError::missing_role(role))
    }

    pub fn set(&mut self, role: impl Into<String>, value: impl Into<String>) {
        self.roles.insert(role.into(), value.into());
    }

    pub fn missing_roles(&self) -> Vec<&'static str> {
        REQUIRED_ROLES
            .iter()
            .copied()
            .filter(|role| !self.roles.contains_key(*role))
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::galaxy_core()
    }
}
