//! Permission set model.
//!
//! Permissions are opaque names (e.g. `inventory.write`). A user's set
//! maps each name to an explicit grant (`true`) or an explicit denial
//! (`false`); names absent from the map are not granted. Admin roles
//! never consult the set; see [`crate::models::role::Role::grants_all_permissions`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Explicit per-user permission overrides, keyed by permission name.
///
/// Backed by a `BTreeMap` so serialization (including inside signed
/// token claims) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeMap<String, bool>);

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff `name` is present and explicitly granted.
    pub fn allows(&self, name: &str) -> bool {
        self.0.get(name).copied().unwrap_or(false)
    }

    /// Grant a permission by name.
    pub fn grant(&mut self, name: impl Into<String>) -> &mut Self {
        self.0.insert(name.into(), true);
        self
    }

    /// Record an explicit denial (overrides a provisioning-time default).
    pub fn deny(&mut self, name: impl Into<String>) -> &mut Self {
        self.0.insert(name.into(), false);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(name, granted)| (name.as_str(), *granted))
    }
}

impl FromIterator<(String, bool)> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(&str, bool); N]> for PermissionSet {
    fn from(entries: [(&str, bool); N]) -> Self {
        entries
            .into_iter()
            .map(|(name, granted)| (name.to_string(), granted))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_names_are_not_granted() {
        let set = PermissionSet::new();
        assert!(!set.allows("inventory.write"));
    }

    #[test]
    fn explicit_denial_is_not_granted() {
        let set = PermissionSet::from([("reports.view", false)]);
        assert!(!set.allows("reports.view"));
    }

    #[test]
    fn grant_then_deny_overrides() {
        let mut set = PermissionSet::new();
        set.grant("sales.create");
        assert!(set.allows("sales.create"));
        set.deny("sales.create");
        assert!(!set.allows("sales.create"));
    }

    #[test]
    fn serializes_as_plain_object() {
        let set = PermissionSet::from([("a", true), ("b", false)]);
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json, serde_json::json!({"a": true, "b": false}));
    }
}
