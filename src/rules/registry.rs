// src/rules/registry.rs
//! Named rule predicates and the field naming policy

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error};

use super::builtin::{PasswordRule, UsernameRule, PASSWORD_VALID, USERNAME_VALID};
use super::field::FieldDescriptor;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Rule not found: {0}")]
    RuleNotFound(String),
}

/// A named predicate deciding whether a string satisfies a format
pub trait Rule: Send + Sync {
    fn check(&self, value: &str) -> bool;
}

impl<F> Rule for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn check(&self, value: &str) -> bool {
        self(value)
    }
}

pub type NamingPolicy = Arc<dyn Fn(&FieldDescriptor) -> String + Send + Sync>;

/// Prefers the form alias, then the JSON alias, then the raw identifier.
pub fn wire_name_policy(field: &FieldDescriptor) -> String {
    [field.form_alias, field.json_alias]
        .into_iter()
        .flatten()
        .find(|alias| !alias.is_empty())
        .unwrap_or(field.id)
        .to_string()
}

/// Registry of rules keyed by name, populated once at startup and read-only
/// while requests are served.
#[derive(Clone)]
pub struct RuleRegistry {
    rules: HashMap<String, Arc<dyn Rule>>,
    naming_policy: NamingPolicy,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
            naming_policy: Arc::new(wire_name_policy),
        }
    }

    /// Registry with `usernamevalid` and `passwordvalid` registered
    pub fn with_builtin_rules() -> Self {
        let mut registry = Self::new();
        registry.register(USERNAME_VALID, UsernameRule);
        registry.register(PASSWORD_VALID, PasswordRule::default());
        registry
    }

    /// Adds a rule, silently replacing any rule already under `name`.
    pub fn register<R>(&mut self, name: &str, rule: R)
    where
        R: Rule + 'static,
    {
        if self.rules.insert(name.to_string(), Arc::new(rule)).is_some() {
            debug!(rule = %name, "Replaced previously registered rule");
        } else {
            debug!(rule = %name, "Registered rule");
        }
    }

    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Rule>, RegistryError> {
        self.rules
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::RuleNotFound(name.to_string()))
    }

    pub fn set_field_naming_policy<F>(&mut self, policy: F)
    where
        F: Fn(&FieldDescriptor) -> String + Send + Sync + 'static,
    {
        self.naming_policy = Arc::new(policy);
    }

    /// Name reported for `field` in validation errors
    pub fn field_name(&self, field: &FieldDescriptor) -> String {
        (self.naming_policy)(field)
    }

    pub fn rule_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolves every rule referenced by `fields`. Run at startup so a
    /// missing rule never surfaces while handling a request.
    pub fn self_check(&self, fields: &[FieldDescriptor]) -> Result<(), RegistryError> {
        for field in fields {
            if let Err(e) = self.resolve(field.constraint.rule_name) {
                error!(
                    field = %field.id,
                    rule = %field.constraint.rule_name,
                    "Field references an unregistered rule"
                );
                return Err(e);
            }
        }
        Ok(())
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.rule_names())
            .finish_non_exhaustive()
    }
}
