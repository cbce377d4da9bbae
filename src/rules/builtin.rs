// src/rules/builtin.rs

use once_cell::sync::Lazy;
use regex::Regex;

use super::registry::Rule;

pub const USERNAME_VALID: &str = "usernamevalid";
pub const PASSWORD_VALID: &str = "passwordvalid";

static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());
static PASSWORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]+[0-9]+[#?!@$%^&*-]+$").unwrap());

// ============================================================================
// Username
// ============================================================================

/// ASCII letters only, at least one.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsernameRule;

impl Rule for UsernameRule {
    fn check(&self, value: &str) -> bool {
        if !USERNAME_REGEX.is_match(value) {
            return false;
        }
        !value.is_empty()
    }
}

// ============================================================================
// Password
// ============================================================================

/// Letters, then digits, then symbols from `#?!@$%^&*-`; each run non-empty.
#[derive(Debug, Clone, Copy)]
pub struct PasswordRule {
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for PasswordRule {
    fn default() -> Self {
        Self {
            min_len: 6,
            max_len: 12,
        }
    }
}

impl Rule for PasswordRule {
    fn check(&self, value: &str) -> bool {
        let len = value.len();
        // Known defect: both bounds must hold at once, so this never rejects.
        // Kept as-is until the intended range (likely `||`) is confirmed.
        if len < self.min_len && len > self.max_len {
            return false;
        }
        if !PASSWORD_REGEX.is_match(value) {
            return false;
        }
        !value.is_empty()
    }
}
