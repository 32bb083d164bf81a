//! Field validator: fixed registry of per-field patterns.
//!
//! Each recognized field name maps to an anchored shape regex; `ip_v4` and
//! `height` carry an additional numeric range check on top of the shape
//! match. Lookups of unrecognized field names always fail.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Secondary semantic check applied after the shape match.
type RangeCheck = fn(&str) -> bool;

/// Anchored shape patterns for every recognized field, in registry order.
const FIELD_PATTERNS: &[(&str, &str)] = &[
    ("email", r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$"),
    ("telephone", r"^\+7-\(\d{3}\)-\d{3}-\d{2}-\d{2}$"),
    ("http_status_message", r"^\d{3} [A-Za-z ]+$"),
    ("height", r"^\d+\.\d{2}$"),
    ("snils", r"^\d{11}$"),
    ("inn", r"^\d{12}$"),
    ("passport", r"^\d{2} \d{2} \d{6}$"),
    ("identifier", r"^\d{2}-\d{2}/\d{2}$"),
    ("ip_v4", r"^(\d{1,3}\.){3}\d{1,3}$"),
    ("occupation", r"^[\w\s\-]+$"),
];

#[derive(Debug)]
struct FieldRule {
    pattern: Regex,
    range_check: Option<RangeCheck>,
}

static RULES: LazyLock<HashMap<&'static str, FieldRule>> = LazyLock::new(|| {
    FIELD_PATTERNS
        .iter()
        .map(|&(name, pattern)| {
            let regex = match Regex::new(pattern) {
                Ok(regex) => regex,
                Err(err) => panic!("invalid pattern for field '{name}': {err}"),
            };
            let rule = FieldRule {
                pattern: regex,
                range_check: range_check_for(name),
            };
            (name, rule)
        })
        .collect()
});

fn range_check_for(field: &str) -> Option<RangeCheck> {
    match field {
        "ip_v4" => Some(ip_v4_octets_in_range),
        "height" => Some(height_in_range),
        _ => None,
    }
}

/// Every dot-separated octet parses and lies in `[0, 255]`.
/// A parse failure counts as out of range.
fn ip_v4_octets_in_range(value: &str) -> bool {
    value
        .split('.')
        .all(|octet| octet.parse::<u16>().is_ok_and(|n| n <= 255))
}

/// The value parses as a float in `[0.50, 2.50]` inclusive.
/// A parse failure counts as out of range.
fn height_in_range(value: &str) -> bool {
    value.parse::<f64>().is_ok_and(|h| (0.50..=2.50).contains(&h))
}

/// Immutable field-name to rule registry.
///
/// The rule table is compiled once per process and shared; constructing a
/// `FieldValidator` is free. Unknown field names fail closed.
#[derive(Debug, Clone, Copy)]
pub struct FieldValidator {
    rules: &'static HashMap<&'static str, FieldRule>,
}

impl FieldValidator {
    #[must_use]
    pub fn new() -> Self {
        Self { rules: &RULES }
    }

    /// Names of all recognized fields.
    pub fn known_fields() -> impl Iterator<Item = &'static str> {
        FIELD_PATTERNS.iter().map(|&(name, _)| name)
    }

    /// Validate a single (field name, raw value) pair.
    ///
    /// Returns `false` for unrecognized field names, for values that fail
    /// the anchored shape match, and for values that fail the field's
    /// range check (`ip_v4` octets, `height` bounds).
    #[must_use]
    pub fn validate(&self, field: &str, value: &str) -> bool {
        let Some(rule) = self.rules.get(field) else {
            return false;
        };
        if !rule.pattern.is_match(value) {
            return false;
        }
        rule.range_check.is_none_or(|check| check(value))
    }
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::new()
    }
}
