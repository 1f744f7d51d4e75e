//! Version-constraint matching
//!
//! Default [`VersionMatcher`] implementation. The grammar covers what the
//! shipped candidate tables actually use:
//!
//! - `*` (or an empty constraint) matches anything
//! - `^X.Y.Z` caret ranges with semver compatibility rules
//! - `>=X.Y.Z` minimum bounds
//! - `X.Y.Z` exact versions
//! - alternatives joined with `|` or `||`, e.g. `^4.3 || ^5.0 || ^6.0`
//!
//! Anything unparsable matches nothing. Constraint matching is advisory
//! input to availability, never an error path.

use capdi_domain::ports::availability::VersionMatcher;

/// Caret-range version matcher
#[derive(Debug, Clone, Copy, Default)]
pub struct CaretMatcher;

impl VersionMatcher for CaretMatcher {
    fn matches(&self, installed: &str, constraint: &str) -> bool {
        if constraint.trim().is_empty() || constraint.trim() == "*" {
            return true;
        }

        // `||` separators produce empty segments under a single-char split;
        // dropping them keeps stray separators from matching everything.
        constraint
            .split('|')
            .map(str::trim)
            .filter(|alternative| !alternative.is_empty())
            .any(|alternative| matches_one(installed, alternative))
    }
}

fn matches_one(installed: &str, constraint: &str) -> bool {
    if constraint == "*" {
        return true;
    }

    let Some(installed) = parse_version(installed) else {
        return false;
    };

    if let Some(rest) = constraint.strip_prefix('^') {
        return parse_version(rest).is_some_and(|min| caret_compatible(installed, min));
    }

    if let Some(rest) = constraint.strip_prefix(">=") {
        return parse_version(rest.trim_start()).is_some_and(|min| installed >= min);
    }

    parse_version(constraint).is_some_and(|exact| installed == exact)
}

/// Semver caret rule: compatible within the leftmost non-zero component.
fn caret_compatible(installed: (u64, u64, u64), min: (u64, u64, u64)) -> bool {
    if installed < min {
        return false;
    }
    if min.0 > 0 {
        installed.0 == min.0
    } else if min.1 > 0 {
        installed.0 == 0 && installed.1 == min.1
    } else {
        installed == min
    }
}

/// Parse `X`, `X.Y`, or `X.Y.Z` (optionally `v`-prefixed) into a triple;
/// missing components default to zero.
fn parse_version(raw: &str) -> Option<(u64, u64, u64)> {
    let raw = raw.trim().trim_start_matches('v');
    if raw.is_empty() {
        return None;
    }

    let mut components = raw.split('.');
    let major = components.next()?.parse().ok()?;
    let minor = match components.next() {
        Some(part) => part.parse().ok()?,
        None => 0,
    };
    let patch = match components.next() {
        Some(part) => part.parse().ok()?,
        None => 0,
    };
    if components.next().is_some() {
        return None;
    }

    Some((major, minor, patch))
}
