use crate::models::Scope;

/// Ordered (substring key, estimated dollar value) table for scope types.
///
/// Checked top to bottom against the uppercased `scope_type`; the first
/// matching key wins. Values are rough planning numbers until real takeoff
/// quantities are wired in.
pub const SCOPE_VALUES: &[(&str, f64)] = &[
    ("FIRE-RATED", 50_000.0),
    ("STOREFRONT", 150_000.0),
    ("CURTAIN WALL", 300_000.0),
    ("MONOLITHIC", 25_000.0),
    ("INTERIOR", 40_000.0),
    ("MIRRORS", 15_000.0),
    ("ENTRANCE DOOR", 30_000.0),
    ("SPECIALTY", 75_000.0),
    ("METAL PANELS", 100_000.0),
    ("GLASS RAILING", 45_000.0),
];

/// Fallback estimate for scope types with no table match.
pub const DEFAULT_SCOPE_VALUE: f64 = 50_000.0;

/// Estimate the dollar value of a scope from its type label.
///
/// Unknown scope types get [`DEFAULT_SCOPE_VALUE`] rather than zero so the
/// schedule still carries a plausible forecast for them.
pub fn estimate_scope_value(scope: &Scope) -> f64 {
    let scope_type = scope.scope_type.to_uppercase();

    SCOPE_VALUES
        .iter()
        .find(|(key, _)| scope_type.contains(key))
        .map(|(_, value)| *value)
        .unwrap_or(DEFAULT_SCOPE_VALUE)
}
