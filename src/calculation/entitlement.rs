//! Vacation entitlement lookup.

use crate::config::TierTable;

/// Vacation days granted for `years_of_service` completed years.
///
/// The lookup walks the ordered tier table; a value no band matches
/// resolves to the lowest tier.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::vacation_entitlement_days;
/// use severance_engine::config::PolicyConfig;
///
/// let policy = PolicyConfig::default();
/// assert_eq!(vacation_entitlement_days(0, policy.entitlement()), 10);
/// assert_eq!(vacation_entitlement_days(4, policy.entitlement()), 20);
/// ```
pub fn vacation_entitlement_days(years_of_service: u32, tiers: &TierTable) -> u32 {
    tiers.lookup(years_of_service)
}
