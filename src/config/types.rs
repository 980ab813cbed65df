//! Configuration types for the severance engine.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from YAML configuration files, together with the statutory
//! defaults used when no configuration directory is supplied.

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Length of the trial window in calendar days.
pub const DEFAULT_TRIAL_WINDOW_DAYS: u32 = 90;

/// Vacation entitlement by completed years of service.
pub const DEFAULT_ENTITLEMENT_TIERS: [TierBand; 4] = [
    TierBand::new(0, Some(2), 10),
    TierBand::new(2, Some(3), 12),
    TierBand::new(3, Some(4), 15),
    TierBand::new(4, None, 20),
];

/// Notice-period days by completed months of tenure.
pub const DEFAULT_NOTICE_BANDS: [TierBand; 7] = [
    TierBand::new(0, Some(3), 0),
    TierBand::new(3, Some(6), 7),
    TierBand::new(6, Some(12), 14),
    TierBand::new(12, Some(24), 30),
    TierBand::new(24, Some(60), 60),
    TierBand::new(60, Some(120), 90),
    TierBand::new(120, None, 120),
];

/// Metadata identifying the policy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PolicyMetadata {
    /// Human-readable policy name.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
}

/// Labour code references printed on audit steps and settlement lines.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClauseRefs {
    /// Trial period article.
    pub trial_period: String,
    /// Notice period (preaviso) article.
    pub notice: String,
    /// Annual vacation article.
    pub vacation: String,
    /// Cesantía article.
    pub cesantia: String,
    /// Thirteenth-month pay reference.
    pub thirteenth_month: String,
    /// Fourteenth-month pay reference.
    pub fourteenth_month: String,
    /// Reference used for manually entered lines.
    pub manual: String,
}

impl Default for ClauseRefs {
    fn default() -> Self {
        Self {
            trial_period: "48".to_string(),
            notice: "116".to_string(),
            vacation: "346".to_string(),
            cesantia: "120".to_string(),
            thirteenth_month: "Decreto 112-82".to_string(),
            fourteenth_month: "Decreto 135-94".to_string(),
            manual: "manual".to_string(),
        }
    }
}

/// One band of a tier table, covering `[min, max)`.
///
/// A band with `max = None` is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TierBand {
    /// Inclusive lower bound.
    pub min: u32,
    /// Exclusive upper bound; `None` means unbounded.
    #[serde(default)]
    pub max: Option<u32>,
    /// Days granted inside the band.
    pub days: u32,
}

impl TierBand {
    /// Creates a band.
    pub const fn new(min: u32, max: Option<u32>, days: u32) -> Self {
        Self { min, max, days }
    }

    /// Returns true if `value` falls in this band.
    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && self.max.is_none_or(|max| value < max)
    }
}

/// An ordered, contiguous table of bands covering `[0, ∞)`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TierTable {
    /// Labour code article the table encodes.
    pub clause: String,
    /// Bands in ascending order.
    pub bands: Vec<TierBand>,
}

impl TierTable {
    /// Creates a table, checking that it is well formed.
    pub fn new(name: &str, clause: impl Into<String>, bands: Vec<TierBand>) -> EngineResult<Self> {
        let table = Self {
            clause: clause.into(),
            bands,
        };
        table.validate(name)?;
        Ok(table)
    }

    /// Checks that bands start at zero, are contiguous and end open.
    pub fn validate(&self, name: &str) -> EngineResult<()> {
        let invalid = |message: String| EngineError::InvalidPolicy {
            message: format!("{} table: {}", name, message),
        };

        let first = self
            .bands
            .first()
            .ok_or_else(|| invalid("has no bands".to_string()))?;
        if first.min != 0 {
            return Err(invalid(format!("first band starts at {}, not 0", first.min)));
        }

        for (index, band) in self.bands.iter().enumerate() {
            match band.max {
                Some(max) if max <= band.min => {
                    return Err(invalid(format!(
                        "band {} is empty ({}..{})",
                        index, band.min, max
                    )));
                }
                Some(max) => match self.bands.get(index + 1) {
                    Some(next) if next.min != max => {
                        return Err(invalid(format!(
                            "band {} ends at {} but band {} starts at {}",
                            index,
                            max,
                            index + 1,
                            next.min
                        )));
                    }
                    Some(_) => {}
                    None => {
                        return Err(invalid(format!("last band is bounded at {}", max)));
                    }
                },
                None if index + 1 != self.bands.len() => {
                    return Err(invalid(format!("band {} is open-ended but not last", index)));
                }
                None => {}
            }
        }

        Ok(())
    }

    /// Days granted for `value`; unmatched values resolve to the lowest tier.
    pub fn lookup(&self, value: u32) -> u32 {
        self.band_for(value)
            .or_else(|| self.bands.first())
            .map(|band| band.days)
            .unwrap_or(0)
    }

    /// The band containing `value`, if any.
    pub fn band_for(&self, value: u32) -> Option<&TierBand> {
        self.bands.iter().find(|band| band.contains(value))
    }
}

/// policy.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// Policy metadata.
    #[serde(flatten)]
    pub metadata: PolicyMetadata,
    /// Length of the trial window in days.
    pub trial_window_days: u32,
    /// Labour code references.
    #[serde(default)]
    pub clauses: ClauseRefs,
}

/// The complete policy the engine calculates against.
///
/// The default policy carries the statutory tables as literal constants;
/// [`crate::config::ConfigLoader`] builds one from YAML instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    metadata: PolicyMetadata,
    trial_window_days: u32,
    clauses: ClauseRefs,
    entitlement: TierTable,
    notice: TierTable,
}

impl PolicyConfig {
    /// Creates a policy from its component parts, validating both tables.
    pub fn new(
        metadata: PolicyMetadata,
        trial_window_days: u32,
        clauses: ClauseRefs,
        entitlement: TierTable,
        notice: TierTable,
    ) -> EngineResult<Self> {
        entitlement.validate("entitlement")?;
        notice.validate("notice")?;
        Ok(Self {
            metadata,
            trial_window_days,
            clauses,
            entitlement,
            notice,
        })
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the trial window length in days.
    pub fn trial_window_days(&self) -> u32 {
        self.trial_window_days
    }

    /// Returns the labour code references.
    pub fn clauses(&self) -> &ClauseRefs {
        &self.clauses
    }

    /// Returns the vacation entitlement table (keyed by years of service).
    pub fn entitlement(&self) -> &TierTable {
        &self.entitlement
    }

    /// Returns the notice-period table (keyed by months of tenure).
    pub fn notice(&self) -> &TierTable {
        &self.notice
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        let clauses = ClauseRefs::default();
        Self {
            metadata: PolicyMetadata {
                name: "Statutory vacation and severance policy".to_string(),
                version: "builtin".to_string(),
            },
            trial_window_days: DEFAULT_TRIAL_WINDOW_DAYS,
            entitlement: TierTable {
                clause: clauses.vacation.clone(),
                bands: DEFAULT_ENTITLEMENT_TIERS.to_vec(),
            },
            notice: TierTable {
                clause: clauses.notice.clone(),
                bands: DEFAULT_NOTICE_BANDS.to_vec(),
            },
            clauses,
        }
    }
}
