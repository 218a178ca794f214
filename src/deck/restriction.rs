//! Format restriction: banned combinations and per-card quotas.
//!
//! The restriction is plain data. A default table ships with the crate and
//! can be replaced once at startup with `FormatRestriction::install`.
//!
//! JSON shape:
//!
//! ```json
//! { "combos": [[33, 34]], "quotas": [{ "cid": 37, "max": 2 }] }
//! ```

use std::sync::OnceLock;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{CardRecord, Cid};

const BUNDLED: &str = include_str!("../../data/format_restriction.json");

static GLOBAL: OnceLock<FormatRestriction> = OnceLock::new();

/// Errors raised while loading a restriction table.
#[derive(Debug, Error)]
pub enum RestrictionError {
    #[error("restriction table is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("quota for {0} is defined twice")]
    DuplicateQuota(Cid),
    #[error("combo pairs {0} with itself")]
    SelfCombo(Cid),
}

/// Upper bound on copies of one card across the whole deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quota {
    pub cid: Cid,
    pub max: u32,
}

#[derive(Serialize, Deserialize)]
struct RestrictionTable {
    #[serde(default)]
    combos: Vec<(Cid, Cid)>,
    #[serde(default)]
    quotas: Vec<Quota>,
}

/// Banned pairs and quotas, keyed by canonical card ID.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatRestriction {
    combos: Vec<(Cid, Cid)>,
    quotas: FxHashMap<Cid, u32>,
}

impl FormatRestriction {
    /// Create a restriction with no combos and no quotas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Alias for `new`, for call sites that mean "no restriction".
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Ban decks containing both cards.
    #[must_use]
    pub fn with_combo(mut self, a: Cid, b: Cid) -> Self {
        self.combos.push((a, b));
        self
    }

    /// Allow at most `max` copies of a card.
    #[must_use]
    pub fn with_quota(mut self, cid: Cid, max: u32) -> Self {
        self.quotas.insert(cid, max);
        self
    }

    /// Load a restriction table from JSON.
    pub fn from_json(json: &str) -> Result<Self, RestrictionError> {
        let table: RestrictionTable = serde_json::from_str(json)?;

        let mut quotas = FxHashMap::default();
        for quota in table.quotas {
            if quotas.insert(quota.cid, quota.max).is_some() {
                return Err(RestrictionError::DuplicateQuota(quota.cid));
            }
        }
        if let Some(&(a, _)) = table.combos.iter().find(|(a, b)| a == b) {
            return Err(RestrictionError::SelfCombo(a));
        }

        log::debug!(
            "loaded format restriction: {} combos, {} quotas",
            table.combos.len(),
            quotas.len()
        );
        Ok(Self {
            combos: table.combos,
            quotas,
        })
    }

    /// Serialize back to the JSON table shape. Quotas are sorted by ID.
    pub fn to_json(&self) -> Result<String, RestrictionError> {
        let mut quotas: Vec<Quota> = self
            .quotas
            .iter()
            .map(|(&cid, &max)| Quota { cid, max })
            .collect();
        quotas.sort_by_key(|q| q.cid.raw());
        let table = RestrictionTable {
            combos: self.combos.clone(),
            quotas,
        };
        Ok(serde_json::to_string(&table)?)
    }

    /// The table shipped with the crate.
    pub fn bundled() -> Result<Self, RestrictionError> {
        Self::from_json(BUNDLED)
    }

    /// Install the process-wide restriction.
    ///
    /// Succeeds only before the first call to `global` or `install`; on
    /// failure the rejected restriction is handed back.
    pub fn install(restriction: Self) -> Result<(), Self> {
        GLOBAL.set(restriction)
    }

    /// The process-wide restriction, defaulting to the bundled table.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(|| {
            Self::bundled().unwrap_or_else(|err| {
                log::warn!("bundled format restriction unusable, using none: {err}");
                Self::empty()
            })
        })
    }

    /// Banned pairs.
    #[must_use]
    pub fn combos(&self) -> &[(Cid, Cid)] {
        &self.combos
    }

    /// Quota for a card, if it has one.
    #[must_use]
    pub fn quota(&self, cid: Cid) -> Option<u32> {
        self.quotas.get(&cid).copied()
    }

    /// Whether canonical records satisfy every combo ban and quota.
    #[must_use]
    pub fn permits<'r>(&self, records: impl IntoIterator<Item = &'r CardRecord>) -> bool {
        let mut present = FxHashSet::default();
        let mut remaining = self.quotas.clone();
        let mut within_quota = true;

        for record in records {
            present.insert(record.cid);
            if let Some(left) = remaining.get_mut(&record.cid) {
                match left.checked_sub(1) {
                    Some(next) => *left = next,
                    None => {
                        log::debug!("format restriction: too many copies of {}", record.cid);
                        within_quota = false;
                    }
                }
            }
        }

        if let Some((a, b)) = self
            .combos
            .iter()
            .find(|(a, b)| present.contains(a) && present.contains(b))
        {
            log::debug!("format restriction: {a} and {b} are banned together");
            return false;
        }
        within_quota
    }
}
