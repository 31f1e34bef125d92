// ABOUTME: Risk tier and aggregation period models
// ABOUTME: Tiers are ordered by severity and derived on demand, never persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::risk::{DAILY_MULTIPLIER, WEEKLY_MULTIPLIER};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a consumption total relative to its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    /// Comfortably within the limit
    Low,
    /// Approaching the limit
    Medium,
    /// At or beyond the limit
    High,
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => f.pad("LOW"),
            Self::Medium => f.pad("MEDIUM"),
            Self::High => f.pad("HIGH"),
        }
    }
}

/// Aggregation period a total was computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// One local calendar day
    Daily,
    /// One local calendar week
    Weekly,
}

impl Period {
    /// Factor applied to a per-day limit for totals over this period
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Daily => DAILY_MULTIPLIER,
            Self::Weekly => WEEKLY_MULTIPLIER,
        }
    }
}
