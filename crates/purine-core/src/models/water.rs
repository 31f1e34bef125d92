// ABOUTME: Water intake models with fixed serving volumes
// ABOUTME: Water entries share the timestamp contract of meal entries but never touch the catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Timestamped;
use crate::constants::water::{LARGE_SERVING_ML, SMALL_SERVING_ML};
use serde::{Deserialize, Serialize};

/// Water serving size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterServing {
    /// Glass (330 ml)
    #[serde(alias = "glass", alias = "GLASS")]
    Small,
    /// Bottle (500 ml)
    #[serde(alias = "bottle", alias = "BOTTLE")]
    Large,
}

impl WaterServing {
    /// Volume of one serving in ml
    #[must_use]
    pub const fn volume_ml(self) -> u32 {
        match self {
            Self::Small => SMALL_SERVING_ML,
            Self::Large => LARGE_SERVING_ML,
        }
    }
}

/// One water intake event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterEntry {
    /// Serving size
    #[serde(alias = "type")]
    pub serving: WaterServing,
    /// Instant of intake in ms since the Unix epoch
    #[serde(alias = "timestamp")]
    pub timestamp_ms: i64,
}

impl WaterEntry {
    /// Create a water entry
    #[must_use]
    pub const fn new(serving: WaterServing, timestamp_ms: i64) -> Self {
        Self {
            serving,
            timestamp_ms,
        }
    }
}

impl Timestamped for WaterEntry {
    fn timestamp_ms(&self) -> i64 {
        self.timestamp_ms
    }
}
