// ABOUTME: Configuration management for the nutrition engine
// ABOUTME: Exposes engine settings, limit formula factors, and risk thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration is passed explicitly to every engine call. Nothing here is
//! stored in a process-wide singleton.

/// Engine settings loaded from defaults and `PURINE_*` environment variables
pub mod engine;

pub use engine::{EngineConfig, LimitFactors, RiskThresholds};
