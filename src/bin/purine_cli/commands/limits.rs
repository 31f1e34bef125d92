// ABOUTME: Limits command for purine-cli
// ABOUTME: Prints the profile's effective daily limits next to the body-weight defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use purine_tracker::config::EngineConfig;
use purine_tracker::intelligence::{resolve_default_limits, resolve_limits};
use std::path::Path;

use crate::helpers::display::display_limits;
use crate::helpers::loader::load_profile;
use crate::OutputFormat;

pub fn run(profile_path: &Path, config: &EngineConfig, format: OutputFormat) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let limits = resolve_limits(&profile, &config.limit_factors);
    let recommended = resolve_default_limits(&profile, &config.limit_factors);
    display_limits(&limits, &recommended, format)
}
