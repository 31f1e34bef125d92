// ABOUTME: Helper modules for purine-cli
// ABOUTME: File loading and output formatting shared by the commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
pub mod loader;
