// ABOUTME: Command modules for purine-cli
// ABOUTME: Report, limits, search, and history editing operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod entries;
pub mod limits;
pub mod report;
pub mod search;
