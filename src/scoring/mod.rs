// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how matches get their numbers and their order.
//!
//! Field type dominates everything else. A title hit at the end of a long
//! title still beats a content hit on the first word of the page.

mod core;
pub mod ranking;

pub use self::core::*;
