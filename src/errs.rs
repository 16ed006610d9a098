// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use thiserror::Error;

use crate::config::MAX_LEVEL_CEILING;

/// Errors raised while constructing a skip list.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipListError {
    #[error("max level must be in 0..={ceiling}, got {requested}", ceiling = MAX_LEVEL_CEILING)]
    InvalidMaxLevel { requested: i64 },
}
