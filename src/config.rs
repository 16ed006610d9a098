// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use crate::{
    errs::SkipListError,
    skiplist::{
        level_generator::CoinFlipLevelGenerator,
        SkipList,
    },
};

/// The default level ceiling. With a fair coin this keeps the expected search
/// path logarithmic up to roughly 2^16 keys.
pub const DEFAULT_MAX_LEVEL: i64 = 16;

/// The highest `max_level` a list accepts. A fair coin reaches level 64 about
/// once per 2^64 inserts, so anything deeper only wastes header links.
pub const MAX_LEVEL_CEILING: usize = 64;

/// The default number of node slots reserved up front.
pub const DEFAULT_CAPACITY: usize = 0;

/// Options for building a [`SkipList`].
#[derive(Clone, Copy, Debug)]
pub struct SkipListBuilder {
    /// The highest level index any node may occupy. Must be in
    /// `0..=MAX_LEVEL_CEILING`; `0` degenerates to a plain sorted linked list.
    pub max_level: i64,
    /// How many node slots to reserve before the first insert.
    pub capacity: usize,
}

impl SkipListBuilder {
    pub fn new() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            capacity: DEFAULT_CAPACITY,
        }
    }

    pub fn max_level(&mut self, max_level: i64) -> &mut Self {
        self.max_level = max_level;
        self
    }

    pub fn capacity(&mut self, capacity: usize) -> &mut Self {
        self.capacity = capacity;
        self
    }

    /// Validate the options and build an empty list using the default coin
    /// flip level generator.
    pub fn build(self) -> Result<SkipList, SkipListError> {
        let max_level = usize::try_from(self.max_level).map_err(|_| {
            SkipListError::InvalidMaxLevel {
                requested: self.max_level,
            }
        })?;
        SkipList::with_generator_and_capacity(
            CoinFlipLevelGenerator::new(max_level),
            self.capacity,
        )
    }
}

impl Default for SkipListBuilder {
    fn default() -> Self {
        SkipListBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::{
            SkipListBuilder,
            DEFAULT_MAX_LEVEL,
            MAX_LEVEL_CEILING,
        },
        errs::SkipListError,
    };

    #[test]
    fn test_defaults() {
        let list = SkipListBuilder::default().build().unwrap();
        assert_eq!(list.max_level() as i64, DEFAULT_MAX_LEVEL);
        assert_eq!(list.current_level(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn test_chained_setters() {
        let list = SkipListBuilder::new()
            .max_level(3)
            .capacity(128)
            .build()
            .unwrap();
        assert_eq!(list.max_level(), 3);
    }

    #[test]
    fn test_negative_max_level() {
        let err = SkipListBuilder::new().max_level(-1).build().unwrap_err();
        assert_eq!(err, SkipListError::InvalidMaxLevel { requested: -1 });
        assert_eq!(err.to_string(), "max level must be in 0..=64, got -1");
    }

    #[test]
    fn test_max_level_above_ceiling() {
        let ceiling = MAX_LEVEL_CEILING as i64;
        assert!(SkipListBuilder::new().max_level(ceiling).build().is_ok());

        for requested in [ceiling + 1, 1 << 30, i64::MAX] {
            let err = SkipListBuilder::new()
                .max_level(requested)
                .build()
                .unwrap_err();
            assert_eq!(err, SkipListError::InvalidMaxLevel { requested });
        }
    }

    #[test]
    fn test_zero_max_level() {
        let list = SkipListBuilder::new().max_level(0).build().unwrap();
        assert_eq!(list.max_level(), 0);
    }
}
