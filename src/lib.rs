// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

//! An ordered set of `i64` keys backed by a [`skip list`].
//!
//! Every key lives on level 0, and each level `n > 0` holds a random subset of
//! the keys on level `n - 1`. A lookup starts on the highest populated level
//! and drops down whenever the next key would overshoot, which gives expected
//! `O(log n)` insert, search and delete without any rebalancing.
//!
//! ```
//! use skipset::SkipList;
//!
//! let mut list = SkipList::new(10).unwrap();
//! for key in [3, 6, 7, 9, 12, 19, 17] {
//!     list.insert(key);
//! }
//! assert!(list.search(6));
//! list.delete(6);
//! assert!(!list.search(6));
//! assert_eq!(list.iter().collect::<Vec<_>>(), vec![3, 7, 9, 12, 17, 19]);
//! ```
//!
//! The structure is single threaded. Mutation takes `&mut self`, so sharing a
//! list across threads means wrapping the whole thing in one lock.
//!
//! [`skip list`]: https://en.wikipedia.org/wiki/Skip_list

/// Construction options for a [`SkipList`].
pub mod config;
/// The error type returned when a list can't be built.
pub mod errs;
/// The skip list and its level generators.
pub mod skiplist;

pub use config::{
    SkipListBuilder,
    DEFAULT_MAX_LEVEL,
    MAX_LEVEL_CEILING,
};
pub use errs::SkipListError;
pub use skiplist::{
    level_generator::{
        CoinFlipLevelGenerator,
        LevelGenerator,
    },
    Iter,
    SkipList,
};
