// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

//! A skip list over unique `i64` keys.
//!
//! Conceptually, a skip list resembles something like:
//!
//! ```text
//! <head> ----------> [2] --------------------------------------------------> [9] ---------->
//! <head> ----------> [2] ------------------------------------[7] ----------> [9] ---------->
//! <head> ----------> [2] ----------> [4] ------------------> [7] ----------> [9] --> [10] ->
//! <head> --> [1] --> [2] --> [3] --> [4] --> [5] --> [6] --> [7] --> [8] --> [9] --> [10] ->
//! ```
//!
//! Nodes live in an arena and link to each other by index, so there are no
//! ownership cycles and no raw pointers. The header is not a node in the arena;
//! it is just the list's own vector of per-level links.

mod arena;
pub mod level_generator;

use std::fmt;

use tracing::{
    debug,
    instrument,
    trace,
};

use crate::{
    config::{
        SkipListBuilder,
        MAX_LEVEL_CEILING,
    },
    errs::SkipListError,
    skiplist::{
        arena::{
            Link,
            NodeArena,
            NodeId,
        },
        level_generator::{
            CoinFlipLevelGenerator,
            LevelGenerator,
        },
    },
};

/// Where a descent stopped on a given level: either still at the header or at
/// a real node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Position {
    Head,
    Node(NodeId),
}

/// An ordered set of unique `i64` keys.
///
/// `max_level` is the fixed ceiling set at construction, `current_level` is
/// the highest level any node occupies right now (0 when empty).
#[derive(Debug)]
pub struct SkipList<G = CoinFlipLevelGenerator> {
    head: Vec<Link>,
    arena: NodeArena,
    max_level: usize,
    current_level: usize,
    generator: G,
}

impl SkipList<CoinFlipLevelGenerator> {
    /// Create an empty list whose nodes may occupy levels `0..=max_level`.
    ///
    /// Fails with [`SkipListError::InvalidMaxLevel`] when `max_level` is
    /// negative or above [`MAX_LEVEL_CEILING`].
    pub fn new(max_level: i64) -> Result<Self, SkipListError> {
        SkipListBuilder::new().max_level(max_level).build()
    }
}

impl<G: LevelGenerator> SkipList<G> {
    /// Create an empty list drawing node levels from `generator`. The list's
    /// ceiling is the generator's `max_level`, which must not exceed
    /// [`MAX_LEVEL_CEILING`].
    pub fn with_generator(generator: G) -> Result<Self, SkipListError> {
        Self::with_generator_and_capacity(generator, 0)
    }

    pub(crate) fn with_generator_and_capacity(
        generator: G,
        capacity: usize,
    ) -> Result<Self, SkipListError> {
        let max_level = generator.max_level();
        if max_level > MAX_LEVEL_CEILING {
            return Err(SkipListError::InvalidMaxLevel {
                requested: i64::try_from(max_level).unwrap_or(i64::MAX),
            });
        }
        Ok(SkipList {
            head: vec![None; max_level + 1],
            arena: NodeArena::with_capacity(capacity),
            max_level,
            current_level: 0,
            generator,
        })
    }

    pub fn max_level(&self) -> usize {
        self.max_level
    }

    pub fn current_level(&self) -> usize {
        self.current_level
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn key(&self, id: NodeId) -> i64 {
        self.arena.node(id).key()
    }

    #[inline]
    fn next(&self, pos: Position, level: usize) -> Link {
        match pos {
            | Position::Head => self.head[level],
            | Position::Node(id) => self.arena.node(id).forward()[level],
        }
    }

    #[inline]
    fn set_next(&mut self, pos: Position, level: usize, next: Link) {
        match pos {
            | Position::Head => self.head[level] = next,
            | Position::Node(id) => self.arena.node_mut(id).set_next(level, next),
        }
    }

    /// Walk right along `level` while the next key is strictly below `key`.
    #[inline]
    fn advance(&self, mut pos: Position, level: usize, key: i64) -> Position {
        while let Some(next) = self.next(pos, level) {
            if self.key(next) >= key {
                break;
            }
            pos = Position::Node(next);
        }
        pos
    }

    /// Top-down descent that only keeps the final level 0 position.
    fn descend(&self, key: i64) -> Position {
        (0..=self.current_level)
            .rev()
            .fold(Position::Head, |pos, level| self.advance(pos, level, key))
    }

    /// Top-down descent recording the last position visited on each level up
    /// to `current_level`.
    fn predecessors(&self, key: i64) -> Vec<Position> {
        let mut update = vec![Position::Head; self.current_level + 1];
        let mut pos = Position::Head;
        for level in (0..=self.current_level).rev() {
            pos = self.advance(pos, level, key);
            update[level] = pos;
        }
        update
    }

    /// The level 0 successor of `pos` if it holds `key`.
    fn matching(&self, pos: Position, key: i64) -> Option<NodeId> {
        self.next(pos, 0).filter(|&id| self.key(id) == key)
    }

    /// Reports whether `key` is present.
    #[instrument(level = "debug", skip(self))]
    pub fn search(&self, key: i64) -> bool {
        self.matching(self.descend(key), key).is_some()
    }

    /// Alias for [`SkipList::search`].
    pub fn contains(&self, key: i64) -> bool {
        self.search(key)
    }

    /// Add `key` to the list. Inserting a key that is already present leaves
    /// the list untouched. Returns `true` if a new node was created.
    #[instrument(level = "debug", skip(self))]
    pub fn insert(&mut self, key: i64) -> bool {
        let mut update = self.predecessors(key);
        if self.matching(update[0], key).is_some() {
            trace!(key, "key already present");
            return false;
        }

        let level = self.generator.random().min(self.max_level);
        if level > self.current_level {
            // nothing lives on the new levels yet, so the header precedes
            update.resize(level + 1, Position::Head);
            trace!(from = self.current_level, to = level, "raising current level");
            self.current_level = level;
        }

        let id = self.arena.alloc(key, level);
        for (lvl, &pred) in update.iter().enumerate().take(level + 1) {
            let succ = self.next(pred, lvl);
            self.arena.node_mut(id).set_next(lvl, succ);
            self.set_next(pred, lvl, Some(id));
        }

        debug!(key, level, "inserted key");
        true
    }

    /// Remove `key` from the list. Deleting an absent key is a no-op. Returns
    /// `true` if a node was removed.
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self, key: i64) -> bool {
        let update = self.predecessors(key);
        let target = match self.matching(update[0], key) {
            | Some(id) => id,
            | None => return false,
        };

        for (level, &pred) in update.iter().enumerate().take(self.current_level + 1) {
            // a node occupies exactly 0..=its level, so the first miss ends it
            if self.next(pred, level) != Some(target) {
                break;
            }
            let succ = self.arena.node(target).forward()[level];
            self.set_next(pred, level, succ);
        }

        while self.current_level > 0 && self.head[self.current_level].is_none() {
            self.current_level -= 1;
        }

        let level = self.arena.release(target).map(|node| node.level());
        debug!(key, ?level, current_level = self.current_level, "deleted key");
        true
    }

    /// For each level from 0 to `current_level`, the ordered keys on that
    /// level.
    pub fn display(&self) -> Vec<(usize, Vec<i64>)> {
        (0..=self.current_level)
            .map(|level| (level, self.keys_at(level)))
            .collect()
    }

    /// The ordered keys linked on `level`. Empty for any level above
    /// `current_level`.
    pub fn keys_at(&self, level: usize) -> Vec<i64> {
        self.iter_level(level).collect()
    }

    /// Ordered traversal of every key.
    pub fn iter(&self) -> Iter<'_> {
        self.iter_level(0)
    }

    fn iter_level(&self, level: usize) -> Iter<'_> {
        Iter {
            arena: &self.arena,
            level,
            cursor: self.head.get(level).copied().flatten(),
        }
    }

    pub fn first(&self) -> Option<i64> {
        self.head[0].map(|id| self.key(id))
    }

    pub fn last(&self) -> Option<i64> {
        let mut pos = Position::Head;
        for level in (0..=self.current_level).rev() {
            while let Some(next) = self.next(pos, level) {
                pos = Position::Node(next);
            }
        }
        match pos {
            | Position::Head => None,
            | Position::Node(id) => Some(self.key(id)),
        }
    }

    /// Remove every key, keeping `max_level` and the generator.
    pub fn clear(&mut self) {
        self.head.fill(None);
        self.arena.clear();
        self.current_level = 0;
    }
}

/// Iterator over the keys of a single level, in ascending order.
#[derive(Debug)]
pub struct Iter<'a> {
    arena: &'a NodeArena,
    level: usize,
    cursor: Link,
}

impl Iterator for Iter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.node(self.cursor?);
        self.cursor = node.forward()[self.level];
        Some(node.key())
    }
}

impl<'a, G: LevelGenerator> IntoIterator for &'a SkipList<G> {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<G: LevelGenerator> Extend<i64> for SkipList<G> {
    fn extend<T: IntoIterator<Item = i64>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<G: LevelGenerator> fmt::Display for SkipList<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (level, keys) in self.display() {
            write!(f, "Level {}:", level)?;
            for key in keys {
                write!(f, " {}", key)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
