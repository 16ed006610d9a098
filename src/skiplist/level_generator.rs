// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::sync::LazyLock;

use parking_lot::Mutex;
use rand::{
    rngs::SmallRng,
    Rng,
    SeedableRng,
};

/// Process-wide bit source shared by every coin flip generator. It's seeded
/// once from OS entropy so lists created back to back don't draw correlated
/// levels. Seeding panics if the OS can't provide entropy.
static LEVEL_RNG: LazyLock<Mutex<SmallRng>> =
    LazyLock::new(|| Mutex::new(SmallRng::from_entropy()));

/// Upon the insertion of a new node in the list, the node is replicated to high
/// levels with a certain probability as determined by a `LevelGenerator`.
pub trait LevelGenerator {
    /// The highest level this generator will ever produce.
    fn max_level(&self) -> usize;
    /// Generate a random level for a new node in the range `[0, max_level]`.
    ///
    /// This must never return a level that is `> self.max_level()`.
    fn random(&mut self) -> usize;
}

/// A level generator which flips a fair coin for every level above 0.
///
/// Level `k` is half as likely as level `k - 1`, with everything that would
/// land above the ceiling truncated to `max_level`.
#[derive(Clone, Copy, Debug)]
pub struct CoinFlipLevelGenerator {
    max_level: usize,
}

impl CoinFlipLevelGenerator {
    pub fn new(max_level: usize) -> Self {
        CoinFlipLevelGenerator { max_level }
    }
}

impl LevelGenerator for CoinFlipLevelGenerator {
    fn random(&mut self) -> usize {
        let mut rng = LEVEL_RNG.lock();
        let mut level = 0;
        while level < self.max_level && rng.gen::<bool>() {
            level += 1;
        }
        level
    }

    fn max_level(&self) -> usize {
        self.max_level
    }
}
