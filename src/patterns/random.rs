//! Random sources for pattern placement
//!
//! Scattering needs a stream of floats in [0, 1). The stream is always
//! passed in explicitly so placements can be reproduced from a seed.
//!
//! ## Sharing
//!
//! - `SeededRandom` is owned by one caller; `&mut` access keeps it
//!   thread-confined.
//! - `SharedRandom` clones all draw from one generator behind a `Mutex`,
//!   so concurrent scatters never race on generator state.

use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed floats
pub trait RandomSource {
    /// Next value in [0, 1)
    fn next_f64(&mut self) -> f64;

    /// Next value in [min, max)
    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Next index in [0, len); `len` must be non-zero
    fn next_index(&mut self, len: usize) -> usize {
        ((self.next_f64() * len as f64) as usize).min(len.saturating_sub(1))
    }
}

/// A seedable, thread-confined random source
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// The same seed always produces the same sequence
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// A random source that can be cloned across threads
///
/// Every clone draws from the same underlying sequence.
#[derive(Clone, Debug)]
pub struct SharedRandom {
    inner: Arc<Mutex<StdRng>>,
}

impl SharedRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StdRng::from_os_rng())),
        }
    }
}

impl RandomSource for SharedRandom {
    fn next_f64(&mut self) -> f64 {
        let mut rng = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random::<f64>()
    }
}
