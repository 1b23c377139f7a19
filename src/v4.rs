//! UUIDv4 generator and related types

use rand::{Rng, RngCore, SeedableRng};

use crate::Uuid;

/// Represents a UUIDv4 generator that owns its random number generator.
///
/// Each instance keeps its own state, so seeding one generator never disturbs another. Sharing a
/// single instance across threads requires external synchronization that covers the reseed and
/// the draws of a call as one unit; the following example does so with a `Mutex`.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::StdRng;
/// use std::{sync, thread};
/// use uuid_forge::V4Generator;
///
/// let g = sync::Arc::new(sync::Mutex::new(V4Generator::<StdRng>::default()));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate(None), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct V4Generator<R> {
    /// The random number generator used by the generator.
    rng: R,
}

impl<R: RngCore + SeedableRng> V4Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Creates a generator instance deterministically seeded with `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(R::seed_from_u64(seed))
    }

    /// Replaces the generator state with one derived from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        tracing::trace!(seed, "reseeding UUIDv4 generator");
        self.rng = R::seed_from_u64(seed);
    }

    /// Generates a new UUIDv4 string.
    ///
    /// If `seed` is a non-zero value, the generator is reseeded with it first, so two calls with
    /// the same seed produce the same string. `None` and `Some(0)` leave the current state as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rand::rngs::StdRng;
    /// use uuid_forge::V4Generator;
    ///
    /// let mut g = V4Generator::<StdRng>::default();
    /// assert_eq!(g.generate(Some(19900601)), g.generate(Some(19900601)));
    /// assert_ne!(g.generate(None), g.generate(None));
    /// ```
    pub fn generate(&mut self, seed: Option<u64>) -> String {
        self.generate_uuid(seed).to_string()
    }

    /// Generates a new UUIDv4 object.
    ///
    /// This is the binary counterpart of [`generate`](Self::generate), with the same seeding rule.
    pub fn generate_uuid(&mut self, seed: Option<u64>) -> Uuid {
        if let Some(seed) = seed.filter(|&seed| seed != 0) {
            self.reseed(seed);
        }

        let rng = &mut self.rng;
        let mut draw = |max: u16| rng.gen_range(0..=max);
        Uuid::from_u16_fields([
            // time_low
            draw(0xffff),
            draw(0xffff),
            // time_mid
            draw(0xffff),
            // time_hi_and_version, version 4 in the top four bits
            draw(0x0fff) | 0x4000,
            // clock_seq, variant `10` in the top two bits
            draw(0x3fff) | 0x8000,
            // node
            draw(0xffff),
            draw(0xffff),
            draw(0xffff),
        ])
    }
}

impl<R: RngCore + SeedableRng> Default for V4Generator<R> {
    /// Creates a generator instance seeded from the operating system's entropy source.
    fn default() -> Self {
        Self::new(R::from_entropy())
    }
}

/// Supports operations as an infinite iterator that produces a new unseeded UUIDv4 string for each
/// call of `next()`.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::StdRng;
/// use uuid_forge::V4Generator;
///
/// V4Generator::<StdRng>::with_seed(42)
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
impl<R: RngCore + SeedableRng> Iterator for V4Generator<R> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate(None))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RngCore + SeedableRng> std::iter::FusedIterator for V4Generator<R> {}
