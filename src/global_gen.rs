//! Process-wide default generator and its entry point function.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global generator, creating one if none exists.
///
/// A poisoned lock is recovered because the generator state is consistent between calls.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .unwrap_or_else(sync::PoisonError::into_inner)
}

/// Generates a UUIDv4 string with the process-wide generator.
///
/// If `seed` is a non-zero value, the global generator is reseeded with it before drawing, which
/// makes two calls with the same seed return the same string. The reseed and the draws happen
/// under one lock, so concurrent callers never interleave with a seeded call. `None` and `Some(0)`
/// draw from the current state.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid_forge::v4(None);
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
///
/// assert_eq!(uuid_forge::v4(Some(19900601)), uuid_forge::v4(Some(19900601)));
/// ```
pub fn v4(seed: Option<u64>) -> String {
    lock_global_gen().get_mut().generate(seed)
}

mod inner {
    use rand_chacha::ChaCha12Rng;

    use crate::V4Generator;

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: V4Generator<ChaCha12Rng>,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator: V4Generator::default(),
            }
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner [`V4Generator`] instance, reseting the
        /// generator state on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut V4Generator<ChaCha12Rng> {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                *self = Default::default();
            }
            &mut self.generator
        }
    }
}
