/// Error raised when a name-based UUID is requested with an unsupported version number.
///
/// Only versions 3 and 5 are name-based. The public [`v3`](crate::v3) and [`v5`](crate::v5)
/// functions never produce this error; it surfaces through
/// [`with_namespace`](crate::namespace::with_namespace) only.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum UuidGenerationError {
    /// The requested version is neither 3 nor 5.
    #[error("Version {0} is not a valid UUID version.")]
    InvalidVersion(u8),
}
