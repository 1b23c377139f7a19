//! Name-based UUIDv3 and UUIDv5 functionality

use md5::{Digest, Md5};
use sha1_smol::Sha1;

use crate::{is_valid, Uuid, UuidGenerationError};

/// The content hash that combines a namespace and a name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum HashAlgorithm {
    /// MD5, used by UUIDv3.
    Md5,
    /// SHA-1, used by UUIDv5. Only the leading 16 bytes of the 20-byte digest are kept.
    Sha1,
}

impl HashAlgorithm {
    /// Hashes `namespace` followed by `name` and returns the leading 16 digest bytes.
    fn digest(self, namespace: &Uuid, name: &[u8]) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        match self {
            Self::Md5 => {
                let mut hasher = Md5::new();
                hasher.update(namespace.as_bytes());
                hasher.update(name);
                bytes.copy_from_slice(&hasher.finalize());
            }
            Self::Sha1 => {
                let mut hasher = Sha1::new();
                hasher.update(namespace.as_bytes());
                hasher.update(name);
                bytes.copy_from_slice(&hasher.digest().bytes()[..16]);
            }
        }
        bytes
    }
}

/// Generates a name-based UUIDv3 (MD5) string.
///
/// Returns `None` if `namespace` does not pass [`is_valid`]; an unusable namespace is a normal
/// negative result, not an error.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid_forge::v3("6ba7b810-9dad-11d1-80b4-00c04fd430c8", "example.com");
/// assert_eq!(uuid.as_deref(), Some("9073926b-929f-31c2-abc9-fad77ae3e8eb"));
///
/// assert_eq!(uuid_forge::v3("garbage", "example.com"), None);
/// ```
pub fn v3(namespace: &str, name: &str) -> Option<String> {
    parse_namespace(namespace).map(|ns| derive(&ns, name, HashAlgorithm::Md5, 3).to_string())
}

/// Generates a name-based UUIDv5 (SHA-1) string.
///
/// Returns `None` if `namespace` does not pass [`is_valid`].
///
/// # Examples
///
/// ```rust
/// let uuid = uuid_forge::v5("6ba7b810-9dad-11d1-80b4-00c04fd430c8", "example.com");
/// assert_eq!(uuid.as_deref(), Some("cfbff0d1-9375-5685-968c-48ce8b15ae17"));
/// ```
pub fn v5(namespace: &str, name: &str) -> Option<String> {
    parse_namespace(namespace).map(|ns| derive(&ns, name, HashAlgorithm::Sha1, 5).to_string())
}

/// Generates a name-based UUID string with an explicit hash algorithm and version number.
///
/// This is the low-level primitive behind [`v3`] and [`v5`]. The namespace is checked first, so an
/// invalid namespace yields `Ok(None)` whatever the version. A `version` other than 3 or 5 then
/// fails with [`UuidGenerationError::InvalidVersion`].
///
/// # Examples
///
/// ```rust
/// use uuid_forge::namespace::{with_namespace, HashAlgorithm};
///
/// let ns = "00000000-0000-0000-0000-000000000000";
/// assert!(with_namespace(ns, "test", HashAlgorithm::Sha1, 5)?.is_some());
///
/// let err = with_namespace(ns, "test", HashAlgorithm::Sha1, 6).unwrap_err();
/// assert_eq!(err.to_string(), "Version 6 is not a valid UUID version.");
/// # Ok::<(), uuid_forge::UuidGenerationError>(())
/// ```
pub fn with_namespace(
    namespace: &str,
    name: &str,
    algorithm: HashAlgorithm,
    version: u8,
) -> Result<Option<String>, UuidGenerationError> {
    let Some(ns) = parse_namespace(namespace) else {
        return Ok(None);
    };
    match version {
        3 | 5 => Ok(Some(derive(&ns, name, algorithm, version).to_string())),
        _ => Err(UuidGenerationError::InvalidVersion(version)),
    }
}

/// Reconstructs the binary form of a namespace, or returns `None` if it is not a textual UUID.
fn parse_namespace(namespace: &str) -> Option<Uuid> {
    if !is_valid(namespace) {
        tracing::debug!(namespace, "rejected namespace that is not a valid UUID");
        return None;
    }
    namespace.parse().ok()
}

/// Hashes the namespace and name, then forces the version and variant bits on the digest.
fn derive(namespace: &Uuid, name: &str, algorithm: HashAlgorithm, version: u8) -> Uuid {
    Uuid::from(algorithm.digest(namespace, name.as_bytes())).with_version(version)
}
