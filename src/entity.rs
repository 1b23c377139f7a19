//! Entity-hash UUID functionality
//!
//! [`v4_hash`] derives a reproducible, UUIDv4-shaped string from an arbitrary value. The value is
//! normalized to a canonical byte string, folded into four 32-bit slots and packed into 16 bytes:
//!
//! - A canonical string of at most four bytes is zero-padded and read as one little-endian `u32`
//!   that fills all four slots.
//! - A longer one is cut into four chunks of `ceil(len / 4)` bytes each (the last chunks may be
//!   short or empty) and every slot receives the CRC-32 of its chunk.
//! - The slots are packed in little-endian order and the two nibbles of each packed byte are
//!   swapped before the usual high-nibble-first hex encoding, which amounts to encoding each byte
//!   low nibble first.
//!
//! Unlike the other generators, no version or variant bits are forced, so the output is shaped
//! like a UUID rather than being a conforming UUIDv4. The scheme is not cryptographic.

use std::fmt;

use crate::Uuid;

/// The CRC-32 (ISO-HDLC) checksum shared with zlib.
const CRC32: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);

/// A value normalized for [`v4_hash`].
///
/// The variant is decided once, when the value is converted into an `Entity`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Entity {
    /// A string, or the result of a custom string conversion.
    Text(String),
    /// The canonical structural serialization of a compound value.
    Structured(Vec<u8>),
    /// An absent or empty value, hashed as the empty string.
    ///
    /// Converting `""` or `"0"` from a string yields this variant, as does a top-level `false`,
    /// `0`, `0.0`, unit or `None` in [`Entity::serialize`].
    Empty,
}

impl Entity {
    /// Creates an entity from a value with a custom string conversion, using whatever its
    /// [`Display`](fmt::Display) implementation writes, case included.
    ///
    /// The written text is kept as is, so a conversion that writes `"0"` is hashed as that byte.
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Self::Text(value.to_string())
    }

    /// Creates an entity from any serializable value.
    ///
    /// Top-level strings, numbers and booleans take their textual form and then follow the string
    /// conversion, so falsy scalars (`false`, `0`, `0.0`, `""`, `"0"`) become [`Entity::Empty`]
    /// along with unit and `None`. Everything else, empty sequences included, is encoded with
    /// [`ser::to_vec`](crate::ser::to_vec).
    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    pub fn serialize<T: serde::Serialize + ?Sized>(value: &T) -> Result<Self, crate::ser::Error> {
        crate::ser::to_entity(value)
    }

    /// Returns the canonical byte string the entity is hashed from.
    pub fn canonical(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Structured(bytes) => bytes,
            Self::Empty => &[],
        }
    }
}

/// `""` and `"0"` are falsy and convert to [`Entity::Empty`].
impl From<String> for Entity {
    fn from(src: String) -> Self {
        if src.is_empty() || src == "0" {
            Self::Empty
        } else {
            Self::Text(src)
        }
    }
}

impl From<&String> for Entity {
    fn from(src: &String) -> Self {
        Self::from(src.as_str())
    }
}

impl From<&str> for Entity {
    fn from(src: &str) -> Self {
        Self::from(src.to_owned())
    }
}

impl<T: Into<Entity>> From<Option<T>> for Entity {
    fn from(src: Option<T>) -> Self {
        src.map_or(Self::Empty, Into::into)
    }
}

/// Generates a deterministic UUID-shaped string from an entity.
///
/// The same entity always yields the same string. `None` is returned only if the packed slots do
/// not fill exactly 16 bytes.
///
/// # Examples
///
/// ```rust
/// use uuid_forge::{v4_hash, Entity};
///
/// assert_eq!(
///     v4_hash("This is a fairly long string.").as_deref(),
///     Some("631b6d54-eed1-bed3-749f-422cebaed37b")
/// );
///
/// struct Shout(&'static str);
///
/// impl std::fmt::Display for Shout {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str(&self.0.to_uppercase())
///     }
/// }
///
/// assert_eq!(
///     v4_hash(Entity::display(&Shout("Here are some words"))).as_deref(),
///     Some("ccd233bd-a0a2-203d-bb71-52366e7ec7be")
/// );
/// ```
pub fn v4_hash(entity: impl Into<Entity>) -> Option<String> {
    let entity = entity.into();
    let slots = fold(entity.canonical());
    tracing::trace!(?slots, "folded entity into checksum slots");
    pack(&slots).map(|uuid| uuid.to_string())
}

/// Generates a deterministic UUID-shaped string from any serializable value.
///
/// This is [`v4_hash`] applied to [`Entity::serialize`].
///
/// # Examples
///
/// ```rust
/// let uuid = uuid_forge::v4_hash_serialize(&["This", "is", "an", "array"])?;
/// assert_eq!(uuid.as_deref(), Some("720d14db-d02f-1d79-adbf-e29e28a2ad72"));
/// # Ok::<(), uuid_forge::ser::Error>(())
/// ```
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub fn v4_hash_serialize<T: serde::Serialize + ?Sized>(
    value: &T,
) -> Result<Option<String>, crate::ser::Error> {
    Entity::serialize(value).map(v4_hash)
}

/// Folds a canonical byte string into four 32-bit slots.
fn fold(canonical: &[u8]) -> [u32; 4] {
    if canonical.len() <= 4 {
        let mut raw = [0u8; 4];
        raw[..canonical.len()].copy_from_slice(canonical);
        return [u32::from_le_bytes(raw); 4];
    }

    let mut chunks = canonical.chunks(canonical.len().div_ceil(4));
    let mut slots = [0u32; 4];
    for slot in slots.iter_mut() {
        *slot = CRC32.checksum(chunks.next().unwrap_or_default());
    }
    slots
}

/// Packs slots little-endian and swaps the nibbles of every byte.
fn pack(slots: &[u32]) -> Option<Uuid> {
    let packed: Vec<u8> = slots
        .iter()
        .flat_map(|slot| slot.to_le_bytes())
        .map(|byte| byte.rotate_left(4))
        .collect();
    <[u8; 16]>::try_from(packed).ok().map(Uuid::from)
}

#[cfg(test)]
mod tests {
    use super::{fold, pack, v4_hash, Entity};
    use crate::{is_valid, Uuid};
    use std::fmt;

    /// Upper-cases its value when converted to a string.
    struct Stringable {
        value: String,
    }

    impl Stringable {
        fn new(value: &str) -> Self {
            Self {
                value: value.to_owned(),
            }
        }
    }

    impl fmt::Display for Stringable {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.value.to_uppercase())
        }
    }

    /// Reproduces legacy vectors for strings and stringables
    #[test]
    fn reproduces_legacy_vectors_for_strings_and_stringables() {
        let cases = [
            (
                "631b6d54-eed1-bed3-749f-422cebaed37b",
                Entity::from("This is a fairly long string."),
            ),
            (
                "b2337860-ead8-c843-35ca-35787d3fe605",
                Entity::from("This is a different string."),
            ),
            (
                "ccd233bd-a0a2-203d-bb71-52366e7ec7be",
                Entity::display(&Stringable::new("Here are some words")),
            ),
            (
                "aeeabe2b-9c9b-692e-aad9-7f036e7ec7be",
                Entity::display(&Stringable::new("Different set of words")),
            ),
        ];

        let mut previous = Entity::Empty;
        for (expected, entity) in cases {
            let e = v4_hash(entity.clone());
            assert!(is_valid(e.as_deref().unwrap()));
            assert_eq!(e, v4_hash(entity.clone()));
            assert_ne!(e, v4_hash(previous));
            assert_eq!(e.as_deref(), Some(expected));
            previous = entity;
        }
    }

    /// Hashes empty and absent values as the nil UUID
    #[test]
    fn hashes_empty_and_absent_values_as_the_nil_uuid() {
        let nil = Some(Uuid::NIL.to_string());
        assert_eq!(v4_hash(""), nil);
        assert_eq!(v4_hash(String::new()), nil);
        assert_eq!(v4_hash(None::<&str>), nil);
        assert_eq!(v4_hash(Entity::Empty), nil);
        assert_eq!(Entity::from(""), Entity::Empty);
        assert_eq!(Entity::from(Some("abc")), Entity::Text("abc".to_owned()));
    }

    /// Treats the string zero as empty but keeps custom conversions verbatim
    #[test]
    fn treats_the_string_zero_as_empty_but_keeps_custom_conversions_verbatim() {
        let nil = Some(Uuid::NIL.to_string());
        assert_eq!(Entity::from("0"), Entity::Empty);
        assert_eq!(v4_hash("0"), nil);
        assert_eq!(v4_hash(String::from("0")), nil);

        assert_eq!(Entity::display(&0), Entity::Text("0".to_owned()));
        assert_eq!(
            v4_hash(Entity::display(&0)).as_deref(),
            Some("03000000-0300-0000-0300-000003000000")
        );
        assert_ne!(v4_hash("00"), nil);
        assert_ne!(v4_hash(" 0"), nil);
    }

    /// Uses raw bytes of short strings in every slot
    #[test]
    fn uses_raw_bytes_of_short_strings_in_every_slot() {
        assert_eq!(fold(b"abc"), [0x0063_6261; 4]);
        assert_eq!(fold(b"abcd"), [0x6463_6261; 4]);
        assert_eq!(
            v4_hash("abc").as_deref(),
            Some("16263600-1626-3600-1626-360016263600")
        );
    }

    /// Checksums four chunks of longer strings
    #[test]
    fn checksums_four_chunks_of_longer_strings() {
        const CRC32: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);
        assert_eq!(CRC32.checksum(b"123456789"), 0xcbf4_3926);

        assert_eq!(
            fold(b"abcdefghij"),
            [
                CRC32.checksum(b"abc"),
                CRC32.checksum(b"def"),
                CRC32.checksum(b"ghi"),
                CRC32.checksum(b"j"),
            ]
        );

        // the fourth chunk is empty, and the CRC-32 of nothing is zero
        assert_eq!(fold(b"abcdef")[3], 0);
        assert_eq!(
            v4_hash("abcdef").as_deref(),
            Some("d68438e9-adf8-6d54-0794-28df00000000")
        );
    }

    /// Encodes packed bytes low nibble first
    #[test]
    fn encodes_packed_bytes_low_nibble_first() {
        let e = pack(&[0x1234_5678, 0x9abc_def0, 0x0000_0001, 0xf000_0000]).unwrap();
        assert_eq!(e.to_string(), "87654321-0fed-cba9-1000-00000000000f");
        assert_eq!(pack(&[1, 2, 3]), None);
    }

    /// Differs between distinct entities
    #[test]
    fn differs_between_distinct_entities() {
        let inputs = ["hello", "hellp", "Hello", "hello world", "dlrow olleh"];
        let mut seen = std::collections::HashSet::new();
        for e in inputs {
            assert!(seen.insert(v4_hash(e)), "{e}");
        }
    }
}
