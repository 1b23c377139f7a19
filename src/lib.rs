//! Generation and validation of textual UUIDs
//!
//! ```rust
//! use uuid_forge::{is_valid, v3, v4, v4_hash, v5};
//!
//! let ns = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";
//! println!("{:?}", v3(ns, "example.com")); // Some("9073926b-929f-31c2-abc9-fad77ae3e8eb")
//! println!("{:?}", v5(ns, "example.com")); // Some("cfbff0d1-9375-5685-968c-48ce8b15ae17")
//! println!("{}", v4(None)); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", v4_hash("some entity")); // deterministic for the same input
//!
//! assert!(is_valid(&v4(None)));
//! ```
//!
//! # Generators
//!
//! - [`v3`] and [`v5`] derive a UUID from a namespace UUID and a name through MD5 and SHA-1,
//!   respectively. An invalid namespace yields `None`.
//! - [`v4`] draws a random UUID from a process-wide generator, optionally reseeding it first.
//!   [`V4Generator`] offers the same with a caller-owned random number generator.
//! - [`v4_hash`] folds an arbitrary [`Entity`] into a reproducible UUID-shaped string with a
//!   non-cryptographic checksum scheme.
//!
//! All of them produce hyphenated, lowercase, unbraced strings that pass [`is_valid`].
//!
//! # Field and bit layout
//!
//! The name-based and random generators carry the following tags, whatever the digest or random
//! bits in the remaining positions:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_low                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |       time_hi         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_seq         |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             node                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where the 4-bit `ver` field holds `0011` (v3), `0100` (v4) or `0101` (v5) and the 2-bit `var`
//! field holds `10`.
//!
//! # Crate features
//!
//! - `global_gen` (default): the process-wide generator behind [`v4`].
//! - `serde` (default): [`v4_hash_serialize`], the [`ser`] module and `serde` support for
//!   [`Uuid`].
//! - `uuid`: conversions between [`Uuid`] and `uuid::Uuid`.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{ParseError, Uuid, Variant};

mod error;
pub use error::UuidGenerationError;

mod validate;
pub use validate::{is_valid, LENGTH};

pub mod namespace;
pub use namespace::{v3, v5, HashAlgorithm};

mod v4;
pub use v4::V4Generator;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::v4;

mod entity;
#[cfg(feature = "serde")]
pub use entity::v4_hash_serialize;
pub use entity::{v4_hash, Entity};

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod ser;
