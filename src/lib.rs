//! Threshold ElGamal encryption over RFC 7919 finite-field groups.
//!
//! A trusted dealer splits a session's private key across `n` participants
//! with a secret-sharing polynomial. The decryption quorum's public shares
//! multiply into a single encryption key; anyone can encrypt to that key,
//! homomorphically multiply ciphertexts, and the quorum cooperatively
//! decrypts without the private key ever existing in one place.
//!
//! # Warning
//!
//! Messages are encoded directly as field elements, so this scheme suits
//! homomorphic aggregation of small numeric values (tallies, scores), not
//! general-purpose confidentiality: there is no padding, no hybrid
//! encryption, and no proof that a participant decrypted honestly. Combining
//! partial decryptions from a set other than the one the encryption key was
//! built from silently yields garbage rather than an error.
//!
//! # Example
//!
//! ```rust
//! use rand::rngs::OsRng;
//! use threshold_elgamal::{elgamal, threshold, Group};
//!
//! // Three participants, all of whom must cooperate to decrypt.
//! let group = Group::by_bits(2048).expect("standard group");
//! let shares = threshold::generate_shares(&mut OsRng, group, 3, 3).expect("valid threshold");
//!
//! // Combine the quorum's public shares into the group encryption key.
//! let key = threshold::combine_public_keys(shares.iter().map(|s| &s.public), &group.prime);
//!
//! // Anyone can encrypt to the group key.
//! let secret = 42u32.into();
//! let ciphertext = elgamal::encrypt(&mut OsRng, &secret, group, &key).expect("message fits");
//!
//! // Each participant contributes a partial decryption; their product
//! // unmasks the plaintext.
//! let partials: Vec<_> = shares
//!     .iter()
//!     .map(|s| threshold::partial_decrypt(&ciphertext, &s.private, &group.prime))
//!     .collect();
//! let combined = threshold::combine_partials(partials.iter(), &group.prime);
//! let recovered = threshold::threshold_decrypt(&ciphertext, &combined, &group.prime).unwrap();
//! assert_eq!(recovered, secret);
//! ```

use thiserror::Error;

pub mod arithmetic;
pub mod elgamal;
pub mod group;
pub mod poly;
pub mod threshold;

pub use elgamal::{Ciphertext, Keypair, Parameters};
pub use group::Group;
pub use threshold::Share;

/// Errors that can occur when working with threshold ElGamal.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// The requested group size is not one of the standardized FFDHE groups.
    #[error("unsupported bit length: {0}")]
    UnsupportedBitLength(u32),
    /// The message does not fit in the field (message >= prime).
    #[error("message too large for group")]
    MessageTooLarge,
    /// No modular inverse exists. Unreachable with a prime modulus and a
    /// nonzero residue; surfacing it means an invariant was violated
    /// upstream.
    #[error("no inverse")]
    NoInverse,
    /// The threshold must satisfy `2 <= threshold <= participants`.
    #[error("invalid threshold: {0} of {1}")]
    InvalidThreshold(u32, u32),
    /// A serialized ciphertext component was not a decimal integer.
    #[error("malformed ciphertext")]
    MalformedCiphertext,
}
