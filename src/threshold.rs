//! Dealer-issued threshold decryption.
//!
//! A trusted dealer samples one secret polynomial per session and hands each
//! participant the evaluation at that participant's index. The participants
//! that will act as the decryption quorum publish their public shares, which
//! multiply into a single group encryption key; each quorum member later
//! contributes `c1^share` for a ciphertext, and the product of those partial
//! decryptions unmasks the plaintext.
//!
//! The combination rule is a plain product in the exponent, with no Lagrange
//! coefficients: a ciphertext encrypted to the product of a set of public
//! shares is decrypted by the partial decryptions of exactly that set. The
//! threshold fixes the polynomial degree, but nothing here verifies that a
//! quorum is large enough or matches the encryption key. Combining a
//! different set does not fail; it silently yields an unrelated value.
//! Enforcing quorum membership is the caller's responsibility.
//!
//! # Warning
//!
//! A private share must never leave its owner. Only the derived
//! [`Share::public`] value and per-ciphertext partial decryptions are safe to
//! publish. Nothing in this module detects a participant that contributes a
//! malformed partial decryption; there are no proofs of correct partial
//! decryption.

use crate::{
    arithmetic::{mod_inverse, mod_pow},
    elgamal::Ciphertext,
    group::Group,
    poly::{self, Poly},
    Error,
};
use num_bigint::BigUint;
use num_traits::One;
use rand::{CryptoRng, Rng};
use rayon::prelude::*;

/// One participant's key share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    /// The participant's index, in `1..=n`.
    pub index: u32,
    /// The private share: the session polynomial evaluated at this
    /// participant's point. Never published.
    pub private: BigUint,
    /// The public share, `generator^private mod prime`.
    pub public: BigUint,
}

/// Generates `n` key shares with reconstruction threshold `t`.
///
/// Exactly one polynomial is sampled for the session and evaluated at the
/// indices `1..=n`; the master secret (its constant term) exists only inside
/// this function and is dropped without ever being held by any participant.
///
/// Fails with [`Error::InvalidThreshold`] unless `2 <= t <= n`.
pub fn generate_shares<R: Rng + CryptoRng>(
    rng: &mut R,
    group: &Group,
    n: u32,
    t: u32,
) -> Result<Vec<Share>, Error> {
    if t < 2 || t > n {
        return Err(Error::InvalidThreshold(t, n));
    }
    let polynomial = poly::new_from(t, &group.prime, rng);
    // Each share derivation is independent, so fan out across the pool.
    Ok((1..=n)
        .into_par_iter()
        .map(|index| derive_share(&polynomial, index, n, group))
        .collect())
}

/// Derives the key share for one participant from the session polynomial.
///
/// A zero evaluation at `index` falls back to `index + n` (see
/// [`Poly::evaluate_nonzero`]), so the private share is always nonzero and
/// the public share never the identity.
pub fn derive_share(polynomial: &Poly, index: u32, n: u32, group: &Group) -> Share {
    let private = polynomial.evaluate_nonzero(index, n, &group.prime);
    let public = mod_pow(&group.generator, &private, &group.prime);
    Share {
        index,
        private,
        public,
    }
}

/// Multiplies public shares into the group encryption key.
///
/// Multiplication is commutative, so any ordering of the same set yields the
/// same key. The key is a derived value: whenever the participating set
/// changes it is simply recomputed from the public shares.
pub fn combine_public_keys<'a, I>(publics: I, prime: &BigUint) -> BigUint
where
    I: IntoIterator<Item = &'a BigUint>,
{
    publics
        .into_iter()
        .fold(BigUint::one(), |acc, public| acc * public % prime)
}

/// Computes one participant's partial decryption of a ciphertext,
/// `c1^private mod prime`.
///
/// This derived value is safe to publish; the private share itself is not.
/// A partial decryption is meaningful only for the ciphertext it was derived
/// from.
pub fn partial_decrypt(ciphertext: &Ciphertext, private: &BigUint, prime: &BigUint) -> BigUint {
    mod_pow(&ciphertext.c1, private, prime)
}

/// Multiplies partial decryptions into the combined decryption factor.
///
/// Order-independent, like [`combine_public_keys`]. The partials must come
/// from the same participant set whose public shares formed the encryption
/// key.
pub fn combine_partials<'a, I>(partials: I, prime: &BigUint) -> BigUint
where
    I: IntoIterator<Item = &'a BigUint>,
{
    partials
        .into_iter()
        .fold(BigUint::one(), |acc, partial| acc * partial % prime)
}

/// Recovers the plaintext from a ciphertext and the combined decryption
/// factor: `c2 * combined^{-1} mod prime`.
pub fn threshold_decrypt(
    ciphertext: &Ciphertext,
    combined: &BigUint,
    prime: &BigUint,
) -> Result<BigUint, Error> {
    Ok(&ciphertext.c2 * mod_inverse(combined, prime)? % prime)
}
