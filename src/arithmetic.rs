//! Modular arithmetic over arbitrary-precision integers.
//!
//! Everything above this module (polynomial sharing, ElGamal, threshold
//! decryption) reduces to the three operations defined here: modular
//! exponentiation, modular inversion, and uniform random sampling from a
//! range.
//!
//! # Warning
//!
//! These operations are not constant-time. [`random_in_range`] rejects and
//! redraws until the sample falls inside the range, so the number of draws
//! leaks (an accepted, bounded-in-expectation timing channel); secret
//! exponents additionally influence the multiply schedule of [`mod_pow`].

use crate::Error;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use rand::{CryptoRng, Rng};

/// Computes `base^exponent mod modulus` by square-and-multiply.
///
/// The result is always in `[0, modulus - 1]`. Negative exponents are not
/// representable; callers needing `base^-e` must invert with
/// [`mod_inverse`] first.
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    assert!(!modulus.is_zero(), "modulus must be positive");
    if modulus.is_one() {
        return BigUint::zero();
    }
    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exponent = exponent.clone();
    while !exponent.is_zero() {
        if exponent.bit(0) {
            result = result * &base % modulus;
        }
        exponent >>= 1;
        base = &base * &base % modulus;
    }
    result
}

/// Computes the multiplicative inverse of `a mod modulus` with the extended
/// Euclidean algorithm, normalized into `[0, modulus - 1]`.
///
/// Returns [`Error::NoInverse`] when `gcd(a, modulus) != 1`. With a prime
/// modulus and a nonzero residue this is unreachable, so a surfaced
/// [`Error::NoInverse`] signals a broken invariant upstream (e.g. a modulus
/// that is not actually prime) and must not be swallowed.
pub fn mod_inverse(a: &BigUint, modulus: &BigUint) -> Result<BigUint, Error> {
    let mut old_r = BigInt::from(a.clone());
    let mut r = BigInt::from(modulus.clone());
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();
    while !r.is_zero() {
        let quotient = &old_r / &r;
        let next_r = &old_r - &quotient * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = &old_s - &quotient * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }
    if !old_r.is_one() {
        return Err(Error::NoInverse);
    }
    // The Bezout coefficient may be negative; shift it into the field.
    let modulus = BigInt::from(modulus.clone());
    let inverse = ((old_s % &modulus) + &modulus) % &modulus;
    Ok(inverse
        .to_biguint()
        .expect("Impossible: normalized inverse is negative"))
}

/// Samples a uniformly distributed integer from the half-open range
/// `[min, max)` using the provided cryptographically secure RNG.
///
/// Sampling draws `(max - min).bits()` random bits and rejects any draw that
/// lands at or above the range width, so the distribution carries no modulo
/// bias. Each draw succeeds with probability at least 1/2.
///
/// # Panics
///
/// Panics if `min >= max`.
pub fn random_in_range<R: Rng + CryptoRng>(rng: &mut R, min: &BigUint, max: &BigUint) -> BigUint {
    assert!(min < max, "empty range");
    let range = max - min;
    let bits = range.bits();
    loop {
        let candidate = random_bits(rng, bits);
        if candidate < range {
            return min + candidate;
        }
    }
}

/// Draws a uniform integer of at most `bits` bits.
fn random_bits<R: Rng + CryptoRng>(rng: &mut R, bits: u64) -> BigUint {
    let bytes = bits.div_ceil(8) as usize;
    let mut buf = vec![0u8; bytes];
    rng.fill_bytes(&mut buf);
    // Mask off the high bits beyond the requested width.
    let excess = (bytes as u64 * 8 - bits) as u32;
    if excess > 0 {
        buf[0] &= 0xff >> excess;
    }
    BigUint::from_bytes_be(&buf)
}
