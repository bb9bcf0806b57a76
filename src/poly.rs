//! Polynomial secret sharing over a prime field.
//!
//! A secret-sharing session is backed by exactly one polynomial: the constant
//! term is the master secret and each participant's private share is the
//! polynomial evaluated at that participant's index. The polynomial is
//! sampled once per session by the dealer and must never be regenerated per
//! participant (independent per-participant polynomials would not share a
//! common secret).

use crate::arithmetic::{mod_pow, random_in_range};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, Rng};

/// A polynomial `f(x) = a_0 + a_1 x + ... + a_{t-1} x^{t-1}` with
/// coefficients in the prime field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poly(Vec<BigUint>);

/// Samples a new secret polynomial with `threshold` coefficients using the
/// provided RNG.
///
/// The constant term is the master secret, drawn from `[2, prime - 2]` to
/// exclude the degenerate exponents 0, 1, and `prime - 1`. The remaining
/// coefficients are drawn from `[0, prime - 2]`.
pub fn new_from<R: Rng + CryptoRng>(threshold: u32, prime: &BigUint, rng: &mut R) -> Poly {
    debug_assert!(threshold >= 1);
    let ceiling = prime - 1u32;
    let mut coeffs = Vec::with_capacity(threshold as usize);
    coeffs.push(random_in_range(rng, &BigUint::from(2u32), &ceiling));
    for _ in 1..threshold {
        coeffs.push(random_in_range(rng, &BigUint::zero(), &ceiling));
    }
    Poly(coeffs)
}

impl Poly {
    /// Creates a polynomial from the given coefficients.
    pub fn from(coeffs: Vec<BigUint>) -> Self {
        Self(coeffs)
    }

    /// Returns the master secret (the constant term).
    pub fn constant(&self) -> &BigUint {
        &self.0[0]
    }

    /// Returns the number of evaluations required to determine the
    /// polynomial, i.e. the threshold of the session.
    pub fn required(&self) -> u32 {
        self.0.len() as u32
    }

    /// Evaluates the polynomial at `x` by direct summation of
    /// `coeff[i] * x^i mod prime`.
    ///
    /// `x` is a participant index: small, positive, and public.
    pub fn evaluate(&self, x: u32, prime: &BigUint) -> BigUint {
        let x = BigUint::from(x);
        self.0
            .iter()
            .enumerate()
            .fold(BigUint::zero(), |acc, (i, coeff)| {
                (acc + coeff * mod_pow(&x, &BigUint::from(i), prime)) % prime
            })
    }

    /// Evaluates the polynomial at `index`, moving the evaluation point to
    /// `index + stride` (repeatedly, if needed) whenever the value is zero.
    ///
    /// A zero private share would produce the identity public share and a
    /// partial decryption that contributes nothing, so it must never be
    /// issued. Callers pass the session participant count as `stride`, which
    /// keeps every fallback point outside the range of real participant
    /// indices. The rule is deterministic: re-deriving a share for the same
    /// polynomial, index, and stride always lands on the same point.
    pub fn evaluate_nonzero(&self, index: u32, stride: u32, prime: &BigUint) -> BigUint {
        debug_assert!(index >= 1 && stride >= 1);
        let mut x = index;
        loop {
            let value = self.evaluate(x, prime);
            if !value.is_zero() {
                return value;
            }
            x += stride;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn prime() -> BigUint {
        BigUint::from(2147483647u32)
    }

    #[test]
    fn sampled_coefficient_count_matches_threshold() {
        let mut rng = StdRng::seed_from_u64(0);
        for threshold in [1u32, 2, 3, 7] {
            let poly = new_from(threshold, &prime(), &mut rng);
            assert_eq!(poly.required(), threshold);
        }
    }

    #[test]
    fn master_secret_excludes_degenerate_values() {
        let prime = BigUint::from(5u32);
        let mut rng = StdRng::seed_from_u64(1);
        // With prime = 5 the only admissible constant terms are 2 and 3.
        for _ in 0..64 {
            let poly = new_from(3, &prime, &mut rng);
            let secret = poly.constant();
            assert!(*secret >= BigUint::from(2u32) && *secret <= BigUint::from(3u32));
        }
    }

    #[test]
    fn evaluate_small_polynomial() {
        // f(x) = 3 + 2x + x^2 over GF(17).
        let prime = BigUint::from(17u32);
        let poly = Poly::from(vec![3u32.into(), 2u32.into(), 1u32.into()]);
        assert_eq!(poly.evaluate(0, &prime), 3u32.into());
        assert_eq!(poly.evaluate(1, &prime), 6u32.into());
        assert_eq!(poly.evaluate(2, &prime), 11u32.into());
        assert_eq!(poly.evaluate(5, &prime), 4u32.into()); // 38 mod 17
    }

    #[test]
    fn evaluate_reduces_modulo_prime() {
        let prime = BigUint::from(7u32);
        let poly = Poly::from(vec![6u32.into(), 6u32.into()]);
        // f(3) = 24, reduced to 3 mod 7.
        assert_eq!(poly.evaluate(3, &prime), 3u32.into());
    }

    #[test]
    fn zero_share_moves_to_stride_offset() {
        // f(x) = 12 + x over GF(13): f(1) = 0, so the share for index 1 in a
        // 3-participant session must come from f(1 + 3) = f(4) = 3.
        let prime = BigUint::from(13u32);
        let poly = Poly::from(vec![12u32.into(), 1u32.into()]);
        assert_eq!(poly.evaluate(1, &prime), BigUint::zero());
        assert_eq!(poly.evaluate_nonzero(1, 3, &prime), 3u32.into());
        // Deterministic: the same inputs always resolve to the same point.
        assert_eq!(poly.evaluate_nonzero(1, 3, &prime), 3u32.into());
        // Non-degenerate indices are untouched.
        assert_eq!(poly.evaluate_nonzero(2, 3, &prime), poly.evaluate(2, &prime));
    }
}
