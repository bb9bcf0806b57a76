//! Single-party ElGamal encryption over an FFDHE group.
//!
//! Messages are encoded directly as field elements, which keeps the scheme
//! multiplicatively homomorphic: the product of two ciphertexts decrypts to
//! the product of the two plaintexts. Direct encoding is only suitable for
//! small numeric values (tallies, scores); it is not semantically secure for
//! general payloads and performs no padding.

use crate::{
    arithmetic::{mod_inverse, mod_pow, random_in_range},
    group::Group,
    Error,
};
use num_bigint::BigUint;
use num_traits::One;
use rand::{CryptoRng, Rng};

/// An ElGamal key pair over some [Group].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypair {
    /// The private exponent, in `[2, prime - 2]`.
    pub private: BigUint,
    /// The public key, `generator^private mod prime`.
    pub public: BigUint,
}

impl Keypair {
    /// Generates a key pair using the provided RNG.
    pub fn generate<R: Rng + CryptoRng>(rng: &mut R, group: &Group) -> Self {
        let private = random_in_range(rng, &BigUint::from(2u32), &(&group.prime - 1u32));
        let public = mod_pow(&group.generator, &private, &group.prime);
        Self { private, public }
    }
}

/// A full single-party parameter set: the group and a fresh key pair.
#[derive(Debug, Clone)]
pub struct Parameters {
    /// The FFDHE group the keys live in.
    pub group: &'static Group,
    /// The generated key pair.
    pub keypair: Keypair,
}

/// Looks up the FFDHE group for `bits` and generates a key pair in it.
///
/// An unsupported bit length fails with [`Error::UnsupportedBitLength`]
/// before any randomness is consumed.
pub fn generate_parameters<R: Rng + CryptoRng>(
    rng: &mut R,
    bits: u32,
) -> Result<Parameters, Error> {
    let group = Group::by_bits(bits)?;
    let keypair = Keypair::generate(rng, group);
    Ok(Parameters { group, keypair })
}

/// An ElGamal ciphertext.
///
/// Ciphertexts are immutable once produced; [`Ciphertext::mul`] returns a new
/// ciphertext and never mutates its operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    /// The ephemeral component, `generator^r mod prime`.
    pub c1: BigUint,
    /// The masked message, `public^r * message mod prime`.
    pub c2: BigUint,
}

impl Ciphertext {
    /// Homomorphically multiplies two ciphertexts.
    ///
    /// The result decrypts to the product (mod prime) of the two underlying
    /// plaintexts.
    pub fn mul(&self, other: &Self, prime: &BigUint) -> Self {
        Self {
            c1: &self.c1 * &other.c1 % prime,
            c2: &self.c2 * &other.c2 % prime,
        }
    }

    /// The multiplicative identity: the ciphertext of 1 with no randomness.
    ///
    /// Useful as the accumulator when folding a homomorphic product.
    pub fn one() -> Self {
        Self {
            c1: BigUint::one(),
            c2: BigUint::one(),
        }
    }

    /// Serializes both components as decimal strings.
    ///
    /// The mapping is exact (these are arbitrary-precision integers, not
    /// floats), so [`Ciphertext::from_decimal`] round-trips losslessly.
    pub fn to_decimal(&self) -> [String; 2] {
        [self.c1.to_str_radix(10), self.c2.to_str_radix(10)]
    }

    /// Parses a ciphertext from its decimal-string components.
    pub fn from_decimal(c1: &str, c2: &str) -> Result<Self, Error> {
        let parse = |s: &str| {
            BigUint::parse_bytes(s.as_bytes(), 10).ok_or(Error::MalformedCiphertext)
        };
        Ok(Self {
            c1: parse(c1)?,
            c2: parse(c2)?,
        })
    }
}

/// Encrypts `message` to `public` over `group`.
///
/// Fails with [`Error::MessageTooLarge`] when the message does not fit in
/// the field; the check happens before any randomness is drawn. A fresh
/// ephemeral exponent is sampled per call and never reused (reuse across two
/// ciphertexts would let an observer divide out the shared mask).
pub fn encrypt<R: Rng + CryptoRng>(
    rng: &mut R,
    message: &BigUint,
    group: &Group,
    public: &BigUint,
) -> Result<Ciphertext, Error> {
    if *message >= group.prime {
        return Err(Error::MessageTooLarge);
    }
    let r = random_in_range(rng, &BigUint::one(), &(&group.prime - 1u32));
    let c1 = mod_pow(&group.generator, &r, &group.prime);
    let c2 = mod_pow(public, &r, &group.prime) * message % &group.prime;
    Ok(Ciphertext { c1, c2 })
}

/// Decrypts a ciphertext with the matching private key.
///
/// Valid only when the original message was directly encoded (i.e. smaller
/// than the prime); larger inputs were already rejected by [`encrypt`].
pub fn decrypt(ciphertext: &Ciphertext, group: &Group, private: &BigUint) -> Result<BigUint, Error> {
    let ax = mod_pow(&ciphertext.c1, private, &group.prime);
    Ok(mod_inverse(&ax, &group.prime)? * &ciphertext.c2 % &group.prime)
}
