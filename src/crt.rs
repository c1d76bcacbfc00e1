//! Chinese Remainder Theorem reconstruction.

use alloc::vec::Vec;

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::arithmetic::{euclidean_div, gcd, mod_inverse};
use crate::errors::{Error, Result};

/// A validated system of simultaneous congruences `x == r[i] (mod m[i])`.
///
/// Validation happens once, at construction: the sequences must be non-empty
/// and of equal length, every modulus strictly positive, and the moduli
/// pairwise coprime. [`ModulusSystem::solve`] can then reconstruct the unique
/// solution without re-checking.
///
/// ```
/// use num_bigint::BigInt;
/// use textbook_rsa::crt::ModulusSystem;
///
/// let moduli = vec![BigInt::from(3), BigInt::from(4), BigInt::from(5)];
/// let remainders = vec![BigInt::from(2), BigInt::from(3), BigInt::from(1)];
/// let system = ModulusSystem::new(moduli, remainders).unwrap();
/// assert_eq!(system.solve().unwrap(), BigInt::from(11));
/// ```
#[derive(Debug, Clone)]
pub struct ModulusSystem {
    moduli: Vec<BigInt>,
    remainders: Vec<BigInt>,
}

impl ModulusSystem {
    /// Builds a congruence system, validating it eagerly.
    ///
    /// Fails with [`Error::LengthMismatch`] if the sequences differ in
    /// length, [`Error::EmptyInput`] if they are empty,
    /// [`Error::NonPositive`] if any modulus is zero or negative, and
    /// [`Error::InvalidModuli`] if any two moduli share a factor. The
    /// coprimality check is O(k²) gcd calls, which is fine for the intended
    /// workload: RSA decryption always reconstructs from exactly two moduli.
    pub fn new(moduli: Vec<BigInt>, remainders: Vec<BigInt>) -> Result<Self> {
        if moduli.len() != remainders.len() {
            return Err(Error::LengthMismatch);
        }
        if moduli.is_empty() {
            return Err(Error::EmptyInput);
        }
        for m in &moduli {
            if !m.is_positive() {
                return Err(Error::NonPositive);
            }
        }
        for (i, mi) in moduli.iter().enumerate() {
            for mj in moduli.iter().skip(i + 1) {
                if !gcd(mi, mj)?.is_one() {
                    return Err(Error::InvalidModuli);
                }
            }
        }

        Ok(ModulusSystem { moduli, remainders })
    }

    /// The validated moduli.
    pub fn moduli(&self) -> &[BigInt] {
        &self.moduli
    }

    /// The remainders, parallel to [`ModulusSystem::moduli`].
    pub fn remainders(&self) -> &[BigInt] {
        &self.remainders
    }

    /// Reconstructs the unique `x` in `[0, M)`, `M` the product of the
    /// moduli, with `x == remainders[i] (mod moduli[i])` for every `i`.
    ///
    /// For each modulus the cofactor `Mi = M / moduli[i]` is inverted modulo
    /// `moduli[i]` and the terms `remainders[i] * Mi * Mi^-1` are summed,
    /// then reduced modulo `M`.
    pub fn solve(&self) -> Result<BigInt> {
        let m = self
            .moduli
            .iter()
            .fold(BigInt::one(), |product, mi| product * mi);

        let mut x = BigInt::zero();
        for (mi, ri) in self.moduli.iter().zip(&self.remainders) {
            let (cofactor, _) = euclidean_div(&m, mi)?;
            let inv = mod_inverse(&cofactor, mi)?;
            x += ri * &cofactor * &inv;
        }

        let (_, x) = euclidean_div(&x, &m)?;
        Ok(x)
    }
}
