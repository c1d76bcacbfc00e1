//! Probabilistic and deterministic primality testing.
//!
//! The test variants form a closed set, selected at the call site. The
//! probabilistic variants draw their witnesses from an injected
//! [`CryptoRngCore`], so runs are reproducible under a seeded rng and
//! independent calls never share state.

use num_bigint::{BigInt, RandBigInt};
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;

use crate::arithmetic::{euclidean_div, mod_exp};
use crate::errors::{Error, Result};

/// A primality-test variant, implementing the common `(n, rng) -> bool`
/// contract.
///
/// Only [`PrimalityTest::MillerRabin`] is adequate for cryptographic key
/// generation; the other variants exist as an exact reference for small
/// inputs and as a cheap filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimalityTest {
    /// Deterministic trial division by candidates of the form `6i ± 1` up to
    /// `sqrt(n)`. Exact, but `O(sqrt(n))`: usable for small `n` only.
    TrialDivision,

    /// The Fermat test: `rounds` random witnesses `a` with
    /// `a^(n-1) == 1 (mod n)` required of each.
    ///
    /// This is **not** a cryptographically sufficient test on its own:
    /// Carmichael numbers pass every round for every witness coprime to `n`.
    Fermat {
        /// Number of random witness rounds.
        rounds: usize,
    },

    /// The Miller-Rabin strong pseudoprime test with `rounds` random
    /// witnesses. A composite survives all rounds with probability at most
    /// `4^-rounds`.
    MillerRabin {
        /// Number of random witness rounds.
        rounds: usize,
    },
}

impl PrimalityTest {
    /// Selects a variant by the method names the original command-line
    /// surface used. `rounds` is ignored by `trial-division`.
    ///
    /// Fails with [`Error::UnsupportedMethod`] for an unknown name.
    pub fn from_name(name: &str, rounds: usize) -> Result<Self> {
        match name {
            "naive" | "trial-division" => Ok(PrimalityTest::TrialDivision),
            "fermat" => Ok(PrimalityTest::Fermat { rounds }),
            "miller-rabin" => Ok(PrimalityTest::MillerRabin { rounds }),
            _ => Err(Error::UnsupportedMethod),
        }
    }

    /// Tests `n` for primality.
    ///
    /// All variants share a pre-filter: `n < 2` (including negatives) is
    /// composite, 2 and 3 are prime, and multiples of 2 or 3 are composite.
    /// The rng is only drawn from by the probabilistic variants.
    pub fn is_prime<R: CryptoRngCore + ?Sized>(&self, n: &BigInt, rng: &mut R) -> Result<bool> {
        let two = BigInt::from(2u32);
        let three = BigInt::from(3u32);

        if n < &two {
            return Ok(false);
        }
        if n <= &three {
            return Ok(true);
        }
        if euclidean_div(n, &two)?.1.is_zero() || euclidean_div(n, &three)?.1.is_zero() {
            return Ok(false);
        }

        match self {
            PrimalityTest::TrialDivision => trial_division(n),
            PrimalityTest::Fermat { rounds } => fermat(n, *rounds, rng),
            PrimalityTest::MillerRabin { rounds } => miller_rabin(n, *rounds, rng),
        }
    }
}

/// Draws a witness uniformly from `[2, n-2]`, both bounds inclusive.
fn draw_witness<R: CryptoRngCore + ?Sized>(n: &BigInt, rng: &mut R) -> BigInt {
    rng.gen_bigint_range(&BigInt::from(2u32), &(n - 1u32))
}

fn trial_division(n: &BigInt) -> Result<bool> {
    // Past 2 and 3, every prime is of the form 6i ± 1.
    let mut i = BigInt::from(5u32);
    while &i * &i <= *n {
        if euclidean_div(n, &i)?.1.is_zero() || euclidean_div(n, &(&i + 2u32))?.1.is_zero() {
            return Ok(false);
        }
        i += 6u32;
    }
    Ok(true)
}

fn fermat<R: CryptoRngCore + ?Sized>(n: &BigInt, rounds: usize, rng: &mut R) -> Result<bool> {
    let nm1 = n - 1u32;
    for _ in 0..rounds {
        let a = draw_witness(n, rng);
        if !mod_exp(&a, &nm1, n)?.is_one() {
            return Ok(false);
        }
    }
    Ok(true)
}

fn miller_rabin<R: CryptoRngCore + ?Sized>(n: &BigInt, rounds: usize, rng: &mut R) -> Result<bool> {
    let two = BigInt::from(2u32);
    let nm1 = n - 1u32;

    // n-1 = d * 2^r with d odd, by repeated halving.
    let mut d = nm1.clone();
    let mut r = 0usize;
    loop {
        let (q, rem) = euclidean_div(&d, &two)?;
        if !rem.is_zero() {
            break;
        }
        d = q;
        r += 1;
    }

    'witness: for _ in 0..rounds {
        let a = draw_witness(n, rng);
        let mut x = mod_exp(&a, &d, n)?;
        if x.is_one() || x == nm1 {
            continue;
        }
        for _ in 1..r {
            x = euclidean_div(&(&x * &x), n)?.1;
            if x == nm1 {
                continue 'witness;
            }
            if x.is_one() {
                // A nontrivial square root of 1 exists, so n is composite.
                return Ok(false);
            }
        }
        return Ok(false);
    }
    Ok(true)
}
