//! Textbook RSA encryption and decryption.
//!
//! Raw modular-exponentiation transforms with no padding. Callers are
//! expected to apply a padding scheme externally before these operations see
//! the message; see the crate-level documentation.

use num_bigint::BigInt;
use num_traits::Signed;

use crate::arithmetic::{euclidean_div, mod_exp, mod_inverse};
use crate::crt::ModulusSystem;
use crate::errors::{Error, Result};

/// Rejects a message or ciphertext representative outside `[0, n)`.
fn check_representative(value: &BigInt, n: &BigInt) -> Result<()> {
    if value.is_negative() || value >= n {
        return Err(Error::RepresentativeOutOfRange);
    }
    Ok(())
}

/// RSA encryption of `m` under the public key `(n, e)`: `m^e mod n`.
///
/// `m` must already be a padded representative in `[0, n)`; no padding is
/// applied here.
pub fn encrypt(m: &BigInt, e: &BigInt, n: &BigInt) -> Result<BigInt> {
    check_representative(m, n)?;
    mod_exp(m, e, n)
}

/// Direct-form RSA decryption: `c^d mod n`.
pub fn decrypt(c: &BigInt, n: &BigInt, d: &BigInt) -> Result<BigInt> {
    check_representative(c, n)?;
    mod_exp(c, d, n)
}

/// CRT-accelerated RSA decryption from the factored private key.
///
/// Computes `m_p = c^dp mod p` and `m_q = c^dq mod q`, then recombines. When
/// a precomputed `qinv = q^-1 mod p` is supplied the recombination is the
/// single Garner step; otherwise the residues go through a two-modulus
/// [`ModulusSystem`] reconstruction.
///
/// If `n` is supplied it is validated against `p*q`, failing with
/// [`Error::KeyMismatch`] on disagreement.
pub fn decrypt_crt(
    c: &BigInt,
    p: &BigInt,
    q: &BigInt,
    dp: &BigInt,
    dq: &BigInt,
    qinv: Option<&BigInt>,
    n: Option<&BigInt>,
) -> Result<BigInt> {
    let pq = p * q;
    if let Some(n) = n {
        if *n != pq {
            return Err(Error::KeyMismatch);
        }
    }
    check_representative(c, &pq)?;

    let m_p = mod_exp(c, dp, p)?;
    let m_q = mod_exp(c, dq, q)?;

    match qinv {
        Some(qinv) => {
            // Garner: m = m_q + q * (qinv * (m_p - m_q) mod p).
            let (_, h) = euclidean_div(&(qinv * (&m_p - &m_q)), p)?;
            Ok(m_q + h * q)
        }
        None => {
            let system = ModulusSystem::new(vec![p.clone(), q.clone()], vec![m_p, m_q])?;
            system.solve()
        }
    }
}

/// CRT decryption with the private exponent derived on the fly.
///
/// For callers that hold the factorization and the public exponent but not
/// `d`: computes `phi = (p-1)*(q-1)` and `d = e^-1 mod phi`, reduces `d`
/// modulo `p-1` and `q-1`, and proceeds as [`decrypt_crt`] with `n`
/// validated. `e` must be passed explicitly; it cannot be recovered from the
/// remaining inputs.
pub fn decrypt_derived(c: &BigInt, n: &BigInt, e: &BigInt, p: &BigInt, q: &BigInt) -> Result<BigInt> {
    let pm1 = p - 1u32;
    let qm1 = q - 1u32;
    let phi = &pm1 * &qm1;

    let d = mod_inverse(e, &phi)?;
    let (_, dp) = euclidean_div(&d, &pm1)?;
    let (_, dq) = euclidean_div(&d, &qm1)?;

    decrypt_crt(c, p, q, &dp, &dq, None, Some(n))
}
