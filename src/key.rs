//! RSA key material.
//!
//! Keys are produced by an external key generator and only consumed here:
//! once constructed they are immutable, and every RSA operation borrows them.
//! Private material is zeroized on drop.

use num_bigint::BigInt;
use zeroize::Zeroize;

use crate::arithmetic::{euclidean_div, mod_inverse};
use crate::errors::Result;
use crate::rsa;

/// The public half of an RSA key: modulus `n` and public exponent `e`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    n: BigInt,
    e: BigInt,
}

impl RsaPublicKey {
    /// Builds a public key from its components.
    pub fn new(n: BigInt, e: BigInt) -> Self {
        RsaPublicKey { n, e }
    }

    /// Returns the modulus of the key.
    pub fn n(&self) -> &BigInt {
        &self.n
    }

    /// Returns the public exponent of the key.
    pub fn e(&self) -> &BigInt {
        &self.e
    }

    /// Encrypts the representative `m`, which must lie in `[0, n)`.
    pub fn encrypt(&self, m: &BigInt) -> Result<BigInt> {
        rsa::encrypt(m, &self.e, &self.n)
    }
}

/// The private half of an RSA key.
///
/// Comes in two forms, mirroring what the key generator hands over: the
/// direct form holding the private exponent, or the CRT form holding the
/// factorization with the exponent pre-reduced modulo `p-1` and `q-1`. The
/// CRT form may carry a precomputed `q^-1 mod p`, which lets decryption skip
/// the general reconstruction in favor of a single Garner step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RsaPrivateKey {
    /// Direct form: modulus and private exponent.
    Direct {
        /// Modulus `n`.
        n: BigInt,
        /// Private exponent `d`.
        d: BigInt,
    },
    /// CRT form: prime factors and reduced exponents.
    Crt {
        /// First prime factor of `n`.
        p: BigInt,
        /// Second prime factor of `n`.
        q: BigInt,
        /// `d mod (p-1)`.
        dp: BigInt,
        /// `d mod (q-1)`.
        dq: BigInt,
        /// Precomputed `q^-1 mod p`, if available.
        qinv: Option<BigInt>,
    },
}

impl RsaPrivateKey {
    /// Builds a direct-form key from the modulus and private exponent.
    pub fn from_exponent(n: BigInt, d: BigInt) -> Self {
        RsaPrivateKey::Direct { n, d }
    }

    /// Builds a CRT-form key from the factorization and the private
    /// exponent, precomputing `dp`, `dq` and `qinv`.
    pub fn from_factors(p: BigInt, q: BigInt, d: &BigInt) -> Result<Self> {
        let pm1 = &p - 1u32;
        let qm1 = &q - 1u32;
        let (_, dp) = euclidean_div(d, &pm1)?;
        let (_, dq) = euclidean_div(d, &qm1)?;
        let qinv = mod_inverse(&q, &p)?;

        Ok(RsaPrivateKey::Crt {
            p,
            q,
            dp,
            dq,
            qinv: Some(qinv),
        })
    }

    /// Returns the modulus, computing `p*q` for the CRT form.
    pub fn n(&self) -> BigInt {
        match self {
            RsaPrivateKey::Direct { n, .. } => n.clone(),
            RsaPrivateKey::Crt { p, q, .. } => p * q,
        }
    }

    /// Decrypts the representative `c`, which must lie in `[0, n)`.
    ///
    /// Dispatches to direct exponentiation or to the CRT path depending on
    /// the key form.
    pub fn decrypt(&self, c: &BigInt) -> Result<BigInt> {
        match self {
            RsaPrivateKey::Direct { n, d } => rsa::decrypt(c, n, d),
            RsaPrivateKey::Crt { p, q, dp, dq, qinv } => {
                rsa::decrypt_crt(c, p, q, dp, dq, qinv.as_ref(), None)
            }
        }
    }
}

impl Zeroize for RsaPrivateKey {
    fn zeroize(&mut self) {
        match self {
            RsaPrivateKey::Direct { n, d } => {
                n.zeroize();
                d.zeroize();
            }
            RsaPrivateKey::Crt { p, q, dp, dq, qinv } => {
                p.zeroize();
                q.zeroize();
                dp.zeroize();
                dq.zeroize();
                if let Some(qinv) = qinv {
                    qinv.zeroize();
                }
            }
        }
    }
}

impl Drop for RsaPrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}
