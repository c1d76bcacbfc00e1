#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_docs)]

//! Arbitrary-precision modular arithmetic and the textbook RSA transform
//! built on it.
//!
//! The arithmetic layer ([`arithmetic`]) provides Euclidean division with a
//! remainder in `[0, |b|)`, the iterative and extended Euclidean algorithms,
//! modular inversion and square-and-multiply modular exponentiation over
//! [`BigInt`]. On top of it sit Chinese Remainder Theorem reconstruction
//! ([`crt`]), trial-division/Fermat/Miller-Rabin primality testing
//! ([`primality`]) and the raw RSA transform ([`rsa`], [`key`]).
//!
//! # ⚠️ Security warning
//!
//! This crate implements *textbook* RSA: no padding is applied and none of
//! the arithmetic is constant-time. Padding, message codecs and key
//! generation are external collaborators; see their respective crates.
//!
//! # Example
//!
//! ```
//! use textbook_rsa::{BigInt, RsaPrivateKey, RsaPublicKey};
//!
//! // p=61, q=53: n=3233, e=17, d=2753.
//! let public_key = RsaPublicKey::new(BigInt::from(3233), BigInt::from(17));
//! let private_key =
//!     RsaPrivateKey::from_factors(BigInt::from(61), BigInt::from(53), &BigInt::from(2753))?;
//!
//! let c = public_key.encrypt(&BigInt::from(65))?;
//! assert_eq!(c, BigInt::from(2790));
//! assert_eq!(private_key.decrypt(&c)?, BigInt::from(65));
//! # Ok::<(), textbook_rsa::Error>(())
//! ```
//!
//! Probabilistic primality checks draw their witnesses from an injected rng,
//! so they are deterministic under a seeded one:
//!
//! ```
//! use rand_chacha::ChaCha8Rng;
//! use rand_core::SeedableRng;
//! use textbook_rsa::{BigInt, PrimalityTest};
//!
//! let mut rng = ChaCha8Rng::from_seed([0u8; 32]);
//! let test = PrimalityTest::MillerRabin { rounds: 20 };
//! assert!(test.is_prime(&BigInt::from(7919), &mut rng)?);
//! assert!(!test.is_prime(&BigInt::from(7917), &mut rng)?);
//! # Ok::<(), textbook_rsa::Error>(())
//! ```

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use num_bigint::BigInt;
pub use rand_core;

pub mod arithmetic;
pub mod crt;
pub mod errors;
pub mod key;
pub mod primality;
pub mod rsa;

pub use crate::{
    crt::ModulusSystem,
    errors::{Error, Result},
    key::{RsaPrivateKey, RsaPublicKey},
    primality::PrimalityTest,
};
