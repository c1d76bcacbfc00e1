//! Arbitrary-precision modular arithmetic primitives.
//!
//! Everything in this module operates on [`BigInt`] and reduces through
//! [`euclidean_div`], which keeps remainders in `[0, |b|)` for every sign
//! combination. These functions are the leaves the CRT, primality and RSA
//! layers are built from.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::errors::{Error, Result};

/// Quotient and Euclidean remainder for a nonzero divisor.
///
/// Native division truncates toward zero; a negative remainder is folded back
/// into `[0, |b|)` with a single corrective step.
fn euclid_qr(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    debug_assert!(!b.is_zero());

    let (mut q, mut r) = a.div_rem(b);
    if r.is_negative() {
        if b.is_negative() {
            r -= b;
            q += 1u32;
        } else {
            r += b;
            q -= 1u32;
        }
    }
    (q, r)
}

/// Euclidean division of `a` by `b`.
///
/// Returns `(q, r)` with `a = b*q + r` and `0 <= r < |b|`, for operands of any
/// sign. Fails with [`Error::DivisionByZero`] when `b` is zero.
///
/// ```
/// use num_bigint::BigInt;
/// use textbook_rsa::arithmetic::euclidean_div;
///
/// let (q, r) = euclidean_div(&BigInt::from(7), &BigInt::from(3)).unwrap();
/// assert_eq!((q, r), (BigInt::from(2), BigInt::from(1)));
/// ```
pub fn euclidean_div(a: &BigInt, b: &BigInt) -> Result<(BigInt, BigInt)> {
    if b.is_zero() {
        return Err(Error::DivisionByZero);
    }
    Ok(euclid_qr(a, b))
}

/// Greatest common divisor of two strictly positive integers, by the
/// iterative Euclidean remainder sequence.
///
/// Fails with [`Error::NonPositive`] if either input is zero or negative.
pub fn gcd(a: &BigInt, b: &BigInt) -> Result<BigInt> {
    if !a.is_positive() || !b.is_positive() {
        return Err(Error::NonPositive);
    }

    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let (_, r) = euclid_qr(&a, &b);
        a = b;
        b = r;
    }
    Ok(a)
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, u, v)` with `u*a + v*b = g = gcd(a, b)` and `g >= 0`. Inputs
/// may be zero or negative: `(0, b)` yields `(|b|, 0, sign(b))` and `(a, 0)`
/// yields `(|a|, sign(a), 0)`.
///
/// The coefficients may be negative. Callers that need the least non-negative
/// representative reduce them modulo the companion value, as
/// [`mod_inverse`] does.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let mut a = a.clone();
    let mut b = b.clone();

    // Coefficient pairs tracking a and b through the remainder sequence:
    // u0*a + v0*b = a_i and u1*a + v1*b = b_i hold on every iteration.
    let mut u0 = BigInt::one();
    let mut v0 = BigInt::zero();
    let mut u1 = BigInt::zero();
    let mut v1 = BigInt::one();

    while !b.is_zero() {
        let (q, r) = euclid_qr(&a, &b);
        a = b;
        b = r;

        let u2 = &u0 - &q * &u1;
        u0 = u1;
        u1 = u2;

        let v2 = &v0 - &q * &v1;
        v0 = v1;
        v1 = v2;
    }

    if a.is_negative() {
        (-a, -u0, -v0)
    } else {
        (a, u0, v0)
    }
}

/// Modular inverse of `a` modulo `n`.
///
/// Returns the unique `inv` in `[0, n)` with `a * inv == 1 (mod n)`, taken
/// from the `u` coefficient of [`extended_gcd`] and reduced via
/// [`euclidean_div`]. Fails with [`Error::NonPositive`] for a non-positive
/// modulus and [`Error::NotInvertible`] when `gcd(a, n) != 1`.
pub fn mod_inverse(a: &BigInt, n: &BigInt) -> Result<BigInt> {
    if !n.is_positive() {
        return Err(Error::NonPositive);
    }

    let (g, u, _) = extended_gcd(a, n);
    if !g.is_one() {
        return Err(Error::NotInvertible);
    }

    let (_, inv) = euclid_qr(&u, n);
    Ok(inv)
}

/// Modular exponentiation by binary square-and-multiply.
///
/// Returns `a^e mod n` in `[0, n)` for a positive modulus `n`. The base is
/// reduced up front, the exponent bits are scanned low to high, and every
/// multiply and square is reduced immediately, so the cost is `O(log e)`
/// modular multiplications on operands no wider than `n`.
///
/// `e = 0` yields `1 mod n` (which is 0 for `n = 1`). A negative exponent is
/// defined through the inverse: `mod_exp(a, e, n) =
/// mod_exp(mod_inverse(a, n)?, -e, n)`, so it fails with
/// [`Error::NotInvertible`] when `a` has no inverse modulo `n`.
pub fn mod_exp(a: &BigInt, e: &BigInt, n: &BigInt) -> Result<BigInt> {
    if !n.is_positive() {
        return Err(Error::NonPositive);
    }

    if e.is_negative() {
        let inv = mod_inverse(a, n)?;
        return mod_exp(&inv, &-e, n);
    }

    let (_, mut base) = euclid_qr(a, n);
    let (_, mut result) = euclid_qr(&BigInt::one(), n);

    let mut exp = e.clone();
    while exp.is_positive() {
        if exp.is_odd() {
            let (_, r) = euclid_qr(&(&result * &base), n);
            result = r;
        }
        exp >>= 1usize;
        if exp.is_positive() {
            let (_, sq) = euclid_qr(&(&base * &base), n);
            base = sq;
        }
    }

    Ok(result)
}
