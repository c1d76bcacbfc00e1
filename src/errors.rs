//! Error types.

use core::fmt;

/// Alias for [`core::result::Result`] with the crate-wide [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Validation failures raised by the arithmetic, CRT, primality and RSA
/// operations.
///
/// Every variant is a deterministic rejection of bad input, detected before
/// any partial result is produced. None of them is transient, so nothing in
/// this crate retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Division with a zero divisor.
    DivisionByZero,

    /// Non-positive input to an operation that requires strictly positive
    /// operands.
    NonPositive,

    /// No modular inverse exists; the value and the modulus are not coprime.
    NotInvertible,

    /// The moduli and remainder sequences differ in length.
    LengthMismatch,

    /// An empty sequence where at least one element is required.
    EmptyInput,

    /// The CRT moduli are not pairwise coprime.
    InvalidModuli,

    /// The supplied modulus does not equal the product of the prime factors.
    KeyMismatch,

    /// Unknown primality-test method name.
    UnsupportedMethod,

    /// A message or ciphertext representative outside `[0, n)`.
    RepresentativeOutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DivisionByZero => write!(f, "division by zero"),
            Error::NonPositive => write!(f, "input must be strictly positive"),
            Error::NotInvertible => write!(f, "value is not invertible modulo the given modulus"),
            Error::LengthMismatch => write!(f, "moduli and remainders differ in length"),
            Error::EmptyInput => write!(f, "input sequence is empty"),
            Error::InvalidModuli => write!(f, "moduli are not pairwise coprime"),
            Error::KeyMismatch => write!(f, "modulus does not match the product of the primes"),
            Error::UnsupportedMethod => write!(f, "unsupported primality-test method"),
            Error::RepresentativeOutOfRange => {
                write!(f, "representative out of range for the modulus")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
