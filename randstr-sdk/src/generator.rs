use rand::{CryptoRng, Rng, TryRngCore, rngs::OsRng};

use crate::alphabet::Alphabet;
use crate::error::RandstrError;

/// Checks a requested length and converts it to a character count.
pub fn validate_length(length: i64) -> Result<usize, RandstrError> {
    if length < 1 {
        return Err(RandstrError::InvalidArgument(
            "length must be greater than 0".into(),
        ));
    }

    usize::try_from(length).map_err(|_| {
        RandstrError::InvalidArgument(format!("length {length} exceeds the platform limit"))
    })
}

/// Generates `length` characters of [`crate::ALPHABET`] from the operating
/// system's random source.
///
/// # Panics
///
/// Panics if the OS random source fails. There is no fallback to a weaker
/// generator.
pub fn generate(length: i64) -> Result<String, RandstrError> {
    generate_with(&mut OsRng.unwrap_err(), length)
}

/// Like [`generate`], drawing from `rng` instead of the OS source.
pub fn generate_with<R: CryptoRng + ?Sized>(
    rng: &mut R,
    length: i64,
) -> Result<String, RandstrError> {
    let length = validate_length(length)?;

    Ok(rng
        .sample_iter::<char, _>(Alphabet)
        .take(length)
        .collect())
}
