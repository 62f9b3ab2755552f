mod alphabet;
mod error;
mod generator;

pub use crate::alphabet::{ALPHABET, Alphabet, contains};
pub use crate::error::RandstrError;
pub use crate::generator::{generate, generate_with, validate_length};
