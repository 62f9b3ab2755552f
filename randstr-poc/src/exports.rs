use std::collections::HashMap;

use randstr_sdk::RandstrError;
use thiserror::Error;
use tracing::{debug, warn};

pub const RANDOM_STRING: &str = "randomString";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    /// Raised into the host as a plain `Error` with this message.
    #[error("Error: {0}")]
    Thrown(String),

    #[error("No export named {0}")]
    UnknownExport(String),
}

impl From<RandstrError> for HostError {
    fn from(err: RandstrError) -> Self {
        match err {
            RandstrError::InvalidArgument(msg) => HostError::Thrown(msg),
        }
    }
}

pub type Export = Box<dyn Fn(i64) -> Result<String, HostError> + Send + Sync>;

/// Functions made callable from the host, keyed by export name.
#[derive(Default)]
pub struct Exports {
    table: HashMap<String, Export>,
}

impl Exports {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<F>(&mut self, name: &str, export: F)
    where
        F: Fn(i64) -> Result<String, HostError> + Send + Sync + 'static,
    {
        self.table.insert(name.to_string(), Box::new(export));
    }

    pub fn call(&self, name: &str, arg: i64) -> Result<String, HostError> {
        let export = self
            .table
            .get(name)
            .ok_or_else(|| HostError::UnknownExport(name.to_string()))?;

        export(arg).inspect_err(|e| warn!(export = name, arg, "threw: {}", e))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }
}

pub fn random_string(length: i64) -> Result<String, HostError> {
    randstr_sdk::validate_length(length)?;

    let s = randstr_sdk::generate(length)?;
    debug!(length, "generated random string");
    Ok(s)
}

pub fn register(exports: &mut Exports) {
    exports.set(RANDOM_STRING, random_string);
}
