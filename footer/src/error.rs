//! Errors for the parts of the crate that can fail: loading a config file
//! and validating replacement content. Rendering itself never fails.

use std::path::PathBuf;

/// Failure while loading or validating footer content.
#[derive(Debug, thiserror::Error)]
pub enum FooterError {
    /// Config file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or does not match the content schema.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// File that was parsed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Two entries of one list share a rendering key.
    #[error("duplicate key {key:?} in {list}")]
    DuplicateKey {
        /// List name (`quick-links`, `customer-service`, `brands`, `socials`)
        list: &'static str,
        /// The repeated key
        key: String,
    },

    /// An entry has a blank label or target.
    #[error("entry {index} in {list} has an empty {field}")]
    EmptyField {
        /// List name
        list: &'static str,
        /// Position in the list
        index: usize,
        /// Field that was blank
        field: &'static str,
    },
}
