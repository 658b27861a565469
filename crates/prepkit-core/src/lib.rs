//! Prepkit Core - Headless library of data preprocessing operations.
//!
//! The operations are grouped the same way the `prepkit` CLI groups its
//! commands:
//!
//! - [`cleaning`]: dropping or filling missing values
//! - [`numeric`]: scaling, clipping, integer conversion, log transform
//! - [`text`]: tokenization, punctuation and stopword removal
//! - [`structure`]: shuffling, flattening, deduplication
//!
//! Every operation is a pure function that borrows its input and returns a
//! new collection.
//!
//! # Example
//!
//! ```
//! use prepkit_core::{clean_values, minmax_normalize, Value};
//!
//! let raw = vec![Value::Int(3), Value::Null, Value::from(""), Value::Int(5)];
//! let cleaned = clean_values(&raw);
//! assert_eq!(cleaned.len(), 2);
//!
//! let scaled = minmax_normalize(&[3.0, 5.0], 0.0, 1.0)?;
//! assert_eq!(scaled, vec![0.0, 1.0]);
//! # Ok::<(), prepkit_core::PrepError>(())
//! ```

pub mod cleaning;
pub mod config;
pub mod error;
pub mod numeric;
pub mod structure;
pub mod text;
pub mod value;

// Re-export commonly used types
pub use cleaning::{clean_values, fill_values};
pub use config::{CleaningConfig, NumericConfig, OutputConfig, TextConfig};
pub use error::{PrepError, Result};
pub use numeric::{clip_values, log_transform, lst_to_ints, minmax_normalize, z_score_standardize};
pub use structure::{flatten_values, lst_flatten, lst_shuffle, remove_duplicates};
pub use text::{clean_stop_words, clean_text, parse_stopwords, special_tokenization};
pub use value::Value;
