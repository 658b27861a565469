//! Centralized configuration for prepkit.
//!
//! Default parameters for every operation live here so the library and the
//! CLI agree on them.

/// Defaults for missing-value handling.
pub struct CleaningConfig;

impl CleaningConfig {
    pub const DEFAULT_FILL_VALUE: i64 = 0;
}

/// Defaults for numeric scaling.
pub struct NumericConfig;

impl NumericConfig {
    pub const DEFAULT_NORMALIZE_MIN: f64 = 0.0;
    pub const DEFAULT_NORMALIZE_MAX: f64 = 1.0;
    pub const DEFAULT_CLIP_MIN: f64 = 0.0;
    pub const DEFAULT_CLIP_MAX: f64 = 1.0;
}

/// Text processing configuration.
pub struct TextConfig;

impl TextConfig {
    /// Separator for stopword lists given on the command line.
    pub const STOPWORD_SEPARATOR: char = ',';
    /// Separator used when several text arguments are joined into one input.
    pub const ARGUMENT_JOINER: &'static str = " ";
}

/// Output rendering configuration.
pub struct OutputConfig;

impl OutputConfig {
    pub const LABEL_SEPARATOR: &'static str = ": ";
    pub const DEFAULT_LOG_FILTER: &'static str = "warn";
}
