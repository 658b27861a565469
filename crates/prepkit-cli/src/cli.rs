//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use prepkit_core::{CleaningConfig, NumericConfig, Value};

#[derive(Parser, Debug)]
#[command(name = "prepkit")]
#[command(about = "A simple CLI application for data preprocessing tasks")]
#[command(version)]
pub struct Cli {
    /// How results are written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub group: Group,
}

/// Result rendering on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `<Label>: <payload>`
    Text,
    /// The bare JSON value
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Group {
    /// Data cleaning operations.
    #[command(subcommand)]
    Cleaning(CleaningCommand),
    /// Numeric data operations.
    #[command(subcommand)]
    Numeric(NumericCommand),
    /// Text data operations.
    #[command(subcommand)]
    Text(TextCommand),
    /// Structure data operations.
    #[command(subcommand)]
    Struct(StructCommand),
}

#[derive(Subcommand, Debug)]
pub enum CleaningCommand {
    /// Cleans the input data by removing empty values.
    Clean(TextData),
    /// Fills missing values in the input data with a specified fill value.
    Fill {
        #[command(flatten)]
        data: TextData,

        /// Value to fill missing entries with.
        #[arg(
            long = "fill_value",
            visible_alias = "fill-value",
            default_value_t = Value::Int(CleaningConfig::DEFAULT_FILL_VALUE),
            value_parser = parse_fill_value,
            allow_hyphen_values = true
        )]
        fill_value: Value,
    },
}

#[derive(Subcommand, Debug)]
pub enum NumericCommand {
    /// Normalizes the input data to a specified range.
    Normalize {
        #[command(flatten)]
        data: NumberData,

        /// Minimum value for normalization.
        #[arg(
            long = "min_value",
            visible_alias = "min-value",
            default_value_t = NumericConfig::DEFAULT_NORMALIZE_MIN,
            allow_negative_numbers = true
        )]
        min_value: f64,

        /// Maximum value for normalization.
        #[arg(
            long = "max_value",
            visible_alias = "max-value",
            default_value_t = NumericConfig::DEFAULT_NORMALIZE_MAX,
            allow_negative_numbers = true
        )]
        max_value: f64,
    },
    /// Standardizes the input data to have a mean of 0 and standard deviation of 1.
    Standardize(NumberData),
    /// Clips the input data to a specified range.
    Clip {
        #[command(flatten)]
        data: NumberData,

        /// Lower threshold for clipping.
        #[arg(
            long = "min_threshold",
            visible_alias = "min-threshold",
            default_value_t = NumericConfig::DEFAULT_CLIP_MIN,
            allow_negative_numbers = true
        )]
        min_threshold: f64,

        /// Upper threshold for clipping.
        #[arg(
            long = "max_threshold",
            visible_alias = "max-threshold",
            default_value_t = NumericConfig::DEFAULT_CLIP_MAX,
            allow_negative_numbers = true
        )]
        max_threshold: f64,
    },
    /// Converts the input data to integers.
    ToInt(TextData),
    /// Applies logarithmic scaling to the input data.
    LogScale(NumberData),
}

#[derive(Subcommand, Debug)]
pub enum TextCommand {
    /// Tokenizes the input text data.
    Tokenize(TextData),
    /// Cleans punctuation from the input text data.
    CleanPunctuation(TextData),
    /// Cleans stopwords from the input text data.
    CleanStopwords {
        #[command(flatten)]
        data: TextData,

        /// Comma-separated list of stopwords to remove.
        #[arg(long, default_value = "")]
        stopwords: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum StructCommand {
    /// Shuffles the input structured data.
    Shuffle {
        #[command(flatten)]
        data: TextData,

        /// Random seed for shuffling.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Flattens the input nested structured data (each item a list literal).
    Flatten(TextData),
    /// Deduplicates the input structured data.
    Deduplicate(TextData),
}

/// Positional arguments taken verbatim as strings.
///
/// Items starting with `-` must follow a `--` separator.
#[derive(Args, Debug)]
pub struct TextData {
    #[arg(value_name = "DATA")]
    pub data: Vec<String>,
}

/// Positional arguments parsed as floating point numbers.
#[derive(Args, Debug)]
pub struct NumberData {
    #[arg(value_name = "DATA", allow_negative_numbers = true)]
    pub data: Vec<f64>,
}

fn parse_fill_value(token: &str) -> Result<Value, String> {
    Ok(Value::from_token(token))
}
