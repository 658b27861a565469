//! Command dispatch onto prepkit-core operations.

use crate::cli::{CleaningCommand, Group, NumericCommand, StructCommand, TextCommand, TextData};
use crate::output::Outcome;
use prepkit_core::{
    clean_stop_words, clean_text, clean_values, clip_values, fill_values, flatten_values,
    log_transform, lst_shuffle, lst_to_ints, minmax_normalize, parse_stopwords,
    remove_duplicates, special_tokenization, z_score_standardize, Result, TextConfig, Value,
};
use tracing::debug;

impl TextData {
    /// Arguments as text values; nothing is coerced.
    fn values(&self) -> Vec<Value> {
        self.data.iter().map(|s| Value::Text(s.clone())).collect()
    }

    /// All arguments joined into a single text input.
    fn joined(&self) -> String {
        self.data.join(TextConfig::ARGUMENT_JOINER)
    }
}

/// Run the selected command and return its labelled result.
pub fn execute(group: &Group) -> Result<Outcome> {
    debug!(?group, "Executing command");
    match group {
        Group::Cleaning(cmd) => execute_cleaning(cmd),
        Group::Numeric(cmd) => execute_numeric(cmd),
        Group::Text(cmd) => execute_text(cmd),
        Group::Struct(cmd) => execute_struct(cmd),
    }
}

fn execute_cleaning(cmd: &CleaningCommand) -> Result<Outcome> {
    match cmd {
        CleaningCommand::Clean(data) => Outcome::new("Cleaned Data", &clean_values(&data.values())),
        CleaningCommand::Fill { data, fill_value } => {
            Outcome::new("Filled Data", &fill_values(&data.values(), fill_value))
        }
    }
}

fn execute_numeric(cmd: &NumericCommand) -> Result<Outcome> {
    match cmd {
        NumericCommand::Normalize {
            data,
            min_value,
            max_value,
        } => Outcome::new(
            "Normalized Data",
            &minmax_normalize(&data.data, *min_value, *max_value)?,
        ),
        NumericCommand::Standardize(data) => {
            Outcome::new("Standardized Data", &z_score_standardize(&data.data))
        }
        NumericCommand::Clip {
            data,
            min_threshold,
            max_threshold,
        } => Outcome::new(
            "Clipped Data",
            &clip_values(&data.data, *min_threshold, *max_threshold)?,
        ),
        NumericCommand::ToInt(data) => Outcome::new("Integer Data", &lst_to_ints(&data.data)),
        NumericCommand::LogScale(data) => {
            Outcome::new("Log Scaled Data", &log_transform(&data.data))
        }
    }
}

fn execute_text(cmd: &TextCommand) -> Result<Outcome> {
    match cmd {
        TextCommand::Tokenize(data) => {
            Outcome::new("Tokenized Data", &special_tokenization(&data.joined()))
        }
        TextCommand::CleanPunctuation(data) => {
            Outcome::new("Cleaned Text Data", &clean_text(&data.joined()))
        }
        TextCommand::CleanStopwords { data, stopwords } => {
            let stopwords = parse_stopwords(stopwords);
            Outcome::new(
                "Cleaned Text Data",
                &clean_stop_words(&data.joined(), &stopwords),
            )
        }
    }
}

fn execute_struct(cmd: &StructCommand) -> Result<Outcome> {
    match cmd {
        StructCommand::Shuffle { data, seed } => {
            Outcome::new("Shuffled Data", &lst_shuffle(&data.data, *seed))
        }
        StructCommand::Flatten(data) => {
            let nested = data
                .data
                .iter()
                .map(|item| Value::parse_literal(item))
                .collect::<Result<Vec<_>>>()?;
            Outcome::new("Flattened Data", &flatten_values(&nested)?)
        }
        StructCommand::Deduplicate(data) => {
            Outcome::new("Deduplicated Data", &remove_duplicates(&data.data))
        }
    }
}
