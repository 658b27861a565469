//! Missing-value handling.
//!
//! A value is missing when it is `Null`, an empty string, or NaN
//! (see [`Value::is_missing`]).

use crate::value::Value;
use tracing::debug;

/// Remove missing values, keeping the remaining items in order.
///
/// # Examples
///
/// ```
/// use prepkit_core::{cleaning::clean_values, Value};
///
/// let data = vec![
///     Value::Int(1),
///     Value::Int(2),
///     Value::Null,
///     Value::from(""),
///     Value::Int(3),
///     Value::Float(f64::NAN),
/// ];
/// assert_eq!(clean_values(&data), vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
/// ```
pub fn clean_values(data: &[Value]) -> Vec<Value> {
    let cleaned: Vec<Value> = data.iter().filter(|v| !v.is_missing()).cloned().collect();
    debug!(
        input = data.len(),
        removed = data.len() - cleaned.len(),
        "Cleaned missing values"
    );
    cleaned
}

/// Replace missing values with `fill_value`, preserving length.
///
/// # Examples
///
/// ```
/// use prepkit_core::{cleaning::fill_values, Value};
///
/// let data = vec![Value::Int(1), Value::Null, Value::from(""), Value::Float(f64::NAN)];
/// let filled = fill_values(&data, &Value::Int(-1));
/// assert_eq!(filled, vec![Value::Int(1), Value::Int(-1), Value::Int(-1), Value::Int(-1)]);
/// ```
pub fn fill_values(data: &[Value], fill_value: &Value) -> Vec<Value> {
    let mut filled_count = 0usize;
    let filled = data
        .iter()
        .map(|v| {
            if v.is_missing() {
                filled_count += 1;
                fill_value.clone()
            } else {
                v.clone()
            }
        })
        .collect();
    debug!(input = data.len(), filled = filled_count, "Filled missing values");
    filled
}
