use std::collections::{HashMap, HashSet};

use calamine::Data;
use smallvec::SmallVec;

use super::types::{ColumnProfile, SAMPLE_SIZE};
use super::utils::{detect_column_type, display_value, raw_text};

/// Literal text some exports write in place of a real empty cell.
pub const NULL_TEXT: &str = "NULL";

pub fn profile_column(values: &[Data], name: &str) -> ColumnProfile {
    let mut null_count = 0;
    let mut seen_values = HashSet::new();

    for value in values {
        if matches!(value, Data::Empty) {
            null_count += 1;
        } else {
            seen_values.insert(raw_text(value));
        }
    }

    // Sample the first rows in file order
    let mut sample_values = SmallVec::<[String; SAMPLE_SIZE]>::new();
    for value in values.iter().take(SAMPLE_SIZE) {
        sample_values.push(display_value(value));
    }

    ColumnProfile {
        name: name.to_string(),
        data_type: detect_column_type(values),
        null_count,
        total: values.len(),
        unique_count: seen_values.len(),
        sample_values,
    }
}

/// Counts cells whose text form is exactly `NULL`. The match is
/// case-sensitive, and missing cells convert to "" so they never count.
pub fn count_string_nulls(values: &[Data]) -> usize {
    values.iter().filter(|v| raw_text(v) == NULL_TEXT).count()
}

/// Frequency of each distinct display value, ordered by descending count.
/// Ties keep first-encountered order: the counting pass records insertion
/// order and the sort is stable.
pub fn value_distribution(values: &[Data]) -> Vec<(String, usize)> {
    let mut order = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for value in values {
        let text = display_value(value);
        match counts.get_mut(&text) {
            Some(n) => *n += 1,
            None => {
                counts.insert(text.clone(), 1);
                order.push(text);
            }
        }
    }

    let mut pairs: Vec<(String, usize)> = order
        .into_iter()
        .map(|text| {
            let count = counts[&text];
            (text, count)
        })
        .collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1));
    pairs
}
