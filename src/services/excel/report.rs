use super::analyzer;
use super::types::Dataset;

pub fn shape(dataset: &Dataset) {
    println!("Rows: {}", dataset.row_count());
    println!("Columns: {}", dataset.column_count());
}

/// One line per key column present in the header. Absent columns are
/// skipped without error so the key list tolerates schema drift.
pub fn null_counts(dataset: &Dataset, columns: &[String]) {
    println!();
    println!("Null counts for key columns:");

    for name in columns {
        let Some(idx) = dataset.column_index(name) else {
            tracing::debug!("Column {} not present, skipping", name);
            continue;
        };
        let values = dataset.column_values(idx);
        let profile = analyzer::profile_column(&values, name);
        println!(
            "  {}: {}/{} null ({}), {} unique, sample: [{}]",
            profile.name,
            profile.null_count,
            profile.total,
            profile.data_type,
            profile.unique_count,
            profile.sample_values.join(", ")
        );
    }
}

/// Only columns with at least one literal "NULL" cell produce a line.
pub fn string_null_counts(dataset: &Dataset, columns: &[String]) {
    println!();
    println!("Columns containing the literal text {:?}:", analyzer::NULL_TEXT);

    for name in columns {
        let Some(idx) = dataset.column_index(name) else {
            continue;
        };
        let values = dataset.column_values(idx);
        let count = analyzer::count_string_nulls(&values);
        if count > 0 {
            println!("  {}: {}", name, count);
        }
    }
}

pub fn value_distribution(dataset: &Dataset, column: &str, top: usize) {
    let Some(idx) = dataset.column_index(column) else {
        tracing::debug!("Column {} not present, skipping distribution", column);
        return;
    };
    let values = dataset.column_values(idx);
    let pairs = analyzer::value_distribution(&values);

    println!();
    println!("Top {} values for {}:", top, column);
    for (value, count) in pairs.iter().take(top) {
        println!("  {}: {}", value, count);
    }
}
