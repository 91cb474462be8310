use calamine::Data;
use chrono::{NaiveDate, NaiveDateTime};

/// Display form of a missing cell. Distinct from the literal text "NULL",
/// so true-missing cells never count as string nulls.
pub const MISSING_DISPLAY: &str = "<null>";

/// Text form used for exact string matching. Missing cells convert to "".
pub fn raw_text(value: &Data) -> String {
    value.to_string()
}

/// Human-facing form: like `raw_text`, but missing cells stay visible.
pub fn display_value(value: &Data) -> String {
    match value {
        Data::Empty => MISSING_DISPLAY.to_string(),
        _ => value.to_string(),
    }
}

pub fn is_date_string(s: &str) -> bool {
    let date_formats = ["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%Y/%m/%d", "%d-%m-%Y"];
    let datetime_formats = ["%Y-%m-%d %H:%M:%S", "%d/%m/%Y %H:%M:%S"];

    date_formats
        .iter()
        .any(|f| NaiveDate::parse_from_str(s, f).is_ok())
        || datetime_formats
            .iter()
            .any(|f| NaiveDateTime::parse_from_str(s, f).is_ok())
}

pub fn detect_column_type(values: &[Data]) -> &'static str {
    let mut numeric_count = 0;
    let mut date_count = 0;
    let mut bool_count = 0;
    let mut total = 0;

    for value in values.iter().filter(|v| !matches!(v, Data::Empty)) {
        total += 1;
        match value {
            Data::Float(_) | Data::Int(_) => numeric_count += 1,
            Data::DateTime(_) => date_count += 1,
            Data::String(s) if is_date_string(s) => date_count += 1,
            Data::Bool(_) => bool_count += 1,
            _ => {}
        }
    }

    if total == 0 {
        return "empty";
    }

    let threshold = total as f64 * 0.8;
    match () {
        _ if numeric_count as f64 >= threshold => "numeric",
        _ if date_count as f64 >= threshold => "date",
        _ if bool_count as f64 >= threshold => "boolean",
        _ => "string",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_display_differs_from_literal_null_text() {
        assert_eq!(raw_text(&Data::Empty), "");
        assert_eq!(display_value(&Data::Empty), "<null>");
        assert_ne!(display_value(&Data::Empty), "NULL");
    }

    #[test]
    fn non_missing_cells_keep_their_text_form() {
        assert_eq!(display_value(&Data::Int(2020)), "2020");
        assert_eq!(display_value(&Data::String("CBSE".to_string())), "CBSE");
    }

    #[test]
    fn date_strings_match_common_formats() {
        assert!(is_date_string("2021-06-30"));
        assert!(is_date_string("30/06/2021"));
        assert!(is_date_string("2021-06-30 12:00:00"));
        assert!(!is_date_string("Admission_Mode"));
        assert!(!is_date_string("2021"));
    }

    #[test]
    fn type_detection_uses_majority_threshold() {
        let numeric: Vec<Data> = (0..10i64).map(Data::Int).collect();
        assert_eq!(detect_column_type(&numeric), "numeric");

        let mixed = vec![
            Data::Int(1),
            Data::String("a".to_string()),
            Data::String("b".to_string()),
        ];
        assert_eq!(detect_column_type(&mixed), "string");

        assert_eq!(detect_column_type(&[Data::Empty, Data::Empty]), "empty");
    }

    #[test]
    fn missing_cells_do_not_skew_type_detection() {
        let values = vec![Data::Empty, Data::Float(1.5), Data::Empty, Data::Int(2)];
        assert_eq!(detect_column_type(&values), "numeric");
    }
}
