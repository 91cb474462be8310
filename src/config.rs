use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

const INPUT_FILE: &str = "data-1762839867816.xlsx";
const ROW_LIMIT: usize = 100;

// Columns inspected for missing-value statistics, in report order.
const KEY_COLUMNS: [&str; 8] = [
    "ABC_Id",
    "UID",
    "Top_Four_Subject_1",
    "Top_Four_Marks_Obt_1",
    "Others_Subject_1",
    "Last_Exam_YOP",
    "Last_Exam_Board",
    "Admission_Mode",
];

const DISTRIBUTION_COLUMN: &str = "Last_Exam_YOP";
const DISTRIBUTION_TOP: usize = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub input_path: PathBuf,
    pub row_limit: usize,
    pub key_columns: Vec<String>,
    pub distribution_column: String,
    pub distribution_top: usize,
}

impl Config {
    pub fn new() -> Result<Self> {
        Ok(Config {
            input_path: PathBuf::from(INPUT_FILE),
            row_limit: ROW_LIMIT,
            key_columns: KEY_COLUMNS.iter().map(|c| c.to_string()).collect(),
            distribution_column: DISTRIBUTION_COLUMN.to_string(),
            distribution_top: DISTRIBUTION_TOP,
        })
    }
}
