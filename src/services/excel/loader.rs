use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};

use super::types::Dataset;
use crate::error::AppError;

/// Reads the first worksheet: one header row, then at most `row_limit` data
/// rows, in file order. The file handle lives only for the duration of the
/// call.
pub fn load(path: &Path, row_limit: usize) -> Result<Dataset, AppError> {
    let start = Instant::now();
    tracing::info!("Opening workbook {}", path.display());

    let file = File::open(path).map_err(|source| AppError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let mut workbook: Xlsx<_> = open_workbook_from_rs(BufReader::new(file))
        .map_err(|e| AppError::Format(format!("failed to open workbook: {}", e)))?;

    let sheet_names = workbook.sheet_names().to_vec();
    tracing::info!("Found {} sheets: {:?}", sheet_names.len(), sheet_names);

    let sheet_name = sheet_names
        .first()
        .cloned()
        .ok_or_else(|| AppError::Format("workbook has no sheets".to_string()))?;

    let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
        AppError::Format(format!("failed to read worksheet {}: {}", sheet_name, e))
    })?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .unwrap_or_default();

    let data_rows: Vec<Vec<Data>> = rows.take(row_limit).map(|row| row.to_vec()).collect();

    let dataset = Dataset::new(headers, data_rows);
    tracing::debug!("Header row: {:?}", dataset.headers());
    tracing::info!(
        "Loaded {} rows x {} columns from sheet {} in {:?}",
        dataset.row_count(),
        dataset.column_count(),
        sheet_name,
        start.elapsed()
    );

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_workbook(dir: &TempDir, name: &str, data_rows: usize) -> PathBuf {
        let path = dir.path().join(name);
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "UID").unwrap();
        sheet.write_string(0, 1, "Last_Exam_YOP").unwrap();
        for r in 0..data_rows {
            let row = (r + 1) as u32;
            sheet.write_number(row, 0, (r + 1) as f64).unwrap();
            sheet.write_number(row, 1, 2020.0).unwrap();
        }
        workbook.save(&path).unwrap();
        path
    }

    #[test]
    fn small_files_load_in_full_with_header_order_preserved() {
        let dir = TempDir::new().unwrap();
        let path = write_workbook(&dir, "small.xlsx", 5);

        let dataset = load(&path, 100).unwrap();
        assert_eq!(dataset.row_count(), 5);
        assert_eq!(dataset.column_count(), 2);
        assert_eq!(dataset.headers(), ["UID", "Last_Exam_YOP"]);
    }

    #[test]
    fn row_cap_truncates_larger_files() {
        let dir = TempDir::new().unwrap();
        let path = write_workbook(&dir, "big.xlsx", 150);

        let dataset = load(&path, 100).unwrap();
        assert_eq!(dataset.row_count(), 100);
    }

    #[test]
    fn missing_file_is_a_file_access_error() {
        let err = load(Path::new("no-such-file.xlsx"), 100).unwrap_err();
        assert!(matches!(err, AppError::FileAccess { .. }));
    }

    #[test]
    fn garbage_bytes_are_a_format_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("not-a-workbook.xlsx");
        std::fs::write(&path, b"definitely not a spreadsheet").unwrap();

        let err = load(&path, 100).unwrap_err();
        assert!(matches!(err, AppError::Format(_)));
    }

    #[test]
    fn unwritten_cells_load_as_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sparse.xlsx");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "UID").unwrap();
        sheet.write_string(0, 1, "Last_Exam_Board").unwrap();
        sheet.write_number(1, 0, 1.0).unwrap();
        sheet.write_number(2, 0, 2.0).unwrap();
        sheet.write_string(2, 1, "CBSE").unwrap();
        workbook.save(&path).unwrap();

        let dataset = load(&path, 100).unwrap();
        let board = dataset.column_values(1);
        assert!(matches!(board[0], Data::Empty));
        assert_eq!(board[1].to_string(), "CBSE");
    }
}
