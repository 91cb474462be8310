use calamine::Data;
use smallvec::SmallVec;

pub const SAMPLE_SIZE: usize = 3;

/// Contents of the first worksheet, capped at the loader's row limit.
/// Every stored row is normalized to exactly the header width.
#[derive(Debug)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<Data>>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, mut rows: Vec<Vec<Data>>) -> Self {
        let width = headers.len();
        for row in &mut rows {
            row.resize(width, Data::Empty);
        }
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cells of one column, in row order.
    pub fn column_values(&self, idx: usize) -> Vec<Data> {
        self.rows
            .iter()
            .map(|row| row.get(idx).cloned().unwrap_or(Data::Empty))
            .collect()
    }
}

#[derive(Debug)]
pub struct ColumnProfile {
    pub name: String,
    pub data_type: &'static str,
    pub null_count: usize,
    pub total: usize,
    pub unique_count: usize,
    pub sample_values: SmallVec<[String; SAMPLE_SIZE]>,
}
