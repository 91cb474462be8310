use anyhow::Result;
use std::time::Instant;

mod config;
mod error;
mod logging;
mod services;

use services::excel::{loader, report};

fn main() -> Result<()> {
    // Initialize logging
    logging::init_logging()?;

    // Load configuration
    let config = config::Config::new()?;

    let start = Instant::now();
    let dataset = loader::load(&config.input_path, config.row_limit)?;
    tracing::info!("Dataset ready in {:?}", start.elapsed());

    report::shape(&dataset);
    report::null_counts(&dataset, &config.key_columns);
    report::string_null_counts(&dataset, &config.key_columns);
    report::value_distribution(&dataset, &config.distribution_column, config.distribution_top);

    Ok(())
}
