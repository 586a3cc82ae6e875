use log::{error, info};
use news_lexicon::constants::{HEADLINE_COLUMN, TOKENS_COLUMN};
use news_lexicon::{read_dataset_from_path, CorpusPreprocessor, Error, FrequencyAnalyzer};
use std::time::Instant;

/// Compares the parallel and sequential keyword passes over a CSV file.
fn main() {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: dev <CSV_PATH>");
        std::process::exit(1);
    };

    if let Err(e) = compare_passes(&path) {
        error!("Comparison failed: {}", e);
        std::process::exit(1);
    }
}

fn compare_passes(path: &str) -> Result<(), Error> {
    let dataset = read_dataset_from_path(path)?;
    let preprocessed = CorpusPreprocessor::default().apply(&dataset, HEADLINE_COLUMN)?;

    let start = Instant::now();
    let sequential = FrequencyAnalyzer::sequential().keyword_table(&preprocessed, TOKENS_COLUMN)?;
    let sequential_elapsed = start.elapsed();

    let start = Instant::now();
    let parallel = FrequencyAnalyzer { parallel: true }.keyword_table(&preprocessed, TOKENS_COLUMN)?;
    let parallel_elapsed = start.elapsed();

    info!(
        "{} rows, {} distinct keywords: sequential {:?}, parallel {:?}",
        preprocessed.len(),
        sequential.len(),
        sequential_elapsed,
        parallel_elapsed
    );

    if sequential != parallel {
        return Err(Error::InvalidArgument(
            "parallel keyword counts differ from the sequential pass".to_string(),
        ));
    }

    println!("Sequential and parallel keyword tables match");

    Ok(())
}
