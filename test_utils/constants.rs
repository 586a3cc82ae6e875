use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_DATA_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_data_files"));

pub static HEADLINES_CSV_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| TEST_DATA_FILES_DIRECTORY.join("headlines.csv"));

pub static HEADLINES_CSV_GZ_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| TEST_DATA_FILES_DIRECTORY.join("headlines.csv.gz"));
