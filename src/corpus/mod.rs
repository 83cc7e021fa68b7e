// Corpus acquisition: turning a CSV file or URL into a list of labels.

pub mod file;
pub mod http;
pub mod records;
pub mod traits;

pub use file::CsvFileSource;
pub use http::{HttpCsvSource, DEFAULT_CORPUS_URL};
pub use records::{parse_labels, CsvOptions};
pub use traits::LabelSource;
