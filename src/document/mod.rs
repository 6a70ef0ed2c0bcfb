pub mod tag_count;
pub mod tei;
pub mod tokenization;

pub use tag_count::count_closing_tags;
pub use tei::{extract_document_id, extract_tokens, ExtractionMode};
pub use tokenization::split_plaintext;
