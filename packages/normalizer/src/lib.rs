pub mod document;
pub mod error;
pub mod graph;


pub use document::{load_document, normalize_file, to_pretty_json, write_document};
pub use error::{NormalizeError, NormalizeResult};
pub use graph::{normalize_graph, NormalizeStats};
