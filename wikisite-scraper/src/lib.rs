pub mod error;
pub mod extractor;
pub mod infobox;
pub mod result;

pub use error::ScrapeError;
pub use extractor::{Extractor, ProgressCallback};
pub use infobox::InfoboxQuery;
pub use result::ExtractionResult;
