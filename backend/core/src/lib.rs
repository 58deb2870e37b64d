pub mod error;
pub mod traits;
pub mod types;

pub use error::CadernoError;
pub use traits::{DocumentSink, TranscriptionService};
pub use types::{DocumentSpec, ExtractionOutcome, ExtractionRequest, GenerationParams};
