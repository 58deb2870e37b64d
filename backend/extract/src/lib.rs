//! Extraction pipeline for caderno: sniff → transcribe → write.

pub mod pipeline;

pub use pipeline::ExtractionPipeline;
