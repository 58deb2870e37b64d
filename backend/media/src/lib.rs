//! Image file handling for caderno.
//!
//! The extraction pipeline uses this to label the image payload before
//! uploading it.

pub mod mime_sniff;

pub use mime_sniff::{sniff_bytes, sniff_mime};
