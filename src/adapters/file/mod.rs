//! File-based photo storage
//!
//! Implements `PhotoStore` on a local (or mounted) directory.

mod store;

pub use store::{FilePhotoStore, UploadPolicy};
