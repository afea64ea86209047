//! Photo Vet Adapters - External adapters for photo-vet.
//!
//! This crate provides:
//! - A raster decoder backed by the `image` crate
//! - A filesystem upload source

pub mod fs;
pub mod raster;

pub use fs::{load_upload, FsUploadSource};
pub use raster::RasterDecoder;
