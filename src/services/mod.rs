//! Services Module
//!
//! Business logic between the HTTP handlers and the repositories:
//!
//! - [`catalog`] - product views with resolved image order + admin mutations
//! - [`content`] - singleton company/contact records
//! - [`image_store`] - filesystem storage for uploaded product images

pub mod catalog;
pub mod content;
pub mod image_store;

pub use catalog::CatalogService;
pub use image_store::{ImageStore, UploadedImage};
