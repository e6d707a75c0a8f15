//! Database Models
//!
//! Row types derive `sqlx::FromRow`; API-facing DTOs live next to the row
//! type they shape.

pub mod company_info;
pub mod contact_info;
pub mod product;
pub mod product_image;

pub use company_info::{CompanyInfo, CompanyInfoChange, CompanyInfoForm};
pub use contact_info::{ContactInfo, ContactInfoChange, ContactInfoForm, ContactInfoView, SocialMedia};
pub use product::{Product, ProductCreate, ProductUpdate, ProductView};
pub use product_image::ProductImage;
