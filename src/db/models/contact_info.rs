//! Contact Info Model (Singleton)

use serde::{Deserialize, Serialize};

/// Contact information entity (singleton, id fixed at 1)
///
/// Social links are optional; NULL means the link is not published.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContactInfo {
    #[serde(skip_serializing, default)]
    pub id: i64,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub working_hours: String,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
}

/// Social media links as exposed on the public API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialMedia {
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
}

/// Contact info as exposed on the public API (`social_media` nested)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfoView {
    pub address: String,
    pub phone: String,
    pub email: String,
    pub working_hours: String,
    pub social_media: SocialMedia,
}

impl From<ContactInfo> for ContactInfoView {
    fn from(info: ContactInfo) -> Self {
        Self {
            address: info.address,
            phone: info.phone,
            email: info.email,
            working_hours: info.working_hours,
            social_media: SocialMedia {
                linkedin: info.linkedin,
                twitter: info.twitter,
                facebook: info.facebook,
            },
        }
    }
}

/// Validated replacement values for the singleton row (social links may be NULL)
#[derive(Debug, Clone)]
pub struct ContactInfoChange {
    pub address: String,
    pub phone: String,
    pub email: String,
    pub working_hours: String,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
}

/// Contact info admin form payload
///
/// Empty social fields are stored as NULL.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactInfoForm {
    pub address: String,
    pub phone: String,
    pub email: String,
    pub working_hours: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
}
