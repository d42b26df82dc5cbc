//! Merchant profile: the data every prompt is parameterised with.
//!
//! [`load`] re-reads the JSON document on each call so edits apply to the
//! next chat turn without a restart. A missing or unreadable document is not
//! an error for the caller: the built-in demo profile is returned instead.

mod raw;

use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use raw::RawProfile;

/// Value used for contact fields the document leaves out.
pub const NO_INFO: &str = "bilgi yok";

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("cannot read profile {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("cannot parse profile {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Merchant contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// Resolved merchant profile. Serializes with the same keys as the
/// persisted document so `/company-info` mirrors the file format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MerchantProfile {
    #[serde(rename = "company_name")]
    pub name: String,
    pub products: Vec<String>,
    pub price_range: String,
    pub delivery_time: String,
    pub contact: Contact,
    pub tone: String,
    pub working_hours: String,
    pub services: Vec<String>,
}

impl Default for MerchantProfile {
    fn default() -> Self {
        Self {
            name: "Demo Perde Sistemleri".to_string(),
            products: strings(&["stor perde", "zebra perde", "pilise perde"]),
            price_range: "500 - 1500 TL".to_string(),
            delivery_time: "3-5 iş günü".to_string(),
            contact: Contact {
                phone: "+90 212 123 45 67".to_string(),
                email: "info@demoperde.com".to_string(),
                address: "İstiklal Cad. No:123, İstanbul".to_string(),
            },
            tone: "samimi ve güven veren".to_string(),
            working_hours: "Pazartesi-Cumartesi 09:00-18:00".to_string(),
            services: strings(&["ücretsiz ölçüm", "profesyonel montaj", "garantili hizmet"]),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Read and resolve the profile at `path`.
pub fn read(path: &Path) -> Result<MerchantProfile, ProfileError> {
    let text = fs::read_to_string(path).map_err(|source| ProfileError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let raw: RawProfile = serde_json::from_str(&text).map_err(|source| ProfileError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    Ok(raw.resolve())
}

/// Read the profile at `path`, falling back to [`MerchantProfile::default`]
/// on any failure.
pub fn load(path: &Path) -> MerchantProfile {
    match read(path) {
        Ok(profile) => profile,
        Err(e) => {
            debug!(error = %e, "using built-in merchant profile");
            MerchantProfile::default()
        }
    }
}
