//! Raw JSON shape of the persisted profile document.
//!
//! Every key is optional; `resolve` fills the gaps with the per-field
//! fallbacks in one place so nothing downstream deals with missing data.

use serde::Deserialize;

use super::{Contact, MerchantProfile, NO_INFO};

#[derive(Deserialize, Default)]
#[serde(default)]
pub(super) struct RawProfile {
    pub company_name: Option<String>,
    pub products: Option<Vec<String>>,
    pub price_range: Option<String>,
    pub delivery_time: Option<String>,
    pub tone: Option<String>,
    pub working_hours: Option<String>,
    pub services: Option<Vec<String>>,
    pub contact: Option<RawContact>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub(super) struct RawContact {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl RawProfile {
    /// Merge with defaults. Lists and contact fields fall back to "empty" and
    /// "no info" rather than to the demo merchant's data.
    pub fn resolve(self) -> MerchantProfile {
        let defaults = MerchantProfile::default();
        let contact = self.contact.unwrap_or_default();
        let no_info = || NO_INFO.to_string();

        MerchantProfile {
            name: self.company_name.unwrap_or(defaults.name),
            products: self.products.unwrap_or_default(),
            price_range: self.price_range.unwrap_or(defaults.price_range),
            delivery_time: self.delivery_time.unwrap_or(defaults.delivery_time),
            tone: self.tone.unwrap_or(defaults.tone),
            working_hours: self.working_hours.unwrap_or(defaults.working_hours),
            services: self.services.unwrap_or_default(),
            contact: Contact {
                phone: contact.phone.unwrap_or_else(no_info),
                email: contact.email.unwrap_or_else(no_info),
                address: contact.address.unwrap_or_else(no_info),
            },
        }
    }
}
