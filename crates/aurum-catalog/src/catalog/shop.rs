//! Shop contact details.

use crate::error::CatalogError;
use crate::ids::ShopInfoId;
use serde::{Deserialize, Serialize};

/// The store's contact card. There is at most one per deployment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShopInfo {
    #[serde(rename = "_id", alias = "id")]
    pub id: ShopInfoId,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub hours: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinterest_url: Option<String>,
}

impl ShopInfo {
    /// Social links that are set, as (network, url) pairs.
    pub fn social_links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Facebook", &self.facebook_url),
            ("Instagram", &self.instagram_url),
            ("Twitter", &self.twitter_url),
            ("Pinterest", &self.pinterest_url),
        ]
        .into_iter()
        .filter_map(|(name, url)| url.as_deref().map(|u| (name, u)))
        .collect()
    }
}

/// Insert shape for the shop contact card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewShopInfo {
    pub address: String,
    pub phone: String,
    pub email: String,
    pub hours: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinterest_url: Option<String>,
}

impl NewShopInfo {
    pub fn validate(&self) -> Result<(), CatalogError> {
        if !self.email.is_empty() && !self.email.contains('@') {
            return Err(CatalogError::Validation(format!(
                "invalid email address: {}",
                self.email
            )));
        }
        Ok(())
    }

    pub fn into_shop_info(self, id: ShopInfoId) -> ShopInfo {
        ShopInfo {
            id,
            address: self.address,
            phone: self.phone,
            email: self.email,
            hours: self.hours,
            facebook_url: self.facebook_url,
            instagram_url: self.instagram_url,
            twitter_url: self.twitter_url,
            pinterest_url: self.pinterest_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewShopInfo {
        NewShopInfo {
            address: "12 MG Road, Jaipur".to_string(),
            phone: "+91 98765 43210".to_string(),
            email: "hello@aurum.example".to_string(),
            hours: "10am - 8pm".to_string(),
            facebook_url: None,
            instagram_url: Some("https://instagram.com/aurum".to_string()),
            twitter_url: None,
            pinterest_url: None,
        }
    }

    #[test]
    fn test_social_links_skip_missing() {
        let info = draft().into_shop_info(ShopInfoId::new("s"));
        assert_eq!(
            info.social_links(),
            vec![("Instagram", "https://instagram.com/aurum")]
        );
    }

    #[test]
    fn test_email_validation() {
        let mut bad = draft();
        bad.email = "not-an-email".to_string();
        assert!(bad.validate().is_err());
        assert!(draft().validate().is_ok());
    }
}
