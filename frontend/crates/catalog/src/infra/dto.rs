//! Wire DTOs for the Catalog Endpoints
//!
//! Responses deserialize directly into the entity types, which carry
//! their own serde attributes; only the requests need DTOs here.

use serde::Serialize;

use crate::domain::gateway::ShopDraft;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopRegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<&'a str>,
}

impl<'a> From<&'a ShopDraft> for ShopRegisterRequest<'a> {
    fn from(draft: &'a ShopDraft) -> Self {
        Self {
            name: &draft.name,
            email: &draft.email,
            description: &draft.description,
            logo_url: draft.logo_url.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_omitted_when_absent() {
        let draft = ShopDraft {
            name: "Mug Emporium".to_string(),
            email: "shop@example.com".to_string(),
            description: "Handmade ceramics".to_string(),
            logo_url: None,
        };
        let json = serde_json::to_value(ShopRegisterRequest::from(&draft)).unwrap();
        assert!(json.get("logoUrl").is_none());
        assert_eq!(json["name"], "Mug Emporium");
    }
}
