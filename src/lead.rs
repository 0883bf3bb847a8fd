//! Lead submission types
//!
//! A lead is a marketing contact submission posted to `POST /lead`. The
//! placeholder handler performs no validation, so every field is optional and
//! unknown fields are ignored; the type exists so that well formed payloads
//! surface in structured logs and so that the shape is pinned down for the
//! real implementation.

use serde::Deserialize;

/// The `POST /lead` request payload.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct LeadSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    /// E.164 formatted phone number, when provided.
    pub phone: Option<String>,
    pub message: Option<String>,
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
}

impl LeadSubmission {
    /// Best-effort typed view of an already parsed JSON body.
    ///
    /// The placeholder never rejects a payload on shape grounds. Bodies that
    /// are not JSON objects (arrays, strings, numbers) degrade to an empty
    /// submission rather than an error.
    pub fn from_value(value: &serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// True when no field of the submission was populated.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::LeadSubmission;
    use serde_json::json;

    #[test]
    fn deserialize_full_payload() {
        let value = json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "+15555550123",
            "message": "Tell me more",
            "utm_source": "newsletter",
            "utm_medium": "email",
            "utm_campaign": "launch"
        });
        let lead = LeadSubmission::from_value(&value);
        assert_eq!(lead.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(lead.email.as_deref(), Some("ada@example.com"));
        assert_eq!(lead.phone.as_deref(), Some("+15555550123"));
        assert_eq!(lead.utm_campaign.as_deref(), Some("launch"));
        assert!(!lead.is_empty());
    }

    #[test]
    fn deserialize_minimal_payload() {
        let lead = LeadSubmission::from_value(&json!({ "email": "ada@example.com" }));
        assert_eq!(lead.email.as_deref(), Some("ada@example.com"));
        assert_eq!(lead.name, None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let lead = LeadSubmission::from_value(&json!({ "email": "a@b.c", "hp_field": "bot" }));
        assert_eq!(lead.email.as_deref(), Some("a@b.c"));
    }

    #[test]
    fn non_object_bodies_degrade_to_empty() {
        assert!(LeadSubmission::from_value(&json!([1, 2, 3])).is_empty());
        assert!(LeadSubmission::from_value(&json!("just a string")).is_empty());
        assert!(LeadSubmission::from_value(&json!({})).is_empty());
    }
}
