use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/instagram/scrape`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrapeRequest {
    /// Instagram profile id. Accepted as a string or a number.
    #[serde(default)]
    pub profile_id: Option<Value>,
    /// Number of posts to fetch; `null` or absent falls back to the configured default.
    /// Validated by `first_or` after the profile id check.
    #[serde(default)]
    pub first: Option<Value>,
}

impl ScrapeRequest {
    /// Read a request from any JSON body. Non-object bodies carry no fields.
    pub fn from_json(body: Value) -> Self {
        serde_json::from_value(body).unwrap_or_default()
    }

    /// The profile id as sent upstream, or `None` when it is missing, empty or falsy
    pub fn profile_id(&self) -> Option<String> {
        match self.profile_id.as_ref()? {
            Value::String(id) if !id.is_empty() => Some(id.clone()),
            Value::Number(n) if n.as_f64().map_or(false, |v| v != 0.0) => Some(n.to_string()),
            _ => None,
        }
    }

    /// The requested post count, `default` when absent or `null`, or an error
    /// message when it is not an integer
    pub fn first_or(&self, default: i64) -> Result<i64, String> {
        match &self.first {
            None | Some(Value::Null) => Ok(default),
            Some(value) => value
                .as_i64()
                .ok_or_else(|| format!("first must be an integer, got {}", value)),
        }
    }
}

/// A flattened timeline post with its display image inlined
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Index of the post in the upstream edge order
    pub id: usize,
    pub text: String,
    pub thumbnail_src: String,
    pub display_url: String,
    pub shortcode: String,
    pub base64: String,
    /// `DD-MMM-YYYY`
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeResponse {
    /// Number of posts returned in `result`
    pub first: usize,
    /// Total post count reported for the profile
    pub total: i64,
    pub result: Vec<Post>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> ScrapeRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_profile_id_string() {
        let req = request(json!({ "profile_id": "25025320" }));
        assert_eq!(req.profile_id().as_deref(), Some("25025320"));
    }

    #[test]
    fn test_profile_id_number_is_stringified() {
        let req = request(json!({ "profile_id": 25025320 }));
        assert_eq!(req.profile_id().as_deref(), Some("25025320"));
    }

    #[test]
    fn test_profile_id_missing_or_falsy() {
        for body in [
            json!({}),
            json!({ "profile_id": null }),
            json!({ "profile_id": "" }),
            json!({ "profile_id": 0 }),
            json!({ "profile_id": false }),
        ] {
            assert_eq!(request(body.clone()).profile_id(), None, "body: {}", body);
        }
    }

    #[test]
    fn test_first_defaults_when_absent_or_null() {
        assert_eq!(request(json!({ "profile_id": "1" })).first_or(10), Ok(10));
        assert_eq!(request(json!({ "profile_id": "1", "first": null })).first_or(10), Ok(10));
        assert_eq!(request(json!({ "profile_id": "1", "first": 3 })).first_or(10), Ok(3));
    }

    #[test]
    fn test_first_must_be_integer() {
        for first in [json!("ten"), json!(1.5), json!([3])] {
            let req = request(json!({ "profile_id": "1", "first": first }));
            assert!(req.first_or(10).is_err(), "first: {}", first);
        }
    }

    #[test]
    fn test_malformed_first_does_not_hide_profile_id() {
        let req = ScrapeRequest::from_json(json!({ "profile_id": "", "first": 1.5 }));
        assert_eq!(req.profile_id(), None);

        let req = ScrapeRequest::from_json(json!({ "first": "ten" }));
        assert_eq!(req.profile_id(), None);
    }

    #[test]
    fn test_non_object_body_has_no_fields() {
        let req = ScrapeRequest::from_json(json!("25025320"));
        assert_eq!(req.profile_id(), None);
        assert_eq!(req.first_or(10), Ok(10));
    }

    #[test]
    fn test_response_field_names() {
        let response = ScrapeResponse {
            first: 1,
            total: 7,
            result: vec![Post {
                id: 0,
                text: "hello".into(),
                thumbnail_src: "https://cdn/t.jpg".into(),
                display_url: "https://cdn/d.jpg".into(),
                shortcode: "Cabc".into(),
                base64: "AQID".into(),
                created_at: "05-Jan-2024".into(),
            }],
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "first": 1,
                "total": 7,
                "result": [{
                    "id": 0,
                    "text": "hello",
                    "thumbnail_src": "https://cdn/t.jpg",
                    "display_url": "https://cdn/d.jpg",
                    "shortcode": "Cabc",
                    "base64": "AQID",
                    "created_at": "05-Jan-2024"
                }]
            })
        );
    }
}
