//! Typed view of the Instagram profile timeline GraphQL payload.
//!
//! Only the fields the service consumes are modelled; anything else in the
//! payload is ignored. A payload missing one of these fields fails to decode.
use serde::{Deserialize, Serialize};

/// Variables of the persisted timeline query
#[derive(Debug, Clone, Serialize)]
pub struct TimelineVariables<'a> {
    pub id: &'a str,
    pub first: i64,
    /// Pagination cursor. Only the first page is ever requested.
    pub after: Option<&'a str>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimelineQueryResponse {
    pub data: TimelineData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimelineData {
    /// `null` when the profile id does not exist
    pub user: Option<TimelineUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimelineUser {
    pub edge_owner_to_timeline_media: TimelineMedia,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimelineMedia {
    /// Total number of posts on the profile
    pub count: i64,
    /// Newest first
    pub edges: Vec<MediaEdge>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaEdge {
    pub node: MediaNode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaNode {
    #[serde(default)]
    pub edge_media_to_caption: CaptionConnection,
    pub thumbnail_src: String,
    pub display_url: String,
    pub shortcode: String,
    pub taken_at_timestamp: i64,
}

impl MediaNode {
    /// Text of the first caption, or an empty string for uncaptioned posts
    pub fn caption(&self) -> &str {
        self.edge_media_to_caption
            .edges
            .first()
            .map(|edge| edge.node.text.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaptionConnection {
    #[serde(default)]
    pub edges: Vec<CaptionEdge>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaptionEdge {
    pub node: CaptionNode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaptionNode {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_variables_serialize_in_query_order() {
        let variables = TimelineVariables {
            id: "25025320",
            first: 12,
            after: None,
        };

        assert_eq!(
            serde_json::to_string(&variables).unwrap(),
            r#"{"id":"25025320","first":12,"after":null}"#
        );
    }

    #[test]
    fn test_variables_escape_profile_id() {
        let variables = TimelineVariables {
            id: r#"1","first":999"#,
            first: 1,
            after: None,
        };

        let encoded = serde_json::to_string(&variables).unwrap();
        let decoded: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded["first"], 1);
    }

    #[test]
    fn test_decode_timeline_payload() {
        let payload = json!({
            "data": {
                "user": {
                    "edge_owner_to_timeline_media": {
                        "count": 321,
                        "page_info": { "has_next_page": true, "end_cursor": "QVFE" },
                        "edges": [{
                            "node": {
                                "__typename": "GraphImage",
                                "edge_media_to_caption": {
                                    "edges": [{ "node": { "text": "sunset" } }]
                                },
                                "thumbnail_src": "https://cdn/t.jpg",
                                "display_url": "https://cdn/d.jpg",
                                "shortcode": "CxYz",
                                "taken_at_timestamp": 1704412800
                            }
                        }]
                    }
                }
            },
            "status": "ok"
        });

        let response: TimelineQueryResponse = serde_json::from_value(payload).unwrap();
        let media = response.data.user.unwrap().edge_owner_to_timeline_media;

        assert_eq!(media.count, 321);
        assert_eq!(media.edges.len(), 1);
        assert_eq!(media.edges[0].node.caption(), "sunset");
        assert_eq!(media.edges[0].node.shortcode, "CxYz");
    }

    #[test]
    fn test_uncaptioned_post_has_empty_text() {
        let node: MediaNode = serde_json::from_value(json!({
            "edge_media_to_caption": { "edges": [] },
            "thumbnail_src": "t",
            "display_url": "d",
            "shortcode": "s",
            "taken_at_timestamp": 0
        }))
        .unwrap();
        assert_eq!(node.caption(), "");

        let node: MediaNode = serde_json::from_value(json!({
            "thumbnail_src": "t",
            "display_url": "d",
            "shortcode": "s",
            "taken_at_timestamp": 0
        }))
        .unwrap();
        assert_eq!(node.caption(), "");
    }

    #[test]
    fn test_missing_user_decodes_as_none() {
        let response: TimelineQueryResponse =
            serde_json::from_value(json!({ "data": { "user": null }, "status": "ok" })).unwrap();
        assert!(response.data.user.is_none());
    }

    #[test]
    fn test_missing_display_url_is_a_decode_error() {
        let result: Result<MediaNode, _> = serde_json::from_value(json!({
            "thumbnail_src": "t",
            "shortcode": "s",
            "taken_at_timestamp": 0
        }));
        assert!(result.is_err());
    }
}
