// In: src/bridge/event.rs

//! Wire types for API Gateway HTTP API (payload format 2.0) invocations.
//!
//! Only the fields the handler reads or that are useful in logs are modelled.
//! Every inbound field is optional and unknown fields are ignored, so any
//! well-formed event deserializes.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// HTTP status code of a successful encoding.
pub const STATUS_OK: u16 = 200;

/// Header name carrying the response media type.
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

//==================================================================================
// I. Inbound Event
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HttpApiEvent {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub route_key: Option<String>,
    #[serde(default)]
    pub raw_path: Option<String>,
    #[serde(default)]
    pub raw_query_string: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub request_context: Option<RequestContext>,
    /// The text to encode. `null` and a missing key both mean "no body".
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_base64_encoded: bool,
}

/// Reads an explicit `null` as the field's default, like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl HttpApiEvent {
    /// Builds a minimal event carrying only a body.
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..Self::default()
        }
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_context
            .as_ref()
            .and_then(|ctx| ctx.request_id.as_deref())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub http: Option<HttpDescription>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HttpDescription {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub source_ip: Option<String>,
}

//==================================================================================
// II. Outbound Response
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HttpApiResponse {
    pub status_code: u16,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl HttpApiResponse {
    /// A `200` response with `body` placed verbatim and the given media type.
    pub fn ok_text(body: String, content_type: &str) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE_HEADER.to_string(), content_type.to_string());
        Self {
            status_code: STATUS_OK,
            headers,
            body: Some(body),
            is_base64_encoded: false,
        }
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE_HEADER).map(String::as_str)
    }
}
