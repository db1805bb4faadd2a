// In: src/bridge/handler.rs

use std::sync::Arc;

use crate::bridge::event::{HttpApiEvent, HttpApiResponse};
use crate::config::EncoderConfig;
use crate::error::EncoderError;
use crate::kernels::rle;

/// Answers HTTP API invocations by run-length encoding the request body.
///
/// The handler holds nothing but shared, read-only configuration, so a single
/// instance can serve any number of concurrent invocations.
#[derive(Debug, Clone)]
pub struct EncodeHandler {
    config: Arc<EncoderConfig>,
}

impl EncodeHandler {
    pub fn new(config: Arc<EncoderConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encodes the event body and wraps it in a `200` text response.
    ///
    /// An absent body encodes to an empty body. This never fails.
    pub fn handle(&self, event: &HttpApiEvent) -> HttpApiResponse {
        let request = event.body.as_deref();

        if self.config.log_request_body {
            log::info!(
                "{}",
                request_log_line(event, self.config.max_logged_body_chars)
            );
        }

        if event.is_base64_encoded {
            log::warn!("Body is flagged as base64-encoded; encoding it verbatim");
        }

        let result = rle::encode(request);

        log_metric!(
            "event" = "encode",
            "input_chars" = request.map_or(0, |r| r.chars().count()),
            "output_chars" = result.chars().count(),
        );

        HttpApiResponse::ok_text(result, &self.config.content_type)
    }

    /// Parses a raw JSON event, handles it and serializes the response.
    pub fn handle_json(&self, raw_event: &str) -> Result<String, EncoderError> {
        if raw_event.trim().is_empty() {
            return Err(EncoderError::EmptyEvent);
        }
        let event: HttpApiEvent = serde_json::from_str(raw_event)?;
        let response = self.handle(&event);
        Ok(serde_json::to_string(&response)?)
    }
}

/// Handles a single event without keeping a handler around.
pub fn handle_request(event: &HttpApiEvent, config: &EncoderConfig) -> HttpApiResponse {
    EncodeHandler::new(Arc::new(config.clone())).handle(event)
}

/// Formats the line recording the raw body received, before encoding.
fn request_log_line(event: &HttpApiEvent, max_body_chars: usize) -> String {
    let shown = match event.body.as_deref() {
        Some(body) => truncate_for_log(body, max_body_chars),
        None => "null".to_string(),
    };
    match event.request_id() {
        Some(id) => format!("[{}] Received request to encode [{}]", id, shown),
        None => format!("Received request to encode [{}]", shown),
    }
}

/// Shortens `body` to at most `max_chars` characters for display.
fn truncate_for_log(body: &str, max_chars: usize) -> String {
    match body.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}... ({} bytes total)", &body[..cut], body.len()),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::bridge::event::RequestContext;

    fn event_with_request_id(body: Option<&str>, request_id: &str) -> HttpApiEvent {
        HttpApiEvent {
            body: body.map(str::to_string),
            request_context: Some(RequestContext {
                request_id: Some(request_id.to_string()),
                http: None,
            }),
            ..HttpApiEvent::default()
        }
    }

    #[test]
    fn test_request_log_line_shows_body() {
        let line = request_log_line(&HttpApiEvent::with_body("aabcccccaaa"), 4096);
        assert_eq!(line, "Received request to encode [aabcccccaaa]");
    }

    #[test]
    fn test_request_log_line_absent_body_is_null() {
        let line = request_log_line(&HttpApiEvent::default(), 4096);
        assert_eq!(line, "Received request to encode [null]");
    }

    #[test]
    fn test_request_log_line_prefixes_request_id() {
        let line = request_log_line(&event_with_request_id(Some("abc"), "req-1"), 4096);
        assert_eq!(line, "[req-1] Received request to encode [abc]");

        let line = request_log_line(&event_with_request_id(None, "req-2"), 4096);
        assert_eq!(line, "[req-2] Received request to encode [null]");
    }

    #[test]
    fn test_request_log_line_truncates_long_body() {
        let line = request_log_line(&HttpApiEvent::with_body("aaaaaaaaaa"), 3);
        assert_eq!(line, "Received request to encode [aaa... (10 bytes total)]");
    }

    #[test]
    fn test_handler_uses_configured_truncation_limit() {
        let config = EncoderConfig {
            max_logged_body_chars: 2,
            ..EncoderConfig::default()
        };
        let handler = EncodeHandler::new(Arc::new(config));
        assert_eq!(handler.config().max_logged_body_chars, 2);

        // Truncation is applied to the log line only; the response carries the full encoding.
        let event = HttpApiEvent::with_body("abcdef");
        assert_eq!(
            request_log_line(&event, handler.config().max_logged_body_chars),
            "Received request to encode [ab... (6 bytes total)]"
        );
        assert_eq!(handler.handle(&event).body.as_deref(), Some("abcdef"));
    }

    #[test]
    fn test_truncate_for_log_short_body_unchanged() {
        assert_eq!(truncate_for_log("abc", 3), "abc");
        assert_eq!(truncate_for_log("", 0), "");
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundaries() {
        assert_eq!(truncate_for_log("ééé", 1), "é... (6 bytes total)");
    }
}
