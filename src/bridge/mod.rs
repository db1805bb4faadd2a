// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the invocation boundary of the crate. It owns the HTTP API
// wire format and nothing else; the encoding itself lives in the pure
// `kernels::rle` module.
//
// Data Flow:
//
//   1. [Entry Point (main.rs)]            -> Reads one raw JSON event
//         |
//         `-> EncodeHandler::handle_json ->
//
//   2. [Event Parsing (event.rs)]         -> `HttpApiEvent`
//         |
//         `-> EncodeHandler::handle: logs the body, calls the kernel ->
//
//   3. [Kernel (kernels::rle::encode)]    -> Returns the encoded `String`
//         |
//         `-> wrapped as `HttpApiResponse` (200, text/plain) and serialized
//
// ====================================================================================
pub mod event;
pub mod handler;

pub use event::{HttpApiEvent, HttpApiResponse, RequestContext};
pub use handler::{handle_request, EncodeHandler};
