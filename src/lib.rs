//! This file is the root of the `run_length_encoder` crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring the top-level modules (`kernels`, `bridge`, etc.).
//! 2.  Re-exporting the handful of items callers need.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
pub mod observability; // Make macros available throughout the crate

pub mod bridge;
pub mod config;
pub mod error;
pub mod kernels;

#[doc(hidden)]
pub use log as __log;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use bridge::{handle_request, EncodeHandler, HttpApiEvent, HttpApiResponse};
pub use config::EncoderConfig;
pub use error::EncoderError;
pub use kernels::rle::encode;
