//! This module declares the pure, stateless text kernels.
//!
//! Kernels perform no I/O and hold no state. They are the only place where the
//! encoding format itself is defined; the `bridge` layer calls into them.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Run-length encoding of text.
pub mod rle;
