//! This module contains the pure, stateless kernel for run-length encoding text.
//!
//! Each maximal run of identical consecutive characters is written as the
//! character followed by the decimal run length. A run of length 1 is written as
//! the bare character. The output is not escaped, so an input that already
//! contains digits cannot in general be decoded back unambiguously.
//!
//! The kernel has no error path: every input, including an absent one, encodes.

use std::fmt::Write;

//==================================================================================
// 1. Public API
//==================================================================================

/// Encodes `input`, treating an absent input as the empty string.
pub fn encode(input: Option<&str>) -> String {
    encode_str(input.unwrap_or_default())
}

/// Encodes a present input into a freshly allocated `String`.
pub fn encode_str(input: &str) -> String {
    let mut output_buf = String::new();
    encode_into(input, &mut output_buf);
    output_buf
}

/// Encodes `input` into `output_buf`, which is cleared first.
pub fn encode_into(input: &str, output_buf: &mut String) {
    output_buf.clear();

    let mut chars = input.chars();
    let Some(mut current) = chars.next() else {
        return;
    };
    // Upper bound for a run-free input; runs only shrink the output.
    output_buf.reserve(input.len());

    let mut run_count: usize = 1;
    for ch in chars {
        if ch == current {
            run_count += 1;
        } else {
            flush_run(current, run_count, output_buf);
            current = ch;
            run_count = 1;
        }
    }

    flush_run(current, run_count, output_buf);
}

//==================================================================================
// 2. Internal Helpers
//==================================================================================

#[inline]
fn flush_run(ch: char, run_count: usize, output_buf: &mut String) {
    output_buf.push(ch);
    if run_count > 1 {
        // Writing into a String cannot fail.
        let _ = write!(output_buf, "{}", run_count);
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
