//! GitHub REST user lookups
//!
//! Sends the request and hands back the raw status and body;
//! interpreting the body is left to the caller.

pub mod index;
