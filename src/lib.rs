//! httpget - Single-shot HTTP/1.0 file download client
//!
//! Core library for target validation, request formatting, response
//! parsing, and the download pipeline.

pub mod cli;
pub mod download;
pub mod http;
pub mod target;
