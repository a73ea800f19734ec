//! Edges of the process: CSV card import and the JSON request/response
//! boundary used by the binary.

pub mod csv;
pub mod json;
