//! Learning-path API: prompt composition, response normalization, and the
//! route handlers for the two generation endpoints.

pub mod handlers;
pub mod models;
pub mod normalize;
pub mod prompts;
