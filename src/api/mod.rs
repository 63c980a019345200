// Video API module - metadata fetch layer
//
// The backend is a plain JSON HTTP service; this module owns the client,
// its configuration and its error type. Selection logic never lives here.

mod client;
mod errors;

pub use client::{ApiConfig, HttpVideoApi, VideoApi};
pub use errors::ApiError;
