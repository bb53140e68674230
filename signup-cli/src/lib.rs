//! Command-line client for the activity sign-up API

pub mod api_client;
pub mod output;
