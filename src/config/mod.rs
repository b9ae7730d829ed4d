//! Run configuration.
//!
//! Settings come from command-line flags, with environment variable
//! fallbacks for the GitLab domain, access token and request timeout.

pub mod settings;

pub use settings::Settings;
