//! Error types shared by the listpage crates

use crate::settings::SettingsError;

/// Errors raised by pagination state, URL building and output
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// Totals were requested before the result counts were recorded
	#[error("pagination state is not ready: call setup_query() with the result counts first")]
	NotReady,

	#[error("Invalid URL: {0}")]
	InvalidUrl(String),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Settings error: {0}")]
	Settings(#[from] SettingsError),
}

/// Result type alias for listpage operations
pub type Result<T> = std::result::Result<T, Error>;
