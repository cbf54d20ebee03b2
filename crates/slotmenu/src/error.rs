//! Menu builder error types.

use slotmenu_core::HostError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("menu configuration error: {0}")]
    Configuration(String),

    #[error("failed to clone menu: {0}")]
    Clone(#[source] HostError),
}
