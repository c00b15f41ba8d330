//! Traits describing lookup capabilities and the shared error type.

use std::io::Error as IoError;

use async_trait::async_trait;
use serde_json::Error as JsonError;

use crate::model::{House, Representative, Street, StreetId};

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while looking up street records.
pub enum PortError {
    /// Requested street has no record.
    #[error("Street not found: {0}")]
    StreetNotFound(StreetId),
    /// Reading the backing data failed.
    #[error("I/O error: {0}")]
    Io(#[from] IoError),
    /// Backing data could not be decoded.
    #[error("Parse error: {0}")]
    Parse(#[from] JsonError),
    /// A record violates a store invariant.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
    /// The backing store cannot answer.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl PortError {
    /// Whether this error reports a missing street rather than a store failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::StreetNotFound(_))
    }
}

#[async_trait]
/// Lookup of street records.
pub trait StreetPort: Send + Sync {
    /// Return every known street in store order.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the store cannot be read.
    async fn find_all(&self) -> Result<Vec<Street>, PortError>;

    /// Look up a single street.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the store cannot be read.
    async fn find_by_id(&self, id: &StreetId) -> Result<Option<Street>, PortError>;
}

#[async_trait]
/// Lookup of the representative assigned to a street.
pub trait RepresentativePort: Send + Sync {
    /// Find the representative of a street, if one is assigned.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the store cannot be read.
    async fn find_by_street(&self, street: &StreetId)
    -> Result<Option<Representative>, PortError>;
}

#[async_trait]
/// Lookup of houses by street.
pub trait HousePort: Send + Sync {
    /// Return all houses on a street in store order.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the store cannot be read.
    async fn find_all_by_street(&self, street: &StreetId) -> Result<Vec<House>, PortError>;
}
