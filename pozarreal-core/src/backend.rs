//! Bundle of lookup ports served by one data source.

use std::sync::Arc;

use crate::ports::{HousePort, RepresentativePort, StreetPort};

#[derive(Debug, Clone)]
/// Label describing where records come from.
pub struct BackendMeta {
    /// Short name shown to users.
    pub name: String,
    /// Longer description, e.g. the dataset path.
    pub description: String,
}

/// Collection of ports implementing lookups against a single store.
pub struct RecordsBackend {
    /// Static metadata describing the store.
    pub meta: BackendMeta,
    /// Implementation for street lookups.
    pub streets: Arc<dyn StreetPort>,
    /// Implementation for representative lookups.
    pub representatives: Arc<dyn RepresentativePort>,
    /// Implementation for house lookups.
    pub houses: Arc<dyn HousePort>,
}
