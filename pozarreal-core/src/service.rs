//! Street service facade combining the three lookup ports.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::backend::RecordsBackend;
use crate::model::{Street, StreetId, StreetInfo};
use crate::ports::{HousePort, PortError, RepresentativePort, StreetPort};

/// Public entry point for listing streets and assembling street info.
pub struct StreetService {
    streets: Arc<dyn StreetPort>,
    representatives: Arc<dyn RepresentativePort>,
    houses: Arc<dyn HousePort>,
}

impl StreetService {
    /// Create a new service bound to the provided ports.
    #[must_use]
    pub fn new(
        streets: Arc<dyn StreetPort>,
        representatives: Arc<dyn RepresentativePort>,
        houses: Arc<dyn HousePort>,
    ) -> Self {
        Self {
            streets,
            representatives,
            houses,
        }
    }

    /// Create a new service using all ports of a backend.
    #[must_use]
    pub fn from_backend(backend: &RecordsBackend) -> Self {
        Self::new(
            Arc::clone(&backend.streets),
            Arc::clone(&backend.representatives),
            Arc::clone(&backend.houses),
        )
    }

    /// List all streets in store order.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the street store fails.
    pub async fn streets(&self) -> Result<Vec<Street>, PortError> {
        let streets = self.streets.find_all().await?;
        debug!(count = streets.len(), "listed streets");
        Ok(streets)
    }

    /// Load a street together with its representative and houses.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::StreetNotFound`] if no street has the given id,
    /// or the unchanged [`PortError`] of whichever store fails.
    pub async fn street_info(&self, street_id: &StreetId) -> Result<StreetInfo, PortError> {
        let street = self
            .streets
            .find_by_id(street_id)
            .await?
            .ok_or_else(|| PortError::StreetNotFound(street_id.clone()))?;

        let representative = self.representatives.find_by_street(street_id).await?;
        if representative.is_none() {
            warn!(street = %street_id, "street has no representative assigned");
        }

        let houses = self.houses.find_all_by_street(street_id).await?;
        debug!(street = %street_id, houses = houses.len(), "assembled street info");

        Ok(StreetInfo {
            id: street.id,
            name: street.name,
            representative,
            houses,
        })
    }
}
