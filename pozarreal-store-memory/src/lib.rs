//! In-memory record store serving all Pozarreal lookup ports.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use pozarreal_core::{
    backend::{BackendMeta, RecordsBackend},
    model::{House, HouseId, Representative, RepresentativeId, Street, StreetId},
    ports::{HousePort, PortError, RepresentativePort, StreetPort},
};

/// Top-level layout of a JSON dataset file.
#[derive(Debug, Deserialize)]
struct DatasetFile {
    streets: Vec<StreetEntry>,

    #[serde(default)]
    representatives: Vec<RepresentativeEntry>,

    #[serde(default)]
    houses: Vec<HouseEntry>,
}

#[derive(Debug, Deserialize)]
struct StreetEntry {
    id: String,
    name: String,
}

/// Representative plus the street it is assigned to.
#[derive(Debug, Deserialize)]
struct RepresentativeEntry {
    id: String,
    name: String,
    address: String,
    phone: String,
    street: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HouseEntry {
    // generated when absent
    #[serde(default)]
    id: Option<String>,
    street: String,
    number: String,

    #[serde(default)]
    chips_enabled: bool,
}

/// Street, representative, and house records held in memory.
///
/// Streets and houses keep insertion order; each street has at most one
/// representative. Houses may only reference known streets.
#[derive(Debug, Default)]
pub struct MemoryStore {
    streets: Vec<Street>,
    representatives: HashMap<StreetId, Representative>,
    houses: Vec<House>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a street.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::InvalidRecord`] if a street with the same id exists.
    pub fn insert_street(&mut self, street: Street) -> Result<(), PortError> {
        if self.has_street(&street.id) {
            return Err(PortError::InvalidRecord(format!(
                "duplicate street id {}",
                street.id
            )));
        }
        self.streets.push(street);
        Ok(())
    }

    /// Assign the representative of a street.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::InvalidRecord`] if the street is unknown or already
    /// has a representative.
    pub fn assign_representative(
        &mut self,
        street: StreetId,
        representative: Representative,
    ) -> Result<(), PortError> {
        if !self.has_street(&street) {
            return Err(PortError::InvalidRecord(format!(
                "representative {} assigned to unknown street {street}",
                representative.id
            )));
        }
        if self.representatives.contains_key(&street) {
            return Err(PortError::InvalidRecord(format!(
                "street {street} already has a representative"
            )));
        }
        self.representatives.insert(street, representative);
        Ok(())
    }

    /// Add a house.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::InvalidRecord`] if the house references an unknown
    /// street or reuses an existing house id.
    pub fn insert_house(&mut self, house: House) -> Result<(), PortError> {
        if !self.has_street(&house.street) {
            return Err(PortError::InvalidRecord(format!(
                "house {} references unknown street {}",
                house.number, house.street
            )));
        }
        if self.houses.iter().any(|existing| existing.id == house.id) {
            return Err(PortError::InvalidRecord(format!(
                "duplicate house id {}",
                house.id
            )));
        }
        self.houses.push(house);
        Ok(())
    }

    /// Build a store from a JSON dataset.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::Parse`] for malformed JSON and
    /// [`PortError::InvalidRecord`] when records violate store invariants.
    pub fn from_json_str(raw: &str) -> Result<Self, PortError> {
        let dataset: DatasetFile = serde_json::from_str(raw)?;
        let mut store = Self::new();

        for entry in dataset.streets {
            store.insert_street(Street::new(entry.id, entry.name))?;
        }

        for entry in dataset.representatives {
            store.assign_representative(
                StreetId(entry.street),
                Representative {
                    id: RepresentativeId(entry.id),
                    name: entry.name,
                    address: entry.address,
                    phone: entry.phone,
                },
            )?;
        }

        for entry in dataset.houses {
            let id = entry.id.map_or_else(HouseId::generate, HouseId);
            store.insert_house(House {
                id,
                street: StreetId(entry.street),
                number: entry.number,
                chips_enabled: entry.chips_enabled,
            })?;
        }

        debug!(
            streets = store.streets.len(),
            representatives = store.representatives.len(),
            houses = store.houses.len(),
            "dataset parsed"
        );
        Ok(store)
    }

    /// Build a store from a JSON dataset file.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::Io`] if the file cannot be read, otherwise the
    /// errors of [`MemoryStore::from_json_str`].
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, PortError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let store = Self::from_json_str(&raw)?;
        info!(path = %path.display(), streets = store.streets.len(), "loaded dataset");
        Ok(store)
    }

    fn has_street(&self, id: &StreetId) -> bool {
        self.streets.iter().any(|street| &street.id == id)
    }
}

#[async_trait]
impl StreetPort for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Street>, PortError> {
        Ok(self.streets.clone())
    }

    async fn find_by_id(&self, id: &StreetId) -> Result<Option<Street>, PortError> {
        Ok(self.streets.iter().find(|street| &street.id == id).cloned())
    }
}

#[async_trait]
impl RepresentativePort for MemoryStore {
    async fn find_by_street(
        &self,
        street: &StreetId,
    ) -> Result<Option<Representative>, PortError> {
        Ok(self.representatives.get(street).cloned())
    }
}

#[async_trait]
impl HousePort for MemoryStore {
    async fn find_all_by_street(&self, street: &StreetId) -> Result<Vec<House>, PortError> {
        Ok(self
            .houses
            .iter()
            .filter(|house| &house.street == street)
            .cloned()
            .collect())
    }
}

/// Build the backend bundle serving every port from one shared store.
#[must_use]
pub fn backend<D: Into<String>>(store: MemoryStore, description: D) -> RecordsBackend {
    let houses = Arc::new(store);
    let streets = Arc::clone(&houses);
    let representatives = Arc::clone(&houses);

    RecordsBackend {
        meta: BackendMeta {
            name: String::from("memory"),
            description: description.into(),
        },
        streets,
        representatives,
        houses,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pozarreal_core::service::StreetService;
    use tempfile::NamedTempFile;

    use super::*;

    const GARANTIA: &str = r#"{
        "streets": [
            {"id": "400", "name": "Garantia Individual"},
            {"id": "401", "name": "Libertad de Expresion"}
        ],
        "representatives": [
            {"id": "305951", "name": "Ricardo", "address": "Garantia Individual",
             "phone": "4448595714", "street": "400"}
        ],
        "houses": [
            {"id": "h-100", "street": "400", "number": "100", "chipsEnabled": true},
            {"street": "400", "number": "120"},
            {"id": "h-7", "street": "401", "number": "7", "chipsEnabled": true}
        ]
    }"#;

    fn garantia_store() -> MemoryStore {
        MemoryStore::from_json_str(GARANTIA).expect("valid dataset")
    }

    #[tokio::test]
    async fn streets_keep_dataset_order() {
        let store = garantia_store();

        let streets = store.find_all().await.expect("listing succeeds");

        let ids: Vec<&str> = streets.iter().map(|street| street.id.0.as_str()).collect();
        assert_eq!(ids, ["400", "401"], "dataset order preserved");
    }

    #[tokio::test]
    async fn houses_are_matched_by_street_id() {
        let store = garantia_store();

        let houses = store
            .find_all_by_street(&StreetId::from("400"))
            .await
            .expect("lookup succeeds");

        let numbers: Vec<&str> = houses.iter().map(|house| house.number.as_str()).collect();
        assert_eq!(numbers, ["100", "120"], "only houses of street 400");
        let by_name = store
            .find_all_by_street(&StreetId::from("Garantia Individual"))
            .await
            .expect("lookup succeeds");
        assert!(by_name.is_empty(), "street names are not keys");
    }

    #[tokio::test]
    async fn missing_house_fields_get_defaults() {
        let store = garantia_store();

        let houses = store
            .find_all_by_street(&StreetId::from("400"))
            .await
            .expect("lookup succeeds");

        let generated = houses.get(1).expect("second house");
        assert!(!generated.id.0.is_empty(), "id generated");
        assert_ne!(generated.id.0, "h-100", "id is fresh");
        assert!(!generated.chips_enabled, "chips default to disabled");
    }

    #[tokio::test]
    async fn representative_lookup_by_street() {
        let store = garantia_store();

        let assigned = store
            .find_by_street(&StreetId::from("400"))
            .await
            .expect("lookup succeeds")
            .expect("representative assigned");
        let unassigned = store
            .find_by_street(&StreetId::from("401"))
            .await
            .expect("lookup succeeds");

        assert_eq!(assigned.name, "Ricardo", "representative of 400");
        assert!(unassigned.is_none(), "401 has nobody assigned");
    }

    #[test]
    fn duplicate_street_is_rejected() {
        let mut store = MemoryStore::new();
        store
            .insert_street(Street::new("400", "Garantia Individual"))
            .expect("first insert");

        let err = store
            .insert_street(Street::new("400", "Another name"))
            .expect_err("duplicate id");

        assert!(
            matches!(err, PortError::InvalidRecord(_)),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn house_on_unknown_street_is_rejected() {
        let raw = r#"{
            "streets": [{"id": "400", "name": "Garantia Individual"}],
            "houses": [{"street": "Garantia Individual", "number": "100"}]
        }"#;

        let err = MemoryStore::from_json_str(raw).expect_err("house keyed by name");

        assert!(
            matches!(&err, PortError::InvalidRecord(msg) if msg.contains("unknown street")),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn second_representative_is_rejected() {
        let mut store = garantia_store();

        let err = store
            .assign_representative(
                StreetId::from("400"),
                Representative {
                    id: RepresentativeId("1".to_owned()),
                    name: "Otro".to_owned(),
                    address: "Garantia Individual".to_owned(),
                    phone: "0".to_owned(),
                },
            )
            .expect_err("already assigned");

        assert!(
            matches!(err, PortError::InvalidRecord(_)),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn duplicate_house_id_is_rejected() {
        let mut store = garantia_store();

        let err = store
            .insert_house(House {
                id: HouseId("h-100".to_owned()),
                street: StreetId::from("401"),
                number: "9".to_owned(),
                chips_enabled: false,
            })
            .expect_err("id reused");

        assert!(
            matches!(err, PortError::InvalidRecord(_)),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = MemoryStore::from_json_str("{\"streets\": [").expect_err("truncated");

        assert!(matches!(err, PortError::Parse(_)), "unexpected error: {err}");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = MemoryStore::from_json_file("does-not-exist.json").expect_err("no file");

        assert!(matches!(err, PortError::Io(_)), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn file_backed_store_serves_street_info() {
        let mut file = NamedTempFile::with_suffix(".json").expect("temp file");
        file.write_all(GARANTIA.as_bytes()).expect("write dataset");
        let store = MemoryStore::from_json_file(file.path()).expect("load dataset");
        let backend = backend(store, "test dataset");
        let service = StreetService::from_backend(&backend);

        let info = service
            .street_info(&StreetId::from("400"))
            .await
            .expect("street exists");

        assert_eq!(backend.meta.name, "memory", "backend label");
        assert_eq!(info.name, "Garantia Individual", "street name");
        assert_eq!(info.houses.len(), 2, "two houses on 400");
        assert_eq!(info.chips_enabled_count(), 1, "one chip enabled");
        assert_eq!(
            info.representative.map(|representative| representative.phone),
            Some("4448595714".to_owned()),
            "representative phone"
        );
    }

    #[tokio::test]
    async fn empty_dataset_lists_no_streets() {
        let store = MemoryStore::from_json_str(r#"{"streets": []}"#).expect("valid dataset");
        let service = StreetService::from_backend(&backend(store, "empty"));

        let streets = service.streets().await.expect("listing succeeds");

        assert!(streets.is_empty(), "no streets expected");
    }
}
