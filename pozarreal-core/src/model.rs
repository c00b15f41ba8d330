//! Domain data structures for streets, representatives, and houses.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Identifier for a street record.
pub struct StreetId(pub String);

impl fmt::Display for StreetId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<&str> for StreetId {
    fn from(raw: &str) -> Self {
        StreetId(raw.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Identifier for a street representative.
pub struct RepresentativeId(pub String);

impl fmt::Display for RepresentativeId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Identifier for a house, usually a generated token.
pub struct HouseId(pub String);

impl HouseId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        HouseId(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for HouseId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A named street.
pub struct Street {
    /// Unique identifier.
    pub id: StreetId,
    /// Display name.
    pub name: String,
}

impl Street {
    /// Construct a street record.
    #[must_use]
    pub fn new<I: Into<String>, N: Into<String>>(id: I, name: N) -> Self {
        Self {
            id: StreetId(id.into()),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Contact person assigned to a street.
pub struct Representative {
    /// Unique identifier.
    pub id: RepresentativeId,
    /// Full name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Phone number as entered.
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A dwelling on a street.
pub struct House {
    /// Unique identifier.
    pub id: HouseId,
    /// Street the house belongs to.
    pub street: StreetId,
    /// House number as displayed, e.g. “100” or “12B”.
    pub number: String,
    /// Whether access chips are enabled for this house.
    pub chips_enabled: bool,
}

impl House {
    /// Construct a house with a freshly generated identifier.
    #[must_use]
    pub fn new<N: Into<String>>(street: StreetId, number: N, chips_enabled: bool) -> Self {
        Self {
            id: HouseId::generate(),
            street,
            number: number.into(),
            chips_enabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Composite view of a street with its representative and houses.
///
/// Built per request and never stored.
pub struct StreetInfo {
    /// Identifier copied from the street.
    pub id: StreetId,
    /// Name copied from the street.
    pub name: String,
    /// Representative assigned to the street, if any.
    pub representative: Option<Representative>,
    /// Houses on the street, in store order.
    pub houses: Vec<House>,
}

impl StreetInfo {
    /// Number of houses on the street.
    #[must_use]
    pub fn house_count(&self) -> usize {
        self.houses.len()
    }

    /// Number of houses with access chips enabled.
    #[must_use]
    pub fn chips_enabled_count(&self) -> usize {
        self.houses.iter().filter(|house| house.chips_enabled).count()
    }
}
