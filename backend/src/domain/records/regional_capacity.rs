//! Installed renewable capacity per state.

use serde::{Deserialize, Serialize};

use crate::domain::{DecimalText, RecordId};

/// Validated payload for recording a region's capacity, in megawatts.
///
/// `total_capacity` is taken as supplied; the store does not recompute it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRegionalCapacity {
    pub state: String,
    pub solar_capacity: DecimalText,
    pub wind_capacity: DecimalText,
    pub hydro_capacity: DecimalText,
    pub total_capacity: DecimalText,
    pub target_capacity: DecimalText,
    pub population: Option<i32>,
}

/// Stored regional capacity. Keyed by id, and looked up by `state`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalCapacity {
    pub id: RecordId,
    pub state: String,
    pub solar_capacity: DecimalText,
    pub wind_capacity: DecimalText,
    pub hydro_capacity: DecimalText,
    pub total_capacity: DecimalText,
    pub target_capacity: DecimalText,
    pub population: Option<i32>,
}

impl NewRegionalCapacity {
    /// Attach the store-assigned identifier.
    pub fn into_record(self, id: RecordId) -> RegionalCapacity {
        let Self {
            state,
            solar_capacity,
            wind_capacity,
            hydro_capacity,
            total_capacity,
            target_capacity,
            population,
        } = self;
        RegionalCapacity {
            id,
            state,
            solar_capacity,
            wind_capacity,
            hydro_capacity,
            total_capacity,
            target_capacity,
            population,
        }
    }
}

impl RegionalCapacity {
    /// The client-supplied part of the record.
    pub fn payload(&self) -> NewRegionalCapacity {
        NewRegionalCapacity {
            state: self.state.clone(),
            solar_capacity: self.solar_capacity,
            wind_capacity: self.wind_capacity,
            hydro_capacity: self.hydro_capacity,
            total_capacity: self.total_capacity,
            target_capacity: self.target_capacity,
            population: self.population,
        }
    }
}
