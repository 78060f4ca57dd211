//! Demonstration data set types and JSON parsing.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

const SUPPORTED_VERSION: u32 = 1;

const EMBEDDED_JSON: &str = include_str!("../data/demo.json");

/// Regional installed capacity seed. Capacities are megawatts as decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSeed {
    /// State or territory name; unique within the data set.
    pub state: String,
    /// Installed solar capacity.
    pub solar_capacity: String,
    /// Installed wind capacity.
    pub wind_capacity: String,
    /// Installed hydro capacity.
    pub hydro_capacity: String,
    /// Sum of solar, wind and hydro capacity.
    pub total_capacity: String,
    /// Capacity target for the region.
    pub target_capacity: String,
    /// Resident population, when known.
    #[serde(default)]
    pub population: Option<i32>,
}

/// Renewable project seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSeed {
    /// Project name; unique within the data set.
    pub name: String,
    /// Host state.
    pub state: String,
    /// Generation technology label.
    pub technology: String,
    /// Nameplate capacity as decimal text.
    pub capacity: String,
    /// Lifecycle status label.
    pub status: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Investment amount as decimal text.
    #[serde(default)]
    pub investment_amount: Option<String>,
    /// Expected or actual completion date.
    #[serde(default)]
    pub completion_date: Option<String>,
}

/// Financing scheme seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeSeed {
    /// Scheme name; unique within the data set.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Scheme category label.
    pub category: String,
    /// Funding amount as free text.
    pub funding_amount: String,
    /// Eligibility summary.
    pub eligibility: String,
    /// Application deadline as free text.
    #[serde(default)]
    pub application_deadline: Option<String>,
    /// Technology the scheme targets.
    #[serde(default)]
    pub target_technology: Option<String>,
    /// Contact details.
    #[serde(default)]
    pub contact_info: Option<String>,
}

/// A parsed and checked demonstration data set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoDataset {
    regions: Vec<RegionSeed>,
    projects: Vec<ProjectSeed>,
    schemes: Vec<SchemeSeed>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataset {
    version: u32,
    #[serde(default)]
    regions: Vec<RegionSeed>,
    #[serde(default)]
    projects: Vec<ProjectSeed>,
    #[serde(default)]
    schemes: Vec<SchemeSeed>,
}

impl DemoDataset {
    /// Parse the data set embedded in this crate.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the embedded document is invalid, which
    /// indicates a packaging defect.
    pub fn embedded() -> Result<Self, DatasetError> {
        Self::from_json(EMBEDDED_JSON)
    }

    /// Parse a data set from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if:
    /// - the JSON is malformed or misses required fields
    /// - the version is unsupported
    /// - a region state, project name or scheme name is repeated
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let raw: RawDataset = serde_json::from_str(json).map_err(|e| DatasetError::Parse {
            message: e.to_string(),
        })?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawDataset) -> Result<Self, DatasetError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(DatasetError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        let mut states = BTreeSet::new();
        for region in &raw.regions {
            if !states.insert(region.state.as_str()) {
                return Err(DatasetError::DuplicateRegion {
                    state: region.state.clone(),
                });
            }
        }
        ensure_unique_names("projects", raw.projects.iter().map(|p| p.name.as_str()))?;
        ensure_unique_names("schemes", raw.schemes.iter().map(|s| s.name.as_str()))?;

        Ok(Self {
            regions: raw.regions,
            projects: raw.projects,
            schemes: raw.schemes,
        })
    }

    /// Region seeds in document order.
    pub fn regions(&self) -> &[RegionSeed] {
        &self.regions
    }

    /// Project seeds in document order.
    pub fn projects(&self) -> &[ProjectSeed] {
        &self.projects
    }

    /// Scheme seeds in document order.
    pub fn schemes(&self) -> &[SchemeSeed] {
        &self.schemes
    }
}

fn ensure_unique_names<'a>(
    collection: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), DatasetError> {
    let mut seen = BTreeSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(DatasetError::DuplicateName {
                collection,
                name: name.to_owned(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn rejects_unsupported_version() {
        let err = DemoDataset::from_json(r#"{"version": 2}"#).expect_err("version 2 rejected");
        assert_eq!(
            err,
            DatasetError::UnsupportedVersion {
                expected: 1,
                actual: 2
            }
        );
    }

    #[rstest]
    fn missing_collections_default_to_empty() {
        let dataset = DemoDataset::from_json(r#"{"version": 1}"#).expect("minimal document");
        assert!(dataset.regions().is_empty());
        assert!(dataset.projects().is_empty());
        assert!(dataset.schemes().is_empty());
    }

    #[rstest]
    fn rejects_duplicate_region_state() {
        let json = r#"{
            "version": 1,
            "regions": [
                {"state": "Goa", "solarCapacity": "1", "windCapacity": "1", "hydroCapacity": "1", "totalCapacity": "3", "targetCapacity": "5"},
                {"state": "Goa", "solarCapacity": "2", "windCapacity": "2", "hydroCapacity": "2", "totalCapacity": "6", "targetCapacity": "9"}
            ]
        }"#;
        let err = DemoDataset::from_json(json).expect_err("duplicate state rejected");
        assert_eq!(
            err,
            DatasetError::DuplicateRegion {
                state: "Goa".to_owned()
            }
        );
    }

    #[rstest]
    #[case(r#"{"version": 1, "projects": [{"name": "a"}]}"#)]
    #[case("not json")]
    fn malformed_documents_are_parse_errors(#[case] json: &str) {
        let err = DemoDataset::from_json(json).expect_err("malformed document");
        assert!(matches!(err, DatasetError::Parse { .. }));
    }
}
