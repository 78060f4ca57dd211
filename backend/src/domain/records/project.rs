//! Renewable energy projects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DecimalText, ProjectStatus, RecordId, Technology};

/// Validated payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    pub state: String,
    pub technology: Technology,
    /// Nameplate capacity in megawatts.
    pub capacity: DecimalText,
    pub status: ProjectStatus,
    pub description: Option<String>,
    pub investment_amount: Option<DecimalText>,
    /// Free-text completion date, for example `2025-06-30`.
    pub completion_date: Option<String>,
}

/// Stored project.
///
/// # Examples
/// ```
/// use backend::domain::{NewProject, ProjectStatus, RecordId, Technology};
/// use chrono::Utc;
///
/// let payload = NewProject {
///     name: "Bhadla Solar Park".into(),
///     state: "Rajasthan".into(),
///     technology: Technology::Solar,
///     capacity: "2245".parse().expect("decimal"),
///     status: ProjectStatus::Operational,
///     description: None,
///     investment_amount: None,
///     completion_date: None,
/// };
/// let project = payload.clone().into_record(RecordId::random(), Utc::now());
/// assert_eq!(project.payload(), payload);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: RecordId,
    pub name: String,
    pub state: String,
    pub technology: Technology,
    pub capacity: DecimalText,
    pub status: ProjectStatus,
    pub description: Option<String>,
    pub investment_amount: Option<DecimalText>,
    pub completion_date: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewProject {
    /// Attach store-assigned fields.
    pub fn into_record(self, id: RecordId, created_at: DateTime<Utc>) -> Project {
        let Self {
            name,
            state,
            technology,
            capacity,
            status,
            description,
            investment_amount,
            completion_date,
        } = self;
        Project {
            id,
            name,
            state,
            technology,
            capacity,
            status,
            description,
            investment_amount,
            completion_date,
            created_at,
        }
    }
}

impl Project {
    /// The client-supplied part of the record.
    pub fn payload(&self) -> NewProject {
        NewProject {
            name: self.name.clone(),
            state: self.state.clone(),
            technology: self.technology,
            capacity: self.capacity,
            status: self.status,
            description: self.description.clone(),
            investment_amount: self.investment_amount,
            completion_date: self.completion_date.clone(),
        }
    }
}
