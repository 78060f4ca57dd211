//! Domain types, validation and services.
//!
//! Purpose: define the dashboard records and the rules applied to them,
//! independent of HTTP and of any storage engine. Adapters live under
//! `inbound` and `outbound` and reach the domain through [`ports`].
//!
//! Public surface:
//! - Records: [`Project`], [`CarbonEmission`], [`FinancingScheme`],
//!   [`RegionalCapacity`] and their `New*` payloads.
//! - Value types: [`RecordId`], [`DecimalText`] and the enumerations.
//! - Validation: [`validation`] turns raw JSON into `New*` payloads.
//! - Services: [`DashboardSummary`] and [`DemoDataSeeder`].
//! - Errors: [`Error`] and [`ErrorCode`].

pub mod decimal_text;
pub mod demo_data;
pub mod enums;
pub mod error;
pub mod filters;
pub mod metrics;
pub mod ports;
pub mod record_id;
pub mod records;
pub mod trace_id;
pub mod validation;

pub use self::decimal_text::{
    DecimalOverflowError, DecimalText, NumericBounds, ParseDecimalTextError,
};
pub use self::demo_data::{DemoDataError, DemoDataSeeder, DemoSeedOutcome, SeedCounts};
pub use self::enums::{
    OrganizationType, ProjectStatus, SchemeCategory, Technology, TextEnum, UnknownLabelError,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::filters::{ProjectFilter, SchemeFilter};
pub use self::metrics::{CapacitySummary, DashboardSummary, EmissionSummary, ProjectSummary};
pub use self::record_id::RecordId;
pub use self::records::{
    CarbonEmission, FinancingScheme, NewCarbonEmission, NewFinancingScheme, NewProject,
    NewRegionalCapacity, Project, RegionalCapacity,
};
pub use self::trace_id::TraceId;
pub use self::validation::{FieldViolation, ValidationErrors, ViolationKind};

/// HTTP header carrying the request's trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
