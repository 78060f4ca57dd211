//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match `backend/migrations` exactly. `created_at` exists on
//! every table so listings can follow insertion order, but only projects
//! and emission reports expose it.

diesel::table! {
    /// Renewable energy projects.
    renewable_projects (id) {
        id -> Uuid,
        name -> Text,
        state -> Text,
        technology -> Text,
        /// Megawatts, `NUMERIC(10,2)`.
        capacity -> Numeric,
        status -> Text,
        description -> Nullable<Text>,
        /// `NUMERIC(15,2)`.
        investment_amount -> Nullable<Numeric>,
        completion_date -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Organisation emission reports.
    carbon_emissions (id) {
        id -> Uuid,
        organization_name -> Text,
        organization_type -> Text,
        state -> Text,
        reporting_period -> Text,
        energy_emissions -> Numeric,
        transport_emissions -> Numeric,
        waste_emissions -> Numeric,
        total_emissions -> Numeric,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Government financing schemes.
    financing_schemes (id) {
        id -> Uuid,
        name -> Text,
        description -> Text,
        category -> Text,
        funding_amount -> Text,
        eligibility -> Text,
        application_deadline -> Nullable<Text>,
        target_technology -> Nullable<Text>,
        contact_info -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Installed and target capacity per state. `state` is unique.
    regional_capacity (id) {
        id -> Uuid,
        state -> Text,
        solar_capacity -> Numeric,
        wind_capacity -> Numeric,
        hydro_capacity -> Numeric,
        total_capacity -> Numeric,
        target_capacity -> Numeric,
        population -> Nullable<Int4>,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    renewable_projects,
    carbon_emissions,
    financing_schemes,
    regional_capacity,
);
