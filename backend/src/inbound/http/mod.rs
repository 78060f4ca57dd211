//! HTTP inbound adapter exposing the dashboard REST API.

use actix_web::web;

pub mod carbon_emissions;
pub mod dashboard;
pub mod error;
pub mod financing_schemes;
pub mod health;
pub mod projects;
pub mod regional_capacity;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub(crate) mod validation;

pub use error::ApiResult;

/// Register every `/api` route.
///
/// Handlers expect a `web::Data<state::HttpState>` in the app data.
///
/// ```
/// use actix_web::{App, web};
/// use backend::inbound::http::{configure_api, state::HttpState};
/// use backend::outbound::memory::MemoryStore;
///
/// let state = HttpState::new(MemoryStore::new().into_ports());
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure_api);
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(projects::list_projects)
            .service(projects::get_project)
            .service(projects::create_project)
            .service(projects::delete_project)
            .service(carbon_emissions::list_carbon_emissions)
            .service(carbon_emissions::get_carbon_emission)
            .service(carbon_emissions::create_carbon_emission)
            .service(carbon_emissions::delete_carbon_emission)
            .service(financing_schemes::list_financing_schemes)
            .service(financing_schemes::get_financing_scheme)
            .service(financing_schemes::create_financing_scheme)
            .service(financing_schemes::delete_financing_scheme)
            .service(regional_capacity::list_regional_capacity)
            .service(regional_capacity::get_regional_capacity)
            .service(regional_capacity::create_regional_capacity)
            .service(regional_capacity::delete_regional_capacity)
            .service(dashboard::dashboard_summary),
    );
}
