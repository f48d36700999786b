//! Wiring from the connection pool to the HTTP handler state.

use std::sync::Arc;

use actix_web::web;

use user_service::domain::UserService;
use user_service::inbound::http::state::HttpState;
use user_service::outbound::persistence::DieselUserRepository;

use super::ServerConfig;

/// Build the shared handler state: Diesel repository, user service, ports.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let repository = DieselUserRepository::new(config.db_pool.clone())
        .with_query_timeout(config.query_timeout);
    let service = Arc::new(UserService::new(Arc::new(repository)));
    web::Data::new(HttpState::new(service.clone(), service))
}
