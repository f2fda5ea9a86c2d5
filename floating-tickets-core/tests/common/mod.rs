#![allow(dead_code)]

use jwt_auth::test::create_jwt;
use std::sync::Once;
use uuid::Uuid;

static INIT_ENV_ONCE: Once = Once::new();

pub fn init_env() {
    INIT_ENV_ONCE.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

pub fn address() -> String {
    init_env();
    std::env::var("FLOATING_TICKETS_CORE_BIND_ADDRESS").unwrap()
}

pub fn create_agent_jwt_with_id(user_id: Uuid) -> String {
    encode_jwt(user_id, &["travel_agency_floating_tickets"])
}

pub fn create_agent_jwt() -> String {
    create_agent_jwt_with_id(Uuid::new_v4())
}

pub fn create_jwt_without_roles() -> String {
    encode_jwt(Uuid::new_v4(), &[])
}

fn encode_jwt(user_id: Uuid, roles: &[&str]) -> String {
    init_env();
    let jwt_algorithms = std::env::var("FLOATING_TICKETS_CORE_JWT_ALGORITHMS").unwrap();
    let jwt_key = std::env::var("FLOATING_TICKETS_CORE_JWT_TEST_ENCODE_KEY").unwrap();

    create_jwt(user_id, roles, &jwt_algorithms, &jwt_key)
}
