use log::Level;

use crate::motion::MotionConfig;

pub const DRIVER_SIGNUP_URL: &str = "https://oximobilidade.wordpress.com/pre-cadastro-motoristas/";
pub const PASSENGER_SIGNUP_URL: &str = "https://oximobilidade.wordpress.com/pre-cadastro-passageiros/";

// Modal ids, matching the `id` fields in static/content.json.
pub const LEGAL_TERMS: &str = "termos";
pub const LEGAL_DRIVER_CLUB: &str = "bmotor";
pub const LEGAL_PASSENGER_CLUB: &str = "bpassageiro";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn motion_config() -> MotionConfig {
    MotionConfig::default()
}
