pub mod generate_config;
pub mod locate;
pub mod search;
