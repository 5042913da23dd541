pub mod accident;
pub mod user_identity;
