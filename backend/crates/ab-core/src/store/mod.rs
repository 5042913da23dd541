pub mod credential_store;
pub mod store_error;
