mod accident;
mod user_identity;
