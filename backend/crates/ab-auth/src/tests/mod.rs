mod memory_store;
mod password_hasher;
