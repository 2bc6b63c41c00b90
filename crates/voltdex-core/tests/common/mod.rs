use voltdex_core::{MemoryBackend, Store};

/// Create a new empty, unseeded Store for testing
#[allow(dead_code)]
pub fn new_store() -> Store<MemoryBackend> {
    Store::new(MemoryBackend::new())
}

/// Create a Store holding the built-in dataset
#[allow(dead_code)]
pub fn seeded_store() -> Store<MemoryBackend> {
    Store::open(MemoryBackend::new()).expect("seeding an in-memory store")
}
