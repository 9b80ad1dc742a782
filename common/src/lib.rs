pub mod catalog;
pub mod firestore;
pub mod loader;
pub mod media;
pub mod record;
pub mod store;
