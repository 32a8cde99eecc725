mod azure_store;
mod local_store;
mod memory_store;
mod store_factory;

pub use azure_store::AzureContentStore;
pub use local_store::LocalContentStore;
pub use memory_store::InMemoryContentStore;
pub use store_factory::ContentStoreFactory;
