pub mod listing;
pub mod reference;
pub mod store;
pub mod traits;

pub use store::PgCatalog;
pub use traits::CatalogReader;
