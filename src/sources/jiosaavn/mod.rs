pub mod helpers;
pub mod manager;
pub mod metadata;
pub mod parser;
pub mod recommendations;
pub mod search;

pub use manager::JioSaavnSource;
pub use metadata::CollectionKind;
