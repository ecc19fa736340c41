pub mod base;
pub mod cache;
pub mod jiosaavn;
pub mod logging;
pub mod server;

pub use base::*;
pub use cache::*;
pub use jiosaavn::*;
pub use logging::*;
pub use server::*;
