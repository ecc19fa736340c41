pub mod jiosaavn;

pub use jiosaavn::JioSaavnSource;
