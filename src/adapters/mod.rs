// Adapters layer: concrete implementations of the domain ports.

pub mod omdb;

pub use omdb::OmdbClient;
