// Adapters layer: concrete implementations for external systems (photo
// providers, storage backends).

pub mod pinterest;
pub mod storage;
pub mod unsplash;

pub use pinterest::PinterestProvider;
pub use storage::LocalStorage;
pub use unsplash::UnsplashProvider;
