pub mod aggregate;
pub mod builder;

pub use crate::domain::model::{
    BuildReport, CategoryPhotos, PageProps, Photo, ProviderFetch, ProviderKind,
};
pub use crate::domain::ports::{PhotoProvider, Storage};
pub use crate::utils::error::Result;
