pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

pub use crate::adapters::{LocalStorage, PinterestProvider, UnsplashProvider};
pub use crate::config::{secrets::Secrets, site_config::SiteConfig, CliConfig};
pub use crate::core::builder::SiteEngine;
pub use crate::utils::error::{GalleryError, Result};
