use crate::domain::model::ProviderKind;
use crate::utils::error::{GalleryError, Result};
use std::collections::HashSet;
use std::env;

pub const UNSPLASH_KEY_VAR: &str = "UNSPLASH_ACCESS_KEY";
pub const PINTEREST_TOKEN_VAR: &str = "PINTEREST_ACCESS_TOKEN";

/// Provider credentials from the process environment. A secret is only
/// required when its provider appears in the site config.
#[derive(Debug, Clone, Default)]
pub struct Secrets {
    pub unsplash_access_key: Option<String>,
    pub pinterest_access_token: Option<String>,
}

impl Secrets {
    pub fn from_env() -> Self {
        Self {
            unsplash_access_key: non_empty_var(UNSPLASH_KEY_VAR),
            pinterest_access_token: non_empty_var(PINTEREST_TOKEN_VAR),
        }
    }

    pub fn require_for(&self, providers: &HashSet<ProviderKind>) -> Result<()> {
        for provider in providers {
            let (present, var) = match provider {
                ProviderKind::Unsplash => (self.unsplash_access_key.is_some(), UNSPLASH_KEY_VAR),
                ProviderKind::Pinterest => {
                    (self.pinterest_access_token.is_some(), PINTEREST_TOKEN_VAR)
                }
            };
            if !present {
                return Err(GalleryError::ConfigError {
                    message: format!(
                        "provider '{}' is configured but {} is not set",
                        provider, var
                    ),
                });
            }
        }
        Ok(())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
