use crate::adapters::{pinterest::PINTEREST_API_BASE, unsplash::UNSPLASH_API_BASE};
use crate::domain::model::ProviderKind;
use crate::utils::error::{GalleryError, Result};
use crate::utils::validation::{validate_non_empty, validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Site configuration table. One file replaces the original's per-page
/// copies: every page, its category tabs, and the provider queries feeding
/// each tab are data here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub pages: Vec<PageConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    pub title: String,
    pub output_path: String,
    #[serde(default = "default_per_page")]
    pub per_page: usize,
    #[serde(default = "default_unsplash_base")]
    pub unsplash_base_url: String,
    #[serde(default = "default_pinterest_base")]
    pub pinterest_base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub slug: String,
    pub title: String,
    pub categories: Vec<CategoryConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    pub display: String,
    pub queries: Vec<QueryConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    pub provider: ProviderKind,
    pub query: String,
}

fn default_per_page() -> usize {
    30
}

fn default_unsplash_base() -> String {
    UNSPLASH_API_BASE.to_string()
}

fn default_pinterest_base() -> String {
    PINTEREST_API_BASE.to_string()
}

impl SiteConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Providers actually referenced by at least one query. Drives the
    /// startup secret check so a missing token fails before any fetch.
    pub fn providers_in_use(&self) -> HashSet<ProviderKind> {
        self.pages
            .iter()
            .flat_map(|page| &page.categories)
            .flat_map(|category| &category.queries)
            .map(|query| query.provider)
            .collect()
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty("site.title", &self.site.title)?;
        validate_non_empty("site.output_path", &self.site.output_path)?;
        validate_positive_number("site.per_page", self.site.per_page, 1)?;
        validate_url("site.unsplash_base_url", &self.site.unsplash_base_url)?;
        validate_url("site.pinterest_base_url", &self.site.pinterest_base_url)?;

        if self.pages.is_empty() {
            return Err(GalleryError::ConfigError {
                message: "at least one [[pages]] entry is required".to_string(),
            });
        }

        let mut seen_slugs = HashSet::new();
        for page in &self.pages {
            validate_non_empty("pages.slug", &page.slug)?;
            validate_non_empty("pages.title", &page.title)?;

            if !seen_slugs.insert(page.slug.as_str()) {
                return Err(GalleryError::ConfigError {
                    message: format!("duplicate page slug: {}", page.slug),
                });
            }

            if page.categories.is_empty() {
                return Err(GalleryError::ConfigError {
                    message: format!("page '{}' has no categories", page.slug),
                });
            }

            for category in &page.categories {
                validate_non_empty("categories.name", &category.name)?;
                validate_non_empty("categories.display", &category.display)?;

                if category.queries.is_empty() {
                    return Err(GalleryError::ConfigError {
                        message: format!(
                            "category '{}' on page '{}' has no queries",
                            category.name, page.slug
                        ),
                    });
                }

                for query in &category.queries {
                    validate_non_empty("queries.query", &query.query)?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[site]
title = "Photography Website"
output_path = "./public"

[[pages]]
slug = "index"
title = "Nature"

[[pages.categories]]
name = "oceans"
display = "Oceans"
queries = [{ provider = "unsplash", query = "oceans" }]
"#;

    #[test]
    fn parses_minimal_config_with_defaults() {
        let config = SiteConfig::from_str(MINIMAL).unwrap();

        assert_eq!(config.site.per_page, 30);
        assert_eq!(config.site.unsplash_base_url, UNSPLASH_API_BASE);
        assert_eq!(config.pages.len(), 1);
        assert_eq!(config.pages[0].categories[0].queries[0].provider, ProviderKind::Unsplash);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn providers_in_use_reflects_queries() {
        let config = SiteConfig::from_str(MINIMAL).unwrap();
        let providers = config.providers_in_use();

        assert!(providers.contains(&ProviderKind::Unsplash));
        assert!(!providers.contains(&ProviderKind::Pinterest));
    }

    #[test]
    fn rejects_unknown_provider_names() {
        let bad = MINIMAL.replace("unsplash", "flickr");
        assert!(SiteConfig::from_str(&bad).is_err());
    }

    #[test]
    fn rejects_page_without_categories() {
        let content = r#"
[site]
title = "Photography Website"
output_path = "./public"

[[pages]]
slug = "index"
title = "Nature"
categories = []
"#;
        let config = SiteConfig::from_str(content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_duplicate_slugs() {
        let doubled = format!(
            "{}\n[[pages]]\nslug = \"index\"\ntitle = \"Again\"\n\n[[pages.categories]]\nname = \"forests\"\ndisplay = \"Forests\"\nqueries = [{{ provider = \"unsplash\", query = \"forests\" }}]\n",
            MINIMAL
        );
        let config = SiteConfig::from_str(&doubled).unwrap();
        assert!(config.validate().is_err());
    }
}
