use crate::config::site_config::{PageConfig, QueryConfig, SiteConfig};
use crate::core::aggregate::aggregate_all;
use crate::domain::model::{BuildReport, CategoryPhotos, PageProps, ProviderFetch, ProviderKind};
use crate::domain::ports::{PhotoProvider, Storage};
use crate::render;
use crate::utils::error::Result;
use chrono::Utc;
use futures::future::join_all;
use std::collections::HashMap;

/// Drives the whole build: per page, fan out every (category, query) pair
/// concurrently, join once, aggregate, render, write.
pub struct SiteEngine<S: Storage> {
    storage: S,
    config: SiteConfig,
    providers: HashMap<ProviderKind, Box<dyn PhotoProvider>>,
}

impl<S: Storage> SiteEngine<S> {
    pub fn new(
        storage: S,
        config: SiteConfig,
        providers: HashMap<ProviderKind, Box<dyn PhotoProvider>>,
    ) -> Self {
        Self {
            storage,
            config,
            providers,
        }
    }

    pub async fn run(&self) -> Result<BuildReport> {
        tracing::info!("Building {} page(s)", self.config.pages.len());

        let mut report = BuildReport {
            pages_written: Vec::new(),
            warnings: Vec::new(),
        };

        for page in &self.config.pages {
            let props = self.build_page(page).await;

            let html = render::render_page(&self.config.site.title, &props);
            let html_name = format!("{}.html", page.slug);
            self.storage.write_file(&html_name, html.as_bytes()).await?;

            let props_json = serde_json::to_vec_pretty(&props)?;
            self.storage
                .write_file(&format!("{}.props.json", page.slug), &props_json)
                .await?;

            tracing::info!(
                page = %page.slug,
                photos = props.all.len(),
                warnings = props.warnings.len(),
                "page written"
            );

            report.warnings.extend(props.warnings.iter().cloned());
            report.pages_written.push(html_name);
        }

        Ok(report)
    }

    /// Fetch every query of every category on the page concurrently and
    /// assemble the page props. Never fails: degraded provider calls become
    /// empty lists plus a warning.
    async fn build_page(&self, page: &PageConfig) -> PageProps {
        let category_futures = page.categories.iter().map(|category| {
            let name = category.name.as_str();
            let queries = category.queries.as_slice();
            async move {
                let outcomes = join_all(queries.iter().map(|query| self.run_query(name, query))).await;
                (category, outcomes)
            }
        });

        let fetched = join_all(category_futures).await;

        let mut warnings = Vec::new();
        let mut categories = Vec::new();
        for (category, outcomes) in fetched {
            let mut photos = Vec::new();
            for outcome in outcomes {
                if let Some(reason) = &outcome.failure {
                    warnings.push(format!(
                        "{} search for category '{}' returned no photos: {}",
                        outcome.provider, outcome.category, reason
                    ));
                }
                photos.extend(outcome.photos);
            }
            categories.push(CategoryPhotos {
                name: category.name.clone(),
                display: category.display.clone(),
                photos,
            });
        }

        let all = aggregate_all(&categories);

        PageProps {
            slug: page.slug.clone(),
            title: page.title.clone(),
            categories,
            all,
            warnings,
            generated_at: Utc::now(),
        }
    }

    async fn run_query(&self, category: &str, query: &QueryConfig) -> ProviderFetch {
        let Some(provider) = self.providers.get(&query.provider) else {
            return ProviderFetch::degraded(
                query.provider,
                category,
                format!("no credentials configured for provider '{}'", query.provider),
            );
        };

        match provider.search(&query.query).await {
            Ok(photos) => ProviderFetch::success(query.provider, category, photos),
            Err(e) => {
                tracing::warn!(
                    provider = %query.provider,
                    category,
                    query = %query.query,
                    error = %e,
                    "provider call degraded to empty result"
                );
                ProviderFetch::degraded(query.provider, category, e.to_string())
            }
        }
    }
}
