use crate::domain::model::{Photo, ProviderKind};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[async_trait]
pub trait PhotoProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Search the provider for a category keyword and return normalized
    /// photos. Transport and response-shape failures are errors here; the
    /// site engine downgrades them to empty-with-reason outcomes.
    async fn search(&self, query: &str) -> Result<Vec<Photo>>;
}
