//! 캠페인 저장소 팩토리 어댑터.

use anyhow::{Context, Result, bail};
use url::Url;

use crate::application::ports::{CampaignStore, CampaignStoreFactory};
use crate::infrastructure::config::{
    Config, STORE_API_KEY_ENV, STORE_ENDPOINT_ENV, STORE_PROJECT_ID_ENV, resolve_store_api_key,
    resolve_store_endpoint, resolve_store_project_id,
};
use crate::infrastructure::store::AppwriteStore;

/// 설정에서 Appwrite 저장소 클라이언트를 조립한다.
pub struct AppwriteStoreFactory;

impl CampaignStoreFactory for AppwriteStoreFactory {
    fn build(&self, config: &Config) -> Result<Box<dyn CampaignStore>> {
        let Some(endpoint) = resolve_store_endpoint(&config.store).value else {
            bail!(
                "missing store endpoint. Configure store.endpoint or the {STORE_ENDPOINT_ENV} environment variable"
            );
        };
        let Some(project_id) = resolve_store_project_id(&config.store).value else {
            bail!(
                "missing store project id. Configure store.project_id or the {STORE_PROJECT_ID_ENV} environment variable"
            );
        };
        let Some(api_key) = resolve_store_api_key(&config.store).value else {
            bail!(
                "missing store API key. Configure store.api_key or the {STORE_API_KEY_ENV} environment variable"
            );
        };

        // endpoint 오타는 첫 네트워크 호출 전에 잡는다.
        Url::parse(&endpoint).with_context(|| format!("invalid store endpoint URL: {endpoint}"))?;

        Ok(Box::new(AppwriteStore::new(endpoint, project_id, api_key)))
    }
}
