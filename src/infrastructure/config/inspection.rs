//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use super::resolve::{
    resolve_completion_api_key, resolve_store_api_key, resolve_store_endpoint,
    resolve_store_project_id,
};
use super::types::SAMPLING_TEMPERATURE;
use crate::infrastructure::store::{COLLECTION_ID, DATABASE_ID};

/// 설정 파일 탐색 결과와 해석된 연결 정보를 한 화면에 모은다.
/// secret 값 자체는 절대 싣지 않고 출처 라벨만 보여준다.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub store: StoreInspection,
    pub completion: CompletionInspection,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreInspection {
    pub endpoint: Option<String>,
    pub endpoint_source: Option<String>,
    pub project_id: Option<String>,
    pub project_id_source: Option<String>,
    pub api_key_source: Option<String>,
    pub api_key_resolved: bool,
    pub database_id: String,
    pub collection_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletionInspection {
    pub model: String,
    pub api_base: String,
    pub api_key_source: Option<String>,
    pub api_key_resolved: bool,
    pub temperature: f64,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let endpoint = resolve_store_endpoint(&loaded.config.store);
        let project_id = resolve_store_project_id(&loaded.config.store);
        let store_key = resolve_store_api_key(&loaded.config.store);
        let completion_key = resolve_completion_api_key(&loaded.config.completion);

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            store: StoreInspection {
                endpoint: endpoint.value,
                endpoint_source: endpoint.source,
                project_id: project_id.value,
                project_id_source: project_id.source,
                api_key_source: store_key.source,
                api_key_resolved: store_key.value.is_some(),
                database_id: DATABASE_ID.to_string(),
                collection_id: COLLECTION_ID.to_string(),
            },
            completion: CompletionInspection {
                model: loaded.config.completion.model(),
                api_base: loaded.config.completion.api_base(),
                api_key_source: completion_key.source,
                api_key_resolved: completion_key.value.is_some(),
                temperature: SAMPLING_TEMPERATURE,
            },
        }
    }
}
