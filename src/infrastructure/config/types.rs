//! 설정 스키마와 병합 규칙.

use serde::{Deserialize, Serialize};

pub const DEFAULT_COMPLETION_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-4o";

/// 완성 API 샘플링 온도. 실행마다 같은 고정값을 쓴다.
pub const SAMPLING_TEMPERATURE: f64 = 0.8;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 캠페인 문서 저장소 연결 설정
    #[serde(default)]
    pub store: StoreConfig,
    /// 완성 API 설정
    #[serde(default)]
    pub completion: CompletionConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct StoreConfig {
    /// 저장소 endpoint URL(직접값)
    pub endpoint: Option<String>,
    /// endpoint를 읽을 환경변수 이름(기본 APPWRITE_ENDPOINT)
    pub endpoint_env: Option<String>,
    /// 프로젝트 식별자(직접값)
    pub project_id: Option<String>,
    /// 프로젝트 식별자를 읽을 환경변수 이름(기본 APPWRITE_PROJECT_ID)
    pub project_id_env: Option<String>,
    /// API key(직접값)
    pub api_key: Option<String>,
    /// API key를 읽을 환경변수 이름(기본 APPWRITE_API_KEY)
    pub api_key_env: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CompletionConfig {
    /// API key(직접값)
    pub api_key: Option<String>,
    /// API key를 읽을 환경변수 이름(기본 OPENAI_API_KEY)
    pub api_key_env: Option<String>,
    /// 모델 식별자(기본 gpt-4o)
    pub model: Option<String>,
    /// API 베이스 URL(기본 OpenAI 공개 API)
    pub api_base: Option<String>,
}

impl Config {
    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub(crate) fn merge_from(&mut self, other: Config) {
        self.store.merge_from(other.store);
        self.completion.merge_from(other.completion);
    }
}

impl StoreConfig {
    pub(crate) fn merge_from(&mut self, other: StoreConfig) {
        if other.endpoint.is_some() {
            self.endpoint = other.endpoint;
        }
        if other.endpoint_env.is_some() {
            self.endpoint_env = other.endpoint_env;
        }
        if other.project_id.is_some() {
            self.project_id = other.project_id;
        }
        if other.project_id_env.is_some() {
            self.project_id_env = other.project_id_env;
        }
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.api_key_env.is_some() {
            self.api_key_env = other.api_key_env;
        }
    }
}

impl CompletionConfig {
    pub fn model(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| DEFAULT_COMPLETION_MODEL.to_string())
    }

    pub fn api_base(&self) -> String {
        self.api_base
            .clone()
            .unwrap_or_else(|| DEFAULT_COMPLETION_API_BASE.to_string())
    }

    pub(crate) fn merge_from(&mut self, other: CompletionConfig) {
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.api_key_env.is_some() {
            self.api_key_env = other.api_key_env;
        }
        if other.model.is_some() {
            self.model = other.model;
        }
        if other.api_base.is_some() {
            self.api_base = other.api_base;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_defaults_apply_when_unset() {
        let cfg = CompletionConfig::default();
        assert_eq!(cfg.model(), "gpt-4o");
        assert_eq!(cfg.api_base(), "https://api.openai.com/v1");
    }

    #[test]
    fn merge_overrides_per_field_and_keeps_existing() {
        let mut base: Config = serde_json::from_str(
            r#"{"store": {"endpoint": "https://low.example", "project_id": "p-low"}}"#,
        )
        .unwrap();
        let overlay: Config = serde_json::from_str(
            r#"{"store": {"endpoint": "https://high.example"}, "completion": {"model": "gpt-4o-mini"}}"#,
        )
        .unwrap();

        base.merge_from(overlay);

        assert_eq!(base.store.endpoint.as_deref(), Some("https://high.example"));
        assert_eq!(base.store.project_id.as_deref(), Some("p-low"));
        assert_eq!(base.completion.model(), "gpt-4o-mini");
    }

    #[test]
    fn missing_sections_deserialize_to_defaults() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert!(cfg.store.endpoint.is_none());
        assert!(cfg.completion.api_key.is_none());
    }
}
