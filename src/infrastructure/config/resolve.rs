//! 설정 값(credential/env)을 실제 런타임 값으로 해석하는 유틸리티.
//!
//! - 환경변수 조회는 인프라 계층에서만 수행한다.

use std::env;

use super::types::{CompletionConfig, StoreConfig};

pub const STORE_ENDPOINT_ENV: &str = "APPWRITE_ENDPOINT";
pub const STORE_PROJECT_ID_ENV: &str = "APPWRITE_PROJECT_ID";
pub const STORE_API_KEY_ENV: &str = "APPWRITE_API_KEY";
pub const COMPLETION_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// 설정 값 해석 결과. 값과 함께 출처 라벨을 보존한다.
#[derive(Debug, Clone)]
pub struct ValueResolution {
    pub value: Option<String>,
    pub source: Option<String>,
}

pub fn resolve_store_endpoint(cfg: &StoreConfig) -> ValueResolution {
    resolve_value(
        cfg.endpoint.as_deref(),
        cfg.endpoint_env.as_deref(),
        STORE_ENDPOINT_ENV,
    )
}

pub fn resolve_store_project_id(cfg: &StoreConfig) -> ValueResolution {
    resolve_value(
        cfg.project_id.as_deref(),
        cfg.project_id_env.as_deref(),
        STORE_PROJECT_ID_ENV,
    )
}

pub fn resolve_store_api_key(cfg: &StoreConfig) -> ValueResolution {
    resolve_value(
        cfg.api_key.as_deref(),
        cfg.api_key_env.as_deref(),
        STORE_API_KEY_ENV,
    )
}

pub fn resolve_completion_api_key(cfg: &CompletionConfig) -> ValueResolution {
    resolve_value(
        cfg.api_key.as_deref(),
        cfg.api_key_env.as_deref(),
        COMPLETION_API_KEY_ENV,
    )
}

/// 직접값 우선, 없으면 환경변수를 조회한다.
/// 환경변수 이름은 설정으로 바꿀 수 있고, 비어 있으면 기본 이름을 쓴다.
fn resolve_value(
    inline: Option<&str>,
    env_override: Option<&str>,
    default_env: &str,
) -> ValueResolution {
    if let Some(value) = inline.map(str::trim).filter(|v| !v.is_empty()) {
        return ValueResolution {
            value: Some(value.to_string()),
            source: Some("inline".to_string()),
        };
    }

    let env_name = env_override
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default_env);

    match env::var(env_name).ok().map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => ValueResolution {
            value: Some(v),
            source: Some(format!("env:{env_name}")),
        },
        _ => ValueResolution {
            value: None,
            source: Some(format!("env:{env_name} (missing)")),
        },
    }
}
