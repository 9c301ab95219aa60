//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::campaign::{Campaign, CompletionOutput};
use crate::infrastructure::config::Config;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 캠페인 문서 저장소 포트.
#[async_trait]
pub trait CampaignStore: Send + Sync {
    /// status=pending 문서를 최대 1건 조회한다.
    async fn find_pending(&self) -> Result<Option<Campaign>>;
    /// 생성된 메시지를 기록하고 상태를 ready로 전환한다.
    async fn mark_ready(&self, campaign_id: &str, messages: &[String]) -> Result<()>;
}

/// 설정에 맞는 캠페인 저장소를 생성하는 팩토리 포트.
pub trait CampaignStoreFactory: Send + Sync {
    fn build(&self, config: &Config) -> Result<Box<dyn CampaignStore>>;
}

/// 완성(completion) API 호출 포트.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<CompletionOutput>;
}

/// 설정에 맞는 완성 게이트웨이를 생성하는 팩토리 포트.
pub trait CompletionGatewayFactory: Send + Sync {
    fn build(&self, config: &Config) -> Result<Box<dyn CompletionGateway>>;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
}
