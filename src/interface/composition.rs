//! 애플리케이션 조립(composition root) 모듈.

use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::process_campaign::ProcessCampaignUseCase;
use crate::infrastructure::adapters::{
    AppwriteStoreFactory, ConsoleReporter, JsonConfigRepository, OpenAiGatewayFactory,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    store_factory: AppwriteStoreFactory,
    completion_factory: OpenAiGatewayFactory,
    reporter: ConsoleReporter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            config_repo: JsonConfigRepository,
            store_factory: AppwriteStoreFactory,
            completion_factory: OpenAiGatewayFactory,
            reporter: ConsoleReporter,
        }
    }
}

impl AppComposition {
    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 캠페인 처리 유스케이스를 생성한다.
    pub fn process_campaign_usecase(&self) -> ProcessCampaignUseCase<'_> {
        ProcessCampaignUseCase {
            config_repo: &self.config_repo,
            store_factory: &self.store_factory,
            completion_factory: &self.completion_factory,
            reporter: &self.reporter,
        }
    }
}
