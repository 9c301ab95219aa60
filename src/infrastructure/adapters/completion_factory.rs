//! 완성 게이트웨이 팩토리 어댑터.

use anyhow::Result;

use crate::application::ports::{CompletionGateway, CompletionGatewayFactory};
use crate::infrastructure::completion::OpenAiGateway;
use crate::infrastructure::config::Config;

/// 설정에서 OpenAI 게이트웨이를 조립한다.
pub struct OpenAiGatewayFactory;

impl CompletionGatewayFactory for OpenAiGatewayFactory {
    fn build(&self, config: &Config) -> Result<Box<dyn CompletionGateway>> {
        Ok(Box::new(OpenAiGateway::from_config(&config.completion)?))
    }
}
