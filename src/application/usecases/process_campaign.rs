//! 대기 중인 캠페인 1건을 처리하는 유스케이스.

use anyhow::{Context, Result, bail};

use crate::application::ports::{
    CampaignStore, CampaignStoreFactory, CompletionGateway, CompletionGatewayFactory,
    ConfigRepository, Reporter,
};
use crate::domain::campaign::{ProcessReport, RunOptions};
use crate::domain::policy::{REQUIRED_MESSAGE_COUNT, build_campaign_prompt, parse_numbered_list};

/// fetch → prompt → complete → parse → validate → persist 순서의
/// 단일 실행 흐름을 조율한다.
///
/// 저장소 읽기 1회, 완성 API 호출 1회, 성공 시에만 쓰기 1회가 전부다.
/// 동시 실행 간 상호 배제는 제공하지 않는다. 같은 pending 문서를
/// 두 실행이 동시에 집을 수 있다.
pub struct ProcessCampaignUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub store_factory: &'a dyn CampaignStoreFactory,
    pub completion_factory: &'a dyn CompletionGatewayFactory,
    pub reporter: &'a dyn Reporter,
}

impl ProcessCampaignUseCase<'_> {
    /// 캠페인 처리 본 실행 진입점.
    /// 어느 단계에서 실패하든 저장소에는 아무것도 기록하지 않는다.
    pub async fn execute(&self, options: RunOptions) -> Result<ProcessReport> {
        self.reporter.section("Load Config");
        let config = self
            .config_repo
            .load()
            .context("failed to load campaignpilot config")?;

        // 클라이언트는 실행 시작 시점에 전부 조립한다. 숨은 전역 상태를 두지 않는다.
        let store = self.store_factory.build(&config)?;
        let completion = self.completion_factory.build(&config)?;

        self.reporter.section("Fetch Campaign");
        self.reporter.status("store", "querying pending campaigns");
        let Some(campaign) = store.find_pending().await? else {
            self.reporter.status("store", "no pending campaigns");
            return Ok(ProcessReport::NoPending);
        };
        self.reporter.kv("Campaign", &campaign.id);
        self.reporter.kv("Brand", &campaign.brand);
        self.reporter.kv("Product", &campaign.product);

        let prompt = build_campaign_prompt(&campaign);

        self.reporter.section("Generate Messages");
        self.reporter.status("completion", "requesting completion");
        let output = completion.complete(&prompt).await?;

        let messages = parse_numbered_list(&output.content);
        self.reporter.kv("Parsed", &messages.len().to_string());
        if let Some(total) = output.usage.total_tokens {
            self.reporter.kv("Tokens", &total.to_string());
        }

        // 최소 개수만 검증한다. 20개를 넘는 조각은 자르지 않고 모두 보존한다.
        if messages.len() < REQUIRED_MESSAGE_COUNT {
            bail!("Less than {REQUIRED_MESSAGE_COUNT} messages generated");
        }

        self.reporter.section("Persist");
        if options.dry_run {
            self.reporter.status("store", "dry-run, skipping update");
            return Ok(ProcessReport::Generated {
                count: messages.len(),
            });
        }

        store.mark_ready(&campaign.id, &messages).await?;
        self.reporter.status("store", "campaign marked ready");

        Ok(ProcessReport::Generated {
            count: messages.len(),
        })
    }
}
