//! `campaignpilot` 바이너리 진입점.

use campaignpilot::interface::cli::{Cli, CliAction};
use campaignpilot::interface::composition::AppComposition;
use campaignpilot::interface::response::RunResponse;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let composition = AppComposition::default();

    match Cli::parse_action() {
        CliAction::InspectConfig => match composition.inspect_config_usecase().execute() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        },
        CliAction::Process(options) => {
            match composition.process_campaign_usecase().execute(options).await {
                Ok(report) => {
                    println!("{}", RunResponse::from_report(&report).to_json());
                }
                Err(err) => {
                    // 실패도 JSON 응답 한 줄로 마감한다. 프로세스는 panic 없이 종료된다.
                    tracing::error!("campaign processing failed: {err:#}");
                    println!("{}", RunResponse::from_error(&err).to_json());
                    std::process::exit(1);
                }
            }
        }
    }
}
