//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod completion_factory;
mod config_repository;
mod reporter;
mod store_factory;

pub use completion_factory::OpenAiGatewayFactory;
pub use config_repository::JsonConfigRepository;
pub use reporter::ConsoleReporter;
pub use store_factory::AppwriteStoreFactory;
