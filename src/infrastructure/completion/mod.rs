//! 완성(completion) API 연동 모듈.

mod openai;

pub use openai::OpenAiGateway;
