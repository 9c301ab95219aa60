//! Interface layer
//! CLI 입력과 트리거 응답(JSON), 의존성 조립을 담당한다.

pub mod cli;
pub mod composition;
pub mod response;
