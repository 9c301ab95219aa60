//! 트리거 응답(JSON) 직렬화 모듈.

use serde::Serialize;

use crate::domain::campaign::ProcessReport;

/// 호출자에게 돌려주는 최종 JSON 응답.
/// 성공은 message(+count), 실패는 error/details 형태를 쓴다.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RunResponse {
    Success {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        count: Option<usize>,
    },
    Failure {
        error: bool,
        details: String,
    },
}

impl RunResponse {
    /// 처리 결과를 응답 형태로 변환한다.
    pub fn from_report(report: &ProcessReport) -> Self {
        match report {
            ProcessReport::NoPending => Self::Success {
                message: "No pending campaigns found.".to_string(),
                count: None,
            },
            ProcessReport::Generated { count } => Self::Success {
                message: "Messages generated".to_string(),
                count: Some(*count),
            },
        }
    }

    /// 실패를 응답 형태로 변환한다. 원인 체인을 details 한 줄로 펼친다.
    pub fn from_error(err: &anyhow::Error) -> Self {
        Self::Failure {
            error: true,
            details: format!("{err:#}"),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"error":true,"details":"failed to serialize response"}"#.to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[test]
    fn no_pending_renders_the_informational_message() {
        let json = RunResponse::from_report(&ProcessReport::NoPending).to_json();
        assert_eq!(json, r#"{"message":"No pending campaigns found."}"#);
    }

    #[test]
    fn generated_report_carries_the_count() {
        let json = RunResponse::from_report(&ProcessReport::Generated { count: 21 }).to_json();
        assert_eq!(json, r#"{"message":"Messages generated","count":21}"#);
    }

    #[test]
    fn failure_renders_error_and_details() {
        let err = anyhow!("Less than 20 messages generated");
        let json = RunResponse::from_error(&err).to_json();
        assert_eq!(
            json,
            r#"{"error":true,"details":"Less than 20 messages generated"}"#
        );
    }

    #[test]
    fn failure_flattens_the_context_chain() {
        let err = anyhow!("connection refused").context("appwrite: failed to list documents");
        let json = RunResponse::from_error(&err).to_json();
        assert_eq!(
            json,
            r#"{"error":true,"details":"appwrite: failed to list documents: connection refused"}"#
        );
    }
}
