//! Appwrite Databases REST API 연동 구현.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::Deserialize;
use serde_json::json;

use crate::application::ports::CampaignStore;
use crate::domain::campaign::{Campaign, CampaignStatus};
use crate::infrastructure::http::build_api_client;

/// 캠페인 문서가 저장된 고정 데이터베이스/컬렉션 식별자.
pub const DATABASE_ID: &str = "6886dbd5003b445dffce";
pub const COLLECTION_ID: &str = "6886dbe5000d34a52776";

pub struct AppwriteStore {
    client: Client,
    endpoint: String,
    project_id: String,
    api_key: String,
}

impl AppwriteStore {
    /// Appwrite 프로젝트용 저장소 클라이언트를 생성한다.
    pub fn new(endpoint: String, project_id: String, api_key: String) -> Self {
        Self {
            client: build_api_client(),
            endpoint,
            project_id,
            api_key,
        }
    }

    fn documents_endpoint(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.endpoint.trim_end_matches('/'),
            DATABASE_ID,
            COLLECTION_ID
        )
    }

    fn document_endpoint(&self, document_id: &str) -> String {
        format!("{}/{}", self.documents_endpoint(), document_id)
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        // 공통 헤더/인증 적용.
        self.client
            .request(method, url)
            .header("User-Agent", "campaignpilot")
            .header("X-Appwrite-Project", &self.project_id)
            .header("X-Appwrite-Key", &self.api_key)
    }
}

#[derive(Debug, Deserialize)]
struct DocumentListResponse {
    documents: Vec<CampaignDocument>,
}

/// 저장소 문서 표현. 시스템 필드는 `$` 접두사를 쓴다.
#[derive(Debug, Deserialize)]
struct CampaignDocument {
    #[serde(rename = "$id")]
    id: String,
    brand: String,
    product: String,
    tone: String,
    occasion: String,
    #[serde(default)]
    link: Option<String>,
}

impl From<CampaignDocument> for Campaign {
    fn from(doc: CampaignDocument) -> Self {
        Campaign {
            id: doc.id,
            brand: doc.brand,
            product: doc.product,
            tone: doc.tone,
            occasion: doc.occasion,
            link: doc.link.filter(|l| !l.trim().is_empty()),
        }
    }
}

/// 문서 목록 질의에 쓰는 쿼리 JSON 문자열을 만든다.
fn equal_query(attribute: &str, value: &str) -> String {
    json!({ "method": "equal", "attribute": attribute, "values": [value] }).to_string()
}

fn limit_query(limit: u32) -> String {
    json!({ "method": "limit", "values": [limit] }).to_string()
}

#[async_trait]
impl CampaignStore for AppwriteStore {
    async fn find_pending(&self) -> Result<Option<Campaign>> {
        // 명시적 정렬은 걸지 않는다. 저장소 기본 순서의 첫 문서를 따른다.
        let resp = self
            .request(Method::GET, self.documents_endpoint())
            .query(&[
                (
                    "queries[]",
                    equal_query("status", CampaignStatus::Pending.as_str()),
                ),
                ("queries[]", limit_query(1)),
            ])
            .send()
            .await
            .context("appwrite: failed to list documents")?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .context("appwrite: failed to read document list body")?;
        if !status.is_success() {
            anyhow::bail!("appwrite: failed to list documents ({status}): {body}");
        }

        let list: DocumentListResponse =
            serde_json::from_str(&body).context("appwrite: invalid document list JSON")?;
        Ok(list.documents.into_iter().next().map(Campaign::from))
    }

    async fn mark_ready(&self, campaign_id: &str, messages: &[String]) -> Result<()> {
        let resp = self
            .request(Method::PATCH, self.document_endpoint(campaign_id))
            .json(&json!({
                "data": {
                    "messages": messages,
                    "status": CampaignStatus::Ready.as_str(),
                }
            }))
            .send()
            .await
            .context("appwrite: failed to update document")?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .context("appwrite: failed to read update response body")?;
        if !status.is_success() {
            anyhow::bail!("appwrite: failed to update document ({status}): {body}");
        }

        Ok(())
    }
}
