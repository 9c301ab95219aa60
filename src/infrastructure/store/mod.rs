//! 캠페인 문서 저장소 연동 모듈.

mod appwrite;

pub use appwrite::{AppwriteStore, COLLECTION_ID, DATABASE_ID};
