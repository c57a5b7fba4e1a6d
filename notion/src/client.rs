//! Production client for the Notion REST API.
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use async_trait::async_trait;
use notion_types::{Block, Database, Filter, Page, PageHit, PropertyMap, RichText, ValueMap};

use crate::{NotionApi, NotionError, Parent, Result};

const BASE_URL: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";

/// Client for the live API. Bearer-token auth, no retries: a failed
/// call surfaces as an error and aborts the calling orchestrator.
pub struct NotionClient {
    http: ReqwestClient,
    base_url: String,
    token: String,
}

impl NotionClient {
    pub fn new(token: &str) -> Self {
        Self {
            http: ReqwestClient::new(),
            base_url: BASE_URL.to_string(),
            token: token.to_string(),
        }
    }

    /// Override the endpoint, e.g. to point at a local stub server.
    pub fn with_base_url(token: &str, base_url: &str) -> Self {
        Self {
            http: ReqwestClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body: ApiErrorBody = response.json().await.unwrap_or_default();
            return Err(NotionError::Api {
                status: status.as_u16(),
                code: body.code,
                message: body.message,
            });
        }
        Ok(response.json().await?)
    }

    async fn search(&self, query: &str, object: &str) -> Result<Vec<Value>> {
        let body = json!({
            "query": query,
            "filter": { "value": object, "property": "object" },
        });
        let response: ResultList<Value> = self
            .send(self.request(Method::POST, "/search").json(&body))
            .await?;
        Ok(response.results)
    }
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct ResultList<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

/// Pull a page's title out of its raw property map. Pages store the
/// title under whichever property has type `title`.
fn page_hit(raw: &Value) -> Option<PageHit> {
    let id = raw.get("id")?.as_str()?.to_string();
    let url = raw
        .get("url")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let properties = raw.get("properties")?.as_object()?;
    let title = properties
        .values()
        .find(|property| property.get("type").and_then(Value::as_str) == Some("title"))
        .and_then(|property| {
            let segments: Vec<RichText> =
                serde_json::from_value(property.get("title")?.clone()).ok()?;
            segments.first().map(|segment| segment.plain().to_string())
        })
        .unwrap_or_default();
    Some(PageHit { id, url, title })
}

#[async_trait]
impl NotionApi for NotionClient {
    async fn search_databases(&self, query: &str) -> Result<Vec<Database>> {
        let results = self.search(query, "database").await?;
        let mut databases = Vec::with_capacity(results.len());
        for raw in results {
            databases.push(serde_json::from_value(raw)?);
        }
        Ok(databases)
    }

    async fn search_pages(&self, query: &str) -> Result<Vec<PageHit>> {
        let results = self.search(query, "page").await?;
        Ok(results.iter().filter_map(page_hit).collect())
    }

    async fn create_database(
        &self,
        parent_page_id: &str,
        title: &str,
        properties: &PropertyMap,
    ) -> Result<Database> {
        let body = json!({
            "parent": { "page_id": parent_page_id },
            "title": [RichText::text(title)],
            "properties": properties,
        });
        self.send(self.request(Method::POST, "/databases").json(&body))
            .await
    }

    async fn update_database(
        &self,
        database_id: &str,
        properties: &PropertyMap,
    ) -> Result<Database> {
        let body = json!({ "properties": properties });
        self.send(
            self.request(Method::PATCH, &format!("/databases/{database_id}"))
                .json(&body),
        )
        .await
    }

    async fn retrieve_database(&self, database_id: &str) -> Result<Database> {
        self.send(self.request(Method::GET, &format!("/databases/{database_id}")))
            .await
    }

    async fn create_page(
        &self,
        parent: &Parent,
        properties: &ValueMap,
        children: &[Block],
    ) -> Result<Page> {
        let mut body = json!({
            "parent": parent,
            "properties": properties,
        });
        if !children.is_empty() {
            body["children"] = serde_json::to_value(children)?;
        }
        self.send(self.request(Method::POST, "/pages").json(&body))
            .await
    }

    async fn query_database(&self, database_id: &str, filter: &Filter) -> Result<Vec<Page>> {
        let body = json!({ "filter": filter });
        let response: ResultList<Page> = self
            .send(
                self.request(Method::POST, &format!("/databases/{database_id}/query"))
                    .json(&body),
            )
            .await?;
        Ok(response.results)
    }

    async fn append_blocks(&self, block_id: &str, children: &[Block]) -> Result<()> {
        let body = json!({ "children": children });
        let _: Value = self
            .send(
                self.request(Method::PATCH, &format!("/blocks/{block_id}/children"))
                    .json(&body),
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_hit_extracts_title_property() {
        let raw = json!({
            "id": "page-1",
            "url": "https://www.notion.so/page1",
            "properties": {
                "title": {
                    "id": "title",
                    "type": "title",
                    "title": [{ "type": "text", "text": { "content": "Research Dashboard" },
                                "plain_text": "Research Dashboard" }]
                }
            }
        });
        let hit = page_hit(&raw).unwrap();
        assert_eq!(hit.id, "page-1");
        assert_eq!(hit.title, "Research Dashboard");
    }

    #[test]
    fn page_hit_without_title_is_empty() {
        let raw = json!({ "id": "page-2", "properties": {} });
        let hit = page_hit(&raw).unwrap();
        assert_eq!(hit.title, "");
    }

    #[test]
    fn parent_serializes_to_tagged_id() {
        assert_eq!(
            serde_json::to_value(Parent::PageId("root".to_string())).unwrap(),
            json!({ "page_id": "root" })
        );
        assert_eq!(
            serde_json::to_value(Parent::DatabaseId("db".to_string())).unwrap(),
            json!({ "database_id": "db" })
        );
    }
}
