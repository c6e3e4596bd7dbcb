use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    client::{evaluate_response, BaseClient},
    error::ApiError,
    request::RequestType,
    response::Response,
};

/// One child of a collection: a dataset or a sub-collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub item_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent_url: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Lists the direct children of a collection (`GET api/dataverses/{alias}/contents`).
pub async fn get_dataverse_contents(
    client: &BaseClient,
    alias: &str,
) -> Result<Response<Vec<ContentItem>>, ApiError> {
    let url = format!("api/dataverses/{alias}/contents");

    let context = RequestType::Plain;
    let response = client.get(&url, None, context, None).await;

    evaluate_response::<Vec<ContentItem>>(response).await
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_get_dataverse_contents() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/dataverses/finches/contents");
            then.status(200).json_body(json!({
                "status": "OK",
                "data": [
                    {"type": "dataset", "id": 42, "persistentUrl": "https://doi.org/10.5072/FK2/ABC123", "protocol": "doi"},
                    {"type": "dataverse", "id": 8, "title": "Beaks"}
                ]
            }));
        });
        let client = BaseClient::new(&server.base_url(), None).unwrap();

        let response = get_dataverse_contents(&client, "finches").await.unwrap();
        let items = response.data.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item_type, "dataset");
        assert_eq!(items[0].extra["protocol"], "doi");
        assert_eq!(items[1].title.as_deref(), Some("Beaks"));
    }
}
