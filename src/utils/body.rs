use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::header::CONTENT_TYPE,
    Json,
};
use serde_json::{Map, Value};

/// JSON object body. A request that does not declare `application/json` is
/// read as an empty object instead of being rejected; a declared JSON body
/// that fails to parse is still rejected.
#[derive(Debug, Default)]
pub struct JsonBody(pub Map<String, Value>);

fn declares_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !declares_json(&req) {
            return Ok(JsonBody::default());
        }

        let Json(body) = Json::<Map<String, Value>>::from_request(req, state).await?;
        Ok(JsonBody(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<JsonBody, JsonRejection> {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        JsonBody::from_request(builder.body(Body::from(body)).unwrap(), &()).await
    }

    #[tokio::test]
    async fn test_json_body_is_parsed() {
        let JsonBody(body) = extract(Some("application/json; charset=utf-8"), r#"{"nombre":"Foo"}"#)
            .await
            .unwrap();
        assert_eq!(body.get("nombre").unwrap(), "Foo");
    }

    #[tokio::test]
    async fn test_other_content_types_read_as_empty() {
        let JsonBody(body) = extract(None, r#"{"nombre":"Foo"}"#).await.unwrap();
        assert!(body.is_empty());

        let JsonBody(body) = extract(Some("text/plain"), "nombre=Foo").await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_broken_json_is_rejected() {
        assert!(extract(Some("application/json"), "{not json").await.is_err());
    }
}
