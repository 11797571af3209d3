//! JSON:API response handling: status checks, error extraction, resource flattening.

use crate::client::ApiResponse;
use crate::error::ApiError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    data: Value,
}

#[derive(Debug, Deserialize)]
struct ErrorDocument {
    #[serde(default)]
    errors: Vec<ErrorObject>,
}

#[derive(Debug, Deserialize)]
struct ErrorObject {
    #[serde(default)]
    detail: String,
}

/// Return the body of a successful response, or the API error it carries.
pub fn parse_response(response: &ApiResponse) -> Result<&[u8], ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(&response.body);
    }
    let detail = error_detail(&response.body);
    if response.status == 401 {
        return Err(ApiError::Unauthorized(detail));
    }
    Err(ApiError::Status {
        status: response.status,
        detail,
    })
}

fn error_detail(body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorDocument>(body) {
        Ok(doc) if !doc.errors.is_empty() => doc
            .errors
            .into_iter()
            .map(|e| e.detail)
            .collect::<Vec<_>>()
            .join("; "),
        _ => String::from_utf8_lossy(body).trim().to_string(),
    }
}

/// Decode a single-resource document into a presenter.
pub fn decode_one<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let doc: Document = serde_json::from_slice(body)
        .map_err(|e| ApiError::Decode(format!("invalid JSON:API document: {}", e)))?;
    if !doc.data.is_object() {
        return Err(ApiError::Decode(
            "expected a single resource in `data`".to_string(),
        ));
    }
    from_resource(doc.data)
}

/// Decode a collection document, keeping the server's order.
pub fn decode_many<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, ApiError> {
    let doc: Document = serde_json::from_slice(body)
        .map_err(|e| ApiError::Decode(format!("invalid JSON:API document: {}", e)))?;
    match doc.data {
        Value::Array(resources) => resources.into_iter().map(from_resource).collect(),
        Value::Null => Ok(Vec::new()),
        _ => Err(ApiError::Decode(
            "expected a resource collection in `data`".to_string(),
        )),
    }
}

/// Merge the resource `id` into its attributes so presenters see one flat object.
fn from_resource<T: DeserializeOwned>(resource: Value) -> Result<T, ApiError> {
    let Value::Object(mut resource) = resource else {
        return Err(ApiError::Decode("resource is not an object".to_string()));
    };
    let id = resource.remove("id").unwrap_or(Value::Null);
    let mut attributes = match resource.remove("attributes") {
        Some(Value::Object(attributes)) => attributes,
        Some(Value::Null) | None => serde_json::Map::new(),
        Some(_) => return Err(ApiError::Decode("attributes is not an object".to_string())),
    };
    attributes.entry("id").or_insert(id);
    serde_json::from_value(Value::Object(attributes))
        .map_err(|e| ApiError::Decode(e.to_string()))
}
