//! JSON body extractor with API-shaped rejections.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use common::{AppError, AppResult};

/// JSON extractor that reports every decoding failure as `400 Bad Request`.
///
/// Axum's own `Json` answers some failures with 415 or 422; clients of this
/// API only ever see 400 for a body that cannot be decoded. Only objects are
/// accepted (serde would otherwise fill a struct from an array by position),
/// and a literal `null` reads as `{}`. Field-level checks are left to the
/// store.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(format!("Invalid JSON: {}", e.body_text())))?;

        decode_object(value).map(JsonBody)
    }
}

fn decode_object<T: DeserializeOwned>(value: Value) -> AppResult<T> {
    let object = match value {
        Value::Object(_) => value,
        Value::Null => Value::Object(Map::new()),
        _ => return Err(AppError::bad_request("Invalid JSON: expected an object")),
    };

    serde_json::from_value(object)
        .map_err(|e| AppError::bad_request(format!("Invalid JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{NewUser, UserPatch};
    use serde_json::json;

    #[test]
    fn test_decode_object() {
        let input: NewUser = decode_object(json!({"username": "alice", "email": "a@x.com"})).unwrap();
        assert_eq!(input, NewUser::new("alice", "a@x.com"));
    }

    #[test]
    fn test_decode_rejects_arrays_and_scalars() {
        for value in [json!(["alice", "a@x.com"]), json!([]), json!("alice"), json!(1)] {
            let err = decode_object::<NewUser>(value).unwrap_err();
            assert!(matches!(err, AppError::BadRequest(ref msg) if msg == "Invalid JSON: expected an object"));
        }
    }

    #[test]
    fn test_decode_null_as_empty_object() {
        let patch: UserPatch = decode_object(Value::Null).unwrap();
        assert_eq!(patch, UserPatch::default());
    }

    #[test]
    fn test_decode_reports_wrong_field_types() {
        let err = decode_object::<NewUser>(json!({"username": 42})).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref msg) if msg.starts_with("Invalid JSON")));
    }
}
