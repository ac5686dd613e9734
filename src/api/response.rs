use crate::error::{ClientError, Result};
use crate::utils::json::{get_optional, get_string};
use log::warn;
use serde::Serialize;
use serde_json::Value;

pub const RESPONSE_ERROR_CODE_MAX_LEN: usize = 64;
pub const RESPONSE_ERROR_MESSAGE_MAX_LEN: usize = 1024;

/// Error reported by the node inside a well-formed response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseError {
    pub code: Option<String>,
    pub message: String,
}

impl std::fmt::Display for ResponseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{code}: {}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Decoded response: either the node's error or the endpoint payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ApiResponse<T> {
    Error(ResponseError),
    Success(T),
}

impl<T> ApiResponse<T> {
    pub fn is_error(&self) -> bool {
        matches!(self, ApiResponse::Error(_))
    }

    pub fn error(&self) -> Option<&ResponseError> {
        match self {
            ApiResponse::Error(err) => Some(err),
            ApiResponse::Success(_) => None,
        }
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            ApiResponse::Error(_) => None,
            ApiResponse::Success(data) => Some(data),
        }
    }

    pub fn into_success(self) -> Option<T> {
        match self {
            ApiResponse::Error(_) => None,
            ApiResponse::Success(data) => Some(data),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        match self {
            ApiResponse::Error(err) => ApiResponse::Error(err),
            ApiResponse::Success(data) => ApiResponse::Success(f(data)),
        }
    }
}

/// Extracts the node error object, if the root carries one.
pub fn decode_error(root: &Value) -> Result<Option<ResponseError>> {
    let err_obj = match get_optional(root, "error") {
        Some(obj) => obj,
        None => return Ok(None),
    };
    if !err_obj.is_object() {
        return Err(ClientError::invalid("error", "expected an object"));
    }

    let code = match get_optional(err_obj, "code") {
        Some(_) => Some(get_string(err_obj, "code", RESPONSE_ERROR_CODE_MAX_LEN)?),
        None => None,
    };
    let message = get_string(err_obj, "message", RESPONSE_ERROR_MESSAGE_MAX_LEN)?;
    Ok(Some(ResponseError { code, message }))
}

/// Parses `body` and dispatches on the envelope.
///
/// An error envelope decodes successfully into [`ApiResponse::Error`].
/// Otherwise `decode_data` receives the `data` object; the first field it
/// fails on aborts the whole decode.
pub fn decode_response<T, F>(body: &str, decode_data: F) -> Result<ApiResponse<T>>
where
    F: FnOnce(&Value) -> Result<T>,
{
    let root: Value = serde_json::from_str(body)?;

    if let Some(err) = decode_error(&root)? {
        warn!("Node reported an error: {err}");
        return Ok(ApiResponse::Error(err));
    }

    let data = match get_optional(&root, "data") {
        Some(data) if data.is_object() => data,
        Some(_) => {
            return Err(ClientError::MalformedResponse(
                "data is not an object".to_string(),
            ))
        }
        None => {
            return Err(ClientError::MalformedResponse(
                "missing data object".to_string(),
            ))
        }
    };

    Ok(ApiResponse::Success(decode_data(data)?))
}
