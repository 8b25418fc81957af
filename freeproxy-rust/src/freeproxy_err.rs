use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum FreeproxyErr {
    // Transport
    NetworkError(String),

    // Non-2xx responses
    ApiError(String),

    // Data Format / Parsing
    JsonParseError(String, String),
}

impl FreeproxyErr {
    pub fn name(&self) -> &'static str {
        match self {
            FreeproxyErr::NetworkError(_) => "NetworkError",
            FreeproxyErr::ApiError(_) => "ApiError",
            FreeproxyErr::JsonParseError(_, _) => "JsonParseError",
        }
    }
}

impl Display for FreeproxyErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FreeproxyErr::NetworkError(msg) => write!(f, "NetworkError: {msg}"),

            // The server's own message, surfaced verbatim
            FreeproxyErr::ApiError(msg) => write!(f, "{msg}"),

            FreeproxyErr::JsonParseError(type_name, err_msg) => {
                write!(f, "Failed to parse JSON {type_name} - {err_msg}")
            }
        }
    }
}

impl std::error::Error for FreeproxyErr {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FreeproxyErr::NetworkError("connection refused".to_string());
        assert_eq!(err.to_string(), "NetworkError: connection refused");

        let err = FreeproxyErr::ApiError("INVALID_PARAMETER".to_string());
        assert_eq!(err.to_string(), "INVALID_PARAMETER");

        let err = FreeproxyErr::JsonParseError(
            "Proxy".to_string(),
            "invalid type: map, expected a sequence".to_string(),
        );
        assert_eq!(
            err.to_string(),
            "Failed to parse JSON Proxy - invalid type: map, expected a sequence"
        );
    }

    #[test]
    fn test_error_name() {
        assert_eq!(FreeproxyErr::NetworkError(String::new()).name(), "NetworkError");
        assert_eq!(FreeproxyErr::ApiError(String::new()).name(), "ApiError");
        assert_eq!(
            FreeproxyErr::JsonParseError(String::new(), String::new()).name(),
            "JsonParseError"
        );
    }

    #[test]
    fn test_error_trait_object() {
        let err: Box<dyn std::error::Error> = Box::new(FreeproxyErr::ApiError("RATE_LIMITED".to_string()));
        assert_eq!(err.to_string(), "RATE_LIMITED");
    }
}
