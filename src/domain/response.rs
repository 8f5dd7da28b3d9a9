use serde::Serialize;

/// Per-line result code of a send response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseCode {
    /// Accepted for delivery.
    Ok,
    /// Request-level failure (bad credentials, no credit, ...).
    Error,
    /// The recipient was rejected.
    Bad,
}

impl ResponseCode {
    /// Wire token as returned by SMS Broadcast.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Error => "ERROR",
            Self::Bad => "BAD",
        }
    }
}

/// Outcome of a send for one recipient (one response line).
///
/// Exactly one of `reference` and `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendResponse {
    /// Line code: `OK`, `ERROR` or `BAD`.
    pub code: ResponseCode,
    /// Recipient number; absent for `ERROR` lines.
    pub to: Option<String>,
    /// Provider reference; present only for `OK` lines.
    pub reference: Option<String>,
    /// Provider error text; present for `ERROR` and `BAD` lines.
    pub error: Option<String>,
}

impl SendResponse {
    /// Whether the provider reported a failure on this line.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_codes() {
        let response = SendResponse {
            code: ResponseCode::Bad,
            to: Some("0412345678".to_owned()),
            reference: None,
            error: Some("Invalid Number".to_owned()),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["code"], "BAD");
        assert_eq!(json["to"], "0412345678");
        assert!(json["reference"].is_null());
        assert!(response.has_error());
    }

    #[test]
    fn code_tokens() {
        assert_eq!(ResponseCode::Ok.as_str(), "OK");
        assert_eq!(ResponseCode::Error.as_str(), "ERROR");
        assert_eq!(ResponseCode::Bad.as_str(), "BAD");
    }
}
