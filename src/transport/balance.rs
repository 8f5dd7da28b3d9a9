use super::{ERROR_MARKER, FIELD_DELIMITER, TransportError};

/// Outcome of decoding a balance body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceReply {
    Balance(u64),
    /// The body carried the error marker; holds the body as received.
    Rejected(String),
}

pub fn encode_balance_query() -> Vec<(String, String)> {
    vec![("action".to_owned(), "balance".to_owned())]
}

pub fn decode_balance_response(body: &str) -> Result<BalanceReply, TransportError> {
    if body.contains(ERROR_MARKER) {
        return Ok(BalanceReply::Rejected(body.trim().to_owned()));
    }

    let value = body
        .split(FIELD_DELIMITER)
        .nth(1)
        .map(str::trim)
        .ok_or_else(|| TransportError::MissingFields {
            line: body.to_owned(),
            expected: 2,
            found: 1,
        })?;

    value
        .parse::<u64>()
        .map(BalanceReply::Balance)
        .map_err(|source| TransportError::InvalidBalance {
            value: value.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_sets_action() {
        assert_eq!(
            encode_balance_query(),
            vec![("action".to_owned(), "balance".to_owned())]
        );
    }

    #[test]
    fn decode_trims_value() {
        assert_eq!(
            decode_balance_response("OK: 1234 \n").unwrap(),
            BalanceReply::Balance(1234)
        );
        assert_eq!(
            decode_balance_response("OK:0").unwrap(),
            BalanceReply::Balance(0)
        );
    }

    #[test]
    fn decode_detects_error_marker_anywhere() {
        assert_eq!(
            decode_balance_response("ERROR: Username or password is incorrect").unwrap(),
            BalanceReply::Rejected("ERROR: Username or password is incorrect".to_owned())
        );
        assert!(matches!(
            decode_balance_response("OK: ERROR").unwrap(),
            BalanceReply::Rejected(_)
        ));
    }

    #[test]
    fn decode_rejects_malformed_bodies() {
        assert!(matches!(
            decode_balance_response("1234"),
            Err(TransportError::MissingFields { .. })
        ));
        assert!(matches!(
            decode_balance_response("OK: lots"),
            Err(TransportError::InvalidBalance { .. })
        ));
        assert!(matches!(
            decode_balance_response("OK: -5"),
            Err(TransportError::InvalidBalance { .. })
        ));
    }
}
