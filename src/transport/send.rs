use crate::domain::{MESSAGE_MAX_SPLIT, ResponseCode, SendRequest, SendResponse};

use super::{FIELD_DELIMITER, TransportError};

pub fn encode_send_query(request: &SendRequest) -> Vec<(String, String)> {
    let options = request.options();
    let mut params = vec![
        ("to".to_owned(), request.recipients().join(",")),
        (
            "from".to_owned(),
            options.sender.clone().unwrap_or_default(),
        ),
        ("message".to_owned(), request.message().to_owned()),
        (
            "ref".to_owned(),
            options.reference.clone().unwrap_or_default(),
        ),
    ];

    if options.split {
        params.push(("maxsplit".to_owned(), MESSAGE_MAX_SPLIT.to_string()));
    }
    if let Some(delay) = options.delay.filter(|it| *it > 0) {
        params.push(("delay".to_owned(), delay.to_string()));
    }

    params
}

/// Parse a send response body, one [`SendResponse`] per non-blank line.
pub fn decode_send_response(body: &str) -> Result<Vec<SendResponse>, TransportError> {
    let responses = body
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(decode_line)
        .collect::<Result<Vec<_>, _>>()?;

    if responses.is_empty() {
        return Err(TransportError::EmptyBody);
    }
    Ok(responses)
}

fn decode_line(line: &str) -> Result<SendResponse, TransportError> {
    let code = line
        .split(FIELD_DELIMITER)
        .next()
        .map(str::trim)
        .unwrap_or_default();

    match code {
        "BAD" => {
            let [_, to, error] = fields::<3>(line)?;
            Ok(SendResponse {
                code: ResponseCode::Bad,
                to: Some(to),
                reference: None,
                error: Some(error),
            })
        }
        "ERROR" => {
            let [_, error] = fields::<2>(line)?;
            Ok(SendResponse {
                code: ResponseCode::Error,
                to: None,
                reference: None,
                error: Some(error),
            })
        }
        _ => {
            let [_, to, reference] = fields::<3>(line)?;
            Ok(SendResponse {
                code: ResponseCode::Ok,
                to: Some(to),
                reference: Some(reference),
                error: None,
            })
        }
    }
}

// Fields past the first `N` are ignored.
fn fields<const N: usize>(line: &str) -> Result<[String; N], TransportError> {
    let mut parts = line
        .split(FIELD_DELIMITER)
        .map(|it| it.trim().to_owned())
        .collect::<Vec<_>>();

    let found = parts.len();
    parts.truncate(N);
    parts
        .try_into()
        .map_err(|_| TransportError::MissingFields {
            line: line.to_owned(),
            expected: N,
            found,
        })
}

#[cfg(test)]
mod tests {
    use crate::domain::SendOptions;

    use super::*;

    fn request(recipients: &[&str], options: SendOptions) -> SendRequest {
        SendRequest::new(
            recipients.iter().map(|it| (*it).to_owned()).collect(),
            "hello",
            options,
        )
    }

    #[test]
    fn encode_includes_split_and_delay() {
        let req = request(
            &["0412345678", "61413345678"],
            SendOptions {
                sender: Some("Acme".to_owned()),
                reference: Some("ref1".to_owned()),
                split: true,
                delay: Some(15),
            },
        );

        assert_eq!(
            encode_send_query(&req),
            vec![
                ("to".to_owned(), "0412345678,61413345678".to_owned()),
                ("from".to_owned(), "Acme".to_owned()),
                ("message".to_owned(), "hello".to_owned()),
                ("ref".to_owned(), "ref1".to_owned()),
                ("maxsplit".to_owned(), "5".to_owned()),
                ("delay".to_owned(), "15".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_omits_optional_keys() {
        let req = request(
            &["0412345678"],
            SendOptions {
                sender: Some("Acme".to_owned()),
                split: false,
                delay: Some(0),
                ..Default::default()
            },
        );

        assert_eq!(
            encode_send_query(&req),
            vec![
                ("to".to_owned(), "0412345678".to_owned()),
                ("from".to_owned(), "Acme".to_owned()),
                ("message".to_owned(), "hello".to_owned()),
                ("ref".to_owned(), String::new()),
            ]
        );
    }

    #[test]
    fn decode_ok_line_trims_fields() {
        let parsed = decode_send_response("OK: 61412345678:ref234 ").unwrap();
        assert_eq!(
            parsed,
            vec![SendResponse {
                code: ResponseCode::Ok,
                to: Some("61412345678".to_owned()),
                reference: Some("ref234".to_owned()),
                error: None,
            }]
        );
    }

    #[test]
    fn decode_error_line_has_no_recipient() {
        let parsed = decode_send_response("ERROR: Username or password is incorrect ").unwrap();
        assert_eq!(parsed[0].code, ResponseCode::Error);
        assert_eq!(parsed[0].to, None);
        assert_eq!(parsed[0].reference, None);
        assert_eq!(
            parsed[0].error.as_deref(),
            Some("Username or password is incorrect")
        );
    }

    #[test]
    fn decode_bad_line() {
        let parsed = decode_send_response("BAD:0412345678:Invalid Number").unwrap();
        assert_eq!(parsed[0].code, ResponseCode::Bad);
        assert_eq!(parsed[0].to.as_deref(), Some("0412345678"));
        assert_eq!(parsed[0].reference, None);
        assert_eq!(parsed[0].error.as_deref(), Some("Invalid Number"));
    }

    #[test]
    fn decode_ignores_fields_after_the_expected_ones() {
        let parsed = decode_send_response("ERROR: Invalid: reason").unwrap();
        assert_eq!(parsed[0].error.as_deref(), Some("Invalid"));

        let parsed = decode_send_response("OK: 0412345678:ref:extra").unwrap();
        assert_eq!(parsed[0].to.as_deref(), Some("0412345678"));
        assert_eq!(parsed[0].reference.as_deref(), Some("ref"));

        let parsed = decode_send_response("BAD:0412345678:Invalid: Number").unwrap();
        assert_eq!(parsed[0].to.as_deref(), Some("0412345678"));
        assert_eq!(parsed[0].error.as_deref(), Some("Invalid"));
    }

    #[test]
    fn decode_multiple_lines_in_order() {
        let body = "OK: 0412345678:abcd1\nBAD:0413345678:Invalid Number\r\nOK: 0414345678:abcd3\n";
        let parsed = decode_send_response(body).unwrap();
        let to = parsed
            .iter()
            .map(|it| it.to.as_deref().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(to, ["0412345678", "0413345678", "0414345678"]);
        assert!(!parsed[0].has_error());
        assert!(parsed[1].has_error());
        assert!(!parsed[2].has_error());
    }

    #[test]
    fn decode_rejects_short_lines() {
        let err = decode_send_response("OK: 0412345678").unwrap_err();
        assert!(matches!(
            err,
            TransportError::MissingFields {
                expected: 3,
                found: 2,
                ..
            }
        ));

        let err = decode_send_response("ERROR").unwrap_err();
        assert!(matches!(
            err,
            TransportError::MissingFields {
                expected: 2,
                found: 1,
                ..
            }
        ));

        let err = decode_send_response("BAD:0412345678").unwrap_err();
        assert!(matches!(err, TransportError::MissingFields { .. }));
    }

    #[test]
    fn decode_rejects_blank_body() {
        assert!(matches!(
            decode_send_response(" \n\n"),
            Err(TransportError::EmptyBody)
        ));
    }

    #[test]
    fn decode_is_idempotent() {
        let body = "OK: 0412345678:abcd1\nERROR: No credit\n";
        assert_eq!(
            decode_send_response(body).unwrap(),
            decode_send_response(body).unwrap()
        );
    }

    #[test]
    fn encoded_recipients_match_parsed_order() {
        let recipients = ["0412345678", "61413345678", "414345678"];
        let req = request(
            &recipients,
            SendOptions {
                sender: Some("Acme".to_owned()),
                ..Default::default()
            },
        );
        req.validate().unwrap();

        let params = encode_send_query(&req);
        let to = &params.iter().find(|(k, _)| k == "to").unwrap().1;
        let body = to
            .split(',')
            .enumerate()
            .map(|(idx, number)| format!("OK: {number}:ref{idx}"))
            .collect::<Vec<_>>()
            .join("\n");

        let parsed = decode_send_response(&body).unwrap();
        assert_eq!(parsed.len(), recipients.len());
        for (response, number) in parsed.iter().zip(recipients) {
            assert_eq!(response.to.as_deref(), Some(number));
        }
    }
}
