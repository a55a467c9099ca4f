use medihelp::errors::{MedihelpError, Result};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_throttled_error() {
        let error = MedihelpError::throttled("HTTP 429 from overpass");

        assert!(matches!(error, MedihelpError::Throttled(_)));
        assert!(error.to_string().contains("Upstream Throttled"));
        assert!(error.to_string().contains("HTTP 429 from overpass"));
    }

    #[test]
    fn test_upstream_status_error() {
        let error = MedihelpError::upstream_status(504);

        assert_eq!(error, MedihelpError::UpstreamStatus(504));
        assert_eq!(error.message(), "status code 504");
    }

    #[test]
    fn test_location_errors() {
        let lookup = MedihelpError::location_lookup("private range");
        let unavailable = MedihelpError::location_unavailable("lookup failed");

        assert!(matches!(lookup, MedihelpError::LocationLookup(_)));
        assert!(matches!(unavailable, MedihelpError::LocationUnavailable(_)));
        assert_ne!(lookup.code(), unavailable.code());
    }

    #[test]
    fn test_validation_error() {
        let error = MedihelpError::validation("Missing longitude in request");

        assert!(matches!(error, MedihelpError::Validation(_)));
        assert!(error.to_string().contains("Validation Error"));
        assert!(error.to_string().contains("Missing longitude in request"));
    }
}

#[cfg(test)]
mod user_message_tests {
    use super::*;

    #[test]
    fn test_throttled_message_suggests_retry() {
        let msg = MedihelpError::throttled("x").user_message();
        assert_eq!(msg, "Too many requests. Please try again in a few minutes.");
    }

    #[test]
    fn test_status_message_includes_code() {
        assert_eq!(
            MedihelpError::upstream_status(500).user_message(),
            "Server returned status code 500. Please try again later."
        );
    }

    #[test]
    fn test_malformed_message_hides_details() {
        let msg = MedihelpError::malformed_response("expected value at line 1").user_message();
        assert_eq!(msg, "Invalid response from server. Please try again later.");
        assert!(!msg.contains("line 1"));
    }

    #[test]
    fn test_unreachable_message_carries_cause() {
        let msg = MedihelpError::unreachable("connection refused").user_message();
        assert_eq!(msg, "Error finding nearby hospitals: connection refused");
    }

    #[test]
    fn test_validation_message_passes_through() {
        assert_eq!(
            MedihelpError::validation("Invalid latitude in request").user_message(),
            "Invalid latitude in request"
        );
    }

    #[test]
    fn test_location_messages_ask_for_manual_location() {
        let expected = "Could not determine your location. Please provide your location manually.";
        assert_eq!(MedihelpError::location_lookup("x").user_message(), expected);
        assert_eq!(MedihelpError::location_unavailable("x").user_message(), expected);
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
        let error: MedihelpError = io_error.into();

        assert!(matches!(error, MedihelpError::FileOperation(_)));
        assert!(error.to_string().contains("config.toml"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let error: MedihelpError = json_error.into();

        assert!(matches!(error, MedihelpError::Serialization(_)));
    }

    #[test]
    fn test_question_mark_propagation() {
        fn parse(input: &str) -> Result<serde_json::Value> {
            Ok(serde_json::from_str(input)?)
        }

        assert!(parse("{}").is_ok());
        assert!(matches!(parse("nope"), Err(MedihelpError::Serialization(_))));
    }
}

#[cfg(test)]
mod error_format_tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let errors = [
            MedihelpError::throttled(""),
            MedihelpError::upstream_status(0),
            MedihelpError::malformed_response(""),
            MedihelpError::unreachable(""),
            MedihelpError::location_lookup(""),
            MedihelpError::location_unavailable(""),
            MedihelpError::validation(""),
            MedihelpError::config(""),
            MedihelpError::serialization(""),
            MedihelpError::file_operation(""),
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_format_simple() {
        let error = MedihelpError::config("port out of range");
        assert_eq!(error.format_simple(), "Configuration Error: port out of range");
        assert_eq!(error.to_string(), error.format_simple());
    }

    #[test]
    fn test_format_colored_contains_code() {
        colored::control::set_override(false);
        let formatted = MedihelpError::validation("radius must be positive").format_colored();
        assert!(formatted.contains("E007"));
        assert!(formatted.contains("radius must be positive"));
    }

    #[test]
    fn test_is_std_error() {
        let error = MedihelpError::unreachable("dns");
        let boxed: Box<dyn Error> = Box::new(error);
        assert!(boxed.source().is_none());
    }
}
