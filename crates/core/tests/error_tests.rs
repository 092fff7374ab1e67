// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use finport_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn validation_error() {
        let err = CoreError::ValidationError("'from' must not be after 'to'".into());
        assert_eq!(
            err.to_string(),
            "Validation failed: 'from' must not be after 'to'"
        );
    }

    #[test]
    fn stock_not_found() {
        let err = CoreError::StockNotFound("ZZZZ".into());
        assert_eq!(err.to_string(), "Stock not found: ZZZZ");
    }

    #[test]
    fn portfolio_not_found() {
        let err = CoreError::PortfolioNotFound(42);
        assert_eq!(err.to_string(), "Portfolio not found: 42");
    }

    #[test]
    fn provider() {
        let err = CoreError::Provider {
            provider: "Simulated".into(),
            message: "timed out".into(),
        };
        assert_eq!(err.to_string(), "Provider error (Simulated): timed out");
    }

    #[test]
    fn cancelled() {
        assert_eq!(CoreError::Cancelled.to_string(), "Operation cancelled");
    }

    #[test]
    fn config() {
        let err = CoreError::Config("bad currency".into());
        assert_eq!(err.to_string(), "Invalid configuration: bad currency");
    }

    #[test]
    fn serialization_and_deserialization() {
        assert_eq!(
            CoreError::Serialization("x".into()).to_string(),
            "Serialization error: x"
        );
        assert_eq!(
            CoreError::Deserialization("y".into()).to_string(),
            "Deserialization error: y"
        );
    }

    #[test]
    fn file_io() {
        let err = CoreError::FileIO("permission denied".into());
        assert_eq!(err.to_string(), "File I/O error: permission denied");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod from_impls {
    use super::*;

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let core_err: CoreError = io_err.into();
        match &core_err {
            CoreError::FileIO(msg) => assert!(msg.contains("file not found")),
            other => panic!("Expected FileIO, got {:?}", other),
        }
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let core_err: CoreError = json_err.into();
        assert!(matches!(core_err, CoreError::Deserialization(_)));
    }

    #[test]
    fn question_mark_propagates_io_error() {
        fn read_missing() -> Result<String, CoreError> {
            Ok(std::fs::read_to_string("/definitely/not/here/finport.json")?)
        }
        assert!(matches!(read_missing(), Err(CoreError::FileIO(_))));
    }
}
