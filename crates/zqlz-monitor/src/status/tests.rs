//! Unit tests for status fetching

use super::*;
use crate::testing::{MockDriver, Script, raw_row, status};
use std::sync::Arc;
use zqlz_core::{Value, ZqlzError};

mod status_value_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_text() {
        assert_eq!(StatusValue::from("100").parse_i64().unwrap(), 100);
        assert_eq!(StatusValue::from("-7").parse_i64().unwrap(), -7);
        assert_eq!(
            StatusValue::from("9223372036854775807").parse_i64().unwrap(),
            i64::MAX
        );
    }

    #[test]
    fn test_parse_bytes() {
        let value = StatusValue::Bytes(b"4096".to_vec());
        assert_eq!(value.parse_i64().unwrap(), 4096);
    }

    #[test]
    fn test_parse_failures_are_coercion_errors() {
        for value in [
            StatusValue::from("abc"),
            StatusValue::from(""),
            StatusValue::from(" 12"),
            StatusValue::from("1.5"),
            StatusValue::from("18446744073709551615"),
            StatusValue::Bytes(vec![0xff, 0x00]),
            StatusValue::Null,
        ] {
            let err = value.parse_i64().unwrap_err();
            assert!(
                matches!(err, ZqlzError::Coercion(_)),
                "{} should fail with a coercion error",
                value
            );
        }
    }

    #[test]
    fn test_decode_driver_values() {
        assert_eq!(
            StatusValue::decode(&Value::String("ON".into())).unwrap(),
            StatusValue::Text("ON".into())
        );
        assert_eq!(
            StatusValue::decode(&Value::Int64(12)).unwrap(),
            StatusValue::Text("12".into())
        );
        assert_eq!(
            StatusValue::decode(&Value::Decimal("3".into())).unwrap(),
            StatusValue::Text("3".into())
        );
        assert_eq!(StatusValue::decode(&Value::Null).unwrap(), StatusValue::Null);
        assert_eq!(
            StatusValue::decode(&Value::Bytes(vec![1, 2])).unwrap(),
            StatusValue::Bytes(vec![1, 2])
        );
    }

    #[test]
    fn test_decode_rejects_temporal_values() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let err = StatusValue::decode(&Value::Date(date)).unwrap_err();
        assert!(matches!(err, ZqlzError::Decode(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(StatusValue::from("abc").to_string(), "\"abc\"");
        assert_eq!(StatusValue::Null.to_string(), "NULL");
    }
}

mod status_row_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_name_value_row() {
        let row = StatusRow::decode(&status("Bytes_received", "100")).unwrap();
        assert_eq!(row, StatusRow::new("Bytes_received", "100"));
    }

    #[test]
    fn test_decode_binary_name() {
        let row = StatusRow::decode(&raw_row(vec![
            Value::Bytes(b"Queries".to_vec()),
            Value::Bytes(b"50".to_vec()),
        ]))
        .unwrap();
        assert_eq!(row.name, "Queries");
        assert_eq!(row.value, StatusValue::Bytes(b"50".to_vec()));
    }

    #[test]
    fn test_decode_wrong_column_count() {
        let short = raw_row(vec![Value::String("Queries".into())]);
        assert!(matches!(
            StatusRow::decode(&short).unwrap_err(),
            ZqlzError::Decode(_)
        ));

        let long = raw_row(vec![
            Value::String("Queries".into()),
            Value::String("1".into()),
            Value::String("extra".into()),
        ]);
        assert!(matches!(
            StatusRow::decode(&long).unwrap_err(),
            ZqlzError::Decode(_)
        ));
    }

    #[test]
    fn test_decode_error_names_the_columns() {
        let row = zqlz_core::Row::new(
            vec!["Variable_name".to_string()],
            vec![Value::String("Queries".into())],
        );
        let err = StatusRow::decode(&row).unwrap_err();
        assert!(err.to_string().contains("[Variable_name]"));
    }

    #[test]
    fn test_decode_non_text_name() {
        let row = raw_row(vec![Value::Int64(1), Value::String("1".into())]);
        assert!(matches!(
            StatusRow::decode(&row).unwrap_err(),
            ZqlzError::Decode(_)
        ));
    }

    #[test]
    fn test_row_parse_error_names_the_variable() {
        let err = StatusRow::new("Slow_queries", "abc").parse_i64().unwrap_err();
        assert!(matches!(err, ZqlzError::Coercion(_)));
        assert!(err.to_string().contains("Slow_queries"));
    }
}

mod status_query_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mysql_query() {
        let query = StatusQuery::mysql();
        assert!(query.contains("SHOW"));
        assert!(query.contains("GLOBAL"));
        assert!(query.contains("STATUS"));
    }

    #[test]
    fn test_for_driver_supported() {
        assert!(StatusQuery::for_driver("mysql").is_ok());
        assert!(StatusQuery::for_driver("mariadb").is_ok());
    }

    #[test]
    fn test_for_driver_unsupported() {
        let result = StatusQuery::for_driver("sqlite");
        assert!(matches!(result, Err(ZqlzError::NotSupported(_))));
    }
}

mod fetcher_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    async fn collect(
        fetcher: &StatusFetcher,
        address: &str,
    ) -> (Vec<StatusRow>, zqlz_core::Result<()>) {
        let mut rows = Vec::new();
        let result = fetcher
            .fetch(address, |row| {
                rows.push(row);
                Ok(())
            })
            .await;
        (rows, result)
    }

    #[tokio::test]
    async fn test_fetch_yields_rows_in_server_order_and_closes() {
        let driver = MockDriver::new().with_server(
            "db1",
            Script::Rows(vec![status("Uptime", "10"), status("Queries", "5")]),
        );
        let fetcher = StatusFetcher::new(Arc::new(driver.clone()));

        let (rows, result) = collect(&fetcher, "db1").await;

        assert!(result.is_ok());
        assert_eq!(
            rows,
            vec![StatusRow::new("Uptime", "10"), StatusRow::new("Queries", "5")]
        );
        let journal = driver.journal();
        assert_eq!(journal.queries, vec![StatusQuery::mysql().to_string()]);
        assert_eq!(journal.closes, vec!["db1".to_string()]);
    }

    #[tokio::test]
    async fn test_connection_failure_is_fatal() {
        let driver = MockDriver::new().with_server("db1", Script::Refuse);
        let fetcher = StatusFetcher::new(Arc::new(driver.clone()));

        let (rows, result) = collect(&fetcher, "db1").await;

        assert!(rows.is_empty());
        assert!(matches!(result, Err(ZqlzError::Connection(_))));
        assert!(driver.journal().closes.is_empty());
    }

    #[tokio::test]
    async fn test_query_failure_yields_no_rows() {
        let driver = MockDriver::new().with_server("db1", Script::QueryFails);
        let fetcher = StatusFetcher::new(Arc::new(driver.clone()));

        let (rows, result) = collect(&fetcher, "db1").await;

        assert!(result.is_ok());
        assert!(rows.is_empty());
        assert_eq!(driver.journal().closes, vec!["db1".to_string()]);
    }

    #[tokio::test]
    async fn test_lost_connection_during_query_is_fatal() {
        let driver = MockDriver::new().with_server("db1", Script::DropsConnection);
        let fetcher = StatusFetcher::new(Arc::new(driver.clone()));

        let (_, result) = collect(&fetcher, "db1").await;

        assert!(matches!(result, Err(ZqlzError::Connection(_))));
        assert_eq!(driver.journal().closes, vec!["db1".to_string()]);
    }

    #[tokio::test]
    async fn test_unsupported_dialect_yields_no_rows() {
        let driver = MockDriver::new()
            .named("sqlite")
            .with_server("file.db", Script::Rows(vec![status("Queries", "1")]));
        let fetcher = StatusFetcher::new(Arc::new(driver.clone()));

        let (rows, result) = collect(&fetcher, "file.db").await;

        assert!(result.is_ok());
        assert!(rows.is_empty());
        assert!(driver.journal().queries.is_empty());
        assert_eq!(driver.journal().closes, vec!["file.db".to_string()]);
    }

    #[tokio::test]
    async fn test_malformed_row_stops_fetch_after_earlier_rows() {
        let driver = MockDriver::new().with_server(
            "db1",
            Script::Rows(vec![
                status("Uptime", "10"),
                raw_row(vec![Value::String("Broken".into())]),
                status("Queries", "5"),
            ]),
        );
        let fetcher = StatusFetcher::new(Arc::new(driver.clone()));

        let (rows, result) = collect(&fetcher, "db1").await;

        assert!(matches!(result, Err(ZqlzError::Decode(_))));
        assert_eq!(rows, vec![StatusRow::new("Uptime", "10")]);
        assert_eq!(driver.journal().closes, vec!["db1".to_string()]);
    }

    #[tokio::test]
    async fn test_visitor_error_stops_fetch_and_closes() {
        let driver = MockDriver::new().with_server(
            "db1",
            Script::Rows(vec![status("Uptime", "10"), status("Queries", "5")]),
        );
        let fetcher = StatusFetcher::new(Arc::new(driver.clone()));

        let mut seen = 0;
        let result = fetcher
            .fetch("db1", |_| {
                seen += 1;
                Err(ZqlzError::Other("stop".into()))
            })
            .await;

        assert!(matches!(result, Err(ZqlzError::Other(_))));
        assert_eq!(seen, 1);
        assert_eq!(driver.journal().closes, vec!["db1".to_string()]);
    }

    #[test]
    fn test_status_rows_from_result() {
        let result = zqlz_core::QueryResult {
            rows: vec![status("Uptime", "1"), status("Queries", "2")],
            ..Default::default()
        };
        let mut rows = StatusRows::from(result);
        assert_eq!(rows.next().unwrap().unwrap().name, "Uptime");
        assert_eq!(rows.next().unwrap().unwrap().name, "Queries");
        assert!(rows.next().is_none());

        assert!(StatusRows::empty().next().is_none());
    }
}
