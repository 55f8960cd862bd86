//! File Adapter Tests
//!
//! Order file write modes and trade catalog loading against real files.

#![allow(clippy::unwrap_used)]

use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;

use order_generator::application::ports::{
    CatalogError, OrderSinkPort, TradeCatalogPort, WriteMode,
};
use order_generator::domain::option_chain::OptionRight;
use order_generator::domain::order_entry::{ExpirationStyle, OrderLeg, OrderLine, OrderSide};
use order_generator::infrastructure::persistence::{FileOrderSink, JsonTradeCatalog};

const CATALOG_FIXTURE: &str = include_str!("fixtures/trade_structures.json");

fn line(strike: i64) -> OrderLine {
    OrderLine {
        side: OrderSide::Buy,
        number_of_trades: 1,
        symbol: "SPX".to_string(),
        multiplier: 100,
        prefix_style: ExpirationStyle::Weekly,
        legs: vec![OrderLeg {
            leg_id: 0,
            expiry_date: Utc.with_ymd_and_hms(2024, 2, 1, 21, 0, 0).unwrap(),
            style: ExpirationStyle::Weekly,
            strike: rust_decimal::Decimal::from(strike),
            option_type: OptionRight::Call,
            mark: dec!(1.25),
            tranche_quantity: 1,
        }],
        net_premium: dec!(1.25),
        warnings: vec![],
    }
}

#[tokio::test]
async fn overwrite_truncates_and_append_extends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("TOS_order_gen.txt");
    std::fs::write(&path, "stale order from a previous session\n").unwrap();

    let sink = FileOrderSink::new(&path);
    sink.write(&[line(4900)], WriteMode::Overwrite).await.unwrap();
    sink.write(&[line(4950), line(5000)], WriteMode::Append)
        .await
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "BUY +1 1 CUSTOM SPX 100 (Weeklys) 01 FEB 24 4900 CALL @ LMT\n\
         BUY +1 1 CUSTOM SPX 100 (Weeklys) 01 FEB 24 4950 CALL @ LMT\n\
         BUY +1 1 CUSTOM SPX 100 (Weeklys) 01 FEB 24 5000 CALL @ LMT\n"
    );
    assert_eq!(sink.location(), path.display().to_string());
}

#[tokio::test]
async fn append_creates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orders.txt");

    FileOrderSink::new(&path)
        .write(&[line(4900)], WriteMode::Append)
        .await
        .unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 1);
}

#[tokio::test]
async fn missing_directory_is_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let sink = FileOrderSink::new(dir.path().join("no/such/dir/orders.txt"));

    let err = sink
        .write(&[line(4900)], WriteMode::Overwrite)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("orders.txt"));
}

#[tokio::test]
async fn catalog_is_reread_on_every_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trade_structures.json");
    std::fs::write(&path, CATALOG_FIXTURE).unwrap();

    let catalog = JsonTradeCatalog::new(&path);
    let first = catalog.load().await.unwrap();
    assert_eq!(
        first.names().collect::<Vec<_>>(),
        vec!["Put Spread", "Iron Condor", "Strangle Pair"]
    );

    std::fs::write(&path, r#"{"trade_structures": []}"#).unwrap();
    assert!(catalog.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_catalog_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = JsonTradeCatalog::new(dir.path().join("absent.json"))
        .load()
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::Read { .. }));
}

#[tokio::test]
async fn structurally_invalid_catalog_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trade_structures.json");
    std::fs::write(
        &path,
        r#"{"trade_structures": [{"trade_name": "broken", "trade_components": [
            {"number_of_legs": 2, "legs": [
                {"leg_id": 0, "option_type": "PUT", "dte": 7, "delta": 10, "quantity": 1}]}]}]}"#,
    )
    .unwrap();

    let err = JsonTradeCatalog::new(&path).load().await.unwrap_err();
    assert!(matches!(err, CatalogError::Invalid(_)));
}
