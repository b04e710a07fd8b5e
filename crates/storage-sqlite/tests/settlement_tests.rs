//! End-to-end settlement tests against a real SQLite database.
//!
//! These exercise the full path: services -> repositories -> write actor ->
//! immediate transactions, including the serialization guarantee for
//! concurrent orders.

use std::sync::Arc;

use rust_decimal_macros::dec;
use tempfile::TempDir;

use goldbit_core::accounts::{AccountService, AccountServiceTrait, NewAccount};
use goldbit_core::assets::{AssetPriceUpdate, AssetService, AssetServiceTrait, NewAsset};
use goldbit_core::errors::Error;
use goldbit_core::holdings::{HoldingsService, HoldingsServiceTrait};
use goldbit_core::ledger::{
    LedgerService, LedgerServiceTrait, NewOrder, OrderSide, OrderType, TradeError, TradeStatus,
};
use goldbit_storage_sqlite::accounts::AccountRepository;
use goldbit_storage_sqlite::assets::AssetRepository;
use goldbit_storage_sqlite::holdings::HoldingsRepository;
use goldbit_storage_sqlite::ledger::LedgerRepository;
use goldbit_storage_sqlite::{create_pool, init, run_migrations, spawn_writer};

struct TestApp {
    // Held so the database directory outlives the services.
    _data_dir: TempDir,
    accounts: AccountService,
    assets: AssetService,
    holdings: HoldingsService,
    ledger: Arc<LedgerService>,
}

fn setup() -> TestApp {
    let data_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = init(data_dir.path().to_str().unwrap()).expect("Failed to init db");
    let pool = create_pool(&db_path).expect("Failed to create pool");
    run_migrations(&pool).expect("Failed to run migrations");
    let writer = spawn_writer(pool.clone());

    let account_repository = Arc::new(AccountRepository::new(pool.clone(), writer.clone()));
    let asset_repository = Arc::new(AssetRepository::new(pool.clone(), writer.clone()));
    let holdings_repository = Arc::new(HoldingsRepository::new(pool.clone()));
    let ledger_repository = Arc::new(LedgerRepository::new(pool.clone(), writer));

    TestApp {
        _data_dir: data_dir,
        accounts: AccountService::new(account_repository.clone()),
        assets: AssetService::new(asset_repository),
        holdings: HoldingsService::new(holdings_repository),
        ledger: Arc::new(LedgerService::new(account_repository, ledger_repository)),
    }
}

async fn seed_account(app: &TestApp, name: &str) -> String {
    app.accounts
        .create_account(NewAccount {
            id: None,
            name: name.to_string(),
            email: Some(format!("{}@goldbit.io", name)),
            is_admin: false,
        })
        .await
        .expect("Failed to create account")
        .id
}

async fn seed_asset(app: &TestApp, symbol: &str, price: rust_decimal::Decimal) -> String {
    app.assets
        .create_asset(NewAsset {
            id: None,
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            price,
            percent_change: dec!(0),
            market_cap: None,
        })
        .await
        .expect("Failed to create asset")
        .id
}

fn order(account_id: &str, asset_id: &str, side: OrderSide, quantity: &str) -> NewOrder {
    NewOrder {
        account_id: account_id.to_string(),
        asset_id: asset_id.to_string(),
        side,
        quantity: quantity.to_string(),
        order_type: OrderType::Market,
        limit_price: None,
        stop_price: None,
    }
}

fn trade_error(err: Error) -> TradeError {
    match err {
        Error::Trade(e) => e,
        other => panic!("Expected trade error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_first_buy_creates_holding_and_trade_row() {
    let app = setup();
    let account_id = seed_account(&app, "alice").await;
    let asset_id = seed_asset(&app, "ETH", dec!(2456.78)).await;

    let result = app
        .ledger
        .execute_order(order(&account_id, &asset_id, OrderSide::Buy, "2.5"))
        .await
        .unwrap();

    assert_eq!(result.holding.quantity, dec!(2.5));
    assert_eq!(result.record.price, dec!(2456.78));
    assert_eq!(result.record.status, TradeStatus::Completed);
    assert_eq!(result.asset.symbol, "ETH");

    let stored = app
        .holdings
        .get_holding(&account_id, &asset_id)
        .unwrap()
        .expect("Holding should exist after first buy");
    assert_eq!(stored.quantity, dec!(2.5));

    let trades = app.ledger.get_trades_by_account_id(&account_id).unwrap();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].side, OrderSide::Buy);
    assert_eq!(app.ledger.get_trade(&trades[0].id).unwrap().id, trades[0].id);
}

#[tokio::test]
async fn test_sell_entire_holding_reads_back_at_full_scale() {
    let app = setup();
    let account_id = seed_account(&app, "bob").await;
    let asset_id = seed_asset(&app, "BTC", dec!(64000)).await;

    app.ledger
        .execute_order(order(&account_id, &asset_id, OrderSide::Buy, "0.75"))
        .await
        .unwrap();
    let result = app
        .ledger
        .execute_order(order(&account_id, &asset_id, OrderSide::Sell, "0.75"))
        .await
        .unwrap();

    assert_eq!(result.record.status, TradeStatus::Completed);
    assert_eq!(result.holding.quantity.to_string(), "0.00000000");

    // The zero-quantity line survives as a terminal state.
    let stored = app
        .holdings
        .get_holding(&account_id, &asset_id)
        .unwrap()
        .expect("Zero-quantity holding should not be deleted");
    assert!(stored.is_closed());
    assert_eq!(stored.quantity.to_string(), "0.00000000");
}

#[tokio::test]
async fn test_oversell_rolls_back_without_any_mutation() {
    let app = setup();
    let account_id = seed_account(&app, "carol").await;
    let asset_id = seed_asset(&app, "BTC", dec!(64000)).await;

    app.ledger
        .execute_order(order(&account_id, &asset_id, OrderSide::Buy, "0.75"))
        .await
        .unwrap();

    let err = app
        .ledger
        .execute_order(order(&account_id, &asset_id, OrderSide::Sell, "1.0"))
        .await
        .unwrap_err();
    assert_eq!(
        trade_error(err),
        TradeError::InsufficientHolding {
            held: dec!(0.75),
            requested: dec!(1.0),
        }
    );

    // Holding untouched, no trade row appended for the rejected order.
    let stored = app
        .holdings
        .get_holding(&account_id, &asset_id)
        .unwrap()
        .unwrap();
    assert_eq!(stored.quantity, dec!(0.75));
    assert_eq!(app.ledger.get_trades_by_account_id(&account_id).unwrap().len(), 1);
}

#[tokio::test]
async fn test_sell_unknown_holding_and_unknown_ids_rejected() {
    let app = setup();
    let account_id = seed_account(&app, "dave").await;
    let asset_id = seed_asset(&app, "XAU", dec!(2400)).await;

    let err = app
        .ledger
        .execute_order(order(&account_id, &asset_id, OrderSide::Sell, "1"))
        .await
        .unwrap_err();
    assert_eq!(trade_error(err), TradeError::NoHoldingToSell(asset_id.clone()));

    let err = app
        .ledger
        .execute_order(order("missing-account", &asset_id, OrderSide::Buy, "1"))
        .await
        .unwrap_err();
    assert_eq!(
        trade_error(err),
        TradeError::AccountNotFound("missing-account".to_string())
    );

    let err = app
        .ledger
        .execute_order(order(&account_id, "missing-asset", OrderSide::Buy, "1"))
        .await
        .unwrap_err();
    assert_eq!(
        trade_error(err),
        TradeError::AssetNotFound("missing-asset".to_string())
    );
}

#[tokio::test]
async fn test_trade_settles_at_price_snapshot_after_update() {
    let app = setup();
    let account_id = seed_account(&app, "erin").await;
    let asset_id = seed_asset(&app, "ETH", dec!(2456.78)).await;

    app.assets
        .update_asset_price(AssetPriceUpdate {
            id: asset_id.clone(),
            price: dec!(2600.00),
            percent_change: dec!(5.83),
            market_cap: None,
        })
        .await
        .unwrap();

    let result = app
        .ledger
        .execute_order(order(&account_id, &asset_id, OrderSide::Buy, "1"))
        .await
        .unwrap();
    assert_eq!(result.record.price, dec!(2600.00));
    assert_eq!(result.asset.price, dec!(2600.00));
}

#[tokio::test]
async fn test_holdings_listing_values_at_current_quotes() {
    let app = setup();
    let account_id = seed_account(&app, "frank").await;
    let btc = seed_asset(&app, "BTC", dec!(64000)).await;
    let eth = seed_asset(&app, "ETH", dec!(2000)).await;

    app.ledger
        .execute_order(order(&account_id, &btc, OrderSide::Buy, "0.5"))
        .await
        .unwrap();
    app.ledger
        .execute_order(order(&account_id, &eth, OrderSide::Buy, "3"))
        .await
        .unwrap();

    let views = app.holdings.get_holdings(&account_id).unwrap();
    assert_eq!(views.len(), 2);
    // Ordered by symbol.
    assert_eq!(views[0].asset.symbol, "BTC");
    assert_eq!(views[0].market_value, dec!(32000));
    assert_eq!(views[1].asset.symbol, "ETH");
    assert_eq!(views[1].market_value, dec!(6000));
}

#[tokio::test]
async fn test_price_update_clears_market_cap() {
    let app = setup();
    let asset_id = app
        .assets
        .create_asset(NewAsset {
            id: None,
            symbol: "BTC".to_string(),
            name: "Bitcoin".to_string(),
            price: dec!(64000),
            percent_change: dec!(0),
            market_cap: Some(dec!(1260000000000)),
        })
        .await
        .unwrap()
        .id;

    let updated = app
        .assets
        .update_asset_price(AssetPriceUpdate {
            id: asset_id.clone(),
            price: dec!(65000),
            percent_change: dec!(1.56),
            market_cap: None,
        })
        .await
        .unwrap();
    assert_eq!(updated.market_cap, None);

    // The stored row must agree with the returned asset.
    let stored = app.assets.get_asset(&asset_id).unwrap();
    assert_eq!(stored.price, dec!(65000));
    assert_eq!(stored.market_cap, None);
}

#[tokio::test]
async fn test_duplicate_asset_symbol_rejected() {
    let app = setup();
    seed_asset(&app, "BTC", dec!(64000)).await;

    let err = app
        .assets
        .create_asset(NewAsset {
            id: None,
            symbol: "BTC".to_string(),
            name: "Bitcoin again".to_string(),
            price: dec!(1),
            percent_change: dec!(0),
            market_cap: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Database(goldbit_core::errors::DatabaseError::UniqueViolation(_))
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_oversells_never_drive_holding_negative() {
    let app = setup();
    let account_id = seed_account(&app, "grace").await;
    let asset_id = seed_asset(&app, "BTC", dec!(64000)).await;

    app.ledger
        .execute_order(order(&account_id, &asset_id, OrderSide::Buy, "0.75"))
        .await
        .unwrap();

    // Ten concurrent sells of 0.15 each ask for twice the held amount.
    let mut handles = Vec::new();
    for _ in 0..10 {
        let ledger = app.ledger.clone();
        let sell = order(&account_id, &asset_id, OrderSide::Sell, "0.15");
        handles.push(tokio::spawn(
            async move { ledger.execute_order(sell).await },
        ));
    }

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(err) => assert!(matches!(
                trade_error(err),
                TradeError::InsufficientHolding { .. }
            )),
        }
    }

    // Exactly five sells fit into 0.75; the rest must have been rejected.
    assert_eq!(successes, 5);
    let stored = app
        .holdings
        .get_holding(&account_id, &asset_id)
        .unwrap()
        .unwrap();
    assert_eq!(stored.quantity, dec!(0));
    assert!(!stored.quantity.is_sign_negative());

    // One buy plus exactly five completed sells in the log.
    assert_eq!(
        app.ledger.get_trades_by_account_id(&account_id).unwrap().len(),
        6
    );
}
