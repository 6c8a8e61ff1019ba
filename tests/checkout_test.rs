//! Integration tests for the checkout wizard state machine.

mod common;

use common::{seeded_client, test_client};
use ticketing_wallet::{CheckoutError, CheckoutSession, CheckoutStep, TicketTier, WalletHandle};

fn regular_tier() -> TicketTier {
    TicketTier::new("tier1", "Regular", 50, 100, 4)
}

#[tokio::test]
async fn test_starts_at_connect_without_wallet() {
    let handle = WalletHandle::new(test_client()).await;
    let session = CheckoutSession::begin("evt1", regular_tier(), handle.is_wallet_ready());
    assert_eq!(session.step(), CheckoutStep::Connect);
}

#[tokio::test]
async fn test_starts_at_review_when_wallet_ready() -> anyhow::Result<()> {
    let handle = WalletHandle::new(test_client()).await;
    handle.connect().await?;

    let session = CheckoutSession::begin("evt1", regular_tier(), handle.is_wallet_ready());
    assert_eq!(session.step(), CheckoutStep::Review);
    Ok(())
}

#[tokio::test]
async fn test_connect_step_advances_to_review() {
    let mut session = CheckoutSession::begin("evt1", regular_tier(), false);
    session.wallet_connected().unwrap();
    assert_eq!(session.step(), CheckoutStep::Review);
}

#[tokio::test]
async fn test_quantity_clamped_before_payment() {
    // max_per_purchase=4 but only 2 available: a request for 10 enters
    // payment with quantity 2
    let scarce = TicketTier::new("tier1", "Regular", 50, 2, 4);
    let mut session = CheckoutSession::begin("evt1", scarce, true);

    assert_eq!(session.set_quantity(10).unwrap(), 2);
    session.proceed_to_payment().unwrap();
    assert_eq!(session.step(), CheckoutStep::Payment);
    assert_eq!(session.quantity(), 2);
}

#[tokio::test]
async fn test_total_price_never_stale() {
    let mut session = CheckoutSession::begin("evt1", regular_tier(), true);
    session.set_quantity(3).unwrap();

    // Stable across repeated reads until the quantity changes
    assert_eq!(session.total_price(), 150);
    assert_eq!(session.total_price(), 150);

    session.set_quantity(1).unwrap();
    assert_eq!(session.total_price(), 50);

    // Tier switch recomputes against the new price
    let vip = TicketTier::new("tier2", "VIP", 200, 10, 2);
    session.switch_tier(vip, true).unwrap();
    assert_eq!(session.total_price(), 200);
}

#[tokio::test]
async fn test_back_preserves_quantity() {
    let mut session = CheckoutSession::begin("evt1", regular_tier(), true);
    session.set_quantity(3).unwrap();
    session.proceed_to_payment().unwrap();

    session.back_to_review().unwrap();
    assert_eq!(session.step(), CheckoutStep::Review);
    assert_eq!(session.quantity(), 3);
}

#[tokio::test]
async fn test_successful_payment_reaches_confirmation() -> anyhow::Result<()> {
    let handle = WalletHandle::new(test_client()).await;
    handle.connect().await?;

    let mut session = CheckoutSession::begin("evt1", regular_tier(), handle.is_wallet_ready());
    session.set_quantity(2).unwrap();
    session.proceed_to_payment().unwrap();

    let result = session.pay(&handle).await?;
    assert!(result.is_success());
    assert_eq!(session.step(), CheckoutStep::Confirmation);
    assert!(session.is_complete());
    assert!(session.transaction_hash().is_some());
    assert!(session.last_error().is_none());

    // 2 tickets at 50 IDRX each
    assert!(handle.has_enough_balance(900, "IDRX"));
    assert!(!handle.has_enough_balance(901, "IDRX"));
    Ok(())
}

#[tokio::test]
async fn test_failed_payment_stays_in_payment() -> anyhow::Result<()> {
    let handle = WalletHandle::new(seeded_client(10)).await;
    handle.connect().await?;

    let mut session = CheckoutSession::begin("evt1", regular_tier(), handle.is_wallet_ready());
    session.proceed_to_payment().unwrap();

    let result = session.pay(&handle).await?;
    assert!(!result.is_success());
    assert_eq!(session.step(), CheckoutStep::Payment);
    assert_eq!(session.last_error(), Some("Insufficient balance"));
    assert!(session.transaction_hash().is_none());

    // No automatic retry: the session waits for a fresh user action
    let retry = session.pay(&handle).await?;
    assert!(!retry.is_success());
    assert_eq!(session.step(), CheckoutStep::Payment);
    Ok(())
}

#[tokio::test]
async fn test_pay_requires_payment_step() -> anyhow::Result<()> {
    let handle = WalletHandle::new(test_client()).await;
    handle.connect().await?;

    // Still in Review: paying is an invalid transition
    let mut session = CheckoutSession::begin("evt1", regular_tier(), true);
    let err = session.pay(&handle).await.unwrap_err();
    assert!(matches!(err, CheckoutError::InvalidTransition { .. }));
    assert_eq!(session.step(), CheckoutStep::Review);
    Ok(())
}

#[tokio::test]
async fn test_quantity_locked_outside_review() {
    let mut session = CheckoutSession::begin("evt1", regular_tier(), true);
    session.proceed_to_payment().unwrap();

    let err = session.set_quantity(2).unwrap_err();
    assert!(matches!(err, CheckoutError::InvalidTransition { .. }));
    assert_eq!(session.quantity(), 1);
}
