//! 点餐流程测试 - 菜单 → 购物车 → 结账
//!
//! 使用内置菜单走完整流程，结账使用暂停时钟下的模拟下单网关

use order_kiosk::cart::CartTotals;
use order_kiosk::catalog::sample_catalog;
use order_kiosk::checkout::{CheckoutError, CheckoutSession, CheckoutSettings, SimulatedSubmitter};
use order_kiosk::{CartLedger, MenuSession, TaxRate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::models::GroupFilter;
use shared::order::{CheckoutOutcome, CheckoutStatus, PaymentMethod};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn menu() -> MenuSession {
    MenuSession::new(Arc::new(sample_catalog()), TaxRate::default())
}

#[tokio::test(start_paused = true)]
async fn test_full_order_flow() {
    let mut menu = menu();

    // 浏览: 饮品
    menu.select_group(GroupFilter::Drink);
    let drinks: Vec<String> = menu
        .visible_entries()
        .into_iter()
        .map(|e| e.id.clone())
        .collect();
    assert_eq!(drinks, ["4", "8"]);
    menu.add_to_cart("4");
    menu.add_to_cart("8");
    menu.add_to_cart("8");

    // 搜索
    menu.select_group(GroupFilter::All);
    menu.set_search_term("paneer");
    let found: Vec<String> = menu
        .visible_entries()
        .into_iter()
        .map(|e| e.id.clone())
        .collect();
    assert_eq!(found, ["7"]);
    menu.add_to_cart("7");

    let badge = menu.totals();
    assert_eq!(badge.item_count, 4);
    assert_eq!(badge.subtotal, 120 + 160 + 280);

    // 结账
    let handoff = menu.proceed_to_checkout().unwrap();
    let mut checkout = CheckoutSession::new(handoff, CheckoutSettings::default());
    checkout.decrement("8").unwrap();
    checkout.set_quantity("7", 2).unwrap();
    checkout.set_customer_name("Meera").unwrap();
    checkout.set_special_requirements("less spicy").unwrap();
    checkout.select_payment_method(PaymentMethod::Card).unwrap();

    let totals = checkout.totals();
    assert_eq!(
        totals,
        CartTotals {
            item_count: 4,
            subtotal: 120 + 80 + 560,
            tax: 38,
            total: 798,
        }
    );

    let submitter = SimulatedSubmitter::new(Duration::from_millis(2000));
    let started = tokio::time::Instant::now();
    let outcome = checkout
        .submit(&submitter, &CancellationToken::new())
        .await
        .unwrap();
    assert!(started.elapsed() >= Duration::from_millis(2000));

    match outcome {
        CheckoutOutcome::Confirmed { receipt } => {
            assert_eq!(receipt.customer_name, "Meera");
            assert_eq!(receipt.payment_method, PaymentMethod::Card);
            assert_eq!(receipt.total, 798);
            assert_eq!(receipt.item_count, 4);
        }
        other => panic!("expected confirmation, got {:?}", other),
    }
    assert_eq!(checkout.status(), CheckoutStatus::Placed);
    assert!(checkout.ledger().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_ledger_frozen_while_processing() {
    let mut menu = menu();
    menu.add_to_cart("3");
    let mut checkout = CheckoutSession::new(
        menu.proceed_to_checkout().unwrap(),
        CheckoutSettings::default(),
    );
    checkout.set_customer_name("Dev").unwrap();
    checkout.select_payment_method(PaymentMethod::Upi).unwrap();

    let draft = checkout.begin_submission().unwrap();
    assert_eq!(checkout.status(), CheckoutStatus::Processing);
    assert_eq!(checkout.increment("3"), Err(CheckoutError::Frozen));
    assert_eq!(checkout.ledger().quantity("3"), 1);

    let submitter = SimulatedSubmitter::new(Duration::from_millis(2000));
    let ack = order_kiosk::OrderSubmitter::submit(&submitter, &draft).await;
    let outcome = checkout.complete_submission(ack).unwrap();
    assert!(outcome.is_confirmed());
    assert_eq!(checkout.status(), CheckoutStatus::Placed);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_mid_submission_abandons() {
    let mut menu = menu();
    menu.add_to_cart("5");
    let mut checkout = CheckoutSession::new(
        menu.proceed_to_checkout().unwrap(),
        CheckoutSettings::default(),
    );
    checkout.set_customer_name("Kabir").unwrap();
    checkout.select_payment_method(PaymentMethod::Upi).unwrap();

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(500)).await;
        trigger.cancel();
    });

    let submitter = SimulatedSubmitter::new(Duration::from_millis(2000));
    let result = checkout.submit(&submitter, &cancel).await;
    assert_eq!(result, Err(CheckoutError::Cancelled));
    assert_eq!(checkout.status(), CheckoutStatus::Abandoned);
    assert_eq!(checkout.ledger().quantity("5"), 1);
}

#[test]
fn test_random_ledger_operations_keep_invariants() {
    let catalog = sample_catalog();
    let ids = ["1", "2", "3", "4", "5", "6", "7", "8", "unknown"];
    let mut rng = StdRng::seed_from_u64(7);
    let mut ledger = CartLedger::new();

    for _ in 0..2000 {
        let id = ids[rng.gen_range(0..ids.len())];
        let before = ledger.clone();
        match rng.gen_range(0..4) {
            0 => {
                ledger.add(id);
                assert_eq!(ledger.quantity(id), before.quantity(id) + 1);
            }
            1 => {
                ledger.remove(id);
                assert_eq!(ledger.quantity(id), before.quantity(id).saturating_sub(1));
            }
            2 => {
                let qty = rng.gen_range(0..5);
                ledger.set_quantity(id, qty);
                assert_eq!(ledger.quantity(id), qty);
            }
            _ => {
                ledger.add(id);
                ledger.remove(id);
                assert_eq!(ledger, before);
            }
        }

        // no zero entries
        assert!(ledger.iter().all(|(_, q)| q >= 1));

        let totals = CartTotals::compute(&ledger, &catalog, TaxRate::default());
        let count: u64 = ledger.iter().map(|(_, q)| u64::from(q)).sum();
        let subtotal: u64 = ledger
            .iter()
            .map(|(id, q)| catalog.price_of(id).unwrap_or(0) * u64::from(q))
            .sum();
        assert_eq!(totals.item_count, count);
        assert_eq!(totals.subtotal, subtotal);
        assert_eq!(totals.tax, TaxRate::default().tax_on(subtotal));
        assert_eq!(totals.total, subtotal + totals.tax);
    }
}
