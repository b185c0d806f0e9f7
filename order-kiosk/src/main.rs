use order_kiosk::checkout::{CheckoutSession, SimulatedSubmitter};
use order_kiosk::{MenuSession, load_catalog, print_banner, setup_environment};
use shared::models::GroupFilter;
use shared::order::{CheckoutOutcome, PaymentMethod};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment();

    print_banner();

    tracing::info!(environment = %config.environment, "Order kiosk starting...");

    // 2. 加载菜单
    let catalog = Arc::new(load_catalog(&config)?);
    tracing::info!(entries = catalog.len(), "Menu ready");

    // 3. 菜单阶段: 浏览与加购
    let mut menu = MenuSession::new(Arc::clone(&catalog), config.tax_rate());
    menu.toggle_veg_only();
    menu.select_group(GroupFilter::Food);
    for entry in menu.visible_entries() {
        println!("  {:<20} {:>5}  {}", entry.name, entry.price, entry.category);
    }

    let picks: Vec<String> = menu
        .visible_entries()
        .into_iter()
        .take(2)
        .map(|e| e.id.clone())
        .collect();
    for id in &picks {
        menu.add_to_cart(id);
    }
    menu.clear_filters();
    menu.set_search_term("lassi");
    let drinks: Vec<String> = menu
        .visible_entries()
        .into_iter()
        .map(|e| e.id.clone())
        .collect();
    for id in &drinks {
        menu.add_to_cart(id);
        menu.add_to_cart(id);
    }

    let handoff = menu.proceed_to_checkout()?;

    // 4. 结账阶段
    let mut checkout = CheckoutSession::new(handoff, config.checkout_settings());
    checkout.set_customer_name("Walk-in Guest")?;
    checkout.set_table_number("T-15")?;
    checkout.select_payment_method(PaymentMethod::Upi)?;

    for line in checkout.lines() {
        println!(
            "  {:<20} x{:<3} {:>6}",
            line.entry.name, line.quantity, line.line_total
        );
    }
    let totals = checkout.totals();
    println!(
        "  subtotal {}  tax {}  total {}",
        totals.subtotal, totals.tax, totals.total
    );

    // Ctrl-C 取消进行中的下单
    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let submitter = SimulatedSubmitter::new(config.submission_latency());
    match checkout.submit(&submitter, &cancel).await? {
        CheckoutOutcome::Confirmed { receipt } => {
            println!(
                "Thank you, {}! Order {} confirmed, ready in {}",
                receipt.customer_name,
                receipt.order_id,
                receipt.ready.describe_from(receipt.placed_at)
            );
        }
        CheckoutOutcome::Rejected { reason } => {
            tracing::warn!(code = %reason.code, "Order rejected: {}", reason.message);
        }
    }

    Ok(())
}
