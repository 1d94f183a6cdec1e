use rust_decimal::Decimal;
use storefront::config::AppConfig;
use storefront::lifecycle::{setup_tracing, StorefrontSystem};
use storefront::model::{AccountCreate, ProductCreate, RequestedLine};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = AppConfig::from_env().map_err(|e| e.to_string())?;
    let system = StorefrontSystem::start(&config).await.map_err(|e| e.to_string())?;

    let span = tracing::info_span!("catalog_setup");
    let (account_id, kettle, mug, teapot) = async {
        let account_id = system
            .account_client
            .create_account(AccountCreate::new("Alice"))
            .await
            .map_err(|e| e.to_string())?;
        let kettle = system
            .product_client
            .create_product(ProductCreate::new(
                "Kettle",
                "Stainless steel, 1.7 litres",
                Decimal::new(3499, 2),
            ))
            .await
            .map_err(|e| e.to_string())?;
        let mug = system
            .product_client
            .create_product(ProductCreate::new("Mug", "Ceramic, 350ml", Decimal::new(850, 2)))
            .await
            .map_err(|e| e.to_string())?;
        let teapot = system
            .product_client
            .create_product(ProductCreate::new("Teapot", "Glazed ceramic", Decimal::new(2200, 2)))
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>((account_id, kettle, mug, teapot))
    }
    .instrument(span)
    .await?;

    // One unknown product and one zero-quantity line, both dropped.
    let lines = vec![
        RequestedLine::new(kettle, 1),
        RequestedLine::new(mug, 4),
        RequestedLine::new("discontinued", 2),
        RequestedLine::new(teapot, 0),
    ];
    let order = system
        .orders
        .place_order(&account_id, &lines)
        .instrument(tracing::info_span!("order_processing"))
        .await
        .map_err(|e| e.to_string())?;
    info!(order_id = %order.id, total = %order.total_price, lines = order.line_items.len(), "Placed");

    for details in system
        .orders
        .get_orders_for_account(&account_id)
        .await
        .map_err(|e| e.to_string())?
    {
        info!(order_id = %details.id, total = %details.total_price, "Order");
        for line in &details.products {
            info!(product = %line.name, price = %line.price, quantity = line.quantity, "  line");
        }
    }

    system.shutdown().await
}
