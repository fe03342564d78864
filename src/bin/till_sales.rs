use clap::Parser;
use small_till::domain::model::{PaymentMethod, Sale, SaleItem};
use small_till::utils::logger;
use small_till::{FuelDesk, SaleProcessor, StdoutConsole, StoreDesk};

#[derive(Parser)]
#[command(name = "till-sales")]
#[command(about = "Runs demonstration sales through the forecourt sale desks")]
struct Args {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);
    tracing::info!("Starting till-sales demonstration");

    let console = StdoutConsole::default();

    println!("⛽ FUEL DESK SALE:");
    let fuel = SaleProcessor::new(FuelDesk::new(console.clone()), console.clone());
    let fuel_sale = Sale {
        station_id: "posto-101".to_string(),
        items: vec![SaleItem {
            description: "Premium unleaded".to_string(),
            quantity: 42.0,
            unit_price: 1.89,
            pump_id: Some("3".to_string()),
            tank_id: Some("2".to_string()),
            litres: Some(42.0),
            product_id: None,
        }],
        customer_tax_id: None,
        payment_method: PaymentMethod::Debit,
    };
    let outcome = fuel.process(&fuel_sale)?;
    println!(
        "✅ Sale {} settled: ${:.2} (taxes ${:.2})",
        outcome.sale_id, outcome.net, outcome.taxes
    );
    println!();

    println!("🛒 STORE DESK SALE:");
    let store = SaleProcessor::new(StoreDesk::new(console.clone()), console);
    let store_sale = Sale {
        station_id: "posto-101".to_string(),
        items: vec![SaleItem {
            description: "Filter coffee".to_string(),
            quantity: 12.0,
            unit_price: 2.0,
            pump_id: None,
            tank_id: None,
            litres: None,
            product_id: Some("coffee-500".to_string()),
        }],
        customer_tax_id: Some("123.456.789-00".to_string()),
        payment_method: PaymentMethod::Cash,
    };
    let outcome = store.process(&store_sale)?;
    println!(
        "✅ Sale {} settled: ${:.2} (discount ${:.2}, taxes ${:.2})",
        outcome.sale_id, outcome.net, outcome.discount, outcome.taxes
    );

    Ok(())
}
