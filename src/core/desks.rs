use crate::core::{Console, Sale, SaleDesk, SaleOutcome};
use crate::utils::error::{Result, TillError};

const FUEL_TAX_RATE: f64 = 0.27;
const STORE_TAX_RATE: f64 = 0.18;
const REGULATOR_REPORT_THRESHOLD: f64 = 1000.0;

/// Forecourt desk: sells by the litre, drawing down a tank.
pub struct FuelDesk<C: Console> {
    console: C,
    tank_level: f64,
    low_level_threshold: f64,
}

impl<C: Console> FuelDesk<C> {
    pub fn new(console: C) -> Self {
        Self {
            console,
            tank_level: 5000.0,
            low_level_threshold: 1000.0,
        }
    }

    pub fn with_tank_level(mut self, litres: f64) -> Self {
        self.tank_level = litres;
        self
    }
}

impl<C: Console> SaleDesk for FuelDesk<C> {
    fn desk_name(&self) -> &str {
        "fuel"
    }

    fn validate(&self, sale: &Sale) -> Result<()> {
        for item in &sale.items {
            if item.pump_id.is_none() {
                return Err(TillError::SaleValidation {
                    message: format!("A pump id is required to sell '{}'", item.description),
                });
            }
            match item.litres {
                Some(litres) if litres > 0.0 => {}
                _ => {
                    return Err(TillError::SaleValidation {
                        message: format!(
                            "Litres must be greater than zero for '{}'",
                            item.description
                        ),
                    })
                }
            }
        }
        Ok(())
    }

    fn update_stock(&self, sale: &Sale) -> Result<()> {
        for item in &sale.items {
            // validate() guarantees these are present.
            let litres = item.litres.unwrap_or(0.0);
            let tank = item.tank_id.as_deref().unwrap_or("main");
            let pump = item.pump_id.as_deref().unwrap_or("?");

            self.console
                .line(&format!("Tank {}: -{:.1} litres", tank, litres))?;
            if self.tank_level - litres < self.low_level_threshold {
                tracing::warn!("Tank {} is running low", tank);
                self.console
                    .line(&format!("⚠️ ALERT: tank {} is running low!", tank))?;
            }
            self.console
                .line(&format!("Pump {}: {:.1} litres recorded", pump, litres))?;
        }
        self.console.line("Fuel stock updated")
    }

    fn tax_rate(&self) -> f64 {
        FUEL_TAX_RATE
    }

    fn finalize(&self, outcome: &SaleOutcome) -> Result<()> {
        if outcome.gross > REGULATOR_REPORT_THRESHOLD {
            self.console.line("Sale reported to the fuel regulator")?;
        }
        Ok(())
    }
}

/// Convenience-store desk: unit stock, progressive discounts.
pub struct StoreDesk<C: Console> {
    console: C,
    stock_on_hand: u32,
    restock_point: u32,
}

impl<C: Console> StoreDesk<C> {
    pub fn new(console: C) -> Self {
        Self {
            console,
            stock_on_hand: 100,
            restock_point: 10,
        }
    }

    pub fn with_stock_on_hand(mut self, units: u32) -> Self {
        self.stock_on_hand = units;
        self
    }
}

impl<C: Console> SaleDesk for StoreDesk<C> {
    fn desk_name(&self) -> &str {
        "store"
    }

    fn validate(&self, sale: &Sale) -> Result<()> {
        for item in &sale.items {
            if item.product_id.is_none() {
                return Err(TillError::SaleValidation {
                    message: format!("A product id is required to sell '{}'", item.description),
                });
            }
            if item.quantity <= 0.0 || item.quantity.fract() != 0.0 {
                return Err(TillError::SaleValidation {
                    message: format!(
                        "Quantity must be a positive whole number for '{}'",
                        item.description
                    ),
                });
            }
        }
        Ok(())
    }

    fn update_stock(&self, sale: &Sale) -> Result<()> {
        for item in &sale.items {
            let product = item.product_id.as_deref().unwrap_or("?");
            let units = item.quantity as u32;

            if units > self.stock_on_hand {
                return Err(TillError::OutOfStock {
                    product: product.to_string(),
                });
            }

            self.console
                .line(&format!("Product {}: -{} units", product, units))?;

            let remaining = self.stock_on_hand - units;
            if remaining <= self.restock_point {
                self.console
                    .line(&format!("📦 Restock order raised for product {}", product))?;
            }
        }
        self.console.line("Store stock updated")
    }

    fn discount(&self, sale: &Sale, gross: f64) -> f64 {
        let mut discount = 0.0;

        // Progressive quantity discount per item.
        for item in &sale.items {
            let item_total = item.quantity * item.unit_price;
            if item.quantity >= 10.0 {
                discount += item_total * 0.10;
            } else if item.quantity >= 5.0 {
                discount += item_total * 0.05;
            }
        }

        // Identified customers get a little extra.
        if sale.customer_tax_id.is_some() {
            discount += gross * 0.02;
        }

        discount
    }

    fn tax_rate(&self) -> f64 {
        STORE_TAX_RATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PaymentMethod, SaleItem};

    struct NullConsole;

    impl Console for NullConsole {
        fn line(&self, _text: &str) -> Result<()> {
            Ok(())
        }
    }

    fn store_sale(quantity: f64) -> Sale {
        Sale {
            station_id: "posto-101".to_string(),
            items: vec![SaleItem {
                description: "Motor oil".to_string(),
                quantity,
                unit_price: 10.0,
                pump_id: None,
                tank_id: None,
                litres: None,
                product_id: Some("oil-1l".to_string()),
            }],
            customer_tax_id: None,
            payment_method: PaymentMethod::Cash,
        }
    }

    #[test]
    fn test_store_quantity_must_be_whole() {
        let desk = StoreDesk::new(NullConsole);
        assert!(desk.validate(&store_sale(2.5)).is_err());
        assert!(desk.validate(&store_sale(0.0)).is_err());
        assert!(desk.validate(&store_sale(3.0)).is_ok());
    }

    #[test]
    fn test_fuel_litres_must_be_positive() {
        let desk = FuelDesk::new(NullConsole);
        let mut sale = store_sale(1.0);
        sale.items[0].pump_id = Some("1".to_string());
        sale.items[0].litres = Some(0.0);
        assert!(desk.validate(&sale).is_err());

        sale.items[0].litres = Some(12.0);
        assert!(desk.validate(&sale).is_ok());
    }

    #[test]
    fn test_small_store_sale_gets_no_discount() {
        let desk = StoreDesk::new(NullConsole);
        let sale = store_sale(2.0);
        assert_eq!(desk.discount(&sale, 20.0), 0.0);
    }

    #[test]
    fn test_desk_tax_rates() {
        assert_eq!(FuelDesk::new(NullConsole).tax_rate(), FUEL_TAX_RATE);
        assert_eq!(StoreDesk::new(NullConsole).tax_rate(), STORE_TAX_RATE);
    }
}
