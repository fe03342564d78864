use crate::core::{Console, Payment, Receipt, Sale, SaleDesk, SaleOutcome};
use crate::utils::error::{Result, TillError};
use chrono::Local;
use std::sync::atomic::{AtomicU64, Ordering};

/// Fixed sale sequence: validate, register, update stock, total up, issue a
/// receipt, take payment, finalize. The desk fills in the variable steps;
/// the processor alone owns the order.
pub struct SaleProcessor<D: SaleDesk, C: Console> {
    desk: D,
    console: C,
    next_seq: AtomicU64,
}

impl<D: SaleDesk, C: Console> SaleProcessor<D, C> {
    pub fn new(desk: D, console: C) -> Self {
        Self {
            desk,
            console,
            next_seq: AtomicU64::new(0),
        }
    }

    pub fn process(&self, sale: &Sale) -> Result<SaleOutcome> {
        self.check_sale(sale)?;
        self.desk.validate(sale)?;

        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed) + 1;
        let sale_id = self.register_sale(sale, seq)?;

        self.desk.update_stock(sale)?;

        let gross: f64 = sale
            .items
            .iter()
            .map(|item| item.quantity * item.unit_price)
            .sum();
        let discount = self.desk.discount(sale, gross);
        let taxes = gross * self.desk.tax_rate();
        let net = gross - discount;

        let receipt = self.issue_receipt(sale, seq, gross, taxes)?;
        let payment = self.take_payment(sale, net)?;

        let outcome = SaleOutcome {
            sale_id,
            gross,
            discount,
            taxes,
            net,
            receipt,
            payment,
        };

        self.desk.finalize(&outcome)?;
        self.console
            .line(&format!("Sale {} completed", outcome.sale_id))?;

        Ok(outcome)
    }

    // Checks every desk shares; desk-specific rules come from `validate`.
    fn check_sale(&self, sale: &Sale) -> Result<()> {
        if sale.items.is_empty() {
            return Err(TillError::SaleValidation {
                message: "A sale must contain at least one item".to_string(),
            });
        }
        if sale.station_id.trim().is_empty() {
            return Err(TillError::SaleValidation {
                message: "A station id is required".to_string(),
            });
        }
        Ok(())
    }

    fn register_sale(&self, sale: &Sale, seq: u64) -> Result<String> {
        let sale_id = format!("SALE-{}-{:04}", Local::now().format("%Y%m%d"), seq);
        tracing::debug!(
            "Registering sale {} at the {} desk for station {}",
            sale_id,
            self.desk.desk_name(),
            sale.station_id
        );
        self.console.line(&format!("Sale registered: {}", sale_id))?;
        Ok(sale_id)
    }

    fn issue_receipt(&self, sale: &Sale, seq: u64, gross: f64, taxes: f64) -> Result<Receipt> {
        let receipt = Receipt {
            number: format!("RCPT-{:04}", seq),
            issued_at: Local::now(),
            station_id: sale.station_id.clone(),
            total: gross,
            taxes,
            customer_tax_id: sale.customer_tax_id.clone(),
        };
        self.console
            .line(&format!("Receipt issued: {}", receipt.number))?;
        Ok(receipt)
    }

    fn take_payment(&self, sale: &Sale, net: f64) -> Result<Payment> {
        let payment = Payment {
            method: sale.payment_method,
            amount: net,
        };
        self.console.line(&format!(
            "Payment taken: ${:.2} ({})",
            payment.amount, payment.method
        ))?;
        Ok(payment)
    }
}
