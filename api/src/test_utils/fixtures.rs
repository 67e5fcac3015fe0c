//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use rust_decimal::Decimal;

use crate::domain::entities::{
    Invoice, InvoiceId, InvoiceItem, InvoiceStatus, Item, ItemId, Merchant, MerchantId,
    Transaction, TransactionResult,
};

use super::mocks::InMemoryStore;

/// Parse a decimal literal such as `"18.99"`
pub fn price(raw: &str) -> Decimal {
    raw.parse().unwrap()
}

pub fn test_merchant(id: i64, name: &str) -> Merchant {
    Merchant {
        id: MerchantId(id),
        name: name.to_string(),
    }
}

/// Merchants with ids `1..=count`, named "Merchant 1", "Merchant 2", ...
pub fn merchants(count: i64) -> Vec<Merchant> {
    (1..=count)
        .map(|id| test_merchant(id, &format!("Merchant {}", id)))
        .collect()
}

pub fn test_item(id: i64, name: &str, unit_price: &str, merchant_id: i64) -> Item {
    Item {
        id: ItemId(id),
        name: name.to_string(),
        description: format!("{} description", name),
        unit_price: price(unit_price),
        merchant_id: MerchantId(merchant_id),
    }
}

pub fn test_invoice(id: i64, merchant_id: i64, status: InvoiceStatus) -> Invoice {
    Invoice {
        id: InvoiceId(id),
        customer_id: 1,
        merchant_id: MerchantId(merchant_id),
        status,
    }
}

pub fn test_line(
    id: i64,
    invoice_id: i64,
    item_id: i64,
    quantity: i32,
    unit_price: &str,
) -> InvoiceItem {
    InvoiceItem {
        id,
        invoice_id: InvoiceId(invoice_id),
        item_id: ItemId(item_id),
        quantity,
        unit_price: price(unit_price),
    }
}

pub fn test_transaction(id: i64, invoice_id: i64, result: TransactionResult) -> Transaction {
    Transaction {
        id,
        invoice_id: InvoiceId(invoice_id),
        result,
    }
}

/// A small shop with realized, failed and potential sales
///
/// - Merchant 1 "Schroeder-Jerde": Widget (item 1, 10.00) and Gizmo (item 2, 4.00)
/// - Merchant 2 "Klein, Rempel and Jones": Gadget (item 3, 2.50)
/// - Merchant 3 "Willms and Sons": nothing sold
///
/// Realized revenue: merchant 1 = 50.00 + 8.00, merchant 2 = 25.00.
/// Invoice 4 is shipped but its only transaction failed; invoice 5 is
/// packaged; invoice 6 is returned.
pub fn seed_shop() -> InMemoryStore {
    InMemoryStore::new()
        .with_merchant(test_merchant(1, "Schroeder-Jerde"))
        .with_merchant(test_merchant(2, "Klein, Rempel and Jones"))
        .with_merchant(test_merchant(3, "Willms and Sons"))
        .with_item(test_item(1, "Widget", "10.00", 1))
        .with_item(test_item(2, "Gizmo", "4.00", 1))
        .with_item(test_item(3, "Gadget", "2.50", 2))
        // Widget x5, paid twice over two transactions
        .with_invoice(test_invoice(1, 1, InvoiceStatus::Shipped))
        .with_invoice_item(test_line(1, 1, 1, 5, "10.00"))
        .with_transaction(test_transaction(1, 1, TransactionResult::Failed))
        .with_transaction(test_transaction(2, 1, TransactionResult::Success))
        .with_transaction(test_transaction(3, 1, TransactionResult::Success))
        // Gizmo x2
        .with_invoice(test_invoice(2, 1, InvoiceStatus::Shipped))
        .with_invoice_item(test_line(2, 2, 2, 2, "4.00"))
        .with_transaction(test_transaction(4, 2, TransactionResult::Success))
        // Gadget x10
        .with_invoice(test_invoice(3, 2, InvoiceStatus::Shipped))
        .with_invoice_item(test_line(3, 3, 3, 10, "2.50"))
        .with_transaction(test_transaction(5, 3, TransactionResult::Success))
        // Shipped, never paid
        .with_invoice(test_invoice(4, 2, InvoiceStatus::Shipped))
        .with_invoice_item(test_line(4, 4, 3, 100, "2.50"))
        .with_transaction(test_transaction(6, 4, TransactionResult::Failed))
        // Packaged: Widget and Gadget on one invoice
        .with_invoice(test_invoice(5, 1, InvoiceStatus::Packaged))
        .with_invoice_item(test_line(5, 5, 1, 1, "10.00"))
        .with_invoice_item(test_line(6, 5, 3, 2, "2.50"))
        // Returned
        .with_invoice(test_invoice(6, 1, InvoiceStatus::Returned))
        .with_invoice_item(test_line(7, 6, 1, 50, "10.00"))
        .with_transaction(test_transaction(7, 6, TransactionResult::Success))
}

/// Eleven packaged invoices (ids 6..=16) whose potential revenue runs from
/// 20770 (invoice 6) down to 100 (invoice 16), plus shipped and returned
/// invoices that must not appear.
pub fn seed_unshipped_revenue() -> InMemoryStore {
    let mut store = InMemoryStore::new()
        .with_merchant(test_merchant(1, "Schroeder-Jerde"))
        .with_item(test_item(1, "Lamp", "2077.00", 1))
        .with_item(test_item(2, "Chair", "10.00", 1));

    // Invoice 6: 10 x 2077.00 = 20770
    store = store
        .with_invoice(test_invoice(6, 1, InvoiceStatus::Packaged))
        .with_invoice_item(test_line(1, 6, 1, 10, "2077.00"));

    // Invoices 7..=15: 9000, 8000, ... 1000
    for (offset, invoice_id) in (7..=15).enumerate() {
        let quantity = 900 - (offset as i32) * 100;
        store = store
            .with_invoice(test_invoice(invoice_id, 1, InvoiceStatus::Packaged))
            .with_invoice_item(test_line(invoice_id, invoice_id, 2, quantity, "10.00"));
    }
    // A failed payment does not matter for potential revenue
    store = store.with_transaction(test_transaction(1, 10, TransactionResult::Failed));

    // Invoice 16: 10 x 10.00 = 100
    store = store
        .with_invoice(test_invoice(16, 1, InvoiceStatus::Packaged))
        .with_invoice_item(test_line(16, 16, 2, 10, "10.00"));

    store
        .with_invoice(test_invoice(1, 1, InvoiceStatus::Shipped))
        .with_invoice_item(test_line(100, 1, 1, 100, "2077.00"))
        .with_transaction(test_transaction(2, 1, TransactionResult::Success))
        .with_invoice(test_invoice(2, 1, InvoiceStatus::Returned))
        .with_invoice_item(test_line(101, 2, 1, 100, "2077.00"))
}
