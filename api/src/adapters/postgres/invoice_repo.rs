//! PostgreSQL adapter for InvoiceRepository

use async_trait::async_trait;
use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::domain::entities::{Invoice, InvoiceId, InvoiceStatus, MerchantId};
use crate::domain::ports::InvoiceRepository;
use crate::domain::query::SoleItemInvoices;
use crate::entity::{invoice_items, invoices};
use crate::error::DomainError;

/// PostgreSQL implementation of InvoiceRepository
pub struct PostgresInvoiceRepository {
    db: DatabaseConnection,
}

impl PostgresInvoiceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InvoiceRepository for PostgresInvoiceRepository {
    async fn find_by_ids(&self, ids: &[InvoiceId]) -> Result<Vec<Invoice>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = invoices::Entity::find()
            .filter(invoices::Column::Id.is_in(ids.iter().map(|id| id.0)))
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(Invoice::try_from).collect()
    }

    async fn sole_item_invoices(
        &self,
        query: &SoleItemInvoices,
    ) -> Result<Vec<InvoiceId>, DomainError> {
        // One distinct item per invoice, and that item is the queried one
        let ids: Vec<i64> = invoice_items::Entity::find()
            .select_only()
            .column(invoice_items::Column::InvoiceId)
            .group_by(invoice_items::Column::InvoiceId)
            .having(Expr::cust("COUNT(DISTINCT invoice_items.item_id) = 1"))
            .having(
                Expr::expr(Func::min(Expr::col((
                    invoice_items::Entity,
                    invoice_items::Column::ItemId,
                ))))
                .eq(query.item_id.0),
            )
            .order_by_asc(invoice_items::Column::InvoiceId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(ids.into_iter().map(InvoiceId).collect())
    }
}

/// Convert SeaORM model to domain entity; an unknown status is corrupt data
impl TryFrom<invoices::Model> for Invoice {
    type Error = DomainError;

    fn try_from(model: invoices::Model) -> Result<Self, Self::Error> {
        let status: InvoiceStatus = model
            .status
            .parse()
            .map_err(|e| DomainError::Internal(format!("invoice {}: {}", model.id, e)))?;

        Ok(Invoice {
            id: InvoiceId(model.id),
            customer_id: model.customer_id,
            merchant_id: MerchantId(model.merchant_id),
            status,
        })
    }
}
