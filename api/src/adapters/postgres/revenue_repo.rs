//! PostgreSQL adapter for RevenueRepository
//!
//! Every revenue report runs through `aggregate`: line items joined to their
//! invoice (and item when merchants are involved), filtered by the scope,
//! grouped, summed and ranked.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::{
    sea_query::{Expr, Query, SimpleExpr},
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, Order, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::domain::entities::{RevenueRow, TransactionResult};
use crate::domain::ports::RevenueRepository;
use crate::domain::query::{RevenueGroup, RevenueQuery};
use crate::entity::{invoice_items, invoices, items, transactions};
use crate::error::DomainError;

/// PostgreSQL implementation of RevenueRepository
pub struct PostgresRevenueRepository {
    db: DatabaseConnection,
}

impl PostgresRevenueRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct AggregateRow {
    id: i64,
    revenue: Decimal,
}

#[async_trait]
impl RevenueRepository for PostgresRevenueRepository {
    async fn aggregate(&self, query: &RevenueQuery) -> Result<Vec<RevenueRow>, DomainError> {
        let group_key = group_key(query.group);

        let mut select = invoice_items::Entity::find()
            .select_only()
            .column_as(group_key.clone(), "id")
            .column_as(
                Expr::cust("SUM(invoice_items.quantity * invoice_items.unit_price)"),
                "revenue",
            )
            .join(JoinType::InnerJoin, invoice_items::Relation::Invoices.def())
            .filter(invoices::Column::Status.eq(query.scope.invoice_status().to_string()));

        if query.group == RevenueGroup::Merchant || query.merchant.is_some() {
            select = select.join(JoinType::InnerJoin, invoice_items::Relation::Items.def());
        }
        if let Some(merchant_id) = query.merchant {
            select = select.filter(items::Column::MerchantId.eq(merchant_id.0));
        }
        if query.scope.requires_successful_transaction() {
            select = select.filter(successful_transaction_exists());
        }

        select = select
            .group_by(group_key.clone())
            .order_by(Expr::cust("revenue"), Order::Desc)
            .order_by(group_key, Order::Asc);

        if let Some(limit) = query.limit {
            select = select.limit(limit);
        }

        let rows = select
            .into_model::<AggregateRow>()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| RevenueRow {
                id: row.id,
                revenue: row.revenue,
            })
            .collect())
    }
}

fn group_key(group: RevenueGroup) -> SimpleExpr {
    match group {
        RevenueGroup::Item => {
            Expr::col((invoice_items::Entity, invoice_items::Column::ItemId)).into()
        }
        RevenueGroup::Invoice => {
            Expr::col((invoice_items::Entity, invoice_items::Column::InvoiceId)).into()
        }
        RevenueGroup::Merchant => Expr::col((items::Entity, items::Column::MerchantId)).into(),
    }
}

/// `EXISTS` rather than a join so several successful transactions on one
/// invoice do not multiply its line items.
fn successful_transaction_exists() -> SimpleExpr {
    Expr::exists(
        Query::select()
            .expr(Expr::val(1))
            .from(transactions::Entity)
            .and_where(
                Expr::col((transactions::Entity, transactions::Column::InvoiceId))
                    .equals((invoices::Entity, invoices::Column::Id)),
            )
            .and_where(
                Expr::col((transactions::Entity, transactions::Column::Result))
                    .eq(TransactionResult::Success.to_string()),
            )
            .to_owned(),
    )
}
