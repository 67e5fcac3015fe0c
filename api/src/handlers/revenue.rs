//! Revenue handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::app::QuantityParams;
use crate::document::{
    Document, ItemRevenueAttributes, MerchantNameRevenueAttributes, MerchantRevenueAttributes,
    Resource, ToResource, UnshippedOrderAttributes,
};
use crate::domain::entities::MerchantId;
use crate::error::AppError;
use crate::AppState;

use super::parse_id;

/// GET /revenue/merchants/:id
///
/// Realized revenue for one merchant.
pub async fn merchant_revenue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Document<Resource<MerchantRevenueAttributes>>>, AppError> {
    let id: MerchantId = parse_id(&id, "Merchant")?;
    let revenue = state.revenue_service.merchant_revenue(&id).await?;

    Ok(Json(Document::new(revenue.to_resource())))
}

/// GET /revenue/merchants?quantity=
pub async fn top_merchants(
    State(state): State<AppState>,
    Query(params): Query<QuantityParams>,
) -> Result<Json<Document<Vec<Resource<MerchantNameRevenueAttributes>>>>, AppError> {
    let ranked = state
        .revenue_service
        .top_merchants(params.quantity())
        .await?;

    Ok(Json(Document::new(
        ranked.iter().map(ToResource::to_resource).collect(),
    )))
}

/// GET /revenue/items?quantity=
pub async fn top_items(
    State(state): State<AppState>,
    Query(params): Query<QuantityParams>,
) -> Result<Json<Document<Vec<Resource<ItemRevenueAttributes>>>>, AppError> {
    let ranked = state.revenue_service.top_items(params.quantity()).await?;

    Ok(Json(Document::new(
        ranked.iter().map(ToResource::to_resource).collect(),
    )))
}

/// GET /revenue/unshipped?quantity=
///
/// Packaged invoices, largest potential revenue first.
pub async fn unshipped_potential_revenue(
    State(state): State<AppState>,
    Query(params): Query<QuantityParams>,
) -> Result<Json<Document<Vec<Resource<UnshippedOrderAttributes>>>>, AppError> {
    let invoices = state
        .revenue_service
        .unshipped_potential_revenue(params.quantity())
        .await?;

    Ok(Json(Document::new(
        invoices.iter().map(ToResource::to_resource).collect(),
    )))
}
