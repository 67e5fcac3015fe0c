//! Merchant handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::app::{PageParams, SearchParams};
use crate::document::{Document, ItemAttributes, MerchantAttributes, Resource, ToResource};
use crate::domain::entities::MerchantId;
use crate::error::AppError;
use crate::AppState;

use super::parse_id;

/// GET /merchants
///
/// Paginated listing ordered by id.
pub async fn list_merchants(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Document<Vec<Resource<MerchantAttributes>>>>, AppError> {
    let merchants = state.merchant_service.list_merchants(params.page()).await?;

    Ok(Json(Document::new(
        merchants.iter().map(ToResource::to_resource).collect(),
    )))
}

/// GET /merchants/:id
pub async fn get_merchant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Document<Resource<MerchantAttributes>>>, AppError> {
    let id: MerchantId = parse_id(&id, "Merchant")?;
    let merchant = state.merchant_service.get_merchant(&id).await?;

    Ok(Json(Document::new(merchant.to_resource())))
}

/// GET /merchants/:id/items
pub async fn merchant_items(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Document<Vec<Resource<ItemAttributes>>>>, AppError> {
    let id: MerchantId = parse_id(&id, "Merchant")?;
    let items = state.merchant_service.merchant_items(&id).await?;

    Ok(Json(Document::new(
        items.iter().map(ToResource::to_resource).collect(),
    )))
}

/// GET /merchants/find_all?name=
///
/// Every merchant whose name contains the fragment, alphabetically.
pub async fn find_all_merchants(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Document<Vec<Resource<MerchantAttributes>>>>, AppError> {
    let fragment = params.into_merchant_search()?;
    let merchants = state.merchant_service.find_all_merchants(fragment).await?;

    Ok(Json(Document::new(
        merchants.iter().map(ToResource::to_resource).collect(),
    )))
}
