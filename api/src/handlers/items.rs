//! Item handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::app::{PageParams, SearchParams};
use crate::document::{
    Document, ItemAttributes, MaybeResource, MerchantAttributes, Resource, ResourceIdentifier,
    ToResource,
};
use crate::domain::entities::ItemId;
use crate::error::AppError;
use crate::AppState;

use super::parse_id;

/// GET /items
///
/// Paginated listing ordered by id.
pub async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Document<Vec<Resource<ItemAttributes>>>>, AppError> {
    let items = state.item_service.list_items(params.page()).await?;

    Ok(Json(Document::new(
        items.iter().map(ToResource::to_resource).collect(),
    )))
}

/// GET /items/:id
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Document<Resource<ItemAttributes>>>, AppError> {
    let id: ItemId = parse_id(&id, "Item")?;
    let item = state.item_service.get_item(&id).await?;

    Ok(Json(Document::new(item.to_resource())))
}

/// GET /items/find?name= | ?min_price=&max_price=
///
/// Returns the alphabetically first match, or `{"data": {}}` when there is none.
pub async fn find_item(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Document<MaybeResource<ItemAttributes>>>, AppError> {
    let search = params.into_item_search()?;
    let item = state.item_service.find_item(search).await?;

    Ok(Json(Document::new(
        item.as_ref().map(ToResource::to_resource).into(),
    )))
}

/// GET /items/:id/merchant
pub async fn item_merchant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Document<Resource<MerchantAttributes>>>, AppError> {
    let id: ItemId = parse_id(&id, "Item")?;
    let merchant = state.item_service.item_merchant(&id).await?;

    Ok(Json(Document::new(merchant.to_resource())))
}

/// GET /items/:id/sole_item_invoices
///
/// Invoices on which this item is the only item sold.
pub async fn sole_item_invoices(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Document<Vec<ResourceIdentifier>>>, AppError> {
    let id: ItemId = parse_id(&id, "Item")?;
    let invoice_ids = state.item_service.sole_item_invoices(&id).await?;

    Ok(Json(Document::new(
        invoice_ids
            .into_iter()
            .map(|id| ResourceIdentifier::new(id, "invoice"))
            .collect(),
    )))
}
