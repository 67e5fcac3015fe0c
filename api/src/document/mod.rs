//! JSON:API-style response documents
//!
//! Every successful response is `{"data": ...}` where data is a resource,
//! a list of resources, or `{}` when a search found nothing.

pub mod resource;
pub mod serializers;

pub use resource::{Document, MaybeResource, Resource, ResourceIdentifier, ToResource};
pub use serializers::{
    ItemAttributes, ItemRevenueAttributes, MerchantAttributes, MerchantNameRevenueAttributes,
    MerchantRevenueAttributes, UnshippedOrderAttributes,
};
