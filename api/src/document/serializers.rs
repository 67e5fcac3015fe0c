//! Resource attributes for each domain type
//!
//! Money is stored as `Decimal` but rendered as a JSON number.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::entities::{
    Item, ItemRevenue, Merchant, MerchantRevenue, RankedMerchant, UnshippedInvoice,
};

use super::resource::ToResource;

/// Round-trips through the decimal text so `20.99` renders as `20.99`
fn amount(value: Decimal) -> f64 {
    value.normalize().to_string().parse().unwrap_or_default()
}

#[derive(Debug, Serialize)]
pub struct MerchantAttributes {
    pub name: String,
}

impl ToResource for Merchant {
    type Attributes = MerchantAttributes;
    const KIND: &'static str = "merchant";

    fn resource_id(&self) -> String {
        self.id.to_string()
    }

    fn attributes(&self) -> MerchantAttributes {
        MerchantAttributes {
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemAttributes {
    pub name: String,
    pub description: String,
    pub unit_price: f64,
    pub merchant_id: i64,
}

impl ToResource for Item {
    type Attributes = ItemAttributes;
    const KIND: &'static str = "item";

    fn resource_id(&self) -> String {
        self.id.to_string()
    }

    fn attributes(&self) -> ItemAttributes {
        ItemAttributes {
            name: self.name.clone(),
            description: self.description.clone(),
            unit_price: amount(self.unit_price),
            merchant_id: self.merchant_id.0,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MerchantRevenueAttributes {
    pub revenue: f64,
}

impl ToResource for MerchantRevenue {
    type Attributes = MerchantRevenueAttributes;
    const KIND: &'static str = "merchant_revenue";

    fn resource_id(&self) -> String {
        self.merchant_id.to_string()
    }

    fn attributes(&self) -> MerchantRevenueAttributes {
        MerchantRevenueAttributes {
            revenue: amount(self.revenue),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MerchantNameRevenueAttributes {
    pub name: String,
    pub revenue: f64,
}

impl ToResource for RankedMerchant {
    type Attributes = MerchantNameRevenueAttributes;
    const KIND: &'static str = "merchant_name_revenue";

    fn resource_id(&self) -> String {
        self.merchant.id.to_string()
    }

    fn attributes(&self) -> MerchantNameRevenueAttributes {
        MerchantNameRevenueAttributes {
            name: self.merchant.name.clone(),
            revenue: amount(self.revenue),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemRevenueAttributes {
    #[serde(flatten)]
    pub item: ItemAttributes,
    pub revenue: f64,
}

impl ToResource for ItemRevenue {
    type Attributes = ItemRevenueAttributes;
    const KIND: &'static str = "item_revenue";

    fn resource_id(&self) -> String {
        self.item.id.to_string()
    }

    fn attributes(&self) -> ItemRevenueAttributes {
        ItemRevenueAttributes {
            item: self.item.attributes(),
            revenue: amount(self.revenue),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UnshippedOrderAttributes {
    pub potential_revenue: f64,
}

impl ToResource for UnshippedInvoice {
    type Attributes = UnshippedOrderAttributes;
    const KIND: &'static str = "unshipped_order";

    fn resource_id(&self) -> String {
        self.invoice.id.to_string()
    }

    fn attributes(&self) -> UnshippedOrderAttributes {
        UnshippedOrderAttributes {
            potential_revenue: amount(self.potential_revenue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ItemId, MerchantId};
    use serde_json::json;

    fn item() -> Item {
        Item {
            id: ItemId(4),
            name: "Widget".to_string(),
            description: "Useful".to_string(),
            unit_price: Decimal::new(2099, 2),
            merchant_id: MerchantId(1),
        }
    }

    #[test]
    fn item_resource() {
        let value = serde_json::to_value(item().to_resource()).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "4",
                "type": "item",
                "attributes": {
                    "name": "Widget",
                    "description": "Useful",
                    "unit_price": 20.99,
                    "merchant_id": 1
                }
            })
        );
    }

    #[test]
    fn item_revenue_flattens_item_attributes() {
        let ranked = ItemRevenue {
            item: item(),
            revenue: Decimal::new(5000, 2),
        };

        let value = serde_json::to_value(ranked.to_resource()).unwrap();

        assert_eq!(value["type"], "item_revenue");
        assert_eq!(value["attributes"]["name"], "Widget");
        assert_eq!(value["attributes"]["revenue"], 50.0);
    }

    #[test]
    fn merchant_revenue_resource() {
        let revenue = MerchantRevenue {
            merchant_id: MerchantId(3),
            revenue: Decimal::ZERO,
        };

        let value = serde_json::to_value(revenue.to_resource()).unwrap();

        assert_eq!(
            value,
            json!({"id": "3", "type": "merchant_revenue", "attributes": {"revenue": 0.0}})
        );
    }
}
