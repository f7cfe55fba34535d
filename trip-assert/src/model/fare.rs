//! Fare products attached to legs.

use serde::Deserialize;

/// An amount of money in some currency.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Money {
    pub amount: f64,
    pub currency: Currency,
}

/// ISO 4217 currency with its number of minor digits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Currency {
    pub code: String,
    pub digits: u32,
}

/// Who a fare product is for (e.g. `"orca:regular"`, `"orca:senior"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RiderCategory {
    pub id: String,
    pub name: String,
}

/// How a fare is paid (e.g. `"orca:cash"`, `"orca:electronic"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FareMedium {
    pub id: String,
    pub name: String,
}

/// A purchasable fare.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareProduct {
    pub id: String,
    pub name: String,
    pub price: Money,
    pub rider_category: Option<RiderCategory>,
    pub medium: Option<FareMedium>,
}

impl FareProduct {
    /// Returns true if this product is sold to `rider_category_id` on `medium_id`.
    ///
    /// Products missing either the category or the medium never match.
    pub fn is_for(&self, rider_category_id: &str, medium_id: &str) -> bool {
        let category = self.rider_category.as_ref().map(|c| c.id.as_str());
        let medium = self.medium.as_ref().map(|m| m.id.as_str());
        category == Some(rider_category_id) && medium == Some(medium_id)
    }
}

/// Use of a fare product on a specific leg.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FareProductUse {
    pub id: String,
    pub product: FareProduct,
}

impl FareProductUse {
    /// Creates a fare use priced in US dollars for one rider category and medium.
    pub fn usd(amount: f64, rider_category_id: &str, medium_id: &str) -> Self {
        let key = format!("{rider_category_id}-{medium_id}");
        Self {
            id: format!("fare-{key}"),
            product: FareProduct {
                id: format!("product-{key}"),
                name: "Fare".to_string(),
                price: Money {
                    amount,
                    currency: Currency {
                        code: "USD".to_string(),
                        digits: 2,
                    },
                },
                rider_category: Some(RiderCategory {
                    id: rider_category_id.to_string(),
                    name: rider_category_id.to_string(),
                }),
                medium: Some(FareMedium {
                    id: medium_id.to_string(),
                    name: medium_id.to_string(),
                }),
            },
        }
    }
}
