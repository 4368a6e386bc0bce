use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(ProductId);
id_newtype!(CategoryId);

/// Attributes carried by a product row's action controls.
///
/// Every field is kept in its string form; nothing is parsed until a form is
/// submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub price: String,
    pub stock: String,
    pub category: String,
    pub description: String,
}

/// Product as returned by the admin listing and lookup endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub category_id: CategoryId,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub available_stock: Option<i64>,
    #[serde(default)]
    pub reserved_stock: Option<i64>,
}

impl From<&ProductSummary> for ProductRow {
    fn from(value: &ProductSummary) -> Self {
        Self {
            id: value.id.to_string(),
            sku: value.sku.clone(),
            name: value.name.clone(),
            price: value.price.to_string(),
            // Products without an inventory record render as zero stock.
            stock: value.stock.unwrap_or(0).to_string(),
            category: value.category_id.to_string(),
            description: value.description.clone().unwrap_or_default(),
        }
    }
}
