use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};

use super::{Product, PurchaseRecord, Seller};
use crate::error::{Collection, ReportError, Result};

/// The three input collections of a report run
///
/// Collections that are absent, `null` or not an array in a deserialized
/// document become empty and are rejected by [`SalesData::validate`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SalesData {
    #[serde(default, deserialize_with = "deserialize_collection")]
    pub sellers: Vec<Seller>,
    #[serde(default, deserialize_with = "deserialize_collection")]
    pub products: Vec<Product>,
    #[serde(default, deserialize_with = "deserialize_collection")]
    pub purchase_records: Vec<PurchaseRecord>,
}

/// Treat anything but an array as an empty collection
///
/// Malformed elements inside an array are still reported as errors.
fn deserialize_collection<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match serde_json::Value::deserialize(deserializer)? {
        value @ serde_json::Value::Array(_) => {
            serde_json::from_value(value).map_err(D::Error::custom)
        }
        _ => Ok(Vec::new()),
    }
}

impl SalesData {
    pub fn new(
        sellers: Vec<Seller>,
        products: Vec<Product>,
        purchase_records: Vec<PurchaseRecord>,
    ) -> Self {
        Self {
            sellers,
            products,
            purchase_records,
        }
    }

    /// Check that every collection is non-empty, in the order
    /// sellers, products, purchase_records
    pub fn validate(&self) -> Result<()> {
        let checks = [
            (Collection::Sellers, self.sellers.is_empty()),
            (Collection::Products, self.products.is_empty()),
            (Collection::PurchaseRecords, self.purchase_records.is_empty()),
        ];

        match checks.iter().find(|(_, empty)| *empty) {
            Some((collection, _)) => Err(ReportError::Validation {
                collection: *collection,
            }),
            None => Ok(()),
        }
    }
}
