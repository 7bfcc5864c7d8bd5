//! Product domain types.

use serde::{Deserialize, Serialize};

use stylefeed_core::{ProductId, UserId};

/// A product listed by a vendor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID. Immutable.
    pub id: ProductId,
    pub name: String,
    /// Price in minor currency units.
    pub price: u32,
    /// Pre-discount price in minor currency units.
    pub original_price: u32,
    /// Discount percentage relative to the original price.
    pub discount: u32,
    pub category: String,
    pub brand: String,
    /// Product image URL.
    pub image: String,
    /// Owning vendor. The reference is not enforced; joins resolve a
    /// missing vendor to null.
    pub vendor_id: UserId,
    pub views: u64,
    pub likes: u64,
    pub purchases: u64,
}
