pub mod product;
pub mod purchase;
pub mod report;
pub mod sales_data;
pub mod seller;
pub mod seller_stats;

pub use product::Product;
pub use purchase::{LineItem, PurchaseRecord};
pub use report::{ProductQuantity, SellerReport};
pub use sales_data::SalesData;
pub use seller::Seller;
pub use seller_stats::SellerStats;
