//! Domain models
//!
//! Entity structs plus their create/update payloads. API serialization is
//! camelCase throughout.

pub mod admin;
pub mod category;
pub mod establishment;
pub mod offer;
pub mod order;
pub mod product;
pub mod sales;

pub use admin::{AdminUser, AdminUserCreate};
pub use category::{Category, CategoryCreate, CategoryWithProducts};
pub use establishment::{Establishment, EstablishmentCreate};
pub use offer::{Offer, OfferCreate};
pub use order::{
    DeliveryAddress, Order, OrderDraft, OrderItem, OrderItemWithProduct, OrderLineItem,
    OrderWithItems,
};
pub use product::{Product, ProductCreate, ProductSnapshot, ProductUpdate, ProductWithCategory};
pub use sales::ProductSales;
