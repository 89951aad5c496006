//! Product catalog feature.
//!
//! Products carry weak references to categories (`categoryId`); deleting a
//! category does not touch the products that reference it.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/products/add` | Create product |
//! | GET | `/products/` | List all products |
//! | GET | `/products/{id}` | Get product by id |
//! | PUT | `/products/{id}` | Update product |
//! | DELETE | `/products/{id}` | Delete product |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ProductService;
