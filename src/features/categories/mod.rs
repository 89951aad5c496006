//! Category catalog feature.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/category/add` | Create category |
//! | GET | `/category/` | List all categories |
//! | GET | `/category/{id}` | Get category by id |
//! | PUT | `/category/{id}` | Update category |
//! | DELETE | `/category/delete/{id}` | Delete category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
