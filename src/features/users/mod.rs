//! User accounts feature.
//!
//! Responses never include the stored password; the response DTO has no such
//! field. Writes still persist whatever password the request supplies.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/users/add` | Create user |
//! | GET | `/users/` | List all users |
//! | GET | `/users/{id}` | Get user by id |
//! | PUT | `/users/{id}` | Update user |
//! | DELETE | `/users/{id}` | Delete user |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::UserService;
