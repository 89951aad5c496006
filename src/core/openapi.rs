use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::products::{dtos as products_dtos, handlers as products_handlers};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::types::Message;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::create_category,
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Products
        products_handlers::create_product,
        products_handlers::list_products,
        products_handlers::get_product,
        products_handlers::update_product,
        products_handlers::delete_product,
        // Users
        users_handlers::create_user,
        users_handlers::list_users,
        users_handlers::get_user,
        users_handlers::update_user,
        users_handlers::delete_user,
    ),
    components(schemas(
        Message,
        categories_dtos::CreateCategoryDto,
        categories_dtos::UpdateCategoryDto,
        categories_dtos::CategoryResponseDto,
        products_dtos::CreateProductDto,
        products_dtos::UpdateProductDto,
        products_dtos::ProductResponseDto,
        users_dtos::CreateUserDto,
        users_dtos::UpdateUserDto,
        users_dtos::UserResponseDto,
    )),
    tags(
        (name = "categories", description = "Category catalog"),
        (name = "products", description = "Product catalog"),
        (name = "users", description = "User accounts")
    )
)]
pub struct ApiDoc;

/// Applies runtime-configured title/version/description to the generated doc
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
