use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Ingredients,
    Notifications,
    ShoppingLists,
}
