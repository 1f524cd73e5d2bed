pub mod db;
pub mod ingredient {
    pub mod entity;
    pub mod repository;
}
pub mod notification {
    pub mod entity;
    pub mod repository;
}
pub mod shopping_list {
    pub mod entity;
    pub mod repository;
}
pub mod shopping_list_item {
    pub mod entity;
    pub mod repository;
}
