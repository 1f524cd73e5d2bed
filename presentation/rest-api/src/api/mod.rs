pub mod error;
pub mod security;
pub mod tags;
pub mod health {
    pub mod routes;
}
pub mod ingredient {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod notification {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod shopping_list {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
