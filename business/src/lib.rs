pub mod application {
    pub mod ingredient {
        pub mod create;
        pub mod get_all;
    }
    pub mod notification {
        pub mod create;
        pub mod get_all;
        pub mod mark_sent;
        pub mod record_failure;
    }
    pub mod shopping_list {
        pub mod add_item;
        pub mod complete;
        pub mod create;
        pub mod delete;
        pub mod delete_item;
        pub mod get_all;
        pub mod get_by_id;
        pub mod mark_purchased;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod ingredient {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
        }
    }
    pub mod notification {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
            pub mod mark_sent;
            pub mod record_failure;
        }
    }
    pub mod shopping_list {
        pub mod aggregator;
        pub mod errors;
        pub mod item;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add_item;
            pub mod complete;
            pub mod create;
            pub mod delete;
            pub mod delete_item;
            pub mod get_all;
            pub mod get_by_id;
            pub mod mark_purchased;
        }
    }
}
