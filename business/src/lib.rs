pub mod application {
    pub mod design {
        pub mod generate;
    }
    pub mod dish_action {
        pub mod get_all;
        pub mod react;
        pub mod record;
    }
    pub mod favorite {
        pub mod add;
        pub mod get_all;
    }
    pub mod recommendation {
        pub mod recommend;
    }
    pub mod user {
        pub mod register;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod dish_name;
        pub mod value_objects;
    }
    pub mod design {
        pub mod errors;
        pub mod extractor;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod generate;
        }
    }
    pub mod dish_action {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_all;
            pub mod react;
            pub mod record;
        }
    }
    pub mod favorite {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod get_all;
        }
    }
    pub mod recommendation {
        pub mod enrichment;
        pub mod errors;
        pub mod model;
        pub mod parser;
        pub mod services;
        pub mod use_cases {
            pub mod recommend;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod register;
        }
    }
}
