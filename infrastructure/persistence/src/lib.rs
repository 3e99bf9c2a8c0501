pub mod db;
pub mod dish_action {
    pub mod entity;
    pub mod repository;
}
pub mod favorite {
    pub mod entity;
    pub mod repository;
}
pub mod user {
    pub mod entity;
    pub mod repository;
}
