pub mod client;
pub mod design_generator;
pub mod dish_recommender;
pub mod gemini_client;
pub mod sample_design;
