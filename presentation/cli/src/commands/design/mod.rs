pub mod dto;
pub mod error_mapper;
