mod mapper;
mod media_mapper;
pub mod models;
mod staff_mapper;

pub use mapper::KinopoiskMapper;
