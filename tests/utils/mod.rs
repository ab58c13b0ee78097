#![allow(dead_code)]

pub mod factories;

pub use factories::{FilmFactory, StaffFactory};
