pub mod canvas;
pub mod interface;
