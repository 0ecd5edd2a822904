mod assign;
pub mod color_data;
pub mod data;
