mod assign;
pub mod data;
pub mod rhythm_data;
