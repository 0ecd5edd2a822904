pub use self::{color::ColorEvaluator, reading::ReadingEvaluator};

mod color;
mod reading;
