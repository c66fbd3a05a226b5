pub mod loss;

pub use loss::{daily_loss_grams, format_grams, parse_weight};
