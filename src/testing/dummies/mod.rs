mod datasets;
mod headers;

pub use datasets::{parity_training_set, weather_header, weather_training_set};
pub use headers::{header_ab_binary, nominal};
