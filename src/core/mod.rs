pub mod submit;

pub use crate::domain::model::{FormFields, OrderData, StatusLevel};
pub use crate::domain::ports::{ConfigProvider, FormSource, StatusSink};
pub use crate::utils::error::Result;
