pub mod allocator;
pub mod catalog;
pub mod comparator;
pub mod engine;
pub mod report;

pub use crate::domain::model::{Comparison, Plan, PlanResult, Summary};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
