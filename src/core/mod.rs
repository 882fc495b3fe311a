pub mod etl;
pub mod fetcher;
pub mod grouper;
pub mod pipeline;
pub mod retry;
pub mod writer;

pub use crate::domain::model::{GroupedCatalog, GroupedProduct, RawProduct};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
