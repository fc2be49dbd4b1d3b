pub mod charts;
pub mod normalizer;
pub mod pagination;
pub mod selector;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{Rating, SearchItem, SearchPage, SearchType, Title};
pub use crate::domain::ports::{ConfigProvider, TitleSource};
pub use crate::utils::error::Result;
