pub mod catalog;
pub mod page;
pub mod record;

pub use catalog::*;
pub use page::*;
pub use record::*;
