mod page;
mod session;

pub use page::{PageInspector, PageSnapshot};
pub use session::{BrowserConfig, BrowserKind, new_session};
