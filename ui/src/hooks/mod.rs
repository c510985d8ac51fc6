mod use_scroll_to_latest;
mod use_title;

pub use use_scroll_to_latest::use_scroll_to_latest;
pub use use_title::use_title;
