pub mod author_avatar;
pub mod cards;
pub mod chat_sidebar;
pub mod layout;
pub mod message_area;
pub mod message_input;

pub use cards::{FeatureCard, StatCard};
pub use chat_sidebar::ChatSidebar;
pub use message_area::MessageArea;
pub use message_input::MessageInput;
