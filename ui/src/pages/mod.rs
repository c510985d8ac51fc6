pub mod chat;
pub mod home;
pub mod placeholder;

pub use chat::ChatPage;
pub use home::HomePage;
pub use placeholder::{CommunityPage, ProfilePage};
