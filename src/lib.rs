pub mod app;
pub mod config;
pub mod directory;
pub mod error;
pub mod friends;
pub mod models;
pub mod session;
pub mod storage;

pub use app::{FriendsApp, LogNotifier, Notice, NoticeLog, Notifier, Severity};
pub use config::Config;
pub use error::{AuthError, Error, ValidationError};
pub use models::{Account, FriendEntry, Session};
