use log::{error, info, warn};

use crate::config::Config;
use crate::directory::UserDirectory;
use crate::error::{AuthError, Error, Result, ValidationError};
use crate::friends::FriendListService;
use crate::models::{Account, FriendEntry, Session};
use crate::session::SessionService;
use crate::storage::{AccountStore, Storage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

pub trait Notifier {
    fn notify(&mut self, severity: Severity, title: &str, message: &str);
}

#[derive(Default, Debug)]
pub struct NoticeLog {
    notices: Vec<Notice>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }
}

impl Notifier for NoticeLog {
    fn notify(&mut self, severity: Severity, title: &str, message: &str) {
        self.notices.push(Notice {
            severity,
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, severity: Severity, title: &str, message: &str) {
        match severity {
            Severity::Info => info!("{}: {}", title, message),
            Severity::Warning => warn!("{}: {}", title, message),
            Severity::Error => error!("{}: {}", title, message),
        }
    }
}

pub struct FriendsApp<S, N> {
    directory: UserDirectory<S>,
    sessions: SessionService,
    friends: FriendListService,
    notifier: N,
}

impl<N: Notifier> FriendsApp<Storage, N> {
    pub fn open(config: &Config, notifier: N) -> Result<Self> {
        let storage = Storage::open(&config.database_path, config.busy_timeout)?;
        Ok(Self::new(UserDirectory::load(storage), notifier))
    }
}

impl<S: AccountStore, N: Notifier> FriendsApp<S, N> {
    pub fn new(directory: UserDirectory<S>, notifier: N) -> Self {
        FriendsApp {
            directory,
            sessions: SessionService::new(),
            friends: FriendListService::new(),
            notifier,
        }
    }

    pub fn on_login_submit(&mut self, username: &str, password: &str) -> Result<Session> {
        match self.sessions.login(&self.directory, username, password) {
            Ok(session) => Ok(session),
            Err(e) => {
                self.notifier.notify(
                    Severity::Error,
                    "Login Error",
                    "Invalid username or password.",
                );
                Err(e.into())
            }
        }
    }

    pub fn on_register_submit(
        &mut self,
        name: &str,
        username: &str,
        password: &str,
    ) -> Result<Account> {
        let account = Account::new(name, username, password);
        match self.directory.register(account.clone()) {
            Ok(()) => {
                self.notifier.notify(
                    Severity::Info,
                    "Success",
                    "Registration complete. You can now log in.",
                );
                Ok(account)
            }
            Err(e) => {
                match &e {
                    Error::Validation(_) => self.notifier.notify(
                        Severity::Warning,
                        "Warning",
                        "Please fill in all fields.",
                    ),
                    Error::UsernameTaken(_) => self.notifier.notify(
                        Severity::Warning,
                        "Warning",
                        "This username is already taken.",
                    ),
                    other => self.notifier.notify(
                        Severity::Error,
                        "Error",
                        &format!("Registration could not be saved: {}", other),
                    ),
                }
                Err(e)
            }
        }
    }

    pub fn on_add_friend(
        &mut self,
        session: &Session,
        name: &str,
        gender: &str,
        age: &str,
        location: &str,
    ) -> Result<FriendEntry> {
        let result =
            self.friends
                .add_friend(&self.sessions, session, name, gender, age, location);
        match &result {
            Ok(entry) => self.notifier.notify(
                Severity::Info,
                "Success",
                &format!("Friend added: {}", entry.name),
            ),
            Err(Error::Validation(ValidationError::EmptyName)) => self.notifier.notify(
                Severity::Warning,
                "Warning",
                "Friend name cannot be empty.",
            ),
            Err(e) => self.report(e),
        }
        result
    }

    pub fn on_remove_friend(&mut self, session: &Session, name: &str) -> Result<()> {
        let result = self.friends.remove_friend(&self.sessions, session, name);
        match &result {
            Ok(()) => self.notifier.notify(
                Severity::Info,
                "Success",
                &format!("Friend removed: {}", name),
            ),
            Err(Error::Validation(ValidationError::EmptyName)) => self.notifier.notify(
                Severity::Warning,
                "Warning",
                "Enter the name of the friend to remove.",
            ),
            Err(e) => self.report(e),
        }
        result
    }

    pub fn on_list_friends(&self, session: &Session) -> Result<Vec<FriendEntry>> {
        self.friends.list_friends(&self.sessions, session)
    }

    pub fn on_logout(&mut self, session: &Session) {
        self.sessions.logout(session);
    }

    pub fn directory(&self) -> &UserDirectory<S> {
        &self.directory
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    fn report(&mut self, e: &Error) {
        let message = match e {
            Error::Auth(AuthError::NoActiveSession) => "You are not logged in.".to_string(),
            other => other.to_string(),
        };
        self.notifier.notify(Severity::Error, "Error", &message);
    }
}
