use std::time::Duration;

use friends_manager::directory::UserDirectory;
use friends_manager::storage::{AccountStore, Storage};
use friends_manager::{
    Account, AuthError, Config, Error, FriendEntry, FriendsApp, NoticeLog, Severity,
};

fn in_memory_app() -> FriendsApp<Storage, NoticeLog> {
    let directory = UserDirectory::load(Storage::open_in_memory().unwrap());
    FriendsApp::new(directory, NoticeLog::new())
}

fn file_config(dir: &tempfile::TempDir) -> Config {
    Config {
        database_path: dir.path().join("friends.db").to_string_lossy().into_owned(),
        busy_timeout: Duration::from_millis(500),
    }
}

#[test]
fn test_register_login_add_remove_scenario() {
    let mut app = in_memory_app();

    app.on_register_submit("Ayşe Yılmaz", "ayse01", "sifre123")
        .unwrap();
    let session = app.on_login_submit("ayse01", "sifre123").unwrap();
    assert_eq!(session.account.display_name, "Ayşe Yılmaz");

    app.on_add_friend(&session, "Mehmet", "M", "30", "Istanbul")
        .unwrap();
    assert_eq!(
        app.on_list_friends(&session).unwrap(),
        vec![FriendEntry {
            name: "Mehmet".to_string(),
            gender: "M".to_string(),
            age: "30".to_string(),
            location: "Istanbul".to_string(),
        }]
    );

    app.on_remove_friend(&session, "Mehmet").unwrap();
    assert!(app.on_list_friends(&session).unwrap().is_empty());

    app.on_logout(&session);
    let errors = app
        .notifier()
        .notices()
        .iter()
        .filter(|n| n.severity != Severity::Info)
        .count();
    assert_eq!(errors, 0);
}

#[test]
fn test_duplicate_registration_keeps_original() {
    let mut app = in_memory_app();
    app.on_register_submit("Bob", "bob", "first").unwrap();

    let result = app.on_register_submit("Bobby", "bob", "second");
    assert!(matches!(result, Err(Error::UsernameTaken(_))));
    assert_eq!(app.directory().len(), 1);
    assert!(app.on_login_submit("bob", "first").is_ok());
    assert!(matches!(
        app.on_login_submit("bob", "second"),
        Err(Error::Auth(AuthError::InvalidCredentials))
    ));
}

#[test]
fn test_unknown_user_and_wrong_password_same_error() {
    let mut app = in_memory_app();
    app.on_register_submit("Carol", "carol", "pw").unwrap();

    let wrong = app.on_login_submit("carol", "PW").unwrap_err();
    let unknown = app.on_login_submit("nobody", "pw").unwrap_err();
    assert!(matches!(wrong, Error::Auth(AuthError::InvalidCredentials)));
    assert!(matches!(unknown, Error::Auth(AuthError::InvalidCredentials)));
    assert_eq!(wrong.to_string(), unknown.to_string());
}

#[test]
fn test_readd_friend_replaces_fields() {
    let mut app = in_memory_app();
    app.on_register_submit("Dave", "dave", "pw").unwrap();
    let session = app.on_login_submit("dave", "pw").unwrap();

    app.on_add_friend(&session, "Ece", "F", "33", "Izmir").unwrap();
    app.on_add_friend(&session, "Ece", "F", "34", "Bursa").unwrap();

    let friends = app.on_list_friends(&session).unwrap();
    assert_eq!(friends.len(), 1);
    assert_eq!(friends[0].age, "34");
    assert_eq!(friends[0].location, "Bursa");
}

#[test]
fn test_accounts_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir);
    let account = Account::new("Ayşe Yılmaz", "ayse01", "sifre123");

    {
        let storage = Storage::open(&config.database_path, config.busy_timeout).unwrap();
        storage.ensure_schema().unwrap();
        storage.insert_account(&account).unwrap();
    }

    let storage = Storage::open(&config.database_path, config.busy_timeout).unwrap();
    let mut directory = UserDirectory::new(storage);
    let accounts = directory.store().load_all_accounts().unwrap();
    directory.initialize(accounts);
    assert_eq!(directory.find("ayse01"), Some(&account));
}

#[test]
fn test_friends_are_lost_on_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir);

    {
        let mut app = FriendsApp::open(&config, NoticeLog::new()).unwrap();
        app.on_register_submit("Erin", "erin", "pw").unwrap();
        let session = app.on_login_submit("erin", "pw").unwrap();
        app.on_add_friend(&session, "Can", "M", "40", "Ankara")
            .unwrap();
    }

    let mut app = FriendsApp::open(&config, NoticeLog::new()).unwrap();
    let session = app.on_login_submit("erin", "pw").unwrap();
    assert!(app.on_list_friends(&session).unwrap().is_empty());
}
