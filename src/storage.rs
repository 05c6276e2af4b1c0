use std::time::Duration;

use log::debug;
use rusqlite::Connection;

use crate::error::Result;
use crate::models::Account;

// Friends are never written here.
pub trait AccountStore {
    fn ensure_schema(&self) -> Result<()>;

    fn load_all_accounts(&self) -> Result<Vec<Account>>;

    /// Appends one row. Does not check uniqueness itself; a duplicate username
    /// fails on the table's UNIQUE constraint.
    fn insert_account(&self, account: &Account) -> Result<()>;
}

pub struct Storage {
    conn: Connection,
}

impl Storage {
    pub fn open(db_path: &str, busy_timeout: Duration) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        conn.busy_timeout(busy_timeout)?;
        debug!("Opened account database at {}", db_path);
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        let storage = Storage { conn };
        storage.ensure_schema()?;
        Ok(storage)
    }
}

impl AccountStore for Storage {
    fn ensure_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                username TEXT UNIQUE NOT NULL,
                password TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    fn load_all_accounts(&self) -> Result<Vec<Account>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, username, password FROM users ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Account {
                display_name: row.get(0)?,
                username: row.get(1)?,
                password: row.get(2)?,
            })
        })?;
        let accounts = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(accounts)
    }

    fn insert_account(&self, account: &Account) -> Result<()> {
        self.conn.execute(
            "INSERT INTO users (name, username, password) VALUES (?1, ?2, ?3)",
            (&account.display_name, &account.username, &account.password),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn setup_in_memory_db() -> Storage {
        Storage::open_in_memory().unwrap()
    }

    #[test]
    fn test_insert_and_load_account() {
        let storage = setup_in_memory_db();
        let account = Account::new("Alice", "alice", "secret");

        storage.insert_account(&account).unwrap();
        let loaded = storage.load_all_accounts().unwrap();
        assert_eq!(loaded, vec![account]);
    }

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let storage = setup_in_memory_db();
        storage
            .insert_account(&Account::new("Alice", "alice", "secret"))
            .unwrap();

        storage.ensure_schema().unwrap();
        storage.ensure_schema().unwrap();
        assert_eq!(storage.load_all_accounts().unwrap().len(), 1);
    }

    #[test]
    fn test_insert_duplicate_username() {
        let storage = setup_in_memory_db();
        storage
            .insert_account(&Account::new("Bob", "bob", "pw1"))
            .unwrap();

        let result = storage.insert_account(&Account::new("Robert", "bob", "pw2"));
        assert!(matches!(result, Err(Error::StorageUnavailable(_))));
        assert_eq!(storage.load_all_accounts().unwrap()[0].password, "pw1");
    }

    #[test]
    fn test_load_keeps_insertion_order() {
        let storage = setup_in_memory_db();
        for username in ["carol", "alice", "bob"] {
            storage
                .insert_account(&Account::new(username, username, "pw"))
                .unwrap();
        }

        let usernames: Vec<String> = storage
            .load_all_accounts()
            .unwrap()
            .into_iter()
            .map(|a| a.username)
            .collect();
        assert_eq!(usernames, ["carol", "alice", "bob"]);
    }

    #[test]
    fn test_load_from_empty_db() {
        let storage = setup_in_memory_db();
        assert!(storage.load_all_accounts().unwrap().is_empty());
    }
}
