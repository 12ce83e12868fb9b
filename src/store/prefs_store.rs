/// SQLite-backed preference store for theme choice and expansion state.

use rusqlite::{params, Connection};

pub const KEY_THEME: &str = "theme";
pub const KEY_EXPANDED: &str = "expanded_frameworks";

pub struct PrefsStore {
    conn: Option<Connection>,
}

impl PrefsStore {
    pub fn new() -> Self {
        Self { conn: None }
    }

    pub fn open(&mut self, db_path: &str) -> bool {
        match Connection::open(db_path) {
            Ok(conn) => {
                self.conn = Some(conn);
                self.create_tables();
                true
            }
            Err(e) => {
                eprintln!("Failed to open prefs DB: {}", e);
                false
            }
        }
    }

    pub fn close(&mut self) {
        self.conn = None;
    }

    // ===== Raw keys =====

    pub fn get(&self, key: &str) -> Option<String> {
        let conn = self.conn.as_ref()?;

        conn.query_row(
            "SELECT value FROM prefs WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .ok()
    }

    pub fn set(&self, key: &str, value: &str) {
        let conn = match &self.conn {
            Some(c) => c,
            None => return,
        };

        conn.execute(
            "INSERT OR REPLACE INTO prefs (key, value) VALUES (?1, ?2)",
            params![key, value],
        )
        .ok();
    }

    // ===== Typed prefs =====

    pub fn theme(&self) -> Option<String> {
        self.get(KEY_THEME)
    }

    pub fn set_theme(&self, name: &str) {
        self.set(KEY_THEME, name);
    }

    /// Persisted ids of currently-expanded framework cards. A value that no
    /// longer parses is discarded rather than surfaced.
    pub fn expanded_frameworks(&self) -> Vec<String> {
        let raw = match self.get(KEY_EXPANDED) {
            Some(r) => r,
            None => return Vec::new(),
        };

        match serde_json::from_str(&raw) {
            Ok(ids) => ids,
            Err(e) => {
                log::warn!("Discarding malformed expansion state: {}", e);
                Vec::new()
            }
        }
    }

    pub fn set_expanded_frameworks(&self, ids: &[String]) {
        if let Ok(json) = serde_json::to_string(ids) {
            self.set(KEY_EXPANDED, &json);
        }
    }

    // ===== Internal =====

    fn create_tables(&self) {
        let conn = match &self.conn {
            Some(c) => c,
            None => return,
        };

        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS prefs (
                key         TEXT PRIMARY KEY,
                value       TEXT,
                updated_at  INTEGER DEFAULT (strftime('%s','now'))
            );
            ",
        )
        .ok();
    }
}

impl Default for PrefsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PrefsStore {
    fn drop(&mut self) {
        self.close();
    }
}
