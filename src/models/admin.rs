use crate::store::Record;

/// Backoffice account, used only for login comparison. The password hash
/// never leaves the auth handler.
#[derive(Debug, Clone)]
pub struct Admin {
    pub id: String,
    pub email: String,
    pub password_hash: String,
}

impl From<Record> for Admin {
    fn from(record: Record) -> Self {
        Self {
            email: record.str_field("Email"),
            password_hash: record.str_field("Password"),
            id: record.id,
        }
    }
}
