use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventKind {
    Login,
    Logout,
}

impl EventKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventKind::Login => "login",
            EventKind::Logout => "logout",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "login" => Some(EventKind::Login),
            "logout" => Some(EventKind::Logout),
            _ => None,
        }
    }

    pub fn is_login(&self) -> bool {
        matches!(self, EventKind::Login)
    }
}
