use serde::Serialize;

/// Identity every store call is scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserContext {
    pub user_id: String,
}

impl UserContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
