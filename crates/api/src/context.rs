use forgeerp_core::User;

/// Acting user for a request, as established by the user middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserContext {
    user: User,
}

impl UserContext {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &User {
        &self.user
    }
}
