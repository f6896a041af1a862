use serde::{Deserialize, Serialize};

/// Account role. Anything stored other than `admin` is treated as staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
}

impl Role {
    pub fn from_db(value: &str) -> Self {
        if value.eq_ignore_ascii_case(models::app_user::ROLE_ADMIN) { Role::Admin } else { Role::Staff }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => models::app_user::ROLE_ADMIN,
            Role::Staff => models::app_user::ROLE_STAFF,
        }
    }

    pub fn is_admin(&self) -> bool { matches!(self, Role::Admin) }
}

/// Registration input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterInput {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// Login input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Domain user (business view)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i32,
    pub username: String,
    pub role: Role,
}

/// User together with its stored argon2 PHC hash.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub user: AuthUser,
    pub password_hash: String,
}

/// Login result (session)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: AuthUser,
    pub token: String,
}

/// JWT payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub uid: i32,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Verified caller identity carried through a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: i32,
    pub username: String,
    pub role: Role,
}

impl Identity {
    pub fn is_admin(&self) -> bool { self.role.is_admin() }
}

impl From<Claims> for Identity {
    fn from(c: Claims) -> Self { Identity { user_id: c.uid, username: c.sub, role: c.role } }
}
