use crate::error::UsersError;
use crate::model::{NewUser, ProfilePatch, User};
use parking_lot::RwLock;
use sledger_domain::constants::DEFAULT_ACCOUNT_TYPE;
use sledger_kernel::ids::IdSequence;
use sledger_kernel::time;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Debug, Default)]
struct DirectoryInner {
    users: RwLock<BTreeMap<u64, User>>,
    ids: IdSequence,
}

/// Shared handle over registered users. Emails compare case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    inner: Arc<DirectoryInner>,
}

impl UserDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// [`UsersError::InvalidInput`] for a malformed or already registered email.
    #[instrument(skip(self, new))]
    pub fn register(&self, new: NewUser) -> Result<User, UsersError> {
        let email = new.email.trim();
        if !is_plausible_email(email) {
            return Err(UsersError::invalid("Invalid email address"));
        }

        let mut users = self.inner.users.write();
        if users.values().any(|user| user.email.eq_ignore_ascii_case(email)) {
            return Err(UsersError::invalid("Email already registered"));
        }

        let now = time::now();
        let user = User {
            id: self.inner.ids.next_id(),
            email: email.to_owned(),
            name: new.name,
            company_name: new.company_name,
            phone: new.phone,
            address: new.address,
            account_type: DEFAULT_ACCOUNT_TYPE.to_owned(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.id, user.clone());

        info!(user_id = user.id, "User registered");
        Ok(user)
    }

    /// # Errors
    /// [`UsersError::NotFound`].
    pub fn profile(&self, user_id: u64) -> Result<User, UsersError> {
        self.inner.users.read().get(&user_id).cloned().ok_or_else(UsersError::user_not_found)
    }

    /// # Errors
    /// [`UsersError::NotFound`].
    pub fn update_profile(&self, user_id: u64, patch: ProfilePatch) -> Result<User, UsersError> {
        let mut users = self.inner.users.write();
        let user = users.get_mut(&user_id).ok_or_else(UsersError::user_not_found)?;

        if let Some(name) = filled(patch.name) {
            user.name = name;
        }
        if let Some(company_name) = filled(patch.company_name) {
            user.company_name = Some(company_name);
        }
        if let Some(phone) = filled(patch.phone) {
            user.phone = Some(phone);
        }
        if let Some(address) = filled(patch.address) {
            user.address = Some(address);
        }
        user.updated_at = time::now();
        Ok(user.clone())
    }

    /// # Errors
    /// [`UsersError::InvalidInput`] without an email, [`UsersError::NotFound`] when nobody
    /// registered it.
    pub fn search(&self, email: Option<&str>) -> Result<User, UsersError> {
        let email = email
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .ok_or_else(|| UsersError::invalid("Email parameter required"))?;

        self.inner
            .users
            .read()
            .values()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .cloned()
            .ok_or_else(UsersError::user_not_found)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.users.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.users.read().is_empty()
    }
}

fn filled(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// `local@domain` with both halves non-empty and no whitespace.
fn is_plausible_email(email: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty())
        && !email.contains(char::is_whitespace)
}
