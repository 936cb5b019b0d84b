//! User lookup port and the in-memory reference adapter.

use std::collections::HashMap;

use crate::{ServiceError, ServiceResult, User, UserId};

/// Read-only user lookup.
pub trait UserRepository: Send + Sync {
    fn by_username(&self, username: &str) -> ServiceResult<User>;

    fn by_id(&self, id: UserId) -> ServiceResult<User>;
}

/// Immutable, process-local user table.
///
/// Built once at startup; lookups never block and nothing is written back.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: HashMap<UserId, User>,
    ids_by_username: HashMap<String, UserId>,
}

impl InMemoryUserRepository {
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        let mut repo = Self::default();
        for user in users {
            repo.insert(user);
        }
        repo
    }

    /// Later entries win: a user replacing an earlier one by id or by
    /// username evicts that entry from both indexes.
    fn insert(&mut self, user: User) {
        if let Some(previous) = self.users.remove(&user.id) {
            self.ids_by_username.remove(&previous.username);
        }
        if let Some(other_id) = self.ids_by_username.remove(&user.username) {
            self.users.remove(&other_id);
        }
        self.ids_by_username.insert(user.username.clone(), user.id);
        self.users.insert(user.id, user);
    }

    /// Repository holding the default demo account (`jmarie` / `issilly`).
    pub fn seeded() -> Self {
        Self::new([User::new(UserId::new(10), "jmarie", "issilly")
            .with_name("Jean-Marie", "de La Beaumardière")
            .with_type("admin")])
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = UserId> + '_ {
        self.users.keys().copied()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn by_username(&self, username: &str) -> ServiceResult<User> {
        let id = self
            .ids_by_username
            .get(username)
            .ok_or(ServiceError::NotFound)?;
        self.by_id(*id)
    }

    fn by_id(&self, id: UserId) -> ServiceResult<User> {
        self.users.get(&id).cloned().ok_or(ServiceError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_repository_finds_default_user_both_ways() {
        let repo = InMemoryUserRepository::seeded();
        assert_eq!(repo.len(), 1);

        let by_name = repo.by_username("jmarie").unwrap();
        let by_id = repo.by_id(UserId::new(10)).unwrap();
        assert_eq!(by_name, by_id);
        assert_eq!(by_name.user_type, "admin");
    }

    #[test]
    fn unknown_keys_are_not_found() {
        let repo = InMemoryUserRepository::seeded();
        assert_eq!(repo.by_username("nobody"), Err(ServiceError::NotFound));
        assert_eq!(repo.by_id(UserId::new(99)), Err(ServiceError::NotFound));
    }

    #[test]
    fn later_duplicate_username_replaces_earlier() {
        let repo = InMemoryUserRepository::new([
            User::new(UserId::new(1), "sam", "a"),
            User::new(UserId::new(1), "sam", "b"),
        ]);
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.by_username("sam").unwrap().password, "b");
    }

    #[test]
    fn shared_username_under_new_id_evicts_the_old_id() {
        let repo = InMemoryUserRepository::new([
            User::new(UserId::new(1), "sam", "a"),
            User::new(UserId::new(2), "sam", "b"),
        ]);
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.by_id(UserId::new(1)), Err(ServiceError::NotFound));
        assert_eq!(repo.by_id(UserId::new(2)).unwrap().password, "b");
        assert_eq!(repo.by_username("sam").unwrap().id, UserId::new(2));
    }

    #[test]
    fn reused_id_with_new_username_evicts_the_old_username() {
        let repo = InMemoryUserRepository::new([
            User::new(UserId::new(1), "sam", "a"),
            User::new(UserId::new(1), "max", "b"),
        ]);
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.by_username("sam"), Err(ServiceError::NotFound));
        assert_eq!(repo.by_id(UserId::new(1)).unwrap().username, "max");
    }

    #[test]
    fn lookups_by_id_return_the_requested_id() {
        let repo = InMemoryUserRepository::new([
            User::new(UserId::new(1), "sam", "a"),
            User::new(UserId::new(2), "sam", "b"),
            User::new(UserId::new(3), "kim", "c"),
            User::new(UserId::new(3), "lee", "d"),
            User::new(UserId::new(4), "kim", "e"),
        ]);
        let ids: Vec<UserId> = repo.ids().collect();
        assert_eq!(ids.len(), repo.len());
        for id in ids {
            let user = repo.by_id(id).unwrap();
            assert_eq!(user.id, id);
            assert_eq!(repo.by_username(&user.username).unwrap().id, id);
        }
    }
}
