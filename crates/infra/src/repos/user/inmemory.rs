use super::IUserRepo;
use plazo_domain::User;
use std::sync::Mutex;

pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for InMemoryUserRepo {
    async fn upsert(&self, user: &User) -> anyhow::Result<()> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => {
                existing.name = user.name.clone();
                existing.username = user.username.clone();
                existing.active = user.active;
                existing.last_active = user.last_active;
            }
            None => users.push(user.clone()),
        }
        Ok(())
    }

    async fn find(&self, user_id: i64) -> Option<User> {
        let users = self.users.lock().unwrap();
        users.iter().find(|u| u.id == user_id).cloned()
    }

    async fn find_many(&self, user_ids: &[i64]) -> anyhow::Result<Vec<User>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .filter(|u| user_ids.contains(&u.id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upsert_keeps_first_seen_and_refreshes_activity() {
        let repo = InMemoryUserRepo::new();
        let user = User::new(7, "Ada".into(), 1000);
        repo.upsert(&user).await.unwrap();

        let mut seen_again = user.clone();
        seen_again.last_active = 2000;
        seen_again.name = "Ada L.".into();
        repo.upsert(&seen_again).await.unwrap();

        let stored = repo.find(7).await.unwrap();
        assert_eq!(stored.first_seen, 1000);
        assert_eq!(stored.last_active, 2000);
        assert_eq!(stored.name, "Ada L.");
    }
}
