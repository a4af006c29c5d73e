use async_trait::async_trait;

use common::Problem;
use models::User;

pub mod mock;
pub mod service;

pub use mock::MockUserService;
pub use service::StateUserService;

/// Operations every user-service strategy provides.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user. A username that is already registered is
    /// rejected with an `err://user-exists` problem.
    async fn add_user(&self, user: User) -> Result<(), Problem>;

    /// Fetch a registered user by username. A miss is an
    /// `err://not-found` problem.
    async fn get_user(&self, username: &str) -> Result<User, Problem>;
}
