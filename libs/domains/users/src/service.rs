//! User service - orchestration layer adding logging and timing over repository calls

use std::sync::Arc;
use std::time::Instant;

use uuid::Uuid;

use crate::error::UserResult;
use crate::logging::{LogValue, UserLogger};
use crate::models::User;
use crate::repository::UserRepository;

/// Service layer mediating between the controller and the repository.
///
/// Every operation wraps exactly one repository call with a start event and
/// a completion event carrying the elapsed time, measured with a monotonic
/// clock sampled immediately around the call. Store faults are logged once
/// (the completion event is skipped) and returned unchanged: no retry, no
/// fallback, no error translation.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    logger: Arc<dyn UserLogger>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R, logger: Arc<dyn UserLogger>) -> Self {
        Self {
            repository: Arc::new(repository),
            logger,
        }
    }

    /// Fetch every user in the store
    pub async fn get_all_users(&self) -> UserResult<Vec<User>> {
        self.logger.log_information("Retrieving all users", &[]);
        let started = Instant::now();

        match self.repository.get_all().await {
            Ok(users) => {
                self.logger.log_information(
                    "All users retrieved in {}ms",
                    &[LogValue::Millis(started.elapsed().as_millis())],
                );
                Ok(users)
            }
            Err(err) => {
                self.logger.log_error(
                    &err,
                    "Something went wrong while retrieving all users",
                    &[],
                );
                Err(err)
            }
        }
    }

    /// Fetch a single user; absent is `Ok(None)`, not an error
    pub async fn get_user_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        self.logger
            .log_information("Retrieving user with id: {}", &[LogValue::Id(id)]);
        let started = Instant::now();

        match self.repository.get_by_id(id).await {
            Ok(user) => {
                self.logger.log_information(
                    "User with id {} retrieved in {}ms",
                    &[
                        LogValue::Id(id),
                        LogValue::Millis(started.elapsed().as_millis()),
                    ],
                );
                Ok(user)
            }
            Err(err) => {
                self.logger.log_error(
                    &err,
                    "Something went wrong while retrieving user with id {}",
                    &[LogValue::Id(id)],
                );
                Err(err)
            }
        }
    }

    /// Persist a new user; returns the repository's verdict verbatim
    pub async fn create_user(&self, user: &User) -> UserResult<bool> {
        self.logger.log_information(
            "Creating user with id {} and name: {}",
            &[
                LogValue::Id(user.id),
                LogValue::Text(user.full_name.clone()),
            ],
        );
        let started = Instant::now();

        match self.repository.create(user).await {
            Ok(created) => {
                self.logger.log_information(
                    "User with id {} created in {}ms",
                    &[
                        LogValue::Id(user.id),
                        LogValue::Millis(started.elapsed().as_millis()),
                    ],
                );
                Ok(created)
            }
            Err(err) => {
                // The create error template carries no id, unlike the other operations
                self.logger
                    .log_error(&err, "Something went wrong while creating a user", &[]);
                Err(err)
            }
        }
    }

    /// Delete a user; `false` means there was nothing to delete
    pub async fn delete_user_by_id(&self, id: Uuid) -> UserResult<bool> {
        self.logger
            .log_information("Deleting user with id: {}", &[LogValue::Id(id)]);
        let started = Instant::now();

        match self.repository.delete_by_id(id).await {
            Ok(deleted) => {
                self.logger.log_information(
                    "User with id {} deleted in {}ms",
                    &[
                        LogValue::Id(id),
                        LogValue::Millis(started.elapsed().as_millis()),
                    ],
                );
                Ok(deleted)
            }
            Err(err) => {
                self.logger.log_error(
                    &err,
                    "Something went wrong while deleting user with id {}",
                    &[LogValue::Id(id)],
                );
                Err(err)
            }
        }
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            logger: Arc::clone(&self.logger),
        }
    }
}
