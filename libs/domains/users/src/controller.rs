use serde::Serialize;
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::{CreateUserRequest, User, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Body payload carried by a successful response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    User(UserResponse),
    Users(Vec<UserResponse>),
}

/// The four outcome shapes consumed by the owning transport layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    /// Success, with an optional body
    Ok(Option<ResponseBody>),
    /// Resource created; `location` identifies it
    Created { location: Uuid, body: UserResponse },
    /// No such resource, no body
    NotFound,
    /// The request was refused, no body
    BadRequest,
}

/// Boundary layer mapping service outcomes to response shapes.
///
/// Store faults raised below are not caught here; they propagate to the
/// owning transport's fault boundary.
pub struct UserController<R: UserRepository> {
    service: UserService<R>,
}

impl<R: UserRepository> UserController<R> {
    pub fn new(service: UserService<R>) -> Self {
        Self { service }
    }

    /// List all users
    pub async fn get_all(&self) -> UserResult<ApiResponse> {
        let users = self.service.get_all_users().await?;
        let body = users.into_iter().map(UserResponse::from).collect();

        Ok(ApiResponse::Ok(Some(ResponseBody::Users(body))))
    }

    /// Fetch one user
    pub async fn get_by_id(&self, id: Uuid) -> UserResult<ApiResponse> {
        match self.service.get_user_by_id(id).await? {
            Some(user) => Ok(ApiResponse::Ok(Some(ResponseBody::User(user.into())))),
            None => Ok(ApiResponse::NotFound),
        }
    }

    /// Create a user; the id is assigned here, before the service call
    pub async fn create(&self, request: CreateUserRequest) -> UserResult<ApiResponse> {
        let user = User::new(request.full_name);

        if self.service.create_user(&user).await? {
            Ok(ApiResponse::Created {
                location: user.id,
                body: user.into(),
            })
        } else {
            Ok(ApiResponse::BadRequest)
        }
    }

    /// Delete a user
    pub async fn delete_by_id(&self, id: Uuid) -> UserResult<ApiResponse> {
        if self.service.delete_user_by_id(id).await? {
            Ok(ApiResponse::Ok(None))
        } else {
            Ok(ApiResponse::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserError;
    use crate::logging::TracingUserLogger;
    use crate::repository::MockUserRepository;
    use std::sync::Arc;

    fn controller(repo: MockUserRepository) -> UserController<MockUserRepository> {
        UserController::new(UserService::new(repo, Arc::new(TracingUserLogger::new())))
    }

    #[tokio::test]
    async fn test_get_all_returns_ok_with_empty_list_when_no_users_exist() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_all().returning(|| Ok(Vec::new()));

        let sut = controller(repo);
        let result = sut.get_all().await.unwrap();

        assert_eq!(result, ApiResponse::Ok(Some(ResponseBody::Users(Vec::new()))));
    }

    #[tokio::test]
    async fn test_get_all_returns_ok_with_mapped_users_when_users_exist() {
        let user = User::new("Daniel Aranda");
        let repo_user = user.clone();

        let mut repo = MockUserRepository::new();
        repo.expect_get_all()
            .returning(move || Ok(vec![repo_user.clone()]));

        let sut = controller(repo);
        let result = sut.get_all().await.unwrap();

        assert_eq!(
            result,
            ApiResponse::Ok(Some(ResponseBody::Users(vec![user.into()])))
        );
    }

    #[tokio::test]
    async fn test_get_by_id_returns_ok_with_user_when_user_exists() {
        let user = User::new("Daniel Aranda");
        let repo_user = user.clone();

        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id()
            .with(mockall::predicate::eq(user.id))
            .returning(move |_| Ok(Some(repo_user.clone())));

        let sut = controller(repo);
        let result = sut.get_by_id(user.id).await.unwrap();

        assert_eq!(result, ApiResponse::Ok(Some(ResponseBody::User(user.into()))));
    }

    #[tokio::test]
    async fn test_get_by_id_returns_not_found_when_user_does_not_exist() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let sut = controller(repo);
        let result = sut.get_by_id(Uuid::now_v7()).await.unwrap();

        assert_eq!(result, ApiResponse::NotFound);
    }

    #[tokio::test]
    async fn test_create_returns_created_when_request_is_valid() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .withf(|user| user.full_name == "Daniel Aranda")
            .returning(|_| Ok(true));

        let sut = controller(repo);
        let request = CreateUserRequest {
            full_name: "Daniel Aranda".to_string(),
        };

        match sut.create(request).await.unwrap() {
            ApiResponse::Created { location, body } => {
                // The controller generated the id; location and body must agree
                assert_eq!(location, body.id);
                assert_eq!(body.full_name, "Daniel Aranda");
            }
            other => panic!("expected Created, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_returns_bad_request_when_store_refuses_the_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().returning(|_| Ok(false));

        let sut = controller(repo);
        let request = CreateUserRequest {
            full_name: String::new(),
        };

        let result = sut.create(request).await.unwrap();
        assert_eq!(result, ApiResponse::BadRequest);
    }

    #[tokio::test]
    async fn test_delete_by_id_returns_ok_when_user_was_deleted() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete_by_id().returning(|_| Ok(true));

        let sut = controller(repo);
        let result = sut.delete_by_id(Uuid::now_v7()).await.unwrap();

        assert_eq!(result, ApiResponse::Ok(None));
    }

    #[tokio::test]
    async fn test_delete_by_id_returns_not_found_when_user_was_not_deleted() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete_by_id().returning(|_| Ok(false));

        let sut = controller(repo);
        let result = sut.delete_by_id(Uuid::now_v7()).await.unwrap();

        assert_eq!(result, ApiResponse::NotFound);
    }

    #[tokio::test]
    async fn test_store_faults_propagate_through_the_controller() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_all()
            .returning(|| Err(UserError::Database("Something went wrong".to_string())));

        let sut = controller(repo);
        let err = sut.get_all().await.unwrap_err();

        assert_eq!(err, UserError::Database("Something went wrong".to_string()));
    }
}
