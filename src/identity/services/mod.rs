//! Application services for identity orchestration.

mod credentials;

pub use credentials::{
    CredentialService, CredentialServiceError, CredentialServiceResult, RegisterUserRequest,
};
