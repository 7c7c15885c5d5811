pub mod password_hasher;
pub mod profile_content_query;
pub mod token_blacklist_repository;
pub mod token_provider;
pub mod user_query;
pub mod user_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use profile_content_query::{
    ProfileComment, ProfileContent, ProfileContentError, ProfileContentQuery, ProfilePost,
};
pub use token_blacklist_repository::TokenBlacklistRepository;
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
pub use user_query::{UserQuery, UserQueryError};
pub use user_repository::{ProfileChanges, UserRepository, UserRepositoryError};
