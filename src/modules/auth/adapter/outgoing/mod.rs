pub mod argon2_hasher;
pub mod jwt;
pub mod profile_content_postgres;
pub mod sea_orm_entity;
pub mod token_blacklist_redis;
pub mod user_query_postgres;
pub mod user_repository_postgres;

pub use argon2_hasher::Argon2Hasher;
pub use profile_content_postgres::ProfileContentPostgres;
pub use token_blacklist_redis::RedisTokenBlacklist;
pub use user_query_postgres::UserQueryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
