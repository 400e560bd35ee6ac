//! Authentication primitives for the to-do service.
//!
//! - Password hashing (Argon2id, salted PHC strings)
//! - Access token signing and verification (HS256 JWT carrying the account email)
//! - `Authenticator`, which combines both for login and registration flows
//!
//! Nothing here performs I/O; user lookup and persistence belong to the service.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).is_ok());
//! assert!(hasher.verify("my_passwordx", &hash).is_err());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let token = handler.issue(&Claims::for_email("test@test.com")).unwrap();
//! let claims = handler.verify(&token).unwrap();
//! assert_eq!(claims.email, "test@test.com");
//! ```
//!
//! ## Login
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//! let hash = auth.hash_password("password123").unwrap();
//!
//! let result = auth.authenticate("password123", &hash, "test@test.com").unwrap();
//! assert!(auth.verify_token(&result.access_token).is_some());
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
