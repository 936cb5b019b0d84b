//! `usersvc-auth` — bearer token model and HS256 signing/verification.
//!
//! This crate is intentionally decoupled from HTTP: extracting the token from a
//! request is the API layer's job.

pub mod claims;
pub mod jwt;

pub use claims::{TokenClaims, TokenError, validate_claims};
pub use jwt::{Hs256Jwt, JwtValidator, TokenIssuer};
