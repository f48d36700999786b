//! Domain primitives, error taxonomy, ports and services.
//!
//! Purpose: hold everything the user service decides on its own, free of
//! HTTP and database types. Adapters in `inbound` and `outbound` depend on
//! this module, never the other way round.
//!
//! Public surface:
//! - Error / ErrorKind: closed failure taxonomy shared by all layers.
//! - User, UserId, Username, NewUser: identity records.
//! - CreateUserRequest / CreateUserResponse: create use-case payloads.
//! - validate_username: length check applied before any storage call.
//! - UserService: implementation of the driving ports.

pub mod error;
pub mod ports;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorKind};
pub use self::user::{
    CreateUserRequest, CreateUserResponse, NewUser, USERNAME_MAX, USERNAME_MIN, User, UserId,
    Username, UsernameValidationError, validate_username,
};
pub use self::user_service::UserService;
