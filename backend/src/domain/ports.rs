//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports ([`UserRepository`]) describe what the domain needs from
//! storage; driving ports ([`UserCommand`], [`UserQuery`]) describe the use
//! cases inbound adapters may call. Every port speaks the domain
//! [`Error`](crate::domain::Error) taxonomy so adapters translate their own
//! failures before they cross the boundary.

mod user_command;
mod user_query;
mod user_repository;

#[cfg(test)]
pub use user_command::MockUserCommand;
pub use user_command::UserCommand;
#[cfg(test)]
pub use user_query::MockUserQuery;
pub use user_query::UserQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;
