/// Authentication and authorization
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing
/// - [`jwt`]: Access token issuing and verification
/// - [`middleware`]: Bearer-token verification and the request identity
///   ([`middleware::AuthContext`])
/// - [`authorization`]: The ownership guard for projects and tasks
///
/// Identity flows one way: the bearer token is verified once per request,
/// producing an `AuthContext`; the guard consumes that value and never looks
/// identity up itself.

pub mod authorization;
pub mod jwt;
pub mod middleware;
pub mod password;
