//! Decisions the host application makes on behalf of the webhook.
//!
//! Both traits are implemented for plain closures, so
//! `|_: &str| -> anyhow::Result<Status> { Ok(Status::Exists) }` is a valid `AuthMethods`.

use super::dto::Status;
use anyhow::Result;

/// Looks up whether a user exists for the `authMethods` action.
pub trait AuthMethods: Send + Sync {
    /// # Errors
    /// Any error is reported to the caller as an internal server error.
    fn auth_methods(&self, username: &str) -> Result<Status>;
}

/// Checks a username/password pair for the `passwordVerify` action.
pub trait PasswordVerify: Send + Sync {
    /// # Errors
    /// Any error is reported to the caller as an internal server error.
    fn password_verify(&self, username: &str, password: &str) -> Result<bool>;
}

impl<F> AuthMethods for F
where
    F: Fn(&str) -> Result<Status> + Send + Sync,
{
    fn auth_methods(&self, username: &str) -> Result<Status> {
        self(username)
    }
}

impl<F> PasswordVerify for F
where
    F: Fn(&str, &str) -> Result<bool> + Send + Sync,
{
    fn password_verify(&self, username: &str, password: &str) -> Result<bool> {
        self(username, password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct Directory(Vec<&'static str>);

    impl AuthMethods for Directory {
        fn auth_methods(&self, username: &str) -> Result<Status> {
            if self.0.contains(&username) {
                Ok(Status::Exists)
            } else {
                Ok(Status::NotExists)
            }
        }
    }

    #[test]
    fn closures_are_callbacks() {
        let auth_methods = |_: &str| -> Result<Status> { Ok(Status::Exists) };
        assert_eq!(auth_methods.auth_methods("anyone").unwrap(), Status::Exists);

        let password_verify =
            |username: &str, password: &str| -> Result<bool> { Ok(username == password) };
        assert!(password_verify.password_verify("same", "same").unwrap());
        assert!(!password_verify.password_verify("a", "b").unwrap());
    }

    #[test]
    fn structs_are_callbacks() {
        let directory = Directory(vec!["existing@existing.com"]);
        assert_eq!(
            directory.auth_methods("existing@existing.com").unwrap(),
            Status::Exists
        );
        assert_eq!(
            directory.auth_methods("missing@example.com").unwrap(),
            Status::NotExists
        );
    }

    #[test]
    fn errors_pass_through() {
        let failing = |_: &str, _: &str| -> Result<bool> { Err(anyhow!("backend down")) };
        let err = failing.password_verify("u", "p").unwrap_err();
        assert_eq!(err.to_string(), "backend down");
    }
}
