//! Login controller combining two use cases with fail-fast aggregation.
//!
//! Run with:
//!
//! ```text
//! cargo run --example login_controller
//! ```
use outcome_rail::{all, err, ok, Outcome};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum UseCaseError {
    InvalidCredentials,
    InternalServerError,
    UserDisabled,
}

impl fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UseCaseError::InvalidCredentials => write!(f, "Invalid credentials"),
            UseCaseError::InternalServerError => write!(f, "Internal server error"),
            UseCaseError::UserDisabled => write!(f, "User is disabled"),
        }
    }
}

impl std::error::Error for UseCaseError {}

trait UseCase {
    type Request;
    type Response;

    fn execute(&self, request: Self::Request) -> Outcome<Self::Response, UseCaseError>;
}

#[derive(Debug, Clone)]
struct User {
    name: String,
    email: String,
}

#[derive(Debug, Clone, Copy)]
struct Checkpoint {
    email_verified: bool,
    disabled: bool,
}

#[derive(Debug)]
struct LoginPayload {
    user: User,
    should_verify_email: bool,
}

struct LoginUseCase;

impl UseCase for LoginUseCase {
    type Request = (String, String);
    type Response = User;

    fn execute(&self, (email, password): Self::Request) -> Outcome<User, UseCaseError> {
        if email == "admin" && password == "admin" {
            ok(User { name: "admin".to_string(), email: "a@g.com".to_string() })
        } else {
            err(UseCaseError::InvalidCredentials)
        }
    }
}

struct CheckpointUseCase;

impl UseCase for CheckpointUseCase {
    type Request = String;
    type Response = Checkpoint;

    fn execute(&self, email: Self::Request) -> Outcome<Checkpoint, UseCaseError> {
        if email == "admin" {
            ok(Checkpoint { email_verified: true, disabled: false })
        } else {
            err(UseCaseError::InternalServerError)
        }
    }
}

fn login_controller(account: &str, password: &str) -> Outcome<LoginPayload, UseCaseError> {
    let login = LoginUseCase.execute((account.to_string(), password.to_string()));
    let checkpoint = CheckpointUseCase.execute(account.to_string());

    let (user, checkpoint) = match all((login, checkpoint)) {
        Outcome::Ok(success) => success.into_value(),
        Outcome::Err(failure) => return Outcome::Err(failure),
    };

    if checkpoint.disabled {
        return err(UseCaseError::UserDisabled);
    }

    ok(LoginPayload { user, should_verify_email: !checkpoint.email_verified })
}

fn main() {
    for (account, password) in [("admin", "admin"), ("admin", "wrong"), ("guest", "guest")] {
        let outcome = login_controller(account, password);

        if outcome.is_err() {
            println!("{account}: {}", outcome.error());
            continue;
        }

        let payload = outcome.into_value();
        println!(
            "{account}: logged in as {} <{}>, verify email: {}",
            payload.user.name, payload.user.email, payload.should_verify_email
        );
    }
}
