//! Account rules applied at registration.

/// Minimum display-name length.
pub const NAME_MIN_LEN: usize = 3;

/// Minimum length of a user-chosen username.
pub const USERNAME_MIN_LEN: usize = 5;

/// Maximum username length.
pub const USERNAME_MAX_LEN: usize = 32;

/// Minimum password length.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Length of a generated username.
pub const GENERATED_USERNAME_LEN: usize = 10;

/// Alphabet for generated usernames; every char passes [`is_valid_username`].
pub const USERNAME_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

const PASSWORD_SPECIALS: &str = "!@#$%^&*";

pub fn is_valid_name(name: &str) -> bool {
    name.trim().chars().count() >= NAME_MIN_LEN
}

/// Usernames are URL-safe: ASCII letters, digits, `-` and `_`.
pub fn is_valid_username(username: &str) -> bool {
    (USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&username.len())
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Structural check only: one `@`, non-empty local part, dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}

/// Describe every rule `password` breaks. Empty when acceptable.
pub fn password_problems(password: &str) -> Vec<&'static str> {
    let mut problems = Vec::new();
    if password.chars().count() < PASSWORD_MIN_LEN {
        problems.push("password must be at least 8 characters");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        problems.push("password must contain a lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        problems.push("password must contain an uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        problems.push("password must contain a digit");
    }
    if !password.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
        problems.push("password must contain one of !@#$%^&*");
    }
    problems
}
