//! Operator credential check.
//!
//! A single compiled-in credential pair, compared in constant time to avoid
//! leaking prefix length through timing. This is a placeholder gate for a
//! single-operator admin panel, not a security boundary.

use subtle::ConstantTimeEq;

/// The one operator account.
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

/// Check a supplied credential pair against the compiled-in account.
pub fn verify_credentials(username: &str, password: &str) -> bool {
    // Evaluate both halves so a wrong username costs the same as a wrong password
    let user_ok = constant_time_compare(username, ADMIN_USERNAME);
    let pass_ok = constant_time_compare(password, ADMIN_PASSWORD);
    user_ok & pass_ok
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    // Constant-time comparison
    a_bytes.ct_eq(b_bytes).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_compare_equal() {
        assert!(constant_time_compare("admin123", "admin123"));
    }

    #[test]
    fn test_constant_time_compare_not_equal() {
        assert!(!constant_time_compare("admin123", "admin124"));
    }

    #[test]
    fn test_constant_time_compare_different_lengths() {
        assert!(!constant_time_compare("short", "much-longer-password"));
    }

    #[test]
    fn test_verify_credentials() {
        assert!(verify_credentials("admin", "admin123"));
        assert!(!verify_credentials("admin", "wrong"));
        assert!(!verify_credentials("root", "admin123"));
        assert!(!verify_credentials("", ""));
    }
}
