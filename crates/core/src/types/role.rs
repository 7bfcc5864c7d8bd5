//! User role classification.

use serde::{Deserialize, Serialize};

/// Role of a user account.
///
/// Vendors list products; customers follow, like, and buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Customer,
    Vendor,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_form_is_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Customer).unwrap(), "\"customer\"");
        assert_eq!(serde_json::to_string(&UserRole::Vendor).unwrap(), "\"vendor\"");

        let role: UserRole = serde_json::from_str("\"vendor\"").unwrap();
        assert_eq!(role, UserRole::Vendor);
    }
}
