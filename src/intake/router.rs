// file: src/intake/router.rs
// description: category-based dispatch to fixed-response handlers
// reference: internal intake workflow stage

pub const PASSWORD_RESET_RESOLUTION: &str = "Password reset request has been processed. \
A reset link has been sent to your registered email address.";

pub const VDI_INCREASE_RESOLUTION: &str = "VDI resource increase request has been processed. \
Your VDI resources will be updated shortly.";

pub const GENERAL_SUPPORT_RESOLUTION: &str = "Your request has been forwarded to our general \
IT support team. They will get back to you shortly.";

/// Dispatch a classified request to its handler.
///
/// Matching is an exact, case-insensitive comparison against the two known
/// categories; everything else falls through to general support.
pub fn route(category: &str) -> &'static str {
    match category.trim().to_lowercase().as_str() {
        "password reset" => PASSWORD_RESET_RESOLUTION,
        "vdi resource increase" => VDI_INCREASE_RESOLUTION,
        _ => GENERAL_SUPPORT_RESOLUTION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories_dispatch() {
        assert_eq!(route("Password Reset"), PASSWORD_RESET_RESOLUTION);
        assert_eq!(route("password reset"), PASSWORD_RESET_RESOLUTION);
        assert_eq!(route("VDI Resource Increase"), VDI_INCREASE_RESOLUTION);
    }

    #[test]
    fn test_unknown_category_falls_through() {
        assert_eq!(route("Other IT Support"), GENERAL_SUPPORT_RESOLUTION);
        assert_eq!(route("Printer Issue"), GENERAL_SUPPORT_RESOLUTION);
        assert_eq!(route(""), GENERAL_SUPPORT_RESOLUTION);
    }

    #[test]
    fn test_partial_match_is_not_enough() {
        assert_eq!(route("password reset urgently"), GENERAL_SUPPORT_RESOLUTION);
    }
}
