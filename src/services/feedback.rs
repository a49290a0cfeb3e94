use crate::error::AppError;

/// What a screen was loading when a request failed; picks the message shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTarget {
    Results,
    Favorites,
    Detail,
}

impl FetchTarget {
    pub fn message(&self, err: &AppError) -> String {
        match (self, err) {
            (FetchTarget::Detail, AppError::Connectivity(_)) => "No Internet connection".to_string(),
            (FetchTarget::Results, AppError::Connectivity(_)) => "Failed to fetch results".to_string(),
            (FetchTarget::Favorites, AppError::Connectivity(_)) => {
                "Failed to fetch favorites".to_string()
            }
            (_, AppError::Timeout) => "Connection timed out".to_string(),
            (FetchTarget::Detail, other) => format!("Error: {}", other),
            (_, AppError::BadRequest(_)) => "Bad request".to_string(),
            (_, other) => format!("An error occurred: {}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_screens_name_what_failed() {
        let err = AppError::Connectivity("dns".to_string());
        assert_eq!(FetchTarget::Results.message(&err), "Failed to fetch results");
        assert_eq!(FetchTarget::Favorites.message(&err), "Failed to fetch favorites");
        assert_eq!(FetchTarget::Detail.message(&err), "No Internet connection");
    }

    #[test]
    fn fixed_messages() {
        assert_eq!(FetchTarget::Results.message(&AppError::Timeout), "Connection timed out");
        assert_eq!(FetchTarget::Detail.message(&AppError::Timeout), "Connection timed out");
        assert_eq!(
            FetchTarget::Favorites.message(&AppError::BadRequest("x".to_string())),
            "Bad request"
        );
        assert_eq!(
            FetchTarget::Results.message(&AppError::Remote("boom".to_string())),
            "An error occurred: boom"
        );
        assert_eq!(
            FetchTarget::Detail.message(&AppError::Remote("boom".to_string())),
            "Error: boom"
        );
    }
}
