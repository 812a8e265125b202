//! Service-specific tests


// Common test utilities for services
pub mod common {
    use std::time::Duration;
    use tokio::time::timeout;

    use shared::InputProfile;

    /// Standard timeout for async operations in tests
    pub const TEST_TIMEOUT: Duration = Duration::from_millis(500);

    /// Helper to run async operations with timeout
    pub async fn with_timeout<T, F>(future: F) -> Result<T, tokio::time::error::Elapsed>
    where
        F: std::future::Future<Output = T>,
    {
        timeout(TEST_TIMEOUT, future).await
    }

    pub fn test_profile(country: &str, region: &str) -> InputProfile {
        let mut profile = InputProfile::new(country, region);
        profile.identity.name = "Harbor Logistics Cooperative".to_string();
        profile.identity.organization_type = "Cooperative".to_string();
        profile.identity.industries = vec!["Logistics".to_string(), "Agribusiness".to_string()];
        profile.mandate.problem_statement = "Cold-chain capacity is the binding constraint on exports".to_string();
        profile
    }
}
