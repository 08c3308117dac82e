// Test modules for reqres-api-suite crate
//
// Test organization follows the template pattern where each source file
// has a corresponding test file that focuses on behaviour verification.

// Sample response bodies shared by the unit tests
pub mod helpers;


// NOTE: Scenario tests need an HTTP server and live in tests/ (wiremock)
