use crate::app_context;
use crate::cli::tests::fake_args;
use crate::http::router;
use crate::imagery::tests::{StubImagery, UnavailableImagery};
use axum_test::TestServer;

pub fn test_server() -> TestServer {
    let args = fake_args();
    let app_context = app_context::init(StubImagery);
    let router = router::new(&args, app_context);
    TestServer::new(router).expect("Failed to run test server.")
}

/// Test server whose imagery provider reports no coverage anywhere, so
/// quest sampling always exhausts its retry budget.
pub fn test_server_without_imagery() -> TestServer {
    let args = fake_args();
    let app_context = app_context::init(UnavailableImagery);
    let router = router::new(&args, app_context);
    TestServer::new(router).expect("Failed to run test server.")
}
