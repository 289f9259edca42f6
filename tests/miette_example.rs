//! Example test showing how to use the miette integration
use miette::{Diagnostic, IntoDiagnostic, Result};

use paypal_invoicing::error::Error;

#[tokio::test]
async fn miette_integration_example() -> Result<()> {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    // Our Error type is already Diagnostic-compatible
    let result: paypal_invoicing::Result<()> = Err(Error::Validation { argument: "id" });
    if let Err(e) = result {
        println!("Error with diagnostic info: {e:#?}");
        assert_eq!(
            e.code().map(|code| code.to_string()).as_deref(),
            Some("paypal_invoicing::validation")
        );
        assert!(e.help().is_some());
    }

    // Crossing into miette::Result still goes through into_diagnostic()
    if let Err(report) = create_context().await.into_diagnostic() {
        println!("Context error with diagnostic info: {report:?}");
    }

    Ok(())
}

async fn create_context() -> paypal_invoicing::Result<paypal_invoicing::ApiContext> {
    Err(Error::InvalidEndpoint)
}
