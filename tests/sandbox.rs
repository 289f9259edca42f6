//! Runs against the PayPal sandbox when `PAYPAL_CLIENT_ID` and
//! `PAYPAL_CLIENT_SECRET` are set, and is skipped otherwise.
#[macro_use]
extern crate tracing;


use miette::{IntoDiagnostic, Result};
use rust_decimal_macros::dec;

use paypal_invoicing::{
    BillingInfo, Currency, GetAllParameters, Invoice, InvoiceItem, MerchantInfo, PaymentTerm,
    Status, TermType,
};

use test_utils::{create_sandbox_context, do_setup};

#[tokio::test]
async fn draft_invoice_lifecycle() -> Result<()> {
    do_setup();
    let Some(mut context) = create_sandbox_context().await? else {
        return Ok(());
    };

    let merchant_email =
        std::env::var("PAYPAL_MERCHANT_EMAIL").unwrap_or_else(|_| "merchant@example.com".into());
    let invoice = Invoice::new(
        MerchantInfo::new(merchant_email),
        BillingInfo::new("payer@example.com"),
    )
    .with_item(InvoiceItem::new(
        "Sutures",
        dec!(100),
        Currency::new("USD", dec!(5)),
    ))
    .with_payment_term(PaymentTerm::term(TermType::Net45));

    let created = invoice.create(&context).await.into_diagnostic()?;
    let id = created.id.clone().unwrap_or_default();
    info!(%id, "created invoice");
    assert_eq!(created.status, Some(Status::Draft));

    let fetched = Invoice::get(&context, &id).await.into_diagnostic()?;
    assert_eq!(fetched.id, created.id);

    let page = Invoice::get_all(&context, GetAllParameters::default())
        .await
        .into_diagnostic()?;
    debug!("found {:?} invoices", page.invoices.len());

    Invoice::delete(&mut context, &id).await.into_diagnostic()?;
    Ok(())
}
