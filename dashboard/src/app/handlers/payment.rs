//! # Payment Handlers
//!
//! Direct sends. Issued tokens go through the currency gate first: sending a
//! token the wallet holds no trust line for is refused locally.

use shared::dto::{SendPaymentResponse, SendTokenRequest, SendXrpRequest};
use shared::{format_address, is_native_currency, normalize_currency};

use crate::app::controller::TradeController;
use crate::app::gate::requires_trustline;
use crate::app::state::StatusMessage;
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::utils::validation::{validate_amount, validate_currency_code, validate_destination};

/// Send `amount` of `currency` to `destination`, then refresh the wallet.
///
/// For tokens the issuer defaults to the wallet's trust line for the
/// currency, then to the registry entry.
pub(crate) async fn send(
    api: &dyn ApiService,
    controller: &TradeController,
    destination: &str,
    amount: &str,
    currency: &str,
    issuer: Option<&str>,
) -> Result<SendPaymentResponse> {
    let store = controller.store();
    validate_amount(amount, "Send").into_result()?;
    validate_destination(destination).into_result()?;
    validate_currency_code(currency, "Send").into_result()?;

    let destination = destination.trim().to_string();
    let amount = amount.trim().to_string();
    let currency = normalize_currency(currency);

    let (username, gated, line_issuer, registry_issuer) = store.read(|state| {
        let trustlines = state.trustlines();
        (
            state.username.clone(),
            requires_trustline(&currency, trustlines),
            trustlines
                .iter()
                .find(|line| normalize_currency(&line.currency) == currency)
                .map(|line| line.issuer.clone())
                .filter(|issuer| !issuer.is_empty()),
            state.registry_issuer(&currency).map(str::to_string),
        )
    });
    let username = username.ok_or_else(|| AppError::State("Not logged in".to_string()))?;

    let result = if is_native_currency(&currency) {
        api.send_xrp(SendXrpRequest {
            username,
            destination: destination.clone(),
            amount: amount.clone(),
        })
        .await
    } else {
        if gated {
            let err = AppError::Validation(format!("{} requires a trust line. Enable it first", currency));
            return Err(report(controller, err.user_message(), err));
        }
        let issuer = issuer
            .map(str::trim)
            .filter(|i| !i.is_empty())
            .map(str::to_string)
            .or(line_issuer)
            .or(registry_issuer)
            .ok_or_else(|| AppError::Validation(format!("Issuer is required for {} transfers", currency)))?;

        api.send_token(SendTokenRequest {
            username,
            destination: destination.clone(),
            currency: currency.clone(),
            issuer,
            amount: amount.clone(),
        })
        .await
    };

    let response = result.map_err(|e| report(controller, format!("Send failed: {}", e.message), e.into()))?;

    tracing::info!(currency = %currency, amount = %amount, tx_hash = ?response.tx_hash, "Payment sent");
    store.set_status_message(Some(StatusMessage::success(format!(
        "Sent {} {} to {}",
        amount,
        currency,
        format_address(&destination, 6, 4)
    ))));

    controller.refresh().await;
    Ok(response)
}

fn report(controller: &TradeController, text: String, err: AppError) -> AppError {
    controller.store().set_status_message(Some(StatusMessage::error(text)));
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::mock_api::MockApi;
    use crate::app::state::StatusLevel;
    use crate::app::store::StateStore;
    use crate::core::error::RequestError;
    use std::sync::Arc;
    use std::time::Duration;

    const BOB: &str = "rPEPPER7kfTD9w2To4CQk6UCfuHM9c6GDY";

    async fn setup() -> (Arc<MockApi>, TradeController) {
        let api = Arc::new(MockApi::new());
        api.set_trustlines(vec![MockApi::usd_line()]);
        let store = StateStore::new();
        store.login("alice");
        let controller = TradeController::new(api.clone(), store, Duration::from_secs(4));
        controller.refresh().await;
        (api, controller)
    }

    #[tokio::test]
    async fn test_send_xrp_refreshes_wallet() {
        let (api, controller) = setup().await;

        let response = send(api.as_ref(), &controller, BOB, " 25 ", "xrp", None)
            .await
            .expect("send succeeds");

        assert_eq!(response.tx_hash.as_deref(), Some("SEND"));
        let request = api.sent_xrp().pop().expect("xrp send requested");
        assert_eq!(request.destination, BOB);
        assert_eq!(request.amount, "25");
        assert_eq!(api.counts().send_token, 0);
        assert_eq!(api.counts().summary, 2);

        let status = controller.store().snapshot().status.expect("status set");
        assert_eq!(status.level, StatusLevel::Success);
        assert!(status.text.starts_with("Sent 25 XRP to rPEPPE"));
    }

    #[tokio::test]
    async fn test_token_issuer_comes_from_trust_line() {
        let (api, controller) = setup().await;

        send(api.as_ref(), &controller, BOB, "5", "usd", None)
            .await
            .expect("send succeeds");

        let request = api.sent_tokens().pop().expect("token send requested");
        assert_eq!(request.currency, "USD");
        assert_eq!(request.issuer, MockApi::USD_ISSUER);
        assert_eq!(api.counts().send_xrp, 0);
    }

    #[tokio::test]
    async fn test_gated_currency_refused_before_network() {
        let (api, controller) = setup().await;

        let err = send(api.as_ref(), &controller, BOB, "5", "EUR", Some(MockApi::USD_ISSUER))
            .await
            .expect_err("no EUR trust line");

        assert_eq!(err.user_message(), "EUR requires a trust line. Enable it first");
        assert_eq!(api.counts().send_token, 0);
        assert_eq!(api.counts().summary, 1);
    }

    #[tokio::test]
    async fn test_invalid_input_makes_no_request() {
        let (api, controller) = setup().await;

        let err = send(api.as_ref(), &controller, "bob", "5", "XRP", None)
            .await
            .expect_err("bad destination");
        assert!(matches!(err, AppError::Validation(_)));

        let err = send(api.as_ref(), &controller, BOB, "0", "XRP", None)
            .await
            .expect_err("zero amount");
        assert_eq!(err.user_message(), "Send amount must be greater than 0");

        assert_eq!(api.counts().send_xrp, 0);
    }

    #[tokio::test]
    async fn test_backend_failure_sets_error_status_without_refresh() {
        let (api, controller) = setup().await;
        api.script_send(Err(RequestError::new(
            "Security Alert: The destination account has been flagged for suspicious activity. Transaction blocked.",
        )
        .with_status(403)));

        let err = send(api.as_ref(), &controller, BOB, "1", "XRP", None)
            .await
            .expect_err("blocked");

        assert!(matches!(err, AppError::Api(_)));
        let status = controller.store().snapshot().status.expect("status set");
        assert_eq!(status.level, StatusLevel::Error);
        assert!(status.text.starts_with("Send failed: Security Alert"));
        assert_eq!(api.counts().summary, 1);
    }

    #[tokio::test]
    async fn test_send_requires_login() {
        let api = Arc::new(MockApi::new());
        let controller = TradeController::new(api.clone(), StateStore::new(), Duration::from_secs(4));

        let err = send(api.as_ref(), &controller, BOB, "1", "XRP", None)
            .await
            .expect_err("logged out");
        assert!(matches!(err, AppError::State(_)));
        assert_eq!(api.counts().send_xrp, 0);
    }
}
