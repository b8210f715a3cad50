//! # Trust Line Handlers
//!
//! Enabling a gated currency: issuer check, trust line creation, refresh.

use shared::dto::{CheckIssuerRequest, CreateTrustlineRequest, IssuerCheck, IssuerRisk};
use shared::{is_native_currency, normalize_currency};

use crate::app::controller::TradeController;
use crate::app::gate::requires_trustline;
use crate::app::state::StatusMessage;
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::utils::validation::validate_currency_code;

pub const DEFAULT_TRUST_LIMIT: &str = "1000000";

/// Check the issuer and open a trust line for `currency`.
///
/// The issuer defaults to the registry entry for the currency. High-risk,
/// invalid and blacklisted issuers are refused before anything is created.
pub(crate) async fn enable_currency(
    api: &dyn ApiService,
    controller: &TradeController,
    currency: &str,
    issuer: Option<&str>,
    limit: Option<&str>,
) -> Result<IssuerCheck> {
    let store = controller.store();
    validate_currency_code(currency, "Trust line").into_result()?;
    let currency = normalize_currency(currency);
    if is_native_currency(&currency) {
        return Err(AppError::Validation("XRP does not use trust lines".to_string()));
    }

    let (username, already_enabled, registry_issuer) = store.read(|state| {
        (
            state.username.clone(),
            !requires_trustline(&currency, state.trustlines()),
            state.registry_issuer(&currency).map(str::to_string),
        )
    });
    let username = username.ok_or_else(|| AppError::State("Not logged in".to_string()))?;
    if already_enabled {
        return Err(AppError::State(format!("{} is already enabled", currency)));
    }

    let issuer = issuer
        .map(str::trim)
        .filter(|i| !i.is_empty())
        .map(str::to_string)
        .or(registry_issuer);

    let check = api
        .check_issuer(CheckIssuerRequest {
            username: username.clone(),
            currency: currency.clone(),
            issuer: issuer.clone(),
        })
        .await
        .map_err(|e| report(controller, format!("Issuer check failed: {}", e.message), e.into()))?;

    let refusal = if check.blacklisted {
        Some("Issuer is blacklisted")
    } else if !check.valid {
        Some("Issuer is not a valid account")
    } else if check.risk == IssuerRisk::High {
        Some("Issuer risk is high")
    } else {
        None
    };
    if let Some(reason) = refusal {
        tracing::warn!(currency = %currency, ?check, "Trust line refused");
        let err = AppError::State(format!("{}; {} not enabled", reason, currency));
        return Err(report(controller, err.user_message(), err));
    }

    let created = api
        .create_trustline(CreateTrustlineRequest {
            username,
            currency: currency.clone(),
            issuer,
            limit: limit.unwrap_or(DEFAULT_TRUST_LIMIT).trim().to_string(),
        })
        .await
        .map_err(|e| report(controller, format!("Trust line failed: {}", e.message), e.into()))?;

    let message = match created.warning {
        Some(warning) => StatusMessage::warning(format!("{} enabled ({})", currency, warning)),
        None => StatusMessage::success(format!("{} enabled", currency)),
    };
    store.set_status_message(Some(message));
    tracing::info!(currency = %currency, risk = ?check.risk, "Trust line created");

    controller.refresh().await;
    Ok(check)
}

fn report(controller: &TradeController, text: String, err: AppError) -> AppError {
    controller.store().set_status_message(Some(StatusMessage::error(text)));
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::mock_api::MockApi;
    use crate::app::store::StateStore;
    use std::sync::Arc;
    use std::time::Duration;

    async fn setup() -> (Arc<MockApi>, TradeController) {
        let api = Arc::new(MockApi::new());
        let store = StateStore::new();
        store.login("alice");
        let controller = TradeController::new(api.clone(), store, Duration::from_secs(4));
        controller.refresh().await;
        (api, controller)
    }

    #[tokio::test]
    async fn test_enable_uses_registry_issuer_and_refreshes() {
        let (api, controller) = setup().await;

        enable_currency(api.as_ref(), &controller, "usd", None, None)
            .await
            .expect("enable succeeds");

        let request = api.created_trustlines().pop().expect("trust line requested");
        assert_eq!(request.currency, "USD");
        assert_eq!(request.issuer.as_deref(), Some(MockApi::USD_ISSUER));
        assert_eq!(request.limit, DEFAULT_TRUST_LIMIT);
        assert_eq!(api.counts().summary, 2);
        assert!(!requires_trustline("USD", controller.store().snapshot().trustlines()));
    }

    #[tokio::test]
    async fn test_native_currency_rejected_locally() {
        let (api, controller) = setup().await;
        let err = enable_currency(api.as_ref(), &controller, "XRP", None, None)
            .await
            .expect_err("XRP has no trust lines");
        assert_eq!(err.user_message(), "XRP does not use trust lines");
        assert_eq!(api.counts().check_issuer, 0);
    }

    #[tokio::test]
    async fn test_high_risk_issuer_refused() {
        let (api, controller) = setup().await;
        api.script_issuer(Ok(IssuerCheck {
            valid: true,
            blacklisted: false,
            age_months: 1,
            issues_currency: false,
            risk: IssuerRisk::High,
        }));

        let err = enable_currency(api.as_ref(), &controller, "EUR", Some("rSomeIssuer"), None)
            .await
            .expect_err("high risk");

        assert_eq!(err.user_message(), "Issuer risk is high; EUR not enabled");
        assert_eq!(api.counts().create_trustline, 0);
    }

    #[tokio::test]
    async fn test_existing_line_is_not_recreated() {
        let (api, controller) = setup().await;
        api.set_trustlines(vec![MockApi::usd_line()]);
        controller.refresh().await;

        let err = enable_currency(api.as_ref(), &controller, "USD", None, None)
            .await
            .expect_err("already enabled");
        assert!(matches!(err, AppError::State(_)));
        assert_eq!(api.counts().check_issuer, 0);
    }
}
