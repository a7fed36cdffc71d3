//! HTTP implementation of the commerce transaction boundary.
//!
//! One gateway instance serves every surface. Each trait method is a single
//! fire-and-forget round trip to the backend route group for the content
//! type; there is no retry layer, matching the rest of the buyer-facing
//! flow where the user re-triggers failed actions by hand.

use crate::{FetchClient, FetchError};
use async_trait::async_trait;
use folio_commerce::content::ContentKind;
use folio_commerce::ids::{ContentId, UserId};
use folio_commerce::txn::{
    LicencePurchase, LicenceReceipt, PromoValidation, PromoVerdict, PurchaseOrder, SponsorJoin,
    TransactionError, TransactionExecutor,
};

impl From<FetchError> for TransactionError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::HttpError { status, .. } => TransactionError::Rejected(status),
            FetchError::ParseError(message) | FetchError::JsonError(message) => {
                TransactionError::Malformed(message)
            }
            FetchError::RequestError(message) => TransactionError::Network(message),
        }
    }
}

/// The backend commerce endpoints, spoken over HTTP.
pub struct MarketGateway {
    client: FetchClient,
}

impl MarketGateway {
    /// Create a gateway against the backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: FetchClient::new().with_base_url(base_url),
        }
    }

    /// Create a gateway over a preconfigured client (custom headers, auth).
    pub fn with_client(client: FetchClient) -> Self {
        Self { client }
    }

    const PROMO_VALIDATION_PATH: &'static str = "/users/codePromoValidation";

    fn licence_path(kind: ContentKind, content_id: &ContentId, user_id: &UserId) -> String {
        format!(
            "/{}/licence/acheter/{}/{}",
            kind.route_domain(),
            content_id,
            user_id
        )
    }

    fn investor_path(kind: ContentKind) -> String {
        format!("/{}/add-investor", kind.route_domain())
    }

    fn purchase_path(kind: ContentKind) -> String {
        format!("/{}/createAchat", kind.route_domain())
    }
}

#[async_trait]
impl TransactionExecutor for MarketGateway {
    async fn purchase_licence(
        &self,
        kind: ContentKind,
        order: &LicencePurchase,
    ) -> Result<LicenceReceipt, TransactionError> {
        let response = self
            .client
            .put(Self::licence_path(kind, &order.content_id, &order.user_id))
            .json(order)?
            .send()
            .await?;
        if !response.is_success() {
            return Err(TransactionError::Rejected(response.status));
        }
        Ok(response.json()?)
    }

    async fn add_investor(
        &self,
        kind: ContentKind,
        join: &SponsorJoin,
    ) -> Result<(), TransactionError> {
        let response = self
            .client
            .post(Self::investor_path(kind))
            .json(join)?
            .send()
            .await?;
        if !response.is_success() {
            return Err(TransactionError::Rejected(response.status));
        }
        Ok(())
    }

    async fn validate_promo_code(
        &self,
        request: &PromoValidation,
    ) -> Result<PromoVerdict, TransactionError> {
        let response = self
            .client
            .post(Self::PROMO_VALIDATION_PATH)
            .json(request)?
            .send()
            .await?;
        if response.is_success() {
            return Ok(response.json()?);
        }
        // Rejected codes can come back with an error status and a verdict
        // body; surface the verdict when one is readable.
        response
            .json()
            .map_err(|_| TransactionError::Rejected(response.status))
    }

    async fn create_purchase(
        &self,
        kind: ContentKind,
        order: &PurchaseOrder,
    ) -> Result<(), TransactionError> {
        let response = self
            .client
            .post(Self::purchase_path(kind))
            .json(order)?
            .send()
            .await?;
        if !response.is_success() {
            return Err(TransactionError::Rejected(response.status));
        }
        Ok(())
    }
}
