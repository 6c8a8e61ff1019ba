//! Domain transaction façade
//!
//! Translates marketplace actions into generic wallet transactions against
//! the marketplace contract address. Stateless apart from the injected
//! client; every method normalizes wallet errors into a
//! [`TransactionResult`] and never returns `Err` itself.

use crate::error::WalletError;
use crate::wallet::{TransactionParams, TransactionResult, WalletClient};
use serde::Serialize;

/// Serialized call data attached to each marketplace transaction.
///
/// The real contract call sequence (resale escrow, check-in validation) is
/// an external-system concern; these payloads are the explicit stub for it.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum TicketAction {
    #[serde(rename_all = "camelCase")]
    BuyTicket {
        event_id: String,
        tier_id: String,
        quantity: u32,
    },
    #[serde(rename_all = "camelCase")]
    ResellTicket { ticket_id: String, price: u64 },
    #[serde(rename_all = "camelCase")]
    TransferTicket { ticket_id: String, to: String },
}

/// Stateless façade over [`WalletClient`] for marketplace actions.
#[derive(Clone)]
pub struct TransactionService {
    client: WalletClient,
    marketplace_address: String,
}

impl TransactionService {
    pub fn new(client: WalletClient) -> Self {
        let marketplace_address = client.marketplace_address().to_string();
        Self {
            client,
            marketplace_address,
        }
    }

    /// Purchase `quantity` tickets of a tier, spending `price * quantity`.
    pub async fn buy_ticket(
        &self,
        event_id: &str,
        tier_id: &str,
        price: u64,
        quantity: u32,
    ) -> TransactionResult {
        let amount = match price.checked_mul(u64::from(quantity)) {
            Some(amount) => amount,
            None => {
                return WalletError::InvalidInput(format!(
                    "total price overflows: {} x {}",
                    price, quantity
                ))
                .into()
            }
        };
        let action = TicketAction::BuyTicket {
            event_id: event_id.to_string(),
            tier_id: tier_id.to_string(),
            quantity,
        };
        self.submit(amount, &action).await
    }

    /// List a ticket for resale. No funds move at listing time.
    pub async fn resell_ticket(&self, ticket_id: &str, price: u64) -> TransactionResult {
        let action = TicketAction::ResellTicket {
            ticket_id: ticket_id.to_string(),
            price,
        };
        self.submit(0, &action).await
    }

    /// Transfer a ticket to another address. No funds move.
    pub async fn transfer_ticket(&self, ticket_id: &str, to: &str) -> TransactionResult {
        let action = TicketAction::TransferTicket {
            ticket_id: ticket_id.to_string(),
            to: to.to_string(),
        };
        self.submit(0, &action).await
    }

    async fn submit(&self, amount: u64, action: &TicketAction) -> TransactionResult {
        let data = match serde_json::to_string(action) {
            Ok(data) => data,
            Err(e) => return WalletError::from(e).into(),
        };

        let params = TransactionParams::new(&self.marketplace_address, amount).with_data(data);
        match self.client.send_transaction(&params).await {
            Ok(tx_hash) => TransactionResult::confirmed(tx_hash),
            Err(e) => {
                log::debug!("Marketplace transaction rejected: {}", e);
                e.into()
            }
        }
    }
}
