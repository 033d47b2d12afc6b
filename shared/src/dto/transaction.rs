//! # Transaction DTOs
//!
//! Read-only ledger entries. Payments are settled by the backend; the client
//! only lists them.

use serde::{Deserialize, Serialize};

use super::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum TransactionKind {
    Payment,
    Payout,
    Refund,
    Unknown,
}

impl From<String> for TransactionKind {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "payment" | "debit" | "purchase" => TransactionKind::Payment,
            "payout" | "credit" | "sale" => TransactionKind::Payout,
            "refund" | "reversal" => TransactionKind::Refund,
            _ => TransactionKind::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Unknown,
}

impl From<String> for TransactionStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" | "processing" => TransactionStatus::Pending,
            "completed" | "success" | "successful" | "paid" => TransactionStatus::Completed,
            "failed" | "error" | "declined" => TransactionStatus::Failed,
            _ => TransactionStatus::Unknown,
        }
    }
}

impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Failed => "Failed",
            TransactionStatus::Unknown => "Unknown",
        }
    }
}

/// Ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Id,
    #[serde(default)]
    pub reference: Option<String>,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub kind: TransactionKind,
    pub status: TransactionStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub order_id: Option<Id>,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_currency() -> String {
    "KES".to_string()
}

impl Transaction {
    /// Signed amount from the account holder's point of view.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Payment => -self.amount.abs(),
            TransactionKind::Payout | TransactionKind::Refund => self.amount.abs(),
            TransactionKind::Unknown => self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_defaults_and_sign() {
        let tx: Transaction = serde_json::from_str(
            r#"{"id": "tx-1", "amount": 2500, "kind": "purchase", "status": "success"}"#,
        )
        .unwrap();
        assert_eq!(tx.currency, "KES");
        assert_eq!(tx.kind, TransactionKind::Payment);
        assert_eq!(tx.status, TransactionStatus::Completed);
        assert_eq!(tx.signed_amount(), -2500.0);
    }
}
