use leptos::prelude::*;
use shared::dto::{Transaction, TransactionStatus};
use shared::utils::short_reference;

use crate::components::{loaded, StatusPill};
use crate::services::api::{transactions, use_api_client};
use crate::utils::display::transaction_tone;
use crate::utils::format::{format_date, format_money};

/// Net of completed entries, from the account holder's point of view.
pub fn completed_balance(entries: &[Transaction]) -> f64 {
    entries
        .iter()
        .filter(|t| t.status == TransactionStatus::Completed)
        .map(Transaction::signed_amount)
        .sum()
}

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let client = use_api_client();

    let ledger = LocalResource::new(move || {
        let client = client.clone();
        async move { transactions::list_transactions(&client).await }
    });

    view! {
        <section class="page transactions-page">
            <h1>"Transactions"</h1>
            {move || {
                loaded(
                    ledger.get(),
                    |mut entries| {
                        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                        let currency = entries.first().map(|t| t.currency.clone()).unwrap_or_else(|| "KES".to_string());
                        let balance = completed_balance(&entries);
                        view! {
                            <div class="card stat">
                                <span class="stat-value">{format_money(balance, &currency)}</span>
                                <span class="stat-label">"Net of completed transactions"</span>
                            </div>
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Reference"</th>
                                        <th>"Description"</th>
                                        <th>"Date"</th>
                                        <th>"Amount"</th>
                                        <th>"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {entries
                                        .into_iter()
                                        .map(|t| {
                                            let reference = t.reference.clone().unwrap_or_else(|| t.id.to_string());
                                            let amount = t.signed_amount();
                                            let class = if amount < 0.0 { "amount debit" } else { "amount credit" };
                                            view! {
                                                <tr>
                                                    <td class="mono">{short_reference(&reference, 6, 4)}</td>
                                                    <td>{t.description.clone().unwrap_or_default()}</td>
                                                    <td>{t.created_at.as_deref().map(format_date).unwrap_or_default()}</td>
                                                    <td class=class>{format_money(amount, &t.currency)}</td>
                                                    <td><StatusPill tone=transaction_tone(t.status) label=t.status.label()/></td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    },
                )
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::{Id, TransactionKind};

    fn entry(amount: f64, kind: TransactionKind, status: TransactionStatus) -> Transaction {
        Transaction {
            id: Id::from(1),
            reference: None,
            amount,
            currency: "KES".to_string(),
            kind,
            status,
            description: None,
            order_id: None,
            created_at: None,
        }
    }

    #[test]
    fn test_balance_counts_completed_only() {
        let entries = vec![
            entry(1500.0, TransactionKind::Payment, TransactionStatus::Completed),
            entry(200.0, TransactionKind::Refund, TransactionStatus::Completed),
            entry(900.0, TransactionKind::Payment, TransactionStatus::Pending),
            entry(50.0, TransactionKind::Payout, TransactionStatus::Failed),
        ];
        assert_eq!(completed_balance(&entries), -1300.0);
    }
}
