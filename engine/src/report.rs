//! Derived dashboard and report figures
//!
//! Read-only aggregates over committed history. Nothing here mutates
//! state, and everything is recomputed on demand from the records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use shared::models::Sale;

use crate::store::PosStore;

/// Headline figures for the report screen
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_revenue: Decimal,
    pub total_costs: Decimal,
    pub total_transactions: usize,
    pub avg_ticket: Decimal,
    pub net_profit: Decimal,
    /// Percent of revenue kept as profit; zero when there is no revenue
    pub profit_margin: Decimal,
}

/// Kind of entry in the activity feed
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Sale,
    Purchase,
}

/// One row in the recent activity feed
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub timestamp: DateTime<Utc>,
    pub description: String,
    pub amount: Decimal,
}

impl PosStore {
    /// Totals across all committed history
    pub fn summary(&self) -> Summary {
        let total_revenue: Decimal = self.sales.iter().map(|s| s.total).sum();
        let total_costs: Decimal = self.purchases.iter().map(|p| p.total).sum();
        let total_transactions = self.sales.len();
        let avg_ticket = if total_transactions == 0 {
            Decimal::ZERO
        } else {
            total_revenue / Decimal::from(total_transactions as u64)
        };
        let net_profit = total_revenue - total_costs;
        let profit_margin = if total_revenue == Decimal::ZERO {
            Decimal::ZERO
        } else {
            net_profit / total_revenue * Decimal::from(100)
        };

        Summary {
            total_revenue,
            total_costs,
            total_transactions,
            avg_ticket,
            net_profit,
            profit_margin,
        }
    }

    /// Merged sale/purchase feed, newest first
    pub fn recent_activity(&self, limit: usize) -> Vec<ActivityEntry> {
        let mut entries: Vec<ActivityEntry> = self
            .sales
            .iter()
            .map(|sale| ActivityEntry {
                kind: ActivityKind::Sale,
                timestamp: sale.timestamp,
                description: format!("Sale #{}", sale.id),
                amount: sale.total,
            })
            .chain(self.purchases.iter().map(|purchase| ActivityEntry {
                kind: ActivityKind::Purchase,
                timestamp: purchase.timestamp,
                description: format!(
                    "{} x{} from {}",
                    purchase.product, purchase.quantity, purchase.supplier
                ),
                amount: purchase.total,
            }))
            .collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries.truncate(limit);
        entries
    }

    /// The last `limit` sales, newest first
    pub fn recent_sales(&self, limit: usize) -> Vec<&Sale> {
        self.sales.iter().rev().take(limit).collect()
    }
}
