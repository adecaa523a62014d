//! The trade record wire format.
//!
//! Field names follow the upstream Comtrade-style JSON: fixtures
//! and responses both use these exact names. Rows are immutable
//! once produced — injectors copy or synthesize new Row values,
//! never mutate existing ones in place.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Row {
    pub year: i32,
    pub reporter: String,
    pub partner: String,
    pub flow: String,
    pub hs: String,
    #[serde(rename = "cmdCode")]
    pub cmd_code: String,
    #[serde(rename = "tradeValue")]
    pub trade_value: i64,
    #[serde(rename = "netWeight")]
    pub net_weight: i64,
    pub qty: i64,
    pub record_id: String,
    /// Marks a synthetic aggregate row. A correct client discards
    /// marked rows instead of merging them as data.
    #[serde(rename = "isTotal", skip_serializing_if = "is_false")]
    pub is_total: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}
