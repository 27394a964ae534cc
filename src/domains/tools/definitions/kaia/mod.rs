//! Upstream proxy tools.
//!
//! Each tool performs one GET against a configured provider and returns the
//! provider's JSON unchanged:
//! - `price_token`: token-info provider, needs `SIM_DUNE_API_KEY` and `KAIA_CHAIN_ID`
//! - `chain_status`, `total_supply`, `transaction_info`, `accounts_count`,
//!   `council_members`, `staking_info`: chain-status provider, no credentials

pub mod accounts_count;
pub mod chain_status;
pub mod common;
pub mod council_members;
pub mod price_token;
pub mod staking_info;
pub mod total_supply;
pub mod transaction_info;

pub use accounts_count::{AccountsCountParams, AccountsCountTool};
pub use chain_status::ChainStatusTool;
pub use council_members::CouncilMembersTool;
pub use price_token::{PriceTokenParams, PriceTokenTool};
pub use staking_info::{StakingInfoParams, StakingInfoTool};
pub use total_supply::{TotalSupplyParams, TotalSupplyTool};
pub use transaction_info::{TransactionInfoParams, TransactionInfoTool};
