//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod common;
pub mod kaia;
pub mod math;

use super::registry::ToolDescriptor;

pub use kaia::{
    AccountsCountTool, ChainStatusTool, CouncilMembersTool, PriceTokenTool, StakingInfoTool,
    TotalSupplyTool, TransactionInfoTool,
};
pub use math::{AddTool, CalculateTool, MultiplyTool};

/// The full catalog, in the order it is advertised to callers.
pub fn all() -> Vec<ToolDescriptor> {
    vec![
        PriceTokenTool::descriptor(),
        ChainStatusTool::descriptor(),
        TotalSupplyTool::descriptor(),
        TransactionInfoTool::descriptor(),
        AccountsCountTool::descriptor(),
        CouncilMembersTool::descriptor(),
        StakingInfoTool::descriptor(),
        AddTool::descriptor(),
        MultiplyTool::descriptor(),
        CalculateTool::descriptor(),
    ]
}
