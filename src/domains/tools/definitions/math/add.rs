//! Addition tool.

use std::sync::Arc;

use serde::Deserialize;

use crate::domains::tools::context::ExecutionContext;
use crate::domains::tools::definitions::common::format_number;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolHandler, ToolOutput};
use crate::domains::tools::registry::ToolDescriptor;
use crate::domains::tools::schema::{Arguments, FieldSpec, Schema};

/// Parameters for the addition tool.
#[derive(Debug, Clone, Deserialize)]
pub struct AddParams {
    pub a: f64,
    pub b: f64,
}

#[derive(Debug, Clone, Default)]
pub struct AddTool;

impl AddTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "";

    pub fn schema() -> Schema {
        Schema::new()
            .field(FieldSpec::number("a"))
            .field(FieldSpec::number("b"))
    }

    /// Execute the tool logic.
    pub fn execute(params: &AddParams) -> String {
        format_number(params.a + params.b)
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(
            Self::NAME,
            Self::DESCRIPTION,
            Some(Self::schema()),
            Arc::new(Self),
        )
    }
}

#[async_trait::async_trait]
impl ToolHandler for AddTool {
    async fn call(&self, args: Arguments, _ctx: &ExecutionContext) -> Result<ToolOutput, ToolError> {
        let params: AddParams = args.parse()?;
        Ok(ToolOutput::Text(Self::execute(&params)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(AddTool::execute(&AddParams { a: 2.0, b: 3.0 }), "5");
        assert_eq!(AddTool::execute(&AddParams { a: 0.5, b: 0.25 }), "0.75");
        assert_eq!(AddTool::execute(&AddParams { a: -2.0, b: 2.0 }), "0");
    }
}
