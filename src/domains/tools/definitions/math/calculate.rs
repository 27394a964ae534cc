//! Calculator tool with four operations.

use std::sync::Arc;

use serde::Deserialize;

use crate::domains::tools::context::ExecutionContext;
use crate::domains::tools::definitions::common::format_number;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolHandler, ToolOutput};
use crate::domains::tools::registry::ToolDescriptor;
use crate::domains::tools::schema::{Arguments, FieldSpec, Schema};

/// Text returned instead of a number when dividing by zero.
pub const DIVIDE_BY_ZERO: &str = "Error: Cannot divide by zero";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const CHOICES: &'static [&'static str] = &["add", "subtract", "multiply", "divide"];
}

/// Parameters for the calculator tool.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateParams {
    pub operation: Operation,
    pub a: f64,
    pub b: f64,
}

#[derive(Debug, Clone, Default)]
pub struct CalculateTool;

impl CalculateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "calculate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "";

    pub fn schema() -> Schema {
        Schema::new()
            .field(FieldSpec::enumeration("operation", Operation::CHOICES))
            .field(FieldSpec::number("a"))
            .field(FieldSpec::number("b"))
    }

    /// Execute the tool logic.
    pub fn execute(params: &CalculateParams) -> String {
        let (a, b) = (params.a, params.b);
        let result = match params.operation {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
            Operation::Multiply => a * b,
            Operation::Divide => {
                if b == 0.0 {
                    return DIVIDE_BY_ZERO.to_string();
                }
                a / b
            }
        };
        format_number(result)
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
impl ToolHandler for CalculateTool {
    async fn call(&self, args: Arguments, _ctx: &ExecutionContext) -> Result<ToolOutput, ToolError> {
        let params: CalculateParams = args.parse()?;
        Ok(ToolOutput::Text(Self::execute(&params)))
    }
}
