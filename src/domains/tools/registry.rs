//! Tool Registry - central registration and lookup for all tools.
//!
//! This module provides:
//! - [`ToolDescriptor`]: name, description, schema and handler of one tool
//! - [`ToolRegistryBuilder`]: the registration phase, rejecting duplicates
//! - [`ToolRegistry`]: the frozen, read-only view used while serving
//!
//! Once built, a registry has no mutating methods, so it can be shared
//! between sessions behind an `Arc` without locking.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use tracing::debug;

use super::definitions;
use super::error::ToolError;
use super::handlers::SharedHandler;
use super::schema::{Arguments, Schema, ValidationError, empty_json_schema};

// ============================================================================
// Tool Descriptor
// ============================================================================

/// Immutable description of a registered tool.
#[derive(Clone)]
pub struct ToolDescriptor {
    name: String,
    description: String,
    schema: Option<Schema>,
    handler: SharedHandler,
}

impl ToolDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schema: Option<Schema>,
        handler: SharedHandler,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schema,
            handler,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    pub fn handler(&self) -> &SharedHandler {
        &self.handler
    }

    /// Validate raw arguments; schema-less tools ignore whatever they get.
    pub fn validate(&self, raw: Option<&JsonObject>) -> Result<Arguments, ValidationError> {
        match &self.schema {
            Some(schema) => schema.validate(raw),
            None => Ok(Arguments::empty()),
        }
    }

    /// Create a Tool model for this descriptor (metadata).
    pub fn to_tool(&self) -> Tool {
        let input_schema = self
            .schema
            .as_ref()
            .map(Schema::to_json_schema)
            .unwrap_or_else(empty_json_schema);

        Tool {
            name: self.name.clone().into(),
            description: Some(self.description.clone().into()),
            input_schema: Arc::new(input_schema),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

impl std::fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Registration
// ============================================================================

/// Registration phase of a [`ToolRegistry`].
#[derive(Debug, Default)]
pub struct ToolRegistryBuilder {
    tools: Vec<ToolDescriptor>,
    index: HashMap<String, usize>,
}

impl ToolRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Fails if the name is empty or already taken.
    pub fn register(mut self, descriptor: ToolDescriptor) -> Result<Self, ToolError> {
        if descriptor.name.is_empty() {
            return Err(ToolError::EmptyName);
        }
        if self.index.contains_key(&descriptor.name) {
            return Err(ToolError::duplicate(descriptor.name));
        }

        debug!("Registering tool: {}", descriptor.name);
        self.index
            .insert(descriptor.name.clone(), self.tools.len());
        self.tools.push(descriptor);
        Ok(self)
    }

    /// Register every descriptor in order, stopping at the first conflict.
    pub fn register_all(
        self,
        descriptors: impl IntoIterator<Item = ToolDescriptor>,
    ) -> Result<Self, ToolError> {
        descriptors.into_iter().try_fold(self, Self::register)
    }

    /// Freeze the registry.
    pub fn build(self) -> ToolRegistry {
        ToolRegistry {
            tools: self.tools,
            index: self.index,
        }
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Frozen set of tools, in registration order.
#[derive(Debug)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Start a registration phase.
    pub fn builder() -> ToolRegistryBuilder {
        ToolRegistryBuilder::new()
    }

    /// Build the registry holding the full tool catalog.
    pub fn with_default_tools() -> Result<Self, ToolError> {
        Ok(Self::builder().register_all(definitions::all())?.build())
    }

    /// Look up a tool by name.
    pub fn lookup(&self, name: &str) -> Result<&ToolDescriptor, ToolError> {
        self.index
            .get(name)
            .map(|&i| &self.tools[i])
            .ok_or_else(|| ToolError::not_found(name))
    }

    /// All descriptors in registration order.
    pub fn list(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(ToolDescriptor::name).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn to_tools(&self) -> Vec<Tool> {
        self.tools.iter().map(ToolDescriptor::to_tool).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::context::ExecutionContext;
    use crate::domains::tools::handlers::{ToolHandler, ToolOutput};

    struct Noop;

    #[async_trait::async_trait]
    impl ToolHandler for Noop {
        async fn call(
            &self,
            _args: Arguments,
            _ctx: &ExecutionContext,
        ) -> Result<ToolOutput, ToolError> {
            Ok(ToolOutput::text("ok"))
        }
    }

    fn noop(name: &str) -> ToolDescriptor {
        ToolDescriptor::new(name, "", None, Arc::new(Noop))
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::with_default_tools().unwrap();
        let names = registry.tool_names();
        assert_eq!(
            names,
            vec![
                "price-token",
                "kaia-chain",
                "total-supply-kaia",
                "transaction-info-kaia",
                "accounts-count-kaia",
                "council-members-kaia",
                "staking-info-kaia-by-council",
                "add",
                "multiply",
                "calculate",
            ]
        );
    }

    #[test]
    fn test_lookup_returns_matching_descriptor() {
        let registry = ToolRegistry::with_default_tools().unwrap();
        for name in registry.tool_names() {
            assert_eq!(registry.lookup(name).unwrap().name(), name);
        }
    }

    #[test]
    fn test_lookup_unknown() {
        let registry = ToolRegistry::with_default_tools().unwrap();
        let err = registry.lookup("unknown").unwrap_err();
        assert!(matches!(err, ToolError::NotFound(ref n) if n == "unknown"));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let result = ToolRegistry::builder()
            .register(noop("echo"))
            .and_then(|b| b.register(noop("echo")));
        assert!(matches!(result, Err(ToolError::DuplicateTool(ref n)) if n == "echo"));
    }

    #[test]
    fn test_default_catalog_twice_is_rejected() {
        let result = ToolRegistry::builder()
            .register_all(definitions::all())
            .and_then(|b| b.register_all(definitions::all()));
        assert!(matches!(result, Err(ToolError::DuplicateTool(ref n)) if n == "price-token"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = ToolRegistry::builder().register(noop(""));
        assert!(matches!(result, Err(ToolError::EmptyName)));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let registry = ToolRegistry::builder()
            .register(noop("b"))
            .and_then(|r| r.register(noop("a")))
            .and_then(|r| r.register(noop("c")))
            .unwrap()
            .build();
        let names: Vec<_> = registry.list().iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_to_tools_includes_schema() {
        let registry = ToolRegistry::with_default_tools().unwrap();
        let tools = registry.to_tools();
        assert_eq!(tools.len(), registry.len());

        let calculate = tools.iter().find(|t| t.name == "calculate").unwrap();
        assert_eq!(
            calculate.input_schema["properties"]["operation"]["enum"],
            serde_json::json!(["add", "subtract", "multiply", "divide"])
        );

        let chain = tools.iter().find(|t| t.name == "kaia-chain").unwrap();
        assert_eq!(chain.input_schema["type"], "object");
    }
}
