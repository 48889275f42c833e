//! Error macros for pathgraph

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for rejecting a node that is not in the graph
#[macro_export]
macro_rules! bail_unknown_node {
    ($node:expr) => {
        return Err($crate::error::GraphError::unknown_node($node))
    };
}
