use std::collections::BTreeMap;

/// A component box in a system design diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignNode {
    pub name: String,
    pub tech: Vec<String>,
    pub description: String,
    /// Canvas position, when the model provided one.
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// Directed link between two nodes, by node id.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignEdge {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SystemDesign {
    pub nodes: BTreeMap<String, DesignNode>,
    pub edges: Vec<DesignEdge>,
}

/// Raw model output together with whatever graph could be read from it.
#[derive(Debug, Clone)]
pub struct GeneratedDesign {
    pub text: String,
    pub design: Option<SystemDesign>,
}
