use std::collections::BTreeMap;

use serde::Serialize;

use business::domain::design::model::{DesignEdge, DesignNode, GeneratedDesign, SystemDesign};

#[derive(Debug, Clone, Serialize)]
pub struct DesignNodeResponse {
    pub name: String,
    pub tech: Vec<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl From<DesignNode> for DesignNodeResponse {
    fn from(n: DesignNode) -> Self {
        Self {
            name: n.name,
            tech: n.tech,
            description: n.description,
            x: n.x,
            y: n.y,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DesignEdgeResponse {
    pub from: String,
    pub to: String,
}

impl From<DesignEdge> for DesignEdgeResponse {
    fn from(e: DesignEdge) -> Self {
        Self {
            from: e.from,
            to: e.to,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SystemDesignResponse {
    pub nodes: BTreeMap<String, DesignNodeResponse>,
    pub edges: Vec<DesignEdgeResponse>,
}

impl From<SystemDesign> for SystemDesignResponse {
    fn from(d: SystemDesign) -> Self {
        Self {
            nodes: d
                .nodes
                .into_iter()
                .map(|(id, node)| (id, node.into()))
                .collect(),
            edges: d.edges.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedDesignResponse {
    /// Raw model output
    pub text: String,
    pub design: Option<SystemDesignResponse>,
}

impl From<GeneratedDesign> for GeneratedDesignResponse {
    fn from(g: GeneratedDesign) -> Self {
        Self {
            text: g.text,
            design: g.design.map(Into::into),
        }
    }
}
