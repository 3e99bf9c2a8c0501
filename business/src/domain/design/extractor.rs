use std::collections::BTreeMap;

use regex::Regex;
use serde_json::{Map, Value};

use super::model::{DesignEdge, DesignNode, SystemDesign};

/// Reads a `{ "nodes": {...}, "connections": [...] }` graph out of model text.
///
/// The whole text is tried first (after stripping markdown fences), then the
/// span from the first `{` to the last `}`. Returns `None` when neither holds
/// a graph object.
pub fn extract_design(text: &str) -> Option<SystemDesign> {
    let cleaned = strip_code_fences(text);

    if let Ok(value) = serde_json::from_str::<Value>(&cleaned)
        && let Some(design) = design_from_value(&value)
    {
        return Some(design);
    }

    let span = Regex::new(r"\{[\s\S]*\}")
        .ok()
        .and_then(|re| re.find(&cleaned).map(|m| m.as_str().to_string()))?;
    let value = serde_json::from_str::<Value>(&span).ok()?;
    design_from_value(&value)
}

fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.starts_with("```json") {
        trimmed
            .replace("```json", "")
            .replace("```", "")
            .trim()
            .to_string()
    } else if trimmed.starts_with("```") {
        trimmed.replace("```", "").trim().to_string()
    } else {
        trimmed.to_string()
    }
}

fn design_from_value(value: &Value) -> Option<SystemDesign> {
    let object = value.as_object()?;
    if !object.contains_key("nodes") && !object.contains_key("connections") {
        return None;
    }

    let nodes: BTreeMap<String, DesignNode> = object
        .get("nodes")
        .and_then(Value::as_object)
        .map(|nodes| {
            nodes
                .iter()
                .filter_map(|(id, node)| Some((id.clone(), node_from_value(id, node.as_object()?))))
                .collect()
        })
        .unwrap_or_default();

    let edges: Vec<DesignEdge> = object
        .get("connections")
        .or_else(|| object.get("edges"))
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(edge_from_value).collect())
        .unwrap_or_default();

    Some(SystemDesign { nodes, edges })
}

fn node_from_value(id: &str, node: &Map<String, Value>) -> DesignNode {
    let name = node
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(id)
        .to_string();

    let tech = match node.get("tech") {
        Some(Value::String(tags)) => tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::Array(tags)) => tags
            .iter()
            .filter_map(Value::as_str)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
        _ => Vec::new(),
    };

    DesignNode {
        name,
        tech,
        description: node
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim()
            .to_string(),
        x: node.get("x").and_then(Value::as_f64),
        y: node.get("y").and_then(Value::as_f64),
    }
}

/// Accepts `"a->b"` strings and `{"from": "a", "to": "b"}` objects.
fn edge_from_value(value: &Value) -> Option<DesignEdge> {
    let (from, to) = match value {
        Value::String(link) => link.split_once("->")?,
        Value::Object(link) => (
            link.get("from")?.as_str()?,
            link.get("to")?.as_str()?,
        ),
        _ => return None,
    };

    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return None;
    }

    Some(DesignEdge {
        from: from.to_string(),
        to: to.to_string(),
    })
}
