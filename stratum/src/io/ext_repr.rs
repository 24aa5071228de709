use serde::{Deserialize, Serialize};

/// The JSON representation of one row of the superitem table
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtSuperitem {
    pub length: f32,
    pub width: f32,
    pub height: f32,
    /// Whether the superitem is composed of multiple stacked tiers
    #[serde(default)]
    pub stacked: bool,
    /// Possibly nested composition of the base item ids the superitem covers
    pub items: ExtItemNode,
}

/// A node of the item composition: a base item id or a nested list of nodes
#[derive(Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum ExtItemNode {
    Item(usize),
    Stack(Vec<ExtItemNode>),
}
