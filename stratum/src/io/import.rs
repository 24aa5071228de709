use crate::entities::{ItemTree, Superitem};
use crate::io::ext_repr::{ExtItemNode, ExtSuperitem};
use anyhow::Result;
use itertools::Itertools;

/// Imports the superitem table, assigning each row its position as id.
pub fn import(ext_superitems: &[ExtSuperitem]) -> Result<Vec<Superitem>> {
    ext_superitems
        .iter()
        .enumerate()
        .map(|(id, ext)| {
            Superitem::try_new(
                id,
                ext.length,
                ext.width,
                ext.height,
                ext.stacked,
                item_tree(&ext.items),
            )
        })
        .try_collect()
}

fn item_tree(node: &ExtItemNode) -> ItemTree {
    match node {
        ExtItemNode::Item(id) => ItemTree::Item(*id),
        ExtItemNode::Stack(nodes) => ItemTree::Stack(nodes.iter().map(item_tree).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn imports_nested_item_compositions() {
        let json = r#"[
            {"length": 10.0, "width": 10.0, "height": 5.0, "items": 3},
            {"length": 10.0, "width": 10.0, "height": 9.0, "stacked": true, "items": [3, [4, 5]]}
        ]"#;
        let ext: Vec<ExtSuperitem> = serde_json::from_str(json).unwrap();
        let superitems = import(&ext).unwrap();

        assert_eq!(superitems.len(), 2);
        assert_eq!(superitems[1].id, 1);
        assert!(superitems[1].stacked);
        assert_eq!(superitems[1].items.flatten(), HashSet::from([3, 4, 5]));
    }

    #[test]
    fn rejects_a_heightless_row() {
        let ext = [ExtSuperitem {
            length: 1.0,
            width: 1.0,
            height: 0.0,
            stacked: false,
            items: ExtItemNode::Item(0),
        }];
        assert!(import(&ext).is_err());
    }
}
