//! Recursive node comparison
//!
//! Attributes are matched by id, children are grouped by id and matched by
//! position within each group. Keys present on both sides are visited in the
//! original's order, followed by keys only the generated side has.

use indexmap::IndexMap;

use crate::formats::lsx::{LsxAttribute, LsxNode};

use super::normalize::normalize_value;
use super::types::{CompareOptions, Difference, NodePath};

/// Compare two nodes occupying the same position in both documents.
///
/// A missing node on either side yields nothing; the caller reports it.
pub fn compare_nodes(
    orig: Option<&LsxNode>,
    generated: Option<&LsxNode>,
    path: &NodePath,
    options: &CompareOptions,
) -> Vec<Difference> {
    let (Some(orig), Some(generated)) = (orig, generated) else {
        return Vec::new();
    };

    let mut diffs = Vec::new();
    compare_attributes(&orig.attributes, &generated.attributes, path, options, &mut diffs);
    compare_children(&orig.children, &generated.children, path, options, &mut diffs);
    diffs
}

fn compare_attributes(
    orig: &[LsxAttribute],
    generated: &[LsxAttribute],
    path: &NodePath,
    options: &CompareOptions,
    diffs: &mut Vec<Difference>,
) {
    if let Some((index, o, g)) = first_divergence(
        orig.iter().map(|a| a.id.as_str()),
        generated.iter().map(|a| a.id.as_str()),
    ) {
        diffs.push(Difference::AttributeOrderMismatch {
            path: path.clone(),
            index,
            original: o.to_string(),
            generated: g.to_string(),
        });
    }

    let orig_attrs: IndexMap<&str, &LsxAttribute> =
        orig.iter().map(|a| (a.id.as_str(), a)).collect();
    let gen_attrs: IndexMap<&str, &LsxAttribute> =
        generated.iter().map(|a| (a.id.as_str(), a)).collect();

    for id in union_keys(&orig_attrs, &gen_attrs) {
        match (orig_attrs.get(id), gen_attrs.get(id)) {
            (Some(oa), None) => diffs.push(Difference::MissingAttribute {
                path: path.clone(),
                attribute: id.to_string(),
                expected: oa.raw_value(),
            }),
            (None, Some(ga)) => diffs.push(Difference::ExtraAttribute {
                path: path.clone(),
                attribute: id.to_string(),
                found: ga.raw_value(),
            }),
            (Some(oa), Some(ga)) => {
                let ov_raw = oa.raw_value();
                let gv_raw = ga.raw_value();
                let ov_norm = normalize_value(&ov_raw, &oa.type_name, options.precision);
                let gv_norm = normalize_value(&gv_raw, &ga.type_name, options.precision);
                if ov_norm != gv_norm {
                    diffs.push(Difference::ValueMismatch {
                        path: path.clone(),
                        attribute: id.to_string(),
                        original: ov_raw.clone(),
                        generated: gv_raw.clone(),
                    });
                }
            }
            (None, None) => unreachable!(),
        }
    }
}

fn compare_children(
    orig: &[LsxNode],
    generated: &[LsxNode],
    path: &NodePath,
    options: &CompareOptions,
    diffs: &mut Vec<Difference>,
) {
    if let Some((index, o, g)) = first_divergence(
        orig.iter().map(|n| n.id.as_str()),
        generated.iter().map(|n| n.id.as_str()),
    ) {
        diffs.push(Difference::ChildOrderMismatch {
            path: path.clone(),
            index,
            original: o.to_string(),
            generated: g.to_string(),
        });
    }

    let orig_by_id = group_by_id(orig);
    let gen_by_id = group_by_id(generated);

    for id in union_keys(&orig_by_id, &gen_by_id) {
        match (orig_by_id.get(id), gen_by_id.get(id)) {
            (Some(o_list), None) => diffs.push(Difference::MissingNodeGroup {
                path: path.clone(),
                node: id.to_string(),
                count: o_list.len(),
            }),
            (None, Some(g_list)) => diffs.push(Difference::ExtraNodeGroup {
                path: path.clone(),
                node: id.to_string(),
                count: g_list.len(),
            }),
            (Some(o_list), Some(g_list)) => {
                if o_list.len() != g_list.len() {
                    diffs.push(Difference::NodeGroupCountMismatch {
                        path: path.clone(),
                        node: id.to_string(),
                        original: o_list.len(),
                        generated: g_list.len(),
                    });
                }

                for (i, (o, g)) in o_list.iter().zip(g_list).enumerate() {
                    let sub_path = if o_list.len() == 1 {
                        path.with_segment(id)
                    } else {
                        path.with_indexed_segment(id, i)
                    };
                    diffs.extend(compare_nodes(Some(*o), Some(*g), &sub_path, options));
                }
            }
            (None, None) => unreachable!(),
        }
    }
}

/// Group children by id, keeping document order within and across groups
fn group_by_id(nodes: &[LsxNode]) -> IndexMap<&str, Vec<&LsxNode>> {
    let mut map: IndexMap<&str, Vec<&LsxNode>> = IndexMap::new();
    for node in nodes {
        map.entry(node.id.as_str()).or_default().push(node);
    }
    map
}

/// Keys of `orig` in order, then the keys only `generated` has
fn union_keys<'a, A, B>(
    orig: &IndexMap<&'a str, A>,
    generated: &IndexMap<&'a str, B>,
) -> Vec<&'a str> {
    orig.keys()
        .copied()
        .chain(
            generated
                .keys()
                .copied()
                .filter(|id| !orig.contains_key(id)),
        )
        .collect()
}

/// First index (up to the shorter length) where two id sequences differ
fn first_divergence<'a>(
    orig: impl Iterator<Item = &'a str>,
    generated: impl Iterator<Item = &'a str>,
) -> Option<(usize, &'a str, &'a str)> {
    orig.zip(generated)
        .enumerate()
        .find(|(_, (o, g))| o != g)
        .map(|(i, (o, g))| (i, o, g))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::types::DifferenceKind;
    use pretty_assertions::assert_eq;

    fn make_node(id: &str, attrs: Vec<LsxAttribute>, children: Vec<LsxNode>) -> LsxNode {
        LsxNode {
            id: id.to_string(),
            attributes: attrs,
            children,
        }
    }

    fn make_attr(id: &str, type_name: &str, value: &str) -> LsxAttribute {
        LsxAttribute::new(id, type_name, value)
    }

    fn compare(orig: &LsxNode, generated: &LsxNode) -> Vec<Difference> {
        compare_nodes(
            Some(orig),
            Some(generated),
            &NodePath::new("A"),
            &CompareOptions::default(),
        )
    }

    fn lines(diffs: &[Difference]) -> Vec<String> {
        diffs.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_absent_side_yields_nothing() {
        let node = make_node("root", vec![make_attr("x", "int32", "1")], vec![]);
        let path = NodePath::new("A");
        let options = CompareOptions::default();
        assert!(compare_nodes(Some(&node), None, &path, &options).is_empty());
        assert!(compare_nodes(None, Some(&node), &path, &options).is_empty());
        assert!(compare_nodes(None, None, &path, &options).is_empty());
    }

    #[test]
    fn test_identical_nodes() {
        let node = make_node(
            "root",
            vec![make_attr("Name", "FixedString", "Test"), make_attr("Pos", "fvec3", "1 2 3")],
            vec![
                make_node("Item", vec![make_attr("Index", "int32", "0")], vec![]),
                make_node("Item", vec![make_attr("Index", "int32", "1")], vec![]),
            ],
        );
        assert!(compare(&node, &node).is_empty());
    }

    #[test]
    fn test_float_tolerance() {
        let orig = make_node("root", vec![make_attr("x", "6", "1.000000001")], vec![]);
        let generated = make_node("root", vec![make_attr("x", "6", "1.0000000004")], vec![]);
        assert!(compare(&orig, &generated).is_empty());

        let orig = make_node("root", vec![make_attr("x", "6", "1.0")], vec![]);
        let generated = make_node("root", vec![make_attr("x", "6", "1.000002")], vec![]);
        let diffs = compare(&orig, &generated);
        assert_eq!(
            lines(&diffs),
            vec!["DIFF VALUE: section[A]/x | Original: 1.0 | Generated: 1.000002"]
        );
    }

    #[test]
    fn test_string_values_compare_exactly() {
        let orig = make_node("root", vec![make_attr("s", "LSString", "foo")], vec![]);
        let generated = make_node("root", vec![make_attr("s", "LSString", "bar")], vec![]);
        let diffs = compare(&orig, &generated);
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].kind(), DifferenceKind::ValueMismatch);

        let orig = make_node("root", vec![make_attr("s", "LSString", "1.0")], vec![]);
        let generated = make_node("root", vec![make_attr("s", "LSString", "1.00")], vec![]);
        assert_eq!(compare(&orig, &generated).len(), 1);
    }

    #[test]
    fn test_unparsable_float_is_lenient() {
        let orig = make_node("root", vec![make_attr("x", "6", "abc")], vec![]);
        assert!(compare(&orig, &orig.clone()).is_empty());
    }

    #[test]
    fn test_each_side_normalizes_with_its_own_type() {
        let orig = make_node("root", vec![make_attr("x", "float", "1.0000001")], vec![]);
        let generated = make_node("root", vec![make_attr("x", "double", "1.00000004")], vec![]);
        assert!(compare(&orig, &generated).is_empty());

        // the string side keeps its raw text, the float side is rounded
        let generated = make_node("root", vec![make_attr("x", "FixedString", "1.0000001")], vec![]);
        let diffs = compare(&orig, &generated);
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].kind(), DifferenceKind::ValueMismatch);
        assert_eq!(
            lines(&diffs),
            vec!["DIFF VALUE: section[A]/x | Original: 1.0000001 | Generated: 1.0000001"]
        );
    }

    #[test]
    fn test_attribute_order_reports_first_divergence_only() {
        let orig = make_node(
            "root",
            vec![make_attr("a", "int32", "1"), make_attr("b", "int32", "2"), make_attr("c", "int32", "3")],
            vec![],
        );
        let generated = make_node(
            "root",
            vec![make_attr("a", "int32", "1"), make_attr("x", "int32", "2"), make_attr("c", "int32", "3")],
            vec![],
        );
        let diffs = compare(&orig, &generated);
        assert_eq!(
            lines(&diffs),
            vec![
                "ATTR ORDER: section[A] attr 1 | Original: b | Generated: x",
                "MISSING ATTR: section[A]/b (Expected 2)",
                "EXTRA ATTR: section[A]/x (Found 2)",
            ]
        );
    }

    #[test]
    fn test_swapped_attributes() {
        let orig = make_node(
            "root",
            vec![make_attr("a", "int32", "1"), make_attr("b", "int32", "2")],
            vec![],
        );
        let generated = make_node(
            "root",
            vec![make_attr("b", "int32", "2"), make_attr("a", "int32", "1")],
            vec![],
        );
        let diffs = compare(&orig, &generated);
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].kind(), DifferenceKind::AttributeOrderMismatch);
    }

    #[test]
    fn test_missing_and_extra_are_symmetric() {
        let orig = make_node(
            "root",
            vec![make_attr("a", "int32", "1"), make_attr("b", "int32", "2")],
            vec![make_node("Only", vec![], vec![])],
        );
        let generated = make_node("root", vec![make_attr("a", "int32", "1")], vec![]);

        let forward = compare(&orig, &generated);
        let backward = compare(&generated, &orig);
        assert_eq!(
            lines(&forward),
            vec![
                "MISSING ATTR: section[A]/b (Expected 2)",
                "MISSING NODE: section[A]/Only (x1)",
            ]
        );
        assert_eq!(
            lines(&backward),
            vec![
                "EXTRA ATTR: section[A]/b (Found 2)",
                "EXTRA NODE: section[A]/Only (x1)",
            ]
        );
    }

    #[test]
    fn test_group_count_mismatch_compares_prefix() {
        let item = |v: &str| make_node("Item", vec![make_attr("v", "int32", v)], vec![]);
        let orig = make_node("root", vec![], vec![item("1"), item("2")]);
        let generated = make_node("root", vec![], vec![item("1"), item("9"), item("3")]);

        let diffs = compare(&orig, &generated);
        assert_eq!(
            lines(&diffs),
            vec![
                "DIFF COUNT: section[A]/Item | Original: 2 | Generated: 3",
                "DIFF VALUE: section[A]/Item[1]/v | Original: 2 | Generated: 9",
            ]
        );
    }

    #[test]
    fn test_single_member_group_has_no_index() {
        let orig = make_node(
            "root",
            vec![],
            vec![make_node("Item", vec![make_attr("v", "int32", "1")], vec![])],
        );
        let generated = make_node(
            "root",
            vec![],
            vec![
                make_node("Item", vec![make_attr("v", "int32", "2")], vec![]),
                make_node("Item", vec![], vec![]),
            ],
        );
        let diffs = compare(&orig, &generated);
        assert_eq!(
            lines(&diffs),
            vec![
                "DIFF COUNT: section[A]/Item | Original: 1 | Generated: 2",
                "DIFF VALUE: section[A]/Item/v | Original: 1 | Generated: 2",
            ]
        );
    }

    #[test]
    fn test_child_order_reports_first_divergence_only() {
        let leaf = |id: &str| make_node(id, vec![], vec![]);
        let orig = make_node("root", vec![], vec![leaf("a"), leaf("b"), leaf("c")]);
        let generated = make_node("root", vec![], vec![leaf("b"), leaf("a"), leaf("c")]);
        let diffs = compare(&orig, &generated);
        assert_eq!(
            lines(&diffs),
            vec!["ORDER ISSUE: section[A] child 0 | Original: a | Generated: b"]
        );
    }

    #[test]
    fn test_nested_paths() {
        let orig = make_node(
            "root",
            vec![],
            vec![make_node(
                "Group",
                vec![],
                vec![make_node("Leaf", vec![make_attr("Name", "FixedString", "a")], vec![])],
            )],
        );
        let generated = make_node(
            "root",
            vec![],
            vec![make_node(
                "Group",
                vec![],
                vec![make_node("Leaf", vec![make_attr("Name", "FixedString", "b")], vec![])],
            )],
        );
        let diffs = compare(&orig, &generated);
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].location(), "section[A]/Group/Leaf/Name");
    }

    #[test]
    fn test_output_order() {
        // order record, attribute records, child order record, then groups
        let orig = make_node(
            "root",
            vec![make_attr("a", "int32", "1"), make_attr("b", "int32", "2")],
            vec![make_node("X", vec![], vec![]), make_node("Y", vec![], vec![])],
        );
        let generated = make_node(
            "root",
            vec![make_attr("b", "int32", "3"), make_attr("a", "int32", "1")],
            vec![make_node("Y", vec![], vec![]), make_node("Z", vec![], vec![])],
        );
        let kinds: Vec<DifferenceKind> = compare(&orig, &generated).iter().map(Difference::kind).collect();
        assert_eq!(
            kinds,
            vec![
                DifferenceKind::AttributeOrderMismatch,
                DifferenceKind::ValueMismatch,
                DifferenceKind::ChildOrderMismatch,
                DifferenceKind::MissingNodeGroup,
                DifferenceKind::ExtraNodeGroup,
            ]
        );
    }
}
