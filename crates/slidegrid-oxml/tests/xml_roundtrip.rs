//! End-to-end tests for `<a:tbl>` write -> parse

use pretty_assertions::assert_eq;
use slidegrid_oxml::xml::{parse_tbl, write_tbl};
use slidegrid_oxml::*;

fn styled_tree() -> TableTree {
    let mut tree = TableTree::new(3, 3, Length::inches(6.0), Length::inches(1.5)).unwrap();
    tree.properties.last_col = true;
    tree.merge((0, 0), (1, 1)).unwrap();
    tree.merge((2, 1), (2, 2)).unwrap();

    let origin = tree.cell_mut(0, 0).unwrap();
    origin.text_body_or_insert().set_text("Quarterly <totals>");
    let props = origin.properties_or_insert();
    props.set_margin(Side::Left, Some(Length::pt(4.0)));
    props.set_margin(Side::Bottom, Some(Length::ZERO));
    props.anchor = Some(VerticalAnchor::Bottom);
    props.fill = Some(Fill::solid(Color::rgb(0x1F, 0x4E, 0x79)));

    let cell = tree.cell_mut(0, 2).unwrap();
    cell.properties_or_insert().fill = Some(Fill::pattern(
        PatternType::DiagonalCross,
        Color::Theme(ThemeColor::Accent1),
        Color::WHITE,
    ));
    cell.text_body_or_insert().word_wrap = Some(true);

    let cell = tree.cell_mut(1, 2).unwrap();
    cell.properties_or_insert().fill = Some(Fill::linear_gradient(
        90.0,
        vec![
            GradientStop::new(0.0, Color::RED),
            GradientStop::new(1.0, Color::BLUE),
        ],
    ));

    tree.cell_mut(2, 0).unwrap().properties_or_insert().fill = Some(Fill::NoFill);
    tree
}

#[test]
fn test_roundtrip_indented() {
    let tree = styled_tree();
    let xml = write_tbl(&tree, &XmlWriteOptions::default());
    let parsed = parse_tbl(&xml).unwrap();
    assert_eq!(parsed, tree);
}

#[test]
fn test_roundtrip_compact_preserves_merges() {
    let tree = styled_tree();
    let parsed = parse_tbl(&write_tbl(&tree, &XmlWriteOptions::compact())).unwrap();

    assert_eq!(
        parsed.merged_regions(),
        vec![CellSpan::new((0, 0), (1, 1)), CellSpan::new((2, 1), (2, 2))]
    );
    assert_eq!(parsed.resolve(1, 1).unwrap(), (0, 0));
    assert_eq!(parsed.resolve(2, 2).unwrap(), (2, 1));
    assert_eq!(parsed.total_width(), tree.total_width());
}

#[cfg(feature = "serde")]
#[test]
fn test_json_roundtrip() {
    let tree = styled_tree();
    let json = serde_json::to_string(&tree).unwrap();
    let parsed: TableTree = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, tree);
}
