//! Behaviour of the table facade through its public API

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use slidegrid::prelude::*;
use slidegrid::TableTree;

fn shared_frame() -> Rc<RefCell<Extents>> {
    Rc::new(RefCell::new(Extents::default()))
}

fn table_2x3(frame: Rc<RefCell<Extents>>) -> Table {
    let tree = TableTree::new(2, 3, Length::emu(300), Length::emu(40)).unwrap();
    Table::from_tree(tree, frame).unwrap()
}

#[test]
fn test_sizes_drive_frame_extents() {
    let frame = shared_frame();
    let table = table_2x3(frame.clone());

    table.rows().get(0).unwrap().set_height(Length::emu(100));
    table.rows().get(1).unwrap().set_height(Length::emu(200));
    table.columns().get(0).unwrap().set_width(Length::emu(10));
    table.columns().get(1).unwrap().set_width(Length::emu(20));
    table.columns().get(2).unwrap().set_width(Length::emu(30));

    assert_eq!(frame.borrow().height, Length::emu(300));
    assert_eq!(frame.borrow().width, Length::emu(60));
    assert_eq!(table.aggregate_height(), Length::emu(300));
    assert_eq!(table.aggregate_width(), Length::emu(60));
}

#[test]
fn test_single_resize_sums_untouched_rows() {
    let frame = shared_frame();
    let table = table_2x3(frame.clone());

    table.rows().get(1).unwrap().set_height(Length::emu(5));
    assert_eq!(frame.borrow().height, Length::emu(25));
    // width is only recomputed when a column changes
    assert_eq!(frame.borrow().width, Length::ZERO);
}

#[test]
fn test_rows_and_columns_iterate_in_order() {
    let table = table_2x3(shared_frame());
    assert_eq!(table.rows().len(), 2);
    assert_eq!(table.columns().len(), 3);

    let heights: Vec<_> = table.rows().iter().map(|r| r.height()).collect();
    assert_eq!(heights, vec![Length::emu(20), Length::emu(20)]);

    let indexes: Vec<_> = table.columns().into_iter().map(|c| c.index()).collect();
    assert_eq!(indexes, vec![0, 1, 2]);

    // iteration restarts from the beginning each time
    assert_eq!(table.rows().iter().count(), 2);
    assert_eq!(table.rows().iter().len(), 2);
}

#[test]
fn test_index_errors() {
    let table = table_2x3(shared_frame());

    let err = table.rows().get(-1).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange { index: -1, .. }));
    assert_eq!(err.to_string(), "row index [-1] out of range");

    assert!(table.rows().get(2).is_err());
    assert!(table.columns().get(3).is_err());
    assert!(table.columns().get(-4).is_err());
    assert_eq!(
        table.columns().get(-1).unwrap_err().to_string(),
        "column index [-1] out of range"
    );

    let cells = table.rows().get(0).unwrap().cells();
    assert_eq!(cells.len(), 3);
    assert!(cells.get(3).is_err());
    assert_eq!(
        cells.get(-1).unwrap_err().to_string(),
        "cell index [-1] out of range"
    );
}

#[test]
fn test_huge_row_heights_saturate_frame() {
    let frame = shared_frame();
    let table = table_2x3(frame.clone());
    let huge = Length::emu(i64::MAX - 1000);

    table.rows().get(0).unwrap().set_height(huge);
    table.rows().get(1).unwrap().set_height(huge);
    assert_eq!(frame.borrow().height, Length::emu(i64::MAX));
}

#[test]
fn test_oversized_tree_rejected() {
    let mut tree = TableTree::new(2, 2, Length::emu(20), Length::emu(20)).unwrap();
    tree.rows[0].height = Length::emu(9_223_372_036_854_775_000);
    let err = Table::from_tree(tree, Extents::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Grid(slidegrid_oxml::Error::InvalidAttribute { name: "h", .. })
    ));
}

#[test]
fn test_merged_region_yields_one_cell() {
    let mut tree = TableTree::new(3, 3, Length::emu(300), Length::emu(300)).unwrap();
    tree.merge((0, 0), (1, 1)).unwrap();
    let table = Table::from_tree(tree, Extents::default()).unwrap();

    let origin = table.cell(0, 0).unwrap();
    for (row, col) in [(0, 1), (1, 0), (1, 1)] {
        assert_eq!(table.cell(row, col).unwrap(), origin);
    }
    assert_ne!(table.cell(0, 2).unwrap(), origin);
    assert_ne!(table.cell(2, 0).unwrap(), origin);

    assert!(origin.is_merge_origin());
    assert_eq!(origin.span_height(), 2);
    assert_eq!(origin.span_width(), 2);

    // writes through a covered coordinate land on the origin
    table.cell(1, 1).unwrap().set_text("merged");
    assert_eq!(origin.text_frame().text(), "merged");

    let covered = table.rows().get(1).unwrap().cells().get(1).unwrap();
    assert!(covered.is_spanned());
    assert_ne!(covered, origin);
}

#[test]
fn test_row_cells_are_physical() {
    let mut tree = TableTree::new(1, 3, Length::emu(30), Length::emu(10)).unwrap();
    tree.merge((0, 1), (0, 2)).unwrap();
    let table = Table::from_tree(tree, Extents::default()).unwrap();

    let row = table.rows().get(0).unwrap();
    let flags: Vec<_> = row
        .cells()
        .iter()
        .map(|c| (c.is_merge_origin(), c.is_spanned()))
        .collect();
    assert_eq!(flags, vec![(false, false), (true, false), (false, true)]);
}

#[test]
fn test_separately_built_cells_compare_equal() {
    let table = table_2x3(shared_frame());
    let a = table.cell(1, 2).unwrap();
    let b = table.cell(1, 2).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, table.cell(1, 1).unwrap());
    assert_eq!(a.position(), (1, 2));
}

#[test]
fn test_margins_roundtrip_through_tree() {
    let table = table_2x3(shared_frame());
    let cell = table.cell(1, 2).unwrap();

    cell.set_margin_left(Length::emu(12345)).unwrap();
    cell.set_margin_bottom(Length::ZERO).unwrap();
    assert_eq!(cell.margin_left(), Some(Length::emu(12345)));
    assert_eq!(cell.margin_bottom(), Some(Length::ZERO));
    assert_eq!(table.cell(1, 2).unwrap().margin_left(), Some(Length::emu(12345)));

    assert!(matches!(
        cell.set_margin_top(3.5),
        Err(Error::InvalidMarginType(_))
    ));
    assert_eq!(cell.margin_top(), None);

    let tree = table.accessor().tree();
    let props = tree.rows[1].cells[2].properties.as_ref().unwrap();
    assert_eq!(props.margin_left, Some(Length::emu(12345)));
    assert_eq!(props.margin_top, None);
}

#[test]
fn test_flags() {
    let table = table_2x3(shared_frame());
    table.set_first_col(true);
    table.set_horz_banding(false);
    assert!(table.first_col());
    assert!(!table.horz_banding());
    assert!(!table.last_row());
}

#[test]
fn test_cells_outlive_table() {
    let frame = shared_frame();
    let table = table_2x3(frame.clone());
    let cell = table.cell(0, 0).unwrap();
    drop(table);

    // cells keep the tree alive on their own
    cell.set_text("still here");
    cell.set_margin_right(10).unwrap();
    assert_eq!(cell.margin_right(), Some(Length::emu(10)));
    assert_eq!(frame.borrow().height, Length::ZERO);
}
