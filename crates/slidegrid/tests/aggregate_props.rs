// Property tests: frame extents always equal the sum of row and column sizes

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use slidegrid::prelude::*;
use slidegrid::TableTree;

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(128),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

#[derive(Debug, Clone)]
enum Resize {
    Row(usize, i64),
    Column(usize, i64),
}

fn arb_resizes(rows: usize, cols: usize) -> impl Strategy<Value = Vec<Resize>> {
    let op = prop_oneof![
        (0..rows, 0..5_000_000i64).prop_map(|(i, h)| Resize::Row(i, h)),
        (0..cols, 0..5_000_000i64).prop_map(|(i, w)| Resize::Column(i, w)),
    ];
    prop::collection::vec(op, 1..40)
}

fn arb_case() -> impl Strategy<Value = (usize, usize, Vec<Resize>)> {
    (1..6usize, 1..6usize)
        .prop_flat_map(|(rows, cols)| (Just(rows), Just(cols), arb_resizes(rows, cols)))
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn prop_extents_track_sums((rows, cols, ops) in arb_case()) {
        let frame = Rc::new(RefCell::new(Extents::default()));
        let tree = TableTree::new(rows, cols, Length::emu(1000), Length::emu(1000)).unwrap();
        let table = Table::from_tree(tree, frame.clone()).unwrap();

        let mut touched_rows = false;
        let mut touched_cols = false;
        for op in &ops {
            match *op {
                Resize::Row(i, h) => {
                    table.rows().get(i as isize).unwrap().set_height(Length::emu(h));
                    touched_rows = true;
                }
                Resize::Column(i, w) => {
                    table.columns().get(i as isize).unwrap().set_width(Length::emu(w));
                    touched_cols = true;
                }
            }

            let heights: Length = table.rows().iter().map(|r| r.height()).sum();
            let widths: Length = table.columns().iter().map(|c| c.width()).sum();
            if touched_rows {
                prop_assert_eq!(frame.borrow().height, heights);
            }
            if touched_cols {
                prop_assert_eq!(frame.borrow().width, widths);
            }
        }
    }

    #[test]
    fn prop_merged_coordinates_share_cell(
        (rows, cols, r0, c0, r1, c1) in (2..6usize, 2..6usize).prop_flat_map(|(rows, cols)| {
            (Just(rows), Just(cols), 0..rows, 0..cols, 0..rows, 0..cols)
        })
    ) {
        prop_assume!((r0, c0) != (r1, c1));
        let mut tree = TableTree::new(rows, cols, Length::emu(600), Length::emu(600)).unwrap();
        let span = tree.merge((r0, c0), (r1, c1)).unwrap();
        let table = Table::from_tree(tree, Extents::default()).unwrap();

        let origin = table.cell(span.first_row, span.first_col).unwrap();
        for row in 0..rows {
            for col in 0..cols {
                let cell = table.cell(row, col).unwrap();
                prop_assert_eq!(cell == origin, span.contains(row, col));
            }
        }
    }
}
