use proptest::prelude::*;
use shotname_core::{run_operation, RenameEntry, RenameMap, TargetDirectory};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PAIRS: &[(&str, &str)] = &[
    ("home_PixWit_20251214_221948.webp", "home.webp"),
    ("trim_PixWit_20251214_230804.webp", "trim.webp"),
    ("copy-to-excel.webp", "table.webp"),
    ("settings_20251216_101010.webp", "settings.webp"),
];

/// Which files exist before the run. Each source is present or absent and each
/// destination may already be occupied.
#[derive(Debug, Clone)]
struct Layout {
    sources: Vec<bool>,
    destinations: Vec<bool>,
}

fn layout() -> impl Strategy<Value = Layout> {
    (
        prop::collection::vec(any::<bool>(), PAIRS.len()),
        prop::collection::vec(any::<bool>(), PAIRS.len()),
    )
        .prop_map(|(sources, destinations)| Layout {
            sources,
            destinations,
        })
}

fn populate(dir: &Path, layout: &Layout) {
    for (i, (old, new)) in PAIRS.iter().enumerate() {
        if layout.sources[i] {
            fs::write(dir.join(old), format!("source {i}")).unwrap();
        }
        if layout.destinations[i] {
            fs::write(dir.join(new), format!("existing {i}")).unwrap();
        }
    }
}

fn snapshot(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| {
            let e = e.unwrap();
            (
                e.file_name().to_string_lossy().into_owned(),
                fs::read(e.path()).unwrap(),
            )
        })
        .collect()
}

fn run(order: &[usize], layout: &Layout) -> (BTreeMap<String, Vec<u8>>, usize, usize) {
    let temp_dir = TempDir::new().unwrap();
    populate(temp_dir.path(), layout);

    let entries = order
        .iter()
        .map(|&i| RenameEntry::new(PAIRS[i].0, PAIRS[i].1).unwrap())
        .collect();
    let result = run_operation(
        TargetDirectory::new(temp_dir.path().to_path_buf()),
        &RenameMap::new(entries),
        |_| {},
    );

    (
        snapshot(temp_dir.path()),
        result.summary.succeeded,
        result.summary.failed,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn permuting_entries_gives_same_result(
        layout in layout(),
        order in Just((0..PAIRS.len()).collect::<Vec<_>>()).prop_shuffle(),
    ) {
        let identity: Vec<usize> = (0..PAIRS.len()).collect();
        let baseline = run(&identity, &layout);
        let permuted = run(&order, &layout);
        prop_assert_eq!(baseline, permuted);
    }

    #[test]
    fn counts_follow_the_layout(layout in layout()) {
        let identity: Vec<usize> = (0..PAIRS.len()).collect();
        let (files, succeeded, failed) = run(&identity, &layout);

        let expected_successes = layout
            .sources
            .iter()
            .zip(&layout.destinations)
            .filter(|(src, dst)| **src && !**dst)
            .count();
        prop_assert_eq!(succeeded, expected_successes);
        prop_assert_eq!(succeeded + failed, PAIRS.len());

        // Occupied destinations keep their original content
        for (i, (_, new)) in PAIRS.iter().enumerate() {
            if layout.destinations[i] {
                prop_assert_eq!(&files[*new], &format!("existing {i}").into_bytes());
            }
        }
    }
}
