use proptest::prelude::*;
use hashcluster::clusters::{cluster_entries, ClusterKind};
use hashcluster::config::Layout;
use hashcluster::output::ClusterWriter;
use hashcluster::scanner::{read_entries, HashEntry};
use std::collections::{BTreeSet, HashMap};
use std::fs;
use tempfile::TempDir;

/// Items with distinct identifiers and hashes drawn from a small pool, so
/// collisions are frequent.
fn items_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::btree_map("[a-z0-9_]{1,12}", "h[0-4]", 0..40)
        .prop_map(|map| map.into_iter().collect())
}

proptest! {
    #[test]
    fn test_cluster_entries_invariants(items in items_strategy()) {
        let entries: Vec<HashEntry> = items
            .iter()
            .map(|(id, hash)| HashEntry::new(id.clone(), hash.clone()))
            .collect();
        let expected: HashMap<&str, &str> =
            items.iter().map(|(id, h)| (id.as_str(), h.as_str())).collect();

        let (clusters, stats) = cluster_entries(entries);

        // Invariant: every member carries the cluster's hash
        for cluster in &clusters {
            for member in &cluster.members {
                prop_assert_eq!(expected[member.as_str()], cluster.hash.as_str());
            }
            // Invariant: kind follows cardinality
            let kind = if cluster.len() == 1 { ClusterKind::Unique } else { ClusterKind::Active };
            prop_assert_eq!(cluster.kind(), kind);
        }

        // Invariant: one cluster per distinct hash
        let hashes: BTreeSet<&str> = clusters.iter().map(|c| c.hash.as_str()).collect();
        prop_assert_eq!(hashes.len(), clusters.len());

        // Invariant: every identifier appears exactly once
        let total: usize = clusters.iter().map(|c| c.len()).sum();
        prop_assert_eq!(total, items.len());
        prop_assert_eq!(stats.total_items, items.len());
        prop_assert_eq!(stats.unique_clusters + stats.active_clusters, clusters.len());
    }

    #[test]
    fn test_written_files_round_trip(items in items_strategy()) {
        let dir = TempDir::new().unwrap();
        let layout = Layout {
            input_dir: dir.path().join("trun"),
            unique_dir: dir.path().join("hash_unique"),
            active_dir: dir.path().join("active"),
        };
        for path in [&layout.input_dir, &layout.unique_dir, &layout.active_dir] {
            fs::create_dir(path).unwrap();
        }
        for (id, hash) in &items {
            fs::write(layout.input_dir.join(id), format!("{hash}\n")).unwrap();
        }

        let (clusters, _) = cluster_entries(read_entries(&layout.input_dir).unwrap());
        ClusterWriter::new(layout.clone()).write_all(&clusters).unwrap();

        let mut seen = Vec::new();
        for (out_dir, single) in [(&layout.unique_dir, true), (&layout.active_dir, false)] {
            for file in fs::read_dir(out_dir).unwrap() {
                let content = fs::read_to_string(file.unwrap().path()).unwrap();
                prop_assert!(content.ends_with('\n'));
                let members: Vec<String> = content.lines().map(str::to_string).collect();
                prop_assert_eq!(members.len() == 1, single);
                seen.extend(members);
            }
        }

        seen.sort();
        let mut expected: Vec<String> = items.iter().map(|(id, _)| id.clone()).collect();
        expected.sort();
        prop_assert_eq!(seen, expected);
    }
}
