use float_cmp::approx_eq;
use ndarray::array;
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use stratum::config::WarmStartConfig;
use stratum::entities::{ItemTree, Pallet, Superitem};
use stratum::{cluster, warm_start};
use test_case::test_case;

fn superitem(id: usize, length: f32, width: f32, height: f32) -> Superitem {
    Superitem::try_new(id, length, width, height, false, ItemTree::Item(id)).unwrap()
}

#[test]
fn two_bands_assemble_into_two_layers() {
    // the two 10x10x5 superitems share a layer, the 5x5x8 one gets its own
    let superitems = vec![
        superitem(0, 10.0, 10.0, 5.0),
        superitem(1, 10.0, 10.0, 5.0),
        superitem(2, 5.0, 5.0, 8.0),
    ];
    let pallet = Pallet::try_new(20.0, 20.0).unwrap();

    let ws = warm_start::build(&superitems, pallet, &WarmStartConfig::default()).unwrap();

    assert_eq!(ws.incidence, array![[1, 0], [1, 0], [0, 1]]);
    assert_eq!(ws.heights, array![5.0, 8.0]);
}

#[test_case(0.0; "exact heights")]
#[test_case(2.0; "with tolerance")]
fn every_group_member_is_covered(tolerance: f32) {
    let superitems = vec![
        superitem(0, 8.0, 6.0, 5.0),
        superitem(1, 12.0, 10.0, 6.0),
        superitem(2, 6.0, 6.0, 5.0),
        superitem(3, 10.0, 4.0, 9.0),
        superitem(4, 14.0, 14.0, 9.0),
        superitem(5, 4.0, 4.0, 12.0),
    ];
    let pallet = Pallet::try_new(20.0, 20.0).unwrap();

    let groups = cluster::height_groups(&superitems, tolerance);
    let ws = warm_start::global(superitems.len(), &groups, pallet).unwrap();

    for group in &groups {
        for row in &group.rows {
            assert!(ws.incidence.row(row.superitem_id).iter().any(|&v| v == 1));
        }
    }

    // every layer is exactly as tall as its tallest occupant
    for (layer_idx, &height) in ws.heights.iter().enumerate() {
        let max_occupant = superitems
            .iter()
            .filter(|si| ws.incidence[[si.id, layer_idx]] == 1)
            .map(|si| si.height)
            .fold(f32::NEG_INFINITY, f32::max);
        assert!(approx_eq!(f32, height, max_occupant));
    }
}

#[test]
fn per_group_appends_singleton_fallbacks() {
    let superitems = vec![superitem(0, 10.0, 10.0, 5.0), superitem(1, 10.0, 10.0, 5.0)];
    let pallet = Pallet::try_new(20.0, 20.0).unwrap();

    let groups = cluster::height_groups(&superitems, 0.0);
    let per_group = warm_start::per_group(&groups, pallet, true).unwrap();

    assert_eq!(per_group.len(), 1);
    let gws = &per_group[0];
    // one packed layer holding both rows, then one identity column per row
    assert_eq!(gws.incidence, array![[1, 1, 0], [1, 0, 1]]);
    assert_eq!(gws.heights, array![5.0, 5.0, 5.0]);
    assert_eq!(gws.superitem_rows[&0], 0);
    assert_eq!(gws.superitem_rows[&1], 1);
}

#[test]
fn singleton_fallbacks_are_skipped_for_lone_rows() {
    let superitems = vec![superitem(0, 10.0, 10.0, 5.0)];
    let pallet = Pallet::try_new(20.0, 20.0).unwrap();

    let groups = cluster::height_groups(&superitems, 0.0);
    let per_group = warm_start::per_group(&groups, pallet, true).unwrap();

    assert_eq!(per_group[0].incidence, array![[1]]);
    assert_eq!(per_group[0].heights, array![5.0]);
}

#[test]
fn flat_matches_a_single_all_inclusive_band() {
    let superitems = (0..6)
        .map(|id| superitem(id, 5.0 + id as f32, 4.0, 3.0 + id as f32))
        .collect::<Vec<_>>();
    let pallet = Pallet::try_new(20.0, 20.0).unwrap();

    let flat = warm_start::flat(&superitems, pallet).unwrap();

    let groups = cluster::height_groups(&superitems, 100.0);
    assert_eq!(groups.len(), 1);
    let grouped = warm_start::global(superitems.len(), &groups, pallet).unwrap();

    assert_eq!(flat.incidence.dim(), grouped.incidence.dim());
    for si in &superitems {
        assert!(flat.incidence.row(si.id).iter().any(|&v| v == 1));
        assert!(grouped.incidence.row(si.id).iter().any(|&v| v == 1));
    }
}

#[test]
fn dominated_superitems_get_no_layer() {
    // superitem 1 covers item 0 only, which superitem 0 already covers
    let superitems = vec![
        Superitem::try_new(
            0,
            10.0,
            10.0,
            5.0,
            true,
            ItemTree::Stack(vec![ItemTree::Item(0), ItemTree::Item(1)]),
        )
        .unwrap(),
        Superitem::try_new(1, 5.0, 5.0, 5.0, false, ItemTree::Item(0)).unwrap(),
    ];
    let pallet = Pallet::try_new(20.0, 20.0).unwrap();

    let ws = warm_start::build(&superitems, pallet, &WarmStartConfig::default()).unwrap();

    assert!(ws.incidence.row(0).iter().any(|&v| v == 1));
    assert!(ws.incidence.row(1).iter().all(|&v| v == 0));
}

#[test]
fn oversized_superitems_are_rejected_before_packing() {
    let superitems = vec![superitem(0, 25.0, 10.0, 5.0)];
    let pallet = Pallet::try_new(20.0, 20.0).unwrap();

    assert!(warm_start::flat(&superitems, pallet).is_err());

    let groups = cluster::height_groups(&superitems, 0.0);
    assert!(warm_start::global(1, &groups, pallet).is_err());
    assert!(warm_start::per_group(&groups, pallet, true).is_err());
}

#[test_case(1; "seed 1")]
#[test_case(99; "seed 99")]
fn random_instances_cover_every_retained_superitem(seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let superitems = (0..40)
        .map(|id| {
            superitem(
                id,
                rng.random_range(2.0..=20.0),
                rng.random_range(2.0..=20.0),
                rng.random_range(1..=6) as f32 * 2.0,
            )
        })
        .collect::<Vec<_>>();
    let pallet = Pallet::try_new(20.0, 20.0).unwrap();

    let groups = cluster::height_groups(&superitems, 1.0);
    let ws = warm_start::global(superitems.len(), &groups, pallet).unwrap();

    for group in &groups {
        for row in &group.rows {
            assert!(ws.incidence.row(row.superitem_id).iter().any(|&v| v == 1));
        }
    }
}

#[test]
fn no_superitems_yield_an_empty_warm_start() {
    let pallet = Pallet::try_new(20.0, 20.0).unwrap();
    let ws = warm_start::build(&[], pallet, &WarmStartConfig::default()).unwrap();

    assert_eq!(ws.num_superitems(), 0);
    assert_eq!(ws.num_layers(), 0);
}
