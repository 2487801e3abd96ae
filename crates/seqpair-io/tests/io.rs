// Integration tests for the file-I/O and test-case-generation collaborators:
// rect/net round-tripping, out-of-range rejection, options-file validation,
// generator domain checks, and overlap verification, driven only through
// each crate's public API.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use seqpair_core::{AlphaEnergy, Layout};
use seqpair_io::{net, options, rect, testgen, verify, Error};

fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("seqpair-io-integration-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn generated_instance_round_trips_through_rect_and_net_files() {
    let dir = scratch_dir("generate-round-trip");
    let mut rng = SmallRng::seed_from_u64(11);
    let (layout, nets) = testgen::generate(16, 6, 2, 5, &mut rng).unwrap();

    let rect_path = dir.join("rects.txt");
    let net_path = dir.join("nets.txt");
    rect::write_rects(&rect_path, &layout).unwrap();
    net::write_nets(&net_path, &nets).unwrap();

    let read_layout = rect::read_rects(&rect_path).unwrap();
    let read_nets = net::read_nets(&net_path, read_layout.len()).unwrap();

    assert_eq!(read_layout.widths(), layout.widths());
    assert_eq!(read_layout.heights(), layout.heights());
    assert_eq!(read_nets, nets);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn net_file_referencing_an_out_of_range_rectangle_is_rejected_without_partial_state() {
    let dir = scratch_dir("oob-net");
    let rect_path = dir.join("rects.txt");
    let net_path = dir.join("nets.txt");
    std::fs::write(&rect_path, "0 0 2 2\n0 0 3 3\n").unwrap();
    std::fs::write(&net_path, "0 1\n1 4\n").unwrap();

    let layout = rect::read_rects(&rect_path).unwrap();
    let err = net::read_nets(&net_path, layout.len()).unwrap_err();
    assert!(matches!(err, Error::Core(seqpair_core::Error::NetIndexOutOfRange { index: 4, len: 2 })));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn options_file_outside_domain_is_rejected_by_the_same_validation_as_options_new() {
    let dir = scratch_dir("bad-options");
    let path = dir.join("options.txt");
    std::fs::write(&path, "0.9 100 0.95 0.5 0.01\n").unwrap();

    let err = options::read_options(&path).unwrap_err();
    assert!(matches!(err, Error::Core(seqpair_core::Error::InvalidOption { field: "restart_ratio", .. })));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn generator_rejects_more_nets_than_the_two_to_one_recommendation_allows() {
    let mut rng = SmallRng::seed_from_u64(2);
    assert!(matches!(testgen::generate(6, 4, 1, 4, &mut rng), Err(Error::InvalidTestCaseParams { .. })));
}

#[test]
fn a_generated_instance_anneals_to_a_non_overlapping_layout_that_passes_the_acceptance_check() {
    let mut rng = SmallRng::seed_from_u64(123);
    let (mut layout, nets) = testgen::generate(12, 4, 2, 5, &mut rng).unwrap();
    let energy_fn = AlphaEnergy::new(0.5);
    let options = seqpair_core::Options::new(0.9, 50, 0.9, 2.0, 0.05).unwrap();

    let report = seqpair_core::sequenced::run(&mut layout, &nets, &energy_fn, &options, seqpair_core::Method::Lcs, &mut rng, 0);

    assert!(verify::check_cost(&layout, &nets, &energy_fn, report.best_energy));
    assert_eq!(verify::first_overlap(&layout), None);
}

#[test]
fn first_overlap_flags_a_constructed_intersection() {
    let mut layout = Layout::new();
    layout.push(4, 4);
    layout.push(4, 4);
    layout.set_positions(&[0, 2], &[0, 2]);
    assert_eq!(verify::first_overlap(&layout), Some((0, 1)));
}
