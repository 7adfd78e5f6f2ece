//! Integration test for the `meadow` fixture set.
//!
//! Large group: designs `AL2a1b4` and `BL2c3` over `{a: 5, b: 2, c: 4}`.
//! Hand-computed trace of the greedy rounds:
//!
//! 1. `B` costs (1-4/11) + (1-3/10) + (1-5/9) ≈ 1.78 against `A`'s ≈ 2.33,
//!    so `B` commits `{c: 2, a: 1}` → ledger `{a: 4, b: 2, c: 2}`.
//! 2. `B` again (≈ 1.94 vs ≈ 2.34), committing `{c: 2, a: 1}` →
//!    ledger `{a: 3, b: 2, c: 0}`.
//! 3. `B` is infeasible (no `c` left); `A` commits `{a: 3, b: 1}` (two
//!    required `a`, one required `b`, and the free slot resolves the
//!    `a`/`b` tie to `a`) → ledger `{b: 1}`.
//! 4. Nothing is feasible; the group ends with one `b` left over.
//!
//! Small group: design `CS1x2` over `{x: 3, y: 1}` yields `{x: 2}` then
//! `{x: 1, y: 1}` (the last free slot goes to `y`, by then the most
//! abundant species), exhausting the group.

use testresult::TestResult;

use posy::{
    allocators::{Allocator, greedy::GreedyAllocator},
    fixtures::Fixture,
    species::{SizeGroup, Species},
};

#[test]
fn meadow_large_group_matches_the_hand_computed_trace() -> TestResult {
    let fixture = Fixture::from_set("meadow")?;
    let mut ledger = fixture.ledger(SizeGroup::Large);

    let bouquets = GreedyAllocator::allocate(&fixture.catalog, SizeGroup::Large, &mut ledger)?;

    assert_eq!(
        bouquets.codes(&fixture.catalog)?,
        vec!["BL1a2c", "BL1a2c", "AL3a1b"]
    );

    assert_eq!(ledger.remaining(Species::new('a')?), 0);
    assert_eq!(ledger.remaining(Species::new('b')?), 1);
    assert_eq!(ledger.remaining(Species::new('c')?), 0);
    assert_eq!(ledger.remaining_total(), 1);

    Ok(())
}

#[test]
fn meadow_small_group_exhausts_the_inventory() -> TestResult {
    let fixture = Fixture::from_set("meadow")?;
    let mut ledger = fixture.ledger(SizeGroup::Small);

    let bouquets = GreedyAllocator::allocate(&fixture.catalog, SizeGroup::Small, &mut ledger)?;

    assert_eq!(bouquets.codes(&fixture.catalog)?, vec!["CS2x", "CS1x1y"]);
    assert!(ledger.is_empty(), "all small flowers should be used");

    Ok(())
}

#[test]
fn meadow_conserves_flowers_across_groups() -> TestResult {
    let fixture = Fixture::from_set("meadow")?;

    for group in SizeGroup::ALL {
        let initial = fixture.ledger(group);
        let mut ledger = fixture.ledger(group);

        let bouquets = GreedyAllocator::allocate(&fixture.catalog, group, &mut ledger)?;

        for (species, initial_count) in initial.species() {
            let used: u64 = bouquets
                .iter()
                .map(|bouquet| bouquet.composition().count(species))
                .sum();

            assert_eq!(
                used + ledger.remaining(species),
                initial_count,
                "species {species} must be conserved in the {group} group"
            );
        }
    }

    Ok(())
}

#[test]
fn meadow_bouquets_satisfy_their_designs() -> TestResult {
    let fixture = Fixture::from_set("meadow")?;

    for group in SizeGroup::ALL {
        let mut ledger = fixture.ledger(group);
        let bouquets = GreedyAllocator::allocate(&fixture.catalog, group, &mut ledger)?;

        for bouquet in &bouquets {
            let Some(rule) = fixture.catalog.get(bouquet.design()) else {
                panic!("bouquet references an unknown design");
            };

            assert_eq!(
                bouquet.composition().total(),
                rule.total(),
                "bouquet size must match the design total"
            );

            for (species, minimum) in rule.minimums() {
                assert!(
                    bouquet.composition().count(species) >= minimum,
                    "design {} requires at least {minimum} of species {species}",
                    rule.code()
                );
            }
        }
    }

    Ok(())
}

#[test]
fn meadow_allocation_is_deterministic() -> TestResult {
    let fixture = Fixture::from_set("meadow")?;

    for group in SizeGroup::ALL {
        let mut first_ledger = fixture.ledger(group);
        let mut second_ledger = fixture.ledger(group);

        let first = GreedyAllocator::allocate(&fixture.catalog, group, &mut first_ledger)?;
        let second = GreedyAllocator::allocate(&fixture.catalog, group, &mut second_ledger)?;

        assert_eq!(
            first.codes(&fixture.catalog)?,
            second.codes(&fixture.catalog)?,
            "repeated runs must produce identical bouquet sequences"
        );
    }

    Ok(())
}
