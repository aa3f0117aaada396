/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use levelsync::prelude::*;

fn order(order: &[usize], levels: &[usize]) -> VisitOrder {
    VisitOrder::from_parts(order.to_vec(), levels.to_vec())
}

#[test]
fn test_strict_order() {
    let oracle = order(&[1, 2, 3], &[1, 2]);
    assert_eq!(
        check(&oracle, &oracle.clone(), CheckMode::StrictOrder),
        Outcome::Pass
    );

    let permuted = order(&[1, 3, 2], &[1, 2]);
    assert_eq!(
        check(&oracle, &permuted, CheckMode::StrictOrder),
        Outcome::Fail(Mismatch::Position {
            index: 1,
            expected: 2,
            observed: 3
        })
    );
}

#[test]
fn test_length_mismatch() {
    let oracle = order(&[1, 2, 3], &[1, 2]);
    let short = order(&[1, 2], &[1, 1]);
    let expected = Outcome::Fail(Mismatch::Length {
        expected: 3,
        observed: 2,
    });
    // Length is checked first in every mode.
    assert_eq!(check(&oracle, &short, CheckMode::StrictOrder), expected);
    assert_eq!(check(&oracle, &short, CheckMode::SetEquality), expected);
    assert_eq!(check(&oracle, &short, CheckMode::LevelSets), expected);
}

#[test]
fn test_set_equality() {
    let oracle = order(&[1, 2, 3], &[1, 2]);
    let permuted = order(&[1, 3, 2], &[1, 2]);
    assert_eq!(
        check(&oracle, &permuted, CheckMode::SetEquality),
        Outcome::Pass
    );

    let different = order(&[1, 2, 4], &[1, 2]);
    assert_eq!(
        check(&oracle, &different, CheckMode::SetEquality),
        Outcome::Fail(Mismatch::Vertex { vertex: 3 })
    );

    // A duplicate discovery changes the set even at equal length.
    let duplicated = order(&[1, 2, 2], &[1, 2]);
    assert_eq!(
        check(&oracle, &duplicated, CheckMode::SetEquality),
        Outcome::Fail(Mismatch::Vertex { vertex: 2 })
    );
}

#[test]
fn test_level_sets() {
    let oracle = order(&[1, 2, 3], &[1, 2]);
    let permuted = order(&[1, 3, 2], &[1, 2]);
    assert_eq!(
        check(&oracle, &permuted, CheckMode::LevelSets),
        Outcome::Pass
    );

    let shifted = order(&[1, 2, 3], &[1, 1, 1]);
    assert_eq!(
        check(&oracle, &shifted, CheckMode::LevelSets),
        Outcome::Fail(Mismatch::Distance {
            vertex: 3,
            expected: 1,
            observed: 2
        })
    );
}

#[test]
fn test_display() {
    assert_eq!(format!("{}", Outcome::Pass), "Pass");
    let oracle = order(&[1, 2], &[1, 1]);
    let permuted = order(&[2, 1], &[1, 1]);
    let outcome = check(&oracle, &permuted, CheckMode::StrictOrder);
    assert_eq!(
        format!("{outcome}"),
        "Fail: mismatch at index 0 (expected vertex 1, observed vertex 2)"
    );
}

#[test]
#[should_panic(expected = "Level sizes")]
fn test_from_parts_mismatch() {
    let _ = VisitOrder::from_parts(vec![1, 2], vec![1]);
}
