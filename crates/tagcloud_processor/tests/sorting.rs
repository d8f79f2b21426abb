/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use tagcloud_core::{Order, OrderBy, TagCloudArgs, TagCloudOptions};

#[test]
fn test_name_ascending_and_descending() {
    let tags = make_tags(&[("zebra", 1), ("apple", 2), ("mango", 3)]);

    let asc = records(&tags, &TagCloudOptions::default());
    assert_eq!(names(&asc), vec!["apple", "mango", "zebra"]);

    let desc = records(
        &tags,
        &TagCloudOptions {
            order: Order::Desc,
            ..Default::default()
        },
    );
    assert_eq!(names(&desc), vec!["zebra", "mango", "apple"]);
}

#[test]
fn test_count_sort_is_stable() {
    let tags = make_tags(&[("d", 2), ("c", 1), ("b", 2), ("a", 1)]);
    let options = TagCloudOptions {
        orderby: OrderBy::Count,
        ..Default::default()
    };
    assert_eq!(names(&records(&tags, &options)), vec!["c", "a", "d", "b"]);
}

#[test]
fn test_name_sort_is_stable() {
    let tags = make_tags(&[("Apple", 1), ("apple", 2), ("APPLE", 3)]);

    let asc = records(&tags, &TagCloudOptions::default());
    assert_eq!(names(&asc), vec!["Apple", "apple", "APPLE"]);

    let desc = records(
        &tags,
        &TagCloudOptions {
            order: Order::Desc,
            ..Default::default()
        },
    );
    assert_eq!(names(&desc), vec!["APPLE", "apple", "Apple"]);
}

#[test]
fn test_name_sort_is_natural() {
    let tags = make_tags(&[("tag10", 1), ("Tag2", 1), ("tag1", 1)]);
    assert_eq!(
        names(&records(&tags, &TagCloudOptions::default())),
        vec!["tag1", "Tag2", "tag10"]
    );
}

#[test]
fn test_number_truncates_after_sorting() {
    let specs: Vec<(String, u64)> = (1..=10).map(|i| (format!("t{:02}", i), i)).collect();
    let specs: Vec<(&str, u64)> = specs.iter().map(|(n, c)| (n.as_str(), *c)).collect();
    let tags = make_tags(&specs);
    let options = TagCloudOptions {
        number: 3,
        orderby: OrderBy::Count,
        order: Order::Desc,
        ..Default::default()
    };
    let out = records(&tags, &options);
    assert_eq!(names(&out), vec!["t10", "t09", "t08"]);
    // Sizes span only the survivors.
    assert_eq!(out[0].font_size, 30.0);
    assert_eq!(out[2].font_size, 12.0);
}

#[test]
fn test_random_order_keeps_every_tag() {
    let tags = make_tags(&[("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
    let options = TagCloudOptions {
        order: Order::Rand,
        ..Default::default()
    };
    let mut shuffled = names(&records(&tags, &options));
    shuffled.sort();
    assert_eq!(shuffled, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_seeded_order_is_reproducible() {
    let specs: Vec<(String, u64)> = (0..30).map(|i| (format!("tag{}", i), i)).collect();
    let specs: Vec<(&str, u64)> = specs.iter().map(|(n, c)| (n.as_str(), *c)).collect();
    let tags = make_tags(&specs);
    let args: TagCloudArgs = serde_yaml::from_str("order: RAND\nseed: 42\n").unwrap();
    let options = args.resolve();
    assert_eq!(names(&records(&tags, &options)), names(&records(&tags, &options)));
}

#[test]
fn test_unknown_enum_values_fall_back() {
    let tags = make_tags(&[("b", 1), ("a", 5)]);
    let args: TagCloudArgs =
        serde_yaml::from_str("orderby: popularity\norder: sideways\n").unwrap();
    let options = args.resolve();
    assert_eq!(options.orderby, OrderBy::Count);
    assert_eq!(options.order, Order::Asc);
    assert_eq!(names(&records(&tags, &options)), vec!["b", "a"]);
}
