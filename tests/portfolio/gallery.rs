//! Integration tests for gallery paging and skill badges

use nightsky_portfolio::{
    PageCursor, StackIcon, Swipe, classify_swipe, parse_skills, per_page_for_width, stack_icon,
};
use proptest::prelude::*;

#[test]
fn page_size_follows_breakpoint() {
    assert_eq!(per_page_for_width(639.0), 1);
    assert_eq!(per_page_for_width(640.0), 2);
}

#[test]
fn paging_clamps_at_both_ends() {
    let mut cursor = PageCursor::new(5, 1024.0);
    assert_eq!(cursor.page_count(), 3);
    assert_eq!(cursor.previous_page(), 0);
    cursor.go_to(99);
    assert_eq!(cursor.page(), 2);
    assert_eq!(cursor.next_page(), 2);
    assert_eq!(cursor.visible(), 4..5);
}

#[test]
fn shrinking_keeps_the_first_card_visible() {
    let mut cursor = PageCursor::new(6, 1024.0);
    cursor.go_to(2);
    assert_eq!(cursor.visible(), 4..6);

    cursor.resize(375.0);
    assert_eq!(cursor.page(), 4);
    assert_eq!(cursor.visible(), 4..5);

    cursor.resize(1024.0);
    assert_eq!(cursor.page(), 2);
}

#[test]
fn shrinking_list_clamps_page() {
    let mut cursor = PageCursor::new(10, 320.0);
    cursor.go_to(9);
    cursor.set_len(3);
    assert_eq!(cursor.page(), 2);
    cursor.set_len(0);
    assert_eq!(cursor.page(), 0);
    assert!(cursor.visible().is_empty());
}

#[test]
fn swipes_turn_pages() {
    let projects = ["a", "b", "c"];
    let mut cursor = PageCursor::new(projects.len(), 320.0);

    cursor.swipe(classify_swipe(-120.0, -20.0));
    assert_eq!(cursor.slice(&projects), &["b"]);

    cursor.swipe(classify_swipe(30.0, 10.0));
    assert_eq!(cursor.page(), 1);

    cursor.swipe(classify_swipe(150.0, 10.0));
    assert_eq!(cursor.slice(&projects), &["a"]);
}

#[test]
fn swipe_threshold_is_exclusive() {
    assert_eq!(classify_swipe(100.0, 10.0), None);
    assert_eq!(classify_swipe(100.0, -10.0), None);
    assert_eq!(classify_swipe(101.0, -10.0), Some(Swipe::Next));
    assert_eq!(classify_swipe(101.0, 10.0), Some(Swipe::Previous));
}

#[test]
fn badges_for_known_skills() {
    let icons: Vec<_> = parse_skills("React Native, MySQL, Rust").iter().map(|s| stack_icon(s)).collect();
    assert_eq!(icons, vec![Some(StackIcon::React), Some(StackIcon::MySql), None]);
    assert_eq!(stack_icon("react"), None);
}

proptest! {
    #[test]
    fn page_always_valid(len in 0usize..50, widths in prop::collection::vec(200.0f32..1600.0, 1..10), jumps in prop::collection::vec(0usize..60, 1..10)) {
        let mut cursor = PageCursor::new(len, widths[0]);
        for (width, jump) in widths.iter().zip(jumps.iter().cycle()) {
            cursor.go_to(*jump);
            cursor.resize(*width);
            let count = cursor.page_count();
            if count == 0 {
                prop_assert_eq!(cursor.page(), 0);
            } else {
                prop_assert!(cursor.page() < count);
            }
            prop_assert!(cursor.visible().end <= len);
        }
    }
}
