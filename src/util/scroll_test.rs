use super::*;

fn sections() -> Vec<SectionMetrics> {
    vec![
        SectionMetrics { id: "home".to_owned(), top: 0.0, height: 600.0 },
        SectionMetrics { id: "about".to_owned(), top: 600.0, height: 400.0 },
        SectionMetrics { id: "contact".to_owned(), top: 1000.0, height: 500.0 },
    ]
}

// =============================================================
// Thresholds
// =============================================================

#[test]
fn header_shadow_appears_past_fifty_pixels() {
    assert!(!header_scrolled(0.0));
    assert!(!header_scrolled(50.0));
    assert!(header_scrolled(50.5));
}

#[test]
fn back_to_top_appears_past_three_hundred_pixels() {
    assert!(!show_back_to_top(300.0));
    assert!(show_back_to_top(301.0));
}

#[test]
fn section_reveals_one_hundred_pixels_above_viewport_bottom() {
    assert!(section_revealed(699.0, 800.0));
    assert!(!section_revealed(700.0, 800.0));
    assert!(!section_revealed(900.0, 800.0));
}

// =============================================================
// Active section
// =============================================================

#[test]
fn active_section_none_before_any_section() {
    let sections = vec![SectionMetrics { id: "about".to_owned(), top: 600.0, height: 400.0 }];
    assert_eq!(active_section(0.0, &sections), None);
}

#[test]
fn active_section_probes_one_hundred_pixels_ahead() {
    let s = sections();
    // probe = 500 + 100 lands exactly on the about section start
    assert_eq!(active_section(500.0, &s), Some("about"));
    assert_eq!(active_section(499.0, &s), Some("home"));
}

#[test]
fn active_section_upper_bound_is_exclusive() {
    let s = sections();
    // probe = 999.99 is still inside about; 1000 belongs to contact
    assert_eq!(active_section(899.0, &s), Some("about"));
    assert_eq!(active_section(900.0, &s), Some("contact"));
}

#[test]
fn active_section_none_past_the_last_section() {
    let s = sections();
    assert_eq!(active_section(1500.0, &s), None);
}

#[test]
fn active_section_last_match_wins_on_overlap() {
    let overlapping = vec![
        SectionMetrics { id: "outer".to_owned(), top: 0.0, height: 2000.0 },
        SectionMetrics { id: "inner".to_owned(), top: 500.0, height: 300.0 },
    ];
    assert_eq!(active_section(500.0, &overlapping), Some("inner"));
    assert_eq!(active_section(1200.0, &overlapping), Some("outer"));
}

#[test]
fn active_section_with_no_sections_is_none() {
    assert_eq!(active_section(100.0, &[]), None);
}
