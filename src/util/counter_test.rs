use super::*;

#[test]
fn lands_exactly_on_the_target() {
    let values: Vec<u32> = CountUp::new(24).collect();
    assert_eq!(values.last(), Some(&24));
}

#[test]
fn never_exceeds_the_target() {
    for value in CountUp::new(37) {
        assert!(value <= 37);
    }
}

#[test]
fn values_are_monotonically_non_decreasing() {
    let values: Vec<u32> = CountUp::new(150).collect();
    for pair in values.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[test]
fn takes_about_one_hundred_steps() {
    let count = CountUp::new(1000).count();
    assert_eq!(count, 100);
}

#[test]
fn intermediate_values_are_ceiled() {
    // increment = 0.03, so the first displayed value is ceil(0.03) = 1.
    let mut counter = CountUp::new(3);
    assert_eq!(counter.next(), Some(1));
}

#[test]
fn zero_target_finishes_immediately() {
    let values: Vec<u32> = CountUp::new(0).collect();
    assert_eq!(values, vec![0]);
}
