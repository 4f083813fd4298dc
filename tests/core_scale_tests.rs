use laureate_chart::core::LinearScale;

#[test]
fn scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(1901.0, 2023.0).expect("valid scale");
    let range = (0.0, 700.0);

    let original = 1969.0;
    let px = scale.domain_to_range(original, range).expect("to pixel");
    let recovered = scale.range_to_domain(px, range).expect("from pixel");

    let epsilon = 1e-9;
    assert!((recovered - original).abs() <= epsilon);
}

#[test]
fn inverted_range_puts_domain_max_on_top() {
    let scale = LinearScale::new(0.0, 12.0).expect("valid scale");
    let range = (290.0, 0.0);

    let top = scale.domain_to_range(12.0, range).expect("top pixel");
    let bottom = scale.domain_to_range(0.0, range).expect("bottom pixel");

    assert_eq!(top, 0.0);
    assert_eq!(bottom, 290.0);
}

#[test]
fn zero_span_domain_is_rejected() {
    assert!(LinearScale::new(1990.0, 1990.0).is_err());
    assert!(LinearScale::new(f64::NAN, 1.0).is_err());
}

#[test]
fn covering_widens_zero_span_domain() {
    let scale = LinearScale::covering(1990.0, 1990.0).expect("covering scale");
    assert_eq!(scale.domain(), (1989.0, 1991.0));

    let untouched = LinearScale::covering(0.0, 4.0).expect("covering scale");
    assert_eq!(untouched.domain(), (0.0, 4.0));
}

#[test]
fn zero_width_range_is_rejected() {
    let scale = LinearScale::new(0.0, 1.0).expect("valid scale");
    assert!(scale.domain_to_range(0.5, (10.0, 10.0)).is_err());
    assert!(scale.range_to_domain(5.0, (0.0, f64::INFINITY)).is_err());
}

#[test]
fn non_finite_value_is_rejected() {
    let scale = LinearScale::new(0.0, 1.0).expect("valid scale");
    assert!(scale.domain_to_range(f64::NAN, (0.0, 100.0)).is_err());
}
