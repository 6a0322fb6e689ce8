extern crate offtarget;

use offtarget::errors::ErrorKind;
use offtarget::radius::{Extension, Radius};

#[test]
fn test_parse_valid_radii() {
    let radius: Radius = "5_9_9".parse().unwrap();
    assert_eq!((radius.seed(), radius.extension(), radius.last()), (5, 9, 9));

    let radius: Radius = "5_10_20".parse().unwrap();
    assert_eq!((radius.seed(), radius.extension(), radius.last()), (5, 10, 20));

    let radius: Radius = "5_9_20".parse().unwrap();
    assert_eq!(radius, Radius::new(Extension::Nine, 20).unwrap());
}

#[test]
fn test_parse_invalid_radii() {
    for value in &[
        "", "5_10", "5_10_20_20", "4_9_9", "6_10_10", "5_8_10", "5_11_11", "5_10_9", "5_9_8",
        "5_10_21", "5_x_10", "-5_10_10",
    ] {
        let err = value.parse::<Radius>().unwrap_err();

        match err.kind() {
            ErrorKind::InvalidRadius(_) => {}
            other => panic!("unexpected error for {:?}: {:?}", value, other),
        }
    }
}

#[test]
fn test_from_tiers() {
    assert!(Radius::from_tiers(5, 9, 9).is_ok());
    assert!(Radius::from_tiers(5, 10, 10).is_ok());
    assert!(Radius::from_tiers(5, 10, 9).is_err());
    assert!(Radius::from_tiers(5, 9, 21).is_err());
    assert!(Radius::from_tiers(0, 9, 20).is_err());
}

#[test]
fn test_exact_radius() {
    assert_eq!(Radius::exact(), "5_10_20".parse::<Radius>().unwrap());
}

#[test]
fn test_display() {
    let radius = Radius::new(Extension::Ten, 15).unwrap();

    assert_eq!(radius.to_string(), "5_10_15");
}
