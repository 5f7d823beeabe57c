use approx::assert_relative_eq;
use xrfdepth::{AtomicDb, XrfError};

#[test]
fn test_element_count() {
    let db = AtomicDb::new();
    assert_eq!(db.element_count(), 98);
}

#[test]
fn test_atomic_number_by_symbol() {
    let db = AtomicDb::new();
    assert_eq!(db.atomic_number("H").unwrap(), 1);
    assert_eq!(db.atomic_number("Fe").unwrap(), 26);
    assert_eq!(db.atomic_number("Au").unwrap(), 79);
    assert_eq!(db.atomic_number("U").unwrap(), 92);
}

#[test]
fn test_atomic_number_by_name() {
    let db = AtomicDb::new();
    assert_eq!(db.atomic_number("iron").unwrap(), 26);
    assert_eq!(db.atomic_number("Gold").unwrap(), 79);
    assert_eq!(db.atomic_number("hydrogen").unwrap(), 1);
}

#[test]
fn test_atomic_number_by_z_string() {
    let db = AtomicDb::new();
    assert_eq!(db.atomic_number("26").unwrap(), 26);
    assert_eq!(db.atomic_number("1").unwrap(), 1);
}

#[test]
fn test_atomic_number_by_invalid_z_string() {
    let db = AtomicDb::new();
    assert!(matches!(
        db.atomic_number("0"),
        Err(XrfError::UnknownElement(_))
    ));
    assert!(matches!(
        db.atomic_number("999"),
        Err(XrfError::UnknownElement(_))
    ));
}

#[test]
fn test_unknown_element() {
    let db = AtomicDb::new();
    assert!(matches!(
        db.atomic_number("Xx"),
        Err(XrfError::UnknownElement(_))
    ));
}

#[test]
fn test_symbol() {
    let db = AtomicDb::new();
    assert_eq!(db.symbol("26").unwrap(), "Fe");
    assert_eq!(db.symbol("iron").unwrap(), "Fe");
    assert_eq!(db.symbol("fe").unwrap(), "Fe");
}

#[test]
fn test_element_name() {
    let db = AtomicDb::new();
    assert_eq!(db.element_name("Fe").unwrap(), "Iron");
    assert_eq!(db.element_name("W").unwrap(), "Tungsten");
}

#[test]
fn test_density() {
    let db = AtomicDb::new();
    assert_relative_eq!(db.density("Fe").unwrap(), 7.874, epsilon = 0.01);
    assert_relative_eq!(db.density("Au").unwrap(), 19.3, epsilon = 0.1);
}

#[test]
fn test_elements_iterator_ascending() {
    let db = AtomicDb::new();
    let elements: Vec<_> = db.elements().collect();
    assert_eq!(elements[0], (1, "H", "Hydrogen"));
    assert_eq!(elements[25], (26, "Fe", "Iron"));
    for pair in elements.windows(2) {
        assert!(pair[0].0 < pair[1].0);
    }
}
