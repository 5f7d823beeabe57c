use xrfdepth::{EmissionLine, SelectionFlow, XrfError};

#[test]
fn test_compute_refused_until_both_selected() {
    let mut flow = SelectionFlow::new();
    assert!(!flow.is_ready());
    assert!(matches!(
        flow.compute(),
        Err(XrfError::SelectionIncomplete(_))
    ));

    flow.choose_element_of_interest("Fe").unwrap();
    flow.choose_line(EmissionLine::Ka1).unwrap();
    assert!(!flow.is_ready());
    assert!(matches!(
        flow.compute(),
        Err(XrfError::SelectionIncomplete(_))
    ));

    flow.choose_matrix("Fe").unwrap();
    assert!(flow.is_ready());
    assert!(flow.compute().is_ok());
}

#[test]
fn test_line_requires_element_first() {
    let mut flow = SelectionFlow::new();
    assert!(matches!(
        flow.choose_line(EmissionLine::Ka1),
        Err(XrfError::SelectionIncomplete(_))
    ));
}

#[test]
fn test_choosing_element_populates_lines() {
    let mut flow = SelectionFlow::new();
    assert!(flow.candidate_lines().is_empty());
    let lines = flow.choose_element_of_interest("Fe").unwrap();
    assert!(lines.iter().any(|&(l, _)| l == EmissionLine::Ka1));
}

#[test]
fn test_changing_element_clears_line() {
    let mut flow = SelectionFlow::new();
    flow.choose_element_of_interest("Fe").unwrap();
    flow.choose_line(EmissionLine::Ka1).unwrap();
    flow.choose_matrix("Al").unwrap();
    assert!(flow.is_ready());

    // A stale Fe Ka1 selection must not survive switching to Pb
    flow.choose_element_of_interest("Pb").unwrap();
    assert!(!flow.is_ready());
    assert!(matches!(
        flow.compute(),
        Err(XrfError::SelectionIncomplete(_))
    ));
}

#[test]
fn test_line_not_offered_for_element() {
    let mut flow = SelectionFlow::new();
    flow.choose_element_of_interest("Fe").unwrap();
    assert!(matches!(
        flow.choose_line(EmissionLine::Lg3),
        Err(XrfError::UnknownLine { .. })
    ));
}

#[test]
fn test_fraction_validation() {
    let mut flow = SelectionFlow::new();
    assert!(flow.set_detectable_fraction(0.05).is_ok());
    assert!(matches!(
        flow.set_detectable_fraction(1.5),
        Err(XrfError::InvalidFraction(_))
    ));
    assert!(matches!(
        flow.set_detectable_fraction(0.0),
        Err(XrfError::InvalidFraction(_))
    ));
}

#[test]
fn test_full_flow_report() {
    let mut flow = SelectionFlow::new();
    flow.choose_element_of_interest("iron").unwrap();
    let kev = flow.choose_line(EmissionLine::Ka1).unwrap();
    flow.choose_matrix("Fe").unwrap();

    let report = flow.compute().unwrap();
    assert_eq!(report.element_symbol, "Fe");
    assert_eq!(report.matrix_symbol, "Fe");
    assert_eq!(report.line, EmissionLine::Ka1);
    assert_eq!(report.line_energy_kev, kev);
    assert_eq!(report.detectable_photon_fraction, 0.01);
    assert!(report.depth_mm > 0.0);

    // Must agree with going through the database handle directly
    let direct = flow
        .db()
        .fluorescence_depth_mm("Fe", kev * 1000.0, 0.01)
        .unwrap();
    assert_eq!(report.depth_mm, direct);

    let text = report.to_string();
    assert!(text.contains("Fe Ka1"), "report text: {text}");
    assert!(text.contains("mm"), "report text: {text}");
    assert!(text.contains("1.00%"), "report text: {text}");
}

#[test]
fn test_larger_fraction_shrinks_depth() {
    let mut flow = SelectionFlow::new();
    flow.choose_element_of_interest("Cu").unwrap();
    flow.choose_line(EmissionLine::Ka1).unwrap();
    flow.choose_matrix("Cu").unwrap();
    let at_1pct = flow.compute().unwrap().depth_mm;

    flow.set_detectable_fraction(0.5).unwrap();
    let at_50pct = flow.compute().unwrap().depth_mm;
    assert!(at_1pct > at_50pct);
}
