use charsep::format_runs;

#[test]
fn test_format_runs_empty() {
    assert_eq!(format_runs(&[]), "");
}

#[test]
fn test_format_runs_single_index() {
    assert_eq!(format_runs(&[4]), "4");
}

#[test]
fn test_format_runs_collapses_consecutive_indices() {
    assert_eq!(format_runs(&[0, 1, 2, 3]), "0-3");
}

#[test]
fn test_format_runs_mixed_runs_and_singles() {
    assert_eq!(format_runs(&[0, 1, 2, 7, 9, 10]), "0-2, 7, 9-10");
}

#[test]
fn test_format_runs_all_isolated() {
    assert_eq!(format_runs(&[1, 3, 5]), "1, 3, 5");
}
