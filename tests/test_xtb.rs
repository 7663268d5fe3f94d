use qclog::{ExtractError, XtbLog};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

const XTB_LOG: &str = r#"      -----------------------------------------------------------
     |                           x T B                           |
      -----------------------------------------------------------

          Fukui index Calculation

     #        f(+)     f(-)     f(0)
     1O      -0.086   -0.598   -0.342
     2H      -0.457   -0.201   -0.329
     3H      -0.457   -0.201   -0.329

 Property Printout
 normal termination of xtb
"#;

fn write_fixture(name: &str, content: &str) -> PathBuf {
    let path = PathBuf::from(name);
    let mut file = File::create(&path).unwrap();
    write!(file, "{}", content).unwrap();
    path
}

#[test]
fn test_fukui_indices_split_fused_atom_tokens() {
    let path = write_fixture("test_xtb_fukui.log", XTB_LOG);
    let indices = XtbLog::open(&path).fukui_indices().unwrap();
    std::fs::remove_file(&path).unwrap();

    let atom_numbers: Vec<usize> = indices.keys().copied().collect();
    assert_eq!(atom_numbers, vec![1, 2, 3]);

    let oxygen = &indices[&1];
    assert_eq!(oxygen.element, "O");
    assert_eq!(oxygen.f_plus, -0.086);
    assert_eq!(oxygen.f_minus, -0.598);
    assert_eq!(oxygen.f_zero, -0.342);
    assert_eq!(indices[&3].element, "H");
}

#[test]
fn test_fukui_missing_is_an_error() {
    let path = write_fixture(
        "test_xtb_fukui_missing.log",
        "      -----------------------------------------------------------\n normal termination of xtb\n",
    );
    let result = XtbLog::open(&path).fukui_indices();
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(
        result,
        Err(ExtractError::PropertyNotFound("Fukui indices"))
    ));
}
