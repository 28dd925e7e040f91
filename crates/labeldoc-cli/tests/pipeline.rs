use std::fs;
use std::path::PathBuf;

use labeldoc_cli::pipeline::{ConvertRequest, run_convert};
use labeldoc_model::ConvertOptions;

fn request(input: PathBuf) -> ConvertRequest {
    ConvertRequest {
        input,
        output: None,
        lookup_file: None,
        options: ConvertOptions::default(),
    }
}

fn write_sheet(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write sheet");
    path
}

#[test]
fn converts_a_sheet_end_to_end() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_sheet(
        &dir,
        "batch.txt",
        "LABEL\tMATERIAL\tTEMPLATE\tWIDGET\n\
         LBL300\tMAT2\tTPL3\tx\n\
         LBL001\tMAT1\tTPL1\tx\n\
         LBL120\tMAT1\tTPL2\tx\n",
    );

    let result = run_convert(&request(input)).expect("convert");

    assert_eq!(result.records, 3);
    assert_eq!(result.label_lines, 3);
    // MAT1 covers the two consecutive sorted records, then MAT2
    assert_eq!(result.material_lines, 2);
    assert!(result.issues.iter().any(|issue| issue.code == "COL001"));
    assert_eq!(result.output, dir.path().join("batch_idoc.txt"));

    let document = fs::read_to_string(&result.output).expect("read document");
    assert!(document.starts_with("EDI_DC40  500000000000"));
    let first = document.find("LBL001").expect("LBL001 emitted");
    let second = document.find("LBL120").expect("LBL120 emitted");
    let third = document.find("LBL300").expect("LBL300 emitted");
    assert!(first < second && second < third, "records must be label-sorted");
}

#[test]
fn writes_the_label_data_extract_when_requested() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_sheet(
        &dir,
        "batch.txt",
        "LABEL\tMATERIAL\tTEMPLATE\nLBL002\tMAT1\tTPL2\nLBL001\tMAT1\tTPL1\n",
    );
    let mut request = request(input);
    request.options.label_data = true;

    let result = run_convert(&request).expect("convert");
    let extract_path = result.label_data.expect("extract path");
    assert_eq!(extract_path, dir.path().join("batch_labeldata.txt"));

    let extract = fs::read_to_string(&extract_path).expect("read extract");
    let lines: Vec<&str> = extract.lines().collect();
    assert_eq!(
        lines[0],
        "LABEL\tMATERIAL\tTEMPLATENUMBER\tREVISION\tLABEL_RELEASE_DATE"
    );
    assert!(lines[1].starts_with("LBL001\t"));
    assert!(lines[2].starts_with("LBL002\t"));
}

#[test]
fn aborts_on_label_without_prefix() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_sheet(
        &dir,
        "batch.txt",
        "LABEL\tMATERIAL\tTEMPLATE\nXYZ1\tMAT1\tTPL1\n",
    );
    let error = run_convert(&request(input)).expect_err("must abort");
    assert!(error.to_string().contains("IDoc document"));
}

#[test]
fn aborts_on_duplicate_columns() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_sheet(
        &dir,
        "batch.txt",
        "LABEL\tSIZE\tSIZE\nLBL001\tBOX\tBOX\n",
    );
    let error = run_convert(&request(input)).expect_err("must abort");
    assert!(error.to_string().contains("map columns"));
}

#[test]
fn aborts_on_unordered_lookup_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_sheet(
        &dir,
        "batch.txt",
        "LABEL\tMATERIAL\tTEMPLATE\nLBL001\tMAT1\tTPL1\n",
    );
    let lookup = dir.path().join("lookup.txt");
    fs::write(&lookup, "BOX\tBox\nBAG\tBag\n").expect("write lookup");
    let mut request = request(input);
    request.lookup_file = Some(lookup);
    let error = run_convert(&request).expect_err("must abort");
    assert!(error.to_string().contains("lookup table ordering"));
}

#[test]
fn replacement_lookup_table_drives_resolution() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_sheet(
        &dir,
        "batch.txt",
        "LABEL\tMATERIAL\tTEMPLATE\tLEVEL\nLBL001\tMAT1\tTPL1\tWAREHOUSE\n",
    );
    let lookup = dir.path().join("lookup.txt");
    fs::write(&lookup, "WAREHOUSE\tWarehouse\n").expect("write lookup");
    let mut request = request(input);
    request.lookup_file = Some(lookup);

    let result = run_convert(&request).expect("convert");
    assert!(result.issues.iter().all(|issue| issue.code != "LVL001"));
    let document = fs::read_to_string(&result.output).expect("read document");
    assert!(document.contains("Warehouse"));
}
