mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

const INVOICES: &str = r#"[
    {"reference": "INV-1", "amount": 10},
    {"reference": "INV-2", "amount": 10, "amount_paid": 5, "payments": [{"reference": "INV-2", "amount": 5}]},
    {"reference": "INV-3", "amount": 20, "type": "commercial"}
]"#;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let invoices = common::write_fixture(INVOICES);
    let payments = common::write_fixture(
        "reference, amount\nINV-1, 1\nINV-2, 5\nINV-3, 25\nINV-3, 20\n",
    );

    let mut cmd = Command::new(cargo_bin!("invoice-payments"));
    cmd.arg(payments.path()).arg("--invoices").arg(invoices.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("reference,amount,outcome"))
        .stdout(predicate::str::contains("INV-1,1,invoice is now partially paid"))
        .stdout(predicate::str::contains(
            "INV-2,5,\"final partial payment received, invoice is now fully paid\"",
        ))
        .stdout(predicate::str::contains(
            "INV-3,25,the payment is greater than the invoice amount",
        ))
        .stdout(predicate::str::contains("INV-3,20,invoice is now fully paid"));

    Ok(())
}

#[test]
fn test_cli_writes_final_state() {
    let invoices = common::write_fixture(INVOICES);
    let payments = common::write_fixture("reference, amount\nINV-3, 20\nINV-2, 1\n");
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("final.json");

    let mut cmd = Command::new(cargo_bin!("invoice-payments"));
    cmd.arg(payments.path())
        .arg("--invoices")
        .arg(invoices.path())
        .arg("--output")
        .arg(&output);
    cmd.assert().success();

    let contents = std::fs::read_to_string(&output).unwrap();
    let state: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let state = state.as_array().unwrap();
    assert_eq!(state.len(), 3);

    let inv2 = &state[1];
    assert_eq!(inv2["reference"], "INV-2");
    assert_eq!(inv2["amount_paid"], "1");
    assert_eq!(inv2["payments"].as_array().unwrap().len(), 2);

    let inv3 = &state[2];
    assert_eq!(inv3["reference"], "INV-3");
    assert_eq!(inv3["tax_amount"], "2.80");
}

#[test]
fn test_cli_missing_invoices_file_fails() {
    let payments = common::write_fixture("reference, amount\nINV-1, 1\n");

    let mut cmd = Command::new(cargo_bin!("invoice-payments"));
    cmd.arg(payments.path())
        .arg("--invoices")
        .arg("does/not/exist.json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("opening invoices file"));
}
