//! Tests for the `royalties` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const STATEMENT: &str = "RightsHolder,Type,Name,Amount\n\
                         PHONOLITE,Streaming,Ana,10.50\n\
                         PHONOLITE,Sync License,Bruno,4.25\n\
                         ACME,Advance Refund,Carla,-2.00\n";

fn royalties() -> Command {
    let mut cmd = Command::cargo_bin("royalties").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn report_prints_summary_and_writes_workbook() {
    let temp = TempDir::new().unwrap();
    let statement = temp.path().join("operacoes.csv");
    let payers = temp.path().join("fontes.csv");
    std::fs::write(&statement, STATEMENT).unwrap();
    std::fs::write(&payers, "Name,Payer\nAna,ECAD\n").unwrap();

    royalties()
        .arg("report")
        .arg(&statement)
        .arg("--payers")
        .arg(&payers)
        .args(["--period", "2024-03", "--output-dir"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Processado: R$ 12.75"))
        .stdout(predicate::str::contains("Resumo por Fonte e Categoria"))
        .stdout(predicate::str::contains("resumo_royalties_2024-03.xlsx"));

    let written = temp.path().join("resumo_royalties_2024-03.xlsx");
    let bytes = std::fs::read(written).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn quiet_report_only_prints_the_path() {
    let temp = TempDir::new().unwrap();
    let statement = temp.path().join("operacoes.csv");
    std::fs::write(&statement, STATEMENT).unwrap();

    royalties()
        .arg("--quiet")
        .arg("report")
        .arg(&statement)
        .arg("--output-dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Processado").not())
        .stdout(predicate::str::contains("resumo_royalties.xlsx"));
}

#[test]
fn missing_column_fails_with_column_name() {
    let temp = TempDir::new().unwrap();
    let statement = temp.path().join("operacoes.csv");
    std::fs::write(&statement, "RightsHolder,Type,Name\nPHONOLITE,Streaming,Ana\n").unwrap();

    royalties()
        .arg("report")
        .arg(&statement)
        .arg("--output-dir")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount"));

    assert!(!temp.path().join("resumo_royalties.xlsx").exists());
}

#[test]
fn invalid_period_is_rejected() {
    let temp = TempDir::new().unwrap();
    let statement = temp.path().join("operacoes.csv");
    std::fs::write(&statement, STATEMENT).unwrap();

    royalties()
        .arg("report")
        .arg(&statement)
        .args(["--period", "2024-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid period"));
}

#[test]
fn classify_prints_category_label() {
    royalties()
        .args(["classify", "PHONOLITE", "Synchro Fee"])
        .assert()
        .success()
        .stdout("Direitos Autorais – Sincronização\n");

    royalties()
        .args(["classify", "ACME", "Advance Refund"])
        .assert()
        .success()
        .stdout("Recuperação de Adiantamentos\n");
}

#[test]
fn config_shows_defaults_and_overrides() {
    royalties()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"empty_payer_label\": \"(vazio)\""));

    let temp = TempDir::new().unwrap();
    let config = temp.path().join("settings.json");
    std::fs::write(&config, r#"{"grand_total_label": "Grand Total"}"#).unwrap();

    royalties()
        .arg("config")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"grand_total_label\": \"Grand Total\""))
        .stdout(predicate::str::contains("\"summary_sheet_name\": \"Summary\""));
}
