use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budget(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("--config")
        .arg(config_dir.path().join("settings.json"));
    cmd
}

#[test]
fn renders_seeded_budget_and_exits_on_eof() {
    let config_dir = TempDir::new().unwrap();

    budget(&config_dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("ENTRADAS (RENDAS)"))
        .stdout(predicate::str::contains("MORADIA (ALUGUEL/FINANCIAMENTO)"))
        .stdout(predicate::str::contains("SALDO MENSAL: R$ 0,00 [POSITIVO]"));
}

#[test]
fn applies_commands_from_stdin() {
    let config_dir = TempDir::new().unwrap();

    budget(&config_dir)
        .write_stdin(
            "set income i1 -v 4000\n\
             set essential e1 -v 1500\n\
             set non-essential e6 -v 700,50\n\
             summary\n\
             quit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("SALDO MENSAL: R$ 1.799,50 [POSITIVO]"))
        .stdout(predicate::str::contains("RESERVA DE EMERGÊNCIA IDEAL: R$ 13.203,00"));
}

#[test]
fn empty_flag_starts_without_items() {
    let config_dir = TempDir::new().unwrap();

    budget(&config_dir)
        .arg("--empty")
        .write_stdin("show\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nenhum item adicionado."))
        .stdout(predicate::str::contains("SALÁRIO").not());
}

#[test]
fn settings_file_controls_formatting() {
    let config_dir = TempDir::new().unwrap();
    std::fs::write(
        config_dir.path().join("settings.json"),
        r#"{ "currency_symbol": "$", "thousands_separator": ",", "decimal_separator": ".", "show_date": false }"#,
    )
    .unwrap();

    budget(&config_dir)
        .write_stdin("set income i1 -v 2500\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("SALDO MENSAL: $ 2,500.00 [POSITIVO]"))
        .stdout(predicate::str::contains("Atualizado em").not());
}

#[test]
fn json_output_and_bad_commands() {
    let config_dir = TempDir::new().unwrap();

    budget(&config_dir)
        .arg("--json")
        .write_stdin("nonsense\nset essential e2 -v -50\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid command"))
        .stdout(predicate::str::contains("\"emergency_reserve\":0.0"));
}

#[test]
fn invalid_settings_file_fails() {
    let config_dir = TempDir::new().unwrap();
    std::fs::write(config_dir.path().join("settings.json"), "{ broken").unwrap();

    budget(&config_dir)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn help_lists_session_commands() {
    let config_dir = TempDir::new().unwrap();

    budget(&config_dir)
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("End the session"))
        .stdout(predicate::str::contains("Invalid command").not());
}
