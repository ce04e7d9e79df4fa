use std::path::PathBuf;
use std::process::{Command, Output};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_nsdecay"))
}

fn fixture_path(name: &str) -> PathBuf {
    // crates/ns-cli -> repo root
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../tests/fixtures").join(name)
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

#[test]
fn chain_prints_indented_decays() {
    let events = fixture_path("higgs_bb_events.json");
    let out = run(&["chain", "--input", events.to_string_lossy().as_ref()]);
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        &lines[..5],
        &[
            "# event 1, particle 2 (PDG ID 25)",
            "Higgs found! pT: 120.5, Eta: 0.3, Mass: 125.1",
            "PDG ID: 25 | Status: 62 | pT: 120.5 | Eta: 0.3",
            "  PDG ID: 5 | Status: 23 | pT: 60 | Eta: 0.1",
            "  PDG ID: -5 | Status: 23 | pT: 58 | Eta: -0.2",
        ]
    );
    assert!(stdout.contains("    PDG ID: 16 | Status: 1 | pT: 12 | Eta: -0.7"));
    assert!(!stdout.contains("PDG ID: 23"));
}

#[test]
fn chain_respects_max_depth() {
    let events = fixture_path("higgs_bb_events.json");
    let out = run(&["chain", "--input", events.to_string_lossy().as_ref(), "--max-depth", "0"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(!stdout.contains("  PDG ID"));
    assert_eq!(stdout.matches("Higgs found!").count(), 2);
}

#[test]
fn config_defaults_is_valid_yaml_config() {
    let out = run(&["config-defaults"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("collection: genParticles"));
    assert!(stdout.contains("h_higgs_mass"));
    assert!(stdout.contains("target_pdg_id: 25"));
}

#[test]
fn config_schema_subcommand_is_gone() {
    let out = run(&["config-schema"]);
    assert!(!out.status.success());
}
