//! End-to-end runs against a scratch directory.

use clap::Parser;
use jm_cli::{render_report, run, Cli, Outcome};
use jm_core::SizeReport;
use std::fs;
use std::path::{Path, PathBuf};

fn cli_for(root: &Path, extra: &[&str]) -> Cli {
    let mut args = vec!["jsmin", "--root", root.to_str().unwrap()];
    args.extend_from_slice(extra);
    Cli::try_parse_from(args).unwrap()
}

fn write_script(root: &Path, content: &[u8]) {
    fs::create_dir_all(root.join("web")).unwrap();
    fs::write(root.join("web/script.js"), content).unwrap();
}

fn run_capture(cli: &Cli) -> (anyhow::Result<Outcome>, String) {
    let mut console = Vec::new();
    let outcome = run(cli, &mut console);
    (outcome, String::from_utf8(console).unwrap())
}

#[test]
fn minifies_default_paths() {
    let dir = tempfile::tempdir().unwrap();
    write_script(dir.path(), b"// hi\nvar a = 1;\n");

    let (outcome, console) = run_capture(&cli_for(dir.path(), &[]));
    let outcome = outcome.unwrap();

    assert_eq!(
        outcome,
        Outcome::Minified {
            input: PathBuf::from("web/script.js"),
            output: PathBuf::from("web/script.min.js"),
            report: SizeReport::new(17, 8),
        }
    );
    assert_eq!(fs::read_to_string(dir.path().join("web/script.min.js")).unwrap(), "var a=1;");
    assert_eq!(
        console,
        "Reading web/script.js...\n\
         Minifying...\n\
         \n[OK] Minified script written to: web/script.min.js\n  \
         Original size: 17 bytes\n  \
         Minified size: 8 bytes\n  \
         Reduction: 52.9%\n\
         \n[!] Don't forget to update index.html to use script.min.js!\n"
    );
}

#[test]
fn missing_input_reports_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();

    let (outcome, console) = run_capture(&cli_for(dir.path(), &[]));

    assert_eq!(outcome.unwrap(), Outcome::MissingInput(PathBuf::from("web/script.js")));
    assert_eq!(console, "Error: web/script.js not found!\n");
    assert!(!dir.path().join("web/script.min.js").exists());
}

#[test]
fn overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    write_script(dir.path(), b"let x = [ 1, 2 ];");
    fs::write(dir.path().join("web/script.min.js"), "stale content that is long").unwrap();

    run_capture(&cli_for(dir.path(), &[])).0.unwrap();

    assert_eq!(fs::read_to_string(dir.path().join("web/script.min.js")).unwrap(), "let x=[1,2];");
}

#[test]
fn empty_input_reports_zero_reduction() {
    let dir = tempfile::tempdir().unwrap();
    write_script(dir.path(), b"");

    let (outcome, console) = run_capture(&cli_for(dir.path(), &[]));

    assert!(matches!(outcome.unwrap(), Outcome::Minified { report, .. } if report == SizeReport::new(0, 0)));
    assert!(console.contains("  Reduction: 0.0%\n"));
    assert_eq!(fs::read_to_string(dir.path().join("web/script.min.js")).unwrap(), "");
}

#[test]
fn large_sizes_use_thousands_separators() {
    let dir = tempfile::tempdir().unwrap();
    write_script(dir.path(), "var a = 1;\n".repeat(200).as_bytes());

    let (_, console) = run_capture(&cli_for(dir.path(), &[]));

    assert!(console.contains("  Original size: 2,200 bytes\n"));
    assert!(console.contains("  Minified size: 1,600 bytes\n"));
    assert!(console.contains("  Reduction: 27.3%\n"));
}

#[test]
fn textual_strategy_keeps_its_quirks() {
    let dir = tempfile::tempdir().unwrap();
    write_script(dir.path(), br#"var u = "http://example.com";"#);

    run_capture(&cli_for(dir.path(), &["--strategy", "textual"])).0.unwrap();
    assert_eq!(fs::read_to_string(dir.path().join("web/script.min.js")).unwrap(), r#"var u="http:"#);

    run_capture(&cli_for(dir.path(), &[])).0.unwrap();
    assert_eq!(
        fs::read_to_string(dir.path().join("web/script.min.js")).unwrap(),
        r#"var u="http://example.com";"#
    );
}

#[test]
fn custom_input_and_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/app.js"), "if ( ok ) { go ( ) ; }").unwrap();

    let (outcome, console) = run_capture(&cli_for(dir.path(), &["-i", "src/app.js", "-o", "bundle.js"]));

    assert!(matches!(outcome.unwrap(), Outcome::Minified { .. }));
    assert_eq!(fs::read_to_string(dir.path().join("bundle.js")).unwrap(), "if(ok){go();}");
    assert!(console.starts_with("Reading src/app.js...\n"));
    assert!(console.ends_with("use bundle.js!\n"));
}

#[test]
fn invalid_utf8_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write_script(dir.path(), &[0x76, 0x61, 0x72, 0xff, 0xfe]);

    let (outcome, _) = run_capture(&cli_for(dir.path(), &[]));

    assert!(outcome.is_err());
    assert!(!dir.path().join("web/script.min.js").exists());
}

#[test]
fn render_report_format() {
    let text = render_report(Path::new("web/script.min.js"), &SizeReport::new(12_345, 6_789));
    assert_eq!(
        text,
        "\n[OK] Minified script written to: web/script.min.js\n  \
         Original size: 12,345 bytes\n  \
         Minified size: 6,789 bytes\n  \
         Reduction: 45.0%\n\
         \n[!] Don't forget to update index.html to use script.min.js!\n"
    );
}

#[test]
fn config_renames_apply_to_code_only() {
    let dir = tempfile::tempdir().unwrap();
    write_script(dir.path(), b"this.gameState = 'gameState'; // gameState\n");
    let config = dir.path().join("jsmin.json");
    fs::write(&config, r#"{"renames":{"gameState":"g"}}"#).unwrap();

    run_capture(&cli_for(dir.path(), &["-c", config.to_str().unwrap()])).0.unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("web/script.min.js")).unwrap(),
        "this.g='gameState';"
    );
}
