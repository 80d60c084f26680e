use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run(dir: &Path, args: &[&str]) -> Output {
  Command::new(env!("CARGO_BIN_EXE_minic"))
    .args(args)
    .current_dir(dir)
    .output()
    .expect("failed to launch minic")
}

#[test]
fn writes_assembly_to_working_directory() {
  let dir = tempfile::tempdir().unwrap();
  fs::write(dir.path().join("return_2.c"), "int main() {\n    return 2;\n}\n").unwrap();

  let output = run(dir.path(), &["return_2.c"]);
  assert!(output.status.success(), "{output:?}");

  let asm = fs::read_to_string(dir.path().join("assembly.s")).unwrap();
  assert_eq!(
    asm,
    ".globl _main\n_main:\n  pushq\t%rbp\n  movq\t%rsp, %rbp\n  movl\t$2, %eax\n  popq\t%rbp\n  retq\n"
  );
}

#[test]
fn honours_output_option() {
  let dir = tempfile::tempdir().unwrap();
  fs::write(dir.path().join("neg.c"), "int foo(){return -~!0;}").unwrap();

  let output = run(dir.path(), &["neg.c", "-o", "neg.s"]);
  assert!(output.status.success(), "{output:?}");

  let asm = fs::read_to_string(dir.path().join("neg.s")).unwrap();
  assert!(asm.contains(".globl _foo\n"));
  assert!(asm.contains("movl\t$2, %eax"));
  assert!(!dir.path().join("assembly.s").exists());
}

#[test]
fn missing_semicolon_fails_without_output() {
  let dir = tempfile::tempdir().unwrap();
  fs::write(dir.path().join("bad.c"), "int main(){return 2}").unwrap();

  let output = run(dir.path(), &["bad.c"]);
  assert!(!output.status.success());
  assert!(!dir.path().join("assembly.s").exists());
}

#[test]
fn failed_run_keeps_previous_output() {
  let dir = tempfile::tempdir().unwrap();
  fs::write(dir.path().join("good.c"), "int main(){return 7;}").unwrap();
  fs::write(dir.path().join("bad.c"), "int main(){return ;}").unwrap();

  assert!(run(dir.path(), &["good.c"]).status.success());
  let before = fs::read_to_string(dir.path().join("assembly.s")).unwrap();

  assert!(!run(dir.path(), &["bad.c"]).status.success());
  let after = fs::read_to_string(dir.path().join("assembly.s")).unwrap();
  assert_eq!(before, after);
}

#[test]
fn unreadable_source_fails() {
  let dir = tempfile::tempdir().unwrap();
  let output = run(dir.path(), &["does_not_exist.c"]);
  assert!(!output.status.success());
  assert!(!dir.path().join("assembly.s").exists());
}

fn combined(output: &Output) -> String {
  format!(
    "{}{}",
    String::from_utf8_lossy(&output.stdout),
    String::from_utf8_lossy(&output.stderr)
  )
}

#[test]
fn verbose_run_lists_tokens() {
  let dir = tempfile::tempdir().unwrap();
  fs::write(dir.path().join("p.c"), "int main(){return 007;}").unwrap();

  let output = run(dir.path(), &["-v", "--no-color", "p.c"]);
  assert!(output.status.success(), "{output:?}");

  let log = combined(&output);
  assert!(log.contains("Found 9 tokens"), "{log}");
  assert!(log.contains("KEYWORD_INT"), "{log}");
  assert!(log.contains("LITERAL_INTEGER         7"), "{log}");
}

#[test]
fn quiet_run_omits_token_listing() {
  let dir = tempfile::tempdir().unwrap();
  fs::write(dir.path().join("p.c"), "int main(){return 2;}").unwrap();

  let output = run(dir.path(), &["--no-color", "p.c"]);
  assert!(output.status.success(), "{output:?}");
  assert!(!combined(&output).contains("KEYWORD_INT"));
}

#[test]
fn long_operator_chain_compiles() {
  let dir = tempfile::tempdir().unwrap();
  let source = format!("int main(){{return {}1;}}", "-".repeat(100_000));
  fs::write(dir.path().join("deep.c"), source).unwrap();

  let output = run(dir.path(), &["--no-color", "deep.c"]);
  assert!(output.status.success(), "{output:?}");

  let asm = fs::read_to_string(dir.path().join("assembly.s")).unwrap();
  assert!(asm.contains("movl\t$1, %eax"));
}

#[test]
fn io_errors_name_the_file_once() {
  let dir = tempfile::tempdir().unwrap();
  let output = run(dir.path(), &["--no-color", "does_not_exist.c"]);
  assert!(!output.status.success());

  let log = combined(&output);
  let line = log
    .lines()
    .find(|line| line.contains("could not open"))
    .unwrap_or_else(|| panic!("no diagnostic in {log}"));
  assert_eq!(line.matches("does_not_exist.c").count(), 1, "{line}");
}

#[test]
fn parse_errors_are_prefixed_with_the_file() {
  let dir = tempfile::tempdir().unwrap();
  fs::write(dir.path().join("bad.c"), "int main(){return 2}").unwrap();

  let output = run(dir.path(), &["--no-color", "bad.c"]);
  assert!(!output.status.success());
  assert!(combined(&output).contains("bad.c:1:20: expected \";\""));
}
