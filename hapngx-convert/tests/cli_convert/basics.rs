use super::*;

#[test]
fn convert_prints_nginx_config_to_stdout() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hapngx-convert"));
    cmd.arg("convert")
        .arg(fixture("fixtures/basic.cfg"))
        .assert()
        .success()
        .stdout(predicate::str::contains("http { # Frontend: http-in"))
        .stdout(predicate::str::contains("upstream api_backend {"))
        .stdout(predicate::str::contains(
            "    server 192.168.1.1:80 health_check;  # api1",
        ))
        .stdout(predicate::str::ends_with("}\n"));
}

#[test]
fn convert_writes_output_file_and_summary() {
    let dir = tempdir().expect("tempdir");
    let output_path = dir.path().join("nginx.conf");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hapngx-convert"));
    cmd.arg("convert")
        .arg(fixture("fixtures/three-backends.cfg"))
        .arg("--output")
        .arg(path_as_str(&output_path))
        .assert()
        .success()
        .stdout(predicate::str::contains("convert_summary lines=33"))
        .stdout(predicate::str::contains("unsupported=3"));

    let converted = fs::read_to_string(&output_path).expect("converted file");
    let expected =
        fs::read_to_string(fixture("fixtures/three-backends.nginx.conf")).expect("expected file");
    assert_eq!(converted, expected);
}

#[test]
fn convert_reads_stdin() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hapngx-convert"));
    cmd.arg("convert")
        .arg("-")
        .write_stdin("backend api\n  balance hash\n  server a 10.0.0.1:80\n")
        .assert()
        .success()
        .stdout("upstream api {\n    hash;\n    server 10.0.0.1:80;  # a\n}\n");
}

#[test]
fn convert_refuses_to_overwrite_input() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("haproxy.cfg");
    fs::write(&input, "global\n").expect("write input");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hapngx-convert"));
    cmd.arg("convert")
        .arg(path_as_str(&input))
        .arg("-o")
        .arg(path_as_str(&input))
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to overwrite source file"));

    assert_eq!(fs::read_to_string(&input).expect("input intact"), "global\n");
}

#[test]
fn convert_reports_missing_input() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hapngx-convert"));
    cmd.arg("convert")
        .arg(fixture("fixtures/no-such-file.cfg"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
