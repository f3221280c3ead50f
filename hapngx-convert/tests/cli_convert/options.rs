use super::*;

#[test]
fn convert_per_block_closing() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hapngx-convert"));
    cmd.arg("convert")
        .arg("-")
        .arg("--close-blocks")
        .arg("per-block")
        .write_stdin("frontend web\nbackend api\n")
        .assert()
        .success()
        .stdout("http { # Frontend: web\nupstream api {\n}\n}\n");
}

#[test]
fn convert_emit_ssl() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hapngx-convert"));
    cmd.arg("convert")
        .arg("-")
        .arg("--emit-ssl")
        .write_stdin("bind :443 ssl crt /etc/ssl/site.pem\n")
        .assert()
        .success()
        .stdout("    ssl on;\n    ssl_certificate /etc/ssl/site.pem;\n}\n");
}

#[test]
fn convert_keep_time_units() {
    let input = "timeout server 30s\ntimeout connect 5000\n";
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hapngx-convert"));
    cmd.arg("convert")
        .arg("-")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("    proxy_read_timeout 30sms;\n    proxy_connect_timeout 5000ms;\n}\n");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hapngx-convert"));
    cmd.arg("convert")
        .arg("-")
        .arg("--keep-time-units")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("    proxy_read_timeout 30s;\n    proxy_connect_timeout 5000ms;\n}\n");
}

#[test]
fn convert_strict_fails_on_malformed_directive() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hapngx-convert"));
    cmd.arg("convert")
        .arg("-")
        .arg("--strict")
        .write_stdin("global\nmaxconn\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: maxconn: missing connection limit"))
        .stderr(predicate::str::contains("strict mode failed: 1 malformed directive(s)"));
}

#[test]
fn convert_lenient_keeps_malformed_as_comment() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hapngx-convert"));
    cmd.arg("convert")
        .arg("-")
        .write_stdin("maxconn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "# Malformed directive (maxconn: missing connection limit): maxconn",
        ));
}

#[test]
fn convert_json_report() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hapngx-convert"));
    let assert = cmd
        .arg("convert")
        .arg(fixture("fixtures/basic.cfg"))
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf-8");
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("json report");
    assert!(report["output"]
        .as_str()
        .expect("output string")
        .ends_with('}'));
    assert_eq!(report["summary"]["servers"], 1);
    assert_eq!(report["stats"]["by_kind"]["log-statement"], 3);
    assert_eq!(report["mappings"], "embedded");
}

#[test]
fn convert_uses_custom_mappings_file() {
    let dir = tempdir().expect("tempdir");
    let mappings = dir.path().join("directives.toml");
    fs::write(
        &mappings,
        r#"
balance_methods = ["first"]

[[timeout]]
key = "tunnel"
directive = "proxy_socket_timeout"

[[substitution]]
from = "path_beg"
to = "prefix"
"#,
    )
    .expect("write mappings");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hapngx-convert"));
    cmd.arg("convert")
        .arg("-")
        .arg("--mappings-file")
        .arg(path_as_str(&mappings))
        .write_stdin("timeout tunnel 1h\ntimeout connect 5s\nbalance first\nacl a path_beg /a\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("    proxy_socket_timeout 1hms;"))
        .stdout(predicate::str::contains(
            "    # Unsupported timeout setting: timeout connect 5s",
        ))
        .stdout(predicate::str::contains("    first;"))
        .stdout(predicate::str::contains("set $acl_a \"prefix /a\";"));
}

#[test]
fn convert_falls_back_when_mappings_file_is_broken() {
    let dir = tempdir().expect("tempdir");
    let mappings = dir.path().join("broken.toml");
    fs::write(&mappings, "balance_methods = [").expect("write mappings");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hapngx-convert"));
    cmd.arg("convert")
        .arg("-")
        .arg("--mappings-file")
        .arg(path_as_str(&mappings))
        .write_stdin("timeout connect 5000ms\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("proxy_connect_timeout 5000ms;"))
        .stderr(predicate::str::contains("using embedded mappings"));
}
