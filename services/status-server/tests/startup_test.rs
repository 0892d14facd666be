use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::net::TcpListener;
use std::time::Duration;

fn server_cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("status-server");
    cmd.env_remove("PAYLOAD_VARIANT")
        .env("RUST_LOG", "error")
        .env("STATUS_SERVER_HOST", "127.0.0.1")
        .timeout(Duration::from_secs(10));
    cmd
}

#[test]
fn test_exits_non_zero_when_port_is_taken() {
    let occupied = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = occupied.local_addr().unwrap().port();

    server_cmd()
        .env("STATUS_SERVER_PORT", port.to_string())
        .assert()
        .failure()
        .code(1);

    drop(occupied);
}

#[test]
fn test_exits_non_zero_on_invalid_port() {
    server_cmd()
        .env("STATUS_SERVER_PORT", "80800")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_exits_non_zero_on_hostname() {
    server_cmd()
        .env("STATUS_SERVER_HOST", "localhost")
        .env("STATUS_SERVER_PORT", "0")
        .assert()
        .failure()
        .code(1);
}
