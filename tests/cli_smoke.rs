use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn trak_help_works() {
    Command::cargo_bin("trak")
        .expect("binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("flat-file task tracker"));
}

#[test]
fn subcommand_help_works() {
    let subcommands = [
        "add",
        "update",
        "delete",
        "mark-in-progress",
        "mark-done",
        "list",
    ];

    for cmd in subcommands {
        Command::cargo_bin("trak")
            .expect("binary")
            .arg(cmd)
            .arg("--help")
            .assert()
            .success();
    }
}
