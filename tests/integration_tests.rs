use std::io::Write;
use std::process::{Command, Stdio};

// Drives the compiled binary through a scripted menu session and
// returns everything it printed to stdout.
fn run_with_script(script: &str) -> String {
    let mut child = Command::new("cargo")
        .arg("run")
        .arg("--quiet")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to execute cargo run");

    child
        .stdin
        .take()
        .expect("missing child stdin")
        .write_all(script.as_bytes())
        .expect("failed to write menu script");

    let output = child
        .wait_with_output()
        .expect("failed to wait for cargo run");
    assert!(output.status.success());

    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_standard_account_lifecycle() {
    // Open a standard account with 100, deposit 50, withdraw 30, then
    // attempt an overdraw before viewing balance and history.
    let script = "1\n\
                  Ada\n\
                  1\n\
                  100\n\
                  2\n\
                  1000000000\n\
                  1\n\
                  50\n\
                  2\n\
                  30\n\
                  2\n\
                  200\n\
                  3\n\
                  4\n\
                  7\n";

    let stdout = run_with_script(script);

    assert!(stdout.contains("Account created successfully! Your account number is: 1000000000"));
    assert!(stdout.contains("Deposit successful! New balance: 150.0000"));
    assert!(stdout.contains("Withdrawal successful! New balance: 120.0000"));
    assert!(stdout.contains("Insufficient funds: balance is 120.0000, requested 200.0000"));
    assert!(stdout.contains("Account balance (standard account): 120.0000"));

    // History holds exactly the successful operations
    assert!(stdout.contains("deposit: 50.0000 -> balance 150.0000"));
    assert!(stdout.contains("withdrawal: 30.0000 -> balance 120.0000"));
    assert!(!stdout.contains("200.0000 -> balance"));
}

#[test]
fn test_savings_account_floor_and_interest() {
    // Open a savings account with 100 (floor 50): withdrawing 60 would
    // leave 40 and is refused, withdrawing 40 leaves exactly 60. The
    // following deposit of 50 earns 2% interest on the balance of 60.
    let script = "1\n\
                  Grace\n\
                  2\n\
                  100\n\
                  2\n\
                  1000000000\n\
                  2\n\
                  60\n\
                  2\n\
                  40\n\
                  1\n\
                  50\n\
                  5\n\
                  6\n\
                  3\n";

    let stdout = run_with_script(script);

    assert!(stdout.contains("minimum balance"));
    assert!(stdout.contains("Withdrawal successful! New balance: 60.0000"));
    assert!(stdout.contains("Deposit successful! New balance: 111.2000"));

    // Exported statement rows
    assert!(stdout.contains("kind,amount,balance"));
    assert!(stdout.contains("withdrawal,40.0000,60.0000"));
    assert!(stdout.contains("deposit,51.2000,111.2000"));

    assert!(stdout.contains("Logged out successfully!"));
}

#[test]
fn test_unknown_account_is_reported() {
    let script = "2\n\
                  42\n\
                  3\n";

    let stdout = run_with_script(script);

    assert!(stdout.contains("Account 42 not found. Please check your account number."));
    assert!(stdout.contains("Quitting the program."));
}
