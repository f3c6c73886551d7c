mod bank;

use bank::{Account, AccountKind, Amount, Ledger, StatementRow};
use simple_logger::SimpleLogger;
use std::error::Error;
use std::io::{self, Write};
use std::str::FromStr;

// Savings policy: interest credited on every deposit, floor below which
// withdrawals are refused.
const SAVINGS_RATE_BPS: i64 = 200;
const SAVINGS_FLOOR: Amount = Amount::from_whole(50);

enum Session {
    LoggedOut,
    Quit,
}

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new().env().init()?;

    log::debug!("Application started");

    let mut ledger = Ledger::new();

    log::debug!("Menu loop: Starting");
    run_menu(&mut ledger)?;
    log::debug!("Menu loop: Done");

    log::debug!("Application finished");

    Ok(())
}

fn run_menu(ledger: &mut Ledger) -> Result<(), Box<dyn Error>> {
    loop {
        println!();
        println!("1. Open a new account");
        println!("2. Access an existing account");
        println!("3. Quit");

        let choice = match read_line("Enter your choice (1/2/3): ")? {
            Some(line) => line,
            None => break, // stdin closed
        };

        match choice.as_str() {
            "1" => open_account(ledger)?,
            "2" => {
                if let Session::Quit = access_account(ledger)? {
                    break;
                }
            }
            "3" => {
                println!("Quitting the program.");
                break;
            }
            _ => println!("Invalid choice. Please enter a valid option."),
        }
    }
    Ok(())
}

fn open_account(ledger: &mut Ledger) -> Result<(), Box<dyn Error>> {
    let Some(name) = read_line("Enter your name: ")? else {
        return Ok(());
    };
    let Some(kind_choice) = read_line("Account type - standard or savings (1/2): ")? else {
        return Ok(());
    };
    let kind = match kind_choice.as_str() {
        "1" => AccountKind::Standard,
        "2" => AccountKind::Savings {
            rate_bps: SAVINGS_RATE_BPS,
            floor: SAVINGS_FLOOR,
        },
        _ => {
            println!("Invalid choice. Please enter a valid option.");
            return Ok(());
        }
    };
    let Some(opening) = read_amount("Enter the initial deposit amount: ")? else {
        return Ok(());
    };

    log::debug!("Opening {kind} account for {name}");
    match ledger.open_account(name, kind, opening) {
        Ok(number) => {
            println!();
            println!("Account created successfully! Your account number is: {number}");
        }
        Err(e) => {
            log::warn!("Error opening account: {e}");
            println!("Could not open the account: {e}");
        }
    }
    Ok(())
}

fn access_account(ledger: &mut Ledger) -> Result<Session, Box<dyn Error>> {
    let Some(number) = read_account_number("Enter your account number: ")? else {
        return Ok(Session::Quit);
    };

    match ledger.account(number) {
        Ok(account) => {
            println!();
            println!(
                "Account {} accessed successfully! ({} account, owner: {})",
                account.number,
                account.kind(),
                account.owner
            );
        }
        Err(e) => {
            println!("{e}. Please check your account number.");
            return Ok(Session::LoggedOut);
        }
    }

    run_session(ledger, number)
}

fn run_session(ledger: &mut Ledger, number: u64) -> Result<Session, Box<dyn Error>> {
    loop {
        println!();
        println!("Logged-in Menu:");
        println!("1. Make a deposit");
        println!("2. Make a withdrawal");
        println!("3. View account balance");
        println!("4. View transaction history");
        println!("5. Export statement as CSV");
        println!("6. Log out");
        println!("7. Quit");

        let choice = match read_line("Enter your choice (1/2/3/4/5/6/7): ")? {
            Some(line) => line,
            None => return Ok(Session::Quit), // stdin closed
        };

        match choice.as_str() {
            "1" => {
                let Some(amount) = read_amount("Enter the deposit amount: ")? else {
                    return Ok(Session::Quit);
                };
                log::debug!("Processing deposit of {amount} into account {number}");
                match ledger.deposit(number, amount) {
                    Ok(balance) => println!("Deposit successful! New balance: {balance}"),
                    Err(e) => {
                        log::warn!("Error processing deposit for account {number}: {e}");
                        println!("{e}");
                    }
                }
            }
            "2" => {
                let Some(amount) = read_amount("Enter the withdrawal amount: ")? else {
                    return Ok(Session::Quit);
                };
                log::debug!("Processing withdrawal of {amount} from account {number}");
                match ledger.withdraw(number, amount) {
                    Ok(balance) => println!("Withdrawal successful! New balance: {balance}"),
                    Err(e) => {
                        log::warn!("Error processing withdrawal for account {number}: {e}");
                        println!("{e}");
                    }
                }
            }
            "3" => match ledger.account(number) {
                Ok(account) => println!(
                    "Account balance ({} account): {}",
                    account.kind(),
                    account.balance()
                ),
                Err(e) => println!("{e}"),
            },
            "4" => match ledger.account(number) {
                Ok(account) => print_history(account),
                Err(e) => println!("{e}"),
            },
            "5" => match ledger.account(number) {
                Ok(account) => {
                    if account.history().is_empty() {
                        println!("No transactions yet.");
                    } else {
                        write_statement(account)?;
                    }
                }
                Err(e) => println!("{e}"),
            },
            "6" => {
                println!("Logged out successfully!");
                return Ok(Session::LoggedOut);
            }
            "7" => {
                println!("Quitting the program.");
                return Ok(Session::Quit);
            }
            _ => println!("Invalid choice. Please enter a valid option."),
        }
    }
}

fn print_history(account: &Account) {
    if account.history().is_empty() {
        println!("No transactions yet.");
        return;
    }

    println!();
    println!("Transaction History:");
    for record in account.history() {
        println!(
            "{}: {} -> balance {}",
            record.kind, record.amount, record.balance
        );
    }
}

fn write_statement(account: &Account) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_writer(io::stdout());

    log::debug!("Starting statement serialisation");
    for record in account.history() {
        log::debug!("Serialising statement row: {record:?}");
        wtr.serialize(StatementRow::from(record))?;
    }

    log::debug!("Statement serialisation done -> Flushing to stdout");
    wtr.flush()?;

    Ok(())
}

fn read_line(prompt: &str) -> Result<Option<String>, Box<dyn Error>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None); // stdin closed
    }
    Ok(Some(line.trim().to_owned()))
}

fn read_amount(prompt: &str) -> Result<Option<Amount>, Box<dyn Error>> {
    loop {
        let Some(line) = read_line(prompt)? else {
            return Ok(None);
        };
        match Amount::from_str(&line) {
            Ok(amount) => return Ok(Some(amount)),
            Err(e) => println!("{e}"),
        }
    }
}

fn read_account_number(prompt: &str) -> Result<Option<u64>, Box<dyn Error>> {
    loop {
        let Some(line) = read_line(prompt)? else {
            return Ok(None);
        };
        match line.parse::<u64>() {
            Ok(number) => return Ok(Some(number)),
            Err(_) => println!("Account numbers are digits only: {line}"),
        }
    }
}
