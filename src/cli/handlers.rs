//! Subcommand handlers.
//!
//! Alerts and navigation are already printed by the terminal [`UiPort`]; the
//! handlers only add what a screen would render inline (field errors, the
//! greeting, the profile card) and choose the exit code.
//!
//! [`UiPort`]: nx_core::ports::UiPort

use std::process::ExitCode;

use nx_app::usecases::FetchProfileError;
use nx_app::App;
use nx_core::{ErrorMap, Route, SubmissionError, TradeType, UserProfile};

use super::{login_form, Command};

pub async fn dispatch(app: &App, command: Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::Login { username, password } => login(app, username, password).await,
        Command::Register(args) => register(app, args.into()).await,
        Command::Profile => profile(app).await,
        Command::Logout => logout(app).await,
        Command::Status => status(app).await,
        Command::Trades => Ok(print_trades()),
    }
}

async fn login(app: &App, username: String, password: String) -> anyhow::Result<ExitCode> {
    let result = app
        .usecases()
        .submit_login()
        .execute(login_form(username, password))
        .await;

    Ok(match result {
        Ok(session) => {
            println!("Signed in as {} ({})", session.username, session.role);
            ExitCode::SUCCESS
        }
        Err(err) => submission_failed(&err),
    })
}

async fn register(app: &App, form: nx_core::RegistrationForm) -> anyhow::Result<ExitCode> {
    let result = app.usecases().submit_registration().execute(form).await;

    Ok(match result {
        Ok(receipt) => {
            println!(
                "Registered {} as {}",
                receipt.username, receipt.account_type
            );
            ExitCode::SUCCESS
        }
        Err(err) => submission_failed(&err),
    })
}

async fn profile(app: &App) -> anyhow::Result<ExitCode> {
    match app.usecases().fetch_profile().execute().await {
        Ok(profile) => {
            print!("{}", render_profile(&profile));
            Ok(ExitCode::SUCCESS)
        }
        Err(FetchProfileError::NotAuthenticated | FetchProfileError::Api(_)) => {
            Ok(ExitCode::FAILURE)
        }
        Err(err @ FetchProfileError::Storage(_)) => Err(err.into()),
    }
}

async fn logout(app: &App) -> anyhow::Result<ExitCode> {
    Ok(match app.usecases().logout().execute().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    })
}

async fn status(app: &App) -> anyhow::Result<ExitCode> {
    let route = app.usecases().resolve_start_route().execute().await;
    if route == Route::Home {
        let summary = app.usecases().load_home_summary().execute();
        println!("Welcome, {}!", summary.username);
        println!("Role: {}", summary.role);
    } else {
        println!("Not signed in");
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the trade catalogue, one wire name per line.
pub fn print_trades() -> ExitCode {
    for trade in TradeType::ALL {
        println!("{trade}");
    }
    ExitCode::SUCCESS
}

/// Print what the form would show inline and map the failure to an exit code.
fn submission_failed(err: &SubmissionError) -> ExitCode {
    match err {
        SubmissionError::Validation(errors) => eprint!("{}", render_field_errors(errors)),
        SubmissionError::Busy => eprintln!("{}", err.user_message()),
        // Alerted through the UI port.
        _ => {}
    }
    ExitCode::FAILURE
}

fn render_field_errors(errors: &ErrorMap) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("  {}: {}\n", field.key(), message))
        .collect()
}

fn render_profile(profile: &UserProfile) -> String {
    let mut lines = vec![
        format!("Username: {}", profile.username()),
        format!("Email: {}", profile.email()),
        format!("Account type: {}", profile.account_type()),
    ];
    match profile {
        UserProfile::Business(p) => {
            lines.push(format!("ABN: {}", p.abn));
        }
        UserProfile::ServiceProvider(p) => {
            lines.push(format!("Name: {} {}", p.first_name, p.last_name));
            lines.push(format!("Trade: {}", p.trade));
        }
    }
    lines.push(format!("Address: {}", profile.address()));
    lines.iter().map(|line| format!("{line}\n")).collect()
}
