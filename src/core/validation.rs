//! Form validation. Runs before any I/O; a rejected form mutates nothing.

use crate::core::bankroll::validate_setup;
use crate::errors::{AppError, AppResult};
use crate::models::bankroll::BankrollSettings;
use crate::models::forms::{BankrollForm, Credentials, SessionForm};
use crate::models::game_type::GameType;
use crate::models::session::NewSession;
use crate::utils::date;
use crate::utils::money::{Cents, parse_amount};

pub const MIN_PASSWORD_LEN: usize = 6;

fn required<'a>(value: &'a str, field: &str) -> AppResult<&'a str> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::Validation(format!(
            "Please fill in all required fields ({field} is missing)"
        )));
    }
    Ok(v)
}

fn amount(value: &str, field: &str) -> AppResult<Cents> {
    let raw = required(value, field)?;
    let cents = parse_amount(raw).ok_or_else(|| AppError::InvalidAmount(format!("{field}: {raw}")))?;
    if cents < 0 {
        return Err(AppError::Validation(format!("{field} cannot be negative")));
    }
    Ok(cents)
}

pub fn validate_session_form(form: &SessionForm) -> AppResult<NewSession> {
    let stakes = required(&form.stakes, "stakes")?;
    let location = required(&form.location, "location")?;
    let buy_in = amount(&form.buy_in, "buy-in")?;
    let cash_out = amount(&form.cash_out, "cash-out")?;

    let date = match form.date.as_deref().map(str::trim) {
        None | Some("") => date::today(),
        Some(raw) => date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?,
    };

    let game_type = match form.game_type.as_deref().map(str::trim) {
        None | Some("") => GameType::Cash,
        Some(code) => {
            GameType::from_code(code).ok_or_else(|| AppError::InvalidGameType(code.to_string()))?
        }
    };

    Ok(NewSession {
        date,
        game_type,
        stakes: stakes.to_string(),
        location: location.to_string(),
        buy_in,
        cash_out,
        notes: form.notes.as_deref().unwrap_or("").trim().to_string(),
    })
}

pub fn validate_bankroll_form(form: &BankrollForm) -> AppResult<BankrollSettings> {
    let starting = parse_amount(&form.starting)
        .ok_or_else(|| AppError::InvalidAmount(format!("starting bankroll: {}", form.starting)))?;
    let goal = parse_amount(&form.goal)
        .ok_or_else(|| AppError::InvalidAmount(format!("bankroll goal: {}", form.goal)))?;

    validate_setup(starting, goal)
}

pub fn validate_credentials(c: &Credentials) -> AppResult<()> {
    let email = c.email.trim();
    let well_formed = email
        .split_once('@')
        .map(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.ends_with('.'))
        .unwrap_or(false);
    if !well_formed {
        return Err(AppError::Validation(format!("Invalid email address: {email}")));
    }

    if let Some(confirm) = &c.confirm
        && confirm != &c.password
    {
        return Err(AppError::Validation("Passwords don't match".into()));
    }

    if c.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    Ok(())
}
