use crate::forms::{RegistrationForm, SignInForm};
use clap::{Arg, ArgMatches, Command};
use secrecy::SecretString;

pub const CMD_REGISTER: &str = "register";
pub const CMD_LOGIN: &str = "login";
pub const CMD_CHECK_EMAIL: &str = "check-email";

pub const ARG_EMAIL: &str = "email";
pub const ARG_NAME: &str = "name";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_CONFIRM_PASSWORD: &str = "confirm-password";
pub const ARG_MOBILE_NUMBER: &str = "mobile-number";
pub const ARG_ADDRESS: &str = "address";

const ENV_PASSWORD: &str = "AUTH_PORTAL_PASSWORD";

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(register())
        .subcommand(login())
        .subcommand(check_email())
}

fn email_arg() -> Arg {
    Arg::new(ARG_EMAIL)
        .short('e')
        .long(ARG_EMAIL)
        .help("Email address")
        .required(true)
}

fn password_arg() -> Arg {
    Arg::new(ARG_PASSWORD)
        .short('p')
        .long(ARG_PASSWORD)
        .help("Password")
        .env(ENV_PASSWORD)
        .hide_env_values(true)
        .required(true)
}

fn register() -> Command {
    Command::new(CMD_REGISTER)
        .about("Create a new account")
        .arg(email_arg())
        .arg(
            Arg::new(ARG_NAME)
                .short('n')
                .long(ARG_NAME)
                .help("Full name")
                .required(true),
        )
        .arg(password_arg().help("Password (min 6 chars)"))
        .arg(
            Arg::new(ARG_CONFIRM_PASSWORD)
                .long(ARG_CONFIRM_PASSWORD)
                .help("Re-enter the password")
                .required(true),
        )
        .arg(
            Arg::new(ARG_MOBILE_NUMBER)
                .long(ARG_MOBILE_NUMBER)
                .help("Mobile number (optional)"),
        )
        .arg(
            Arg::new(ARG_ADDRESS)
                .long(ARG_ADDRESS)
                .help("Postal address (optional)"),
        )
}

fn login() -> Command {
    Command::new(CMD_LOGIN)
        .about("Sign in to an existing account")
        .arg(email_arg())
        .arg(password_arg())
}

fn check_email() -> Command {
    Command::new(CMD_CHECK_EMAIL)
        .about("Check whether an email address is already registered")
        .arg(email_arg())
}

fn read(matches: &ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

fn read_secret(matches: &ArgMatches, id: &str) -> SecretString {
    SecretString::from(read(matches, id))
}

/// Collect registration input exactly as given; validation happens later.
#[must_use]
pub fn registration_form(matches: &ArgMatches) -> RegistrationForm {
    RegistrationForm {
        email: read(matches, ARG_EMAIL),
        name: read(matches, ARG_NAME),
        password: read_secret(matches, ARG_PASSWORD),
        confirm_password: read_secret(matches, ARG_CONFIRM_PASSWORD),
        mobile_number: matches.get_one::<String>(ARG_MOBILE_NUMBER).cloned(),
        address: matches.get_one::<String>(ARG_ADDRESS).cloned(),
    }
}

#[must_use]
pub fn sign_in_form(matches: &ArgMatches) -> SignInForm {
    SignInForm {
        email: read(matches, ARG_EMAIL),
        password: read_secret(matches, ARG_PASSWORD),
    }
}

#[must_use]
pub fn email(matches: &ArgMatches) -> String {
    read(matches, ARG_EMAIL)
}
