use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use business::domain::user::value_objects::Gender;

#[derive(Parser, Debug)]
#[command(author, version, about = "Dish recommendations and food preferences", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a user profile and print its public id
    Register {
        #[arg(long)]
        name: String,
        /// male, female or non-binary
        #[arg(long)]
        gender: Gender,
        /// Date of birth, YYYY-MM-DD
        #[arg(long)]
        dob: NaiveDate,
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        long: Option<f64>,
    },
    /// Like, dislike or love a dish
    React {
        #[arg(long)]
        user: String,
        #[arg(long)]
        dish: String,
        /// like, dislike or love
        #[arg(long)]
        action: String,
    },
    /// Mark a dish as favorite
    Favorite {
        #[arg(long)]
        user: String,
        #[arg(long)]
        dish: String,
    },
    /// List a user's favorites or reactions
    Activity {
        #[arg(long)]
        user: String,
        #[arg(value_enum)]
        kind: ActivityKind,
    },
    /// Ask the language model for dishes matching a query
    Recommend {
        query: String,
    },
    /// Generate a system design graph for a prompt
    Design {
        prompt: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum ActivityKind {
    Favorites,
    Likes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_react_command() {
        let cli = Cli::try_parse_from([
            "eatright", "react", "--user", "USR12345678", "--dish", "Dosa", "--action", "love",
        ])
        .unwrap();

        match cli.command {
            Command::React { user, dish, action } => {
                assert_eq!(user, "USR12345678");
                assert_eq!(dish, "Dosa");
                assert_eq!(action, "love");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn should_parse_register_with_typed_fields() {
        let cli = Cli::try_parse_from([
            "eatright", "register", "--name", "Asha", "--gender", "non-binary", "--dob",
            "1996-02-29", "--long", "-0.12",
        ])
        .unwrap();

        match cli.command {
            Command::Register {
                gender, dob, long, lat, ..
            } => {
                assert_eq!(gender, Gender::NonBinary);
                assert_eq!(dob, NaiveDate::from_ymd_opt(1996, 2, 29).unwrap());
                assert_eq!(long, Some(-0.12));
                assert_eq!(lat, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn should_reject_bad_date() {
        let result = Cli::try_parse_from([
            "eatright", "register", "--name", "Asha", "--gender", "female", "--dob", "29/02/1996",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn should_parse_activity_kind() {
        let cli =
            Cli::try_parse_from(["eatright", "activity", "--user", "USR1", "favorites"]).unwrap();

        assert!(matches!(
            cli.command,
            Command::Activity {
                kind: ActivityKind::Favorites,
                ..
            }
        ));
    }
}
