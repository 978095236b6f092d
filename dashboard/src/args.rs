use clap::{Parser, Subcommand};
use customer_core::{CustomerId, Gender, SequencePolicy};

#[derive(Parser, Debug)]
#[command(name = "customer-dashboard")]
#[command(about = "Browse and edit customers from the terminal", long_about = None)]
pub struct Cli {
    /// Base URL of the customer API
    #[arg(long, env = "CUSTOMER_API_URL", default_value = "http://localhost:8080", global = true)]
    pub base_url: String,

    /// Ignore list responses from superseded fetches
    #[arg(long, global = true)]
    pub latest_wins: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn policy(&self) -> SequencePolicy {
        if self.latest_wins {
            SequencePolicy::LatestRequestWins
        } else {
            SequencePolicy::LastSettledWins
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show all customers (default)
    #[command(alias = "ls")]
    List,

    /// Register a new customer
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        age: u32,

        /// MALE or FEMALE
        #[arg(long)]
        gender: Gender,
    },

    /// Edit a customer; omitted fields keep their current value
    Update {
        id: CustomerId,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        age: Option<u32>,
    },

    /// Delete a customer
    #[command(alias = "rm")]
    Delete { id: CustomerId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_api_and_last_settled_policy() {
        let cli = Cli::try_parse_from(["customer-dashboard"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.policy(), SequencePolicy::LastSettledWins);
    }

    #[test]
    fn parses_create_with_gender() {
        let cli = Cli::try_parse_from([
            "customer-dashboard",
            "--latest-wins",
            "create",
            "--name",
            "Alex",
            "--email",
            "alex@gmail.com",
            "--age",
            "21",
            "--gender",
            "male",
        ])
        .unwrap();
        assert_eq!(cli.policy(), SequencePolicy::LatestRequestWins);
        match cli.command {
            Some(Commands::Create { gender, age, .. }) => {
                assert_eq!(gender, Gender::Male);
                assert_eq!(age, 21);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn update_fields_are_optional() {
        let cli = Cli::try_parse_from(["customer-dashboard", "update", "3", "--age", "40"]).unwrap();
        match cli.command {
            Some(Commands::Update { id, name, age, .. }) => {
                assert_eq!(id, 3);
                assert!(name.is_none());
                assert_eq!(age, Some(40));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
