use clap::Parser;
use customer_core::{CustomerClient, CustomerForm, Notification, NotificationKind};
use customer_dashboard::{Cli, Commands, FormEdits, Session, UreqTransport};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = CustomerClient::new(&cli.base_url);
    let mut session = Session::new(client, cli.policy(), UreqTransport::default());
    session.mount();

    let result = match cli.command.unwrap_or(Commands::List) {
        Commands::List => Ok(()),
        Commands::Create {
            name,
            email,
            age,
            gender,
        } => session.create(CustomerForm {
            name,
            email,
            age: Some(age),
            gender: Some(gender),
        }),
        Commands::Update {
            id,
            name,
            email,
            age,
        } => session.update(id, FormEdits { name, email, age }),
        Commands::Delete { id } => session.delete(id),
    };

    for notification in session.notifications() {
        print_notification(&notification);
    }
    println!("{}", session.view());
    result
}

fn print_notification(notification: &Notification) {
    let marker = match notification.kind {
        NotificationKind::Success => "ok",
        NotificationKind::Error => "error",
    };
    eprintln!("[{marker}] {}: {}", notification.title, notification.description);
}
