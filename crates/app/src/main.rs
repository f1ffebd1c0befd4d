//! Hotdesk Application CLI

use std::{path::PathBuf, process, time::Duration};

use clap::{Args, Parser, Subcommand};
use hotdesk::booking::{Booking, BookingError};
use hotdesk_app::{
    context::AppContext,
    domain::bookings::{BookingsServiceError, NewBookingRequest},
    scenario::{self, BookingRequestSpec},
};
use humanize_duration::{Truncate, prelude::DurationExt};
use tabled::{builder::Builder, settings::Style};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "hotdesk-app", about = "Hotdesk booking scenario runner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Replay backoffice events, then decide each booking request.
    Simulate(SimulateArgs),
}

#[derive(Debug, Args)]
struct SimulateArgs {
    /// Scenario file with backoffice events and booking requests
    #[arg(long, env = "HOTDESK_SCENARIO")]
    scenario: PathBuf,
}

#[tokio::main]
async fn main() {
    let _env = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Simulate(args) => simulate(args).await,
    }
}

async fn simulate(args: SimulateArgs) -> Result<(), String> {
    let scenario = scenario::load(&args.scenario)
        .map_err(|error| format!("failed to load scenario: {error}"))?;

    let ctx = AppContext::in_memory();

    ctx.projector
        .apply_all(scenario.events)
        .await
        .map_err(|error| format!("failed to replay backoffice events: {error}"))?;

    let mut builder = Builder::default();
    builder.push_record(["office", "renter", "start", "length", "outcome", "total"]);

    for request in scenario.requests {
        let row = decide(&ctx, request).await;
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::rounded());

    println!("{table}");

    Ok(())
}

async fn decide(ctx: &AppContext, request: BookingRequestSpec) -> [String; 6] {
    let office = request.office_id.to_string();
    let renter = request.renter_email.clone();
    let start = request.start.to_string();

    let outcome = ctx
        .bookings
        .place_booking(NewBookingRequest {
            office_id: request.office_id.into(),
            renter_email: request.renter_email,
            attendees: request.attendees,
            start: request.start,
            end: request.end,
        })
        .await;

    match outcome {
        Ok(booking) => [
            office,
            renter,
            start,
            format_length(&booking),
            "booked".to_owned(),
            booking.total_amount().to_string(),
        ],
        Err(error) => [
            office,
            renter,
            start,
            "-".to_owned(),
            refusal_label(&error),
            "-".to_owned(),
        ],
    }
}

fn format_length(booking: &Booking) -> String {
    let seconds = u64::try_from(booking.billable_hours()).unwrap_or(0) * 3600;

    Duration::from_secs(seconds).human(Truncate::Minute).to_string()
}

fn refusal_label(error: &BookingsServiceError) -> String {
    match error {
        BookingsServiceError::Refused(BookingError::OfficeNotAvailable) => {
            "office not available".to_owned()
        }
        BookingsServiceError::Refused(BookingError::InvalidScheduleTime(_)) => {
            "invalid schedule time".to_owned()
        }
        other => other.to_string(),
    }
}
