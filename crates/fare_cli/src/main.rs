use std::process::exit;

use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand, ValueEnum};

use fare_client::{submit, CarpoolClient, SubmitMode, SubmitOutcome};
use fare_core::{
    FareParameters, FareSummary, RequestPipeline, RidePreferences, RideRequest, RoundedLegFare,
    RouteType,
};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "fare",
    about = "Quote and submit carpool requests against the fare engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a ride and print the fare summary
    Quote {
        #[command(flatten)]
        ride: RideArgs,
        /// Also print the per-leg cost breakdown
        #[arg(long)]
        breakdown: bool,
    },
    /// Price a ride and submit it to the carpool backend
    Submit {
        #[command(flatten)]
        ride: RideArgs,
        /// Backend base URL
        #[arg(long, env = "CARPOOL_API_URL", default_value = "http://localhost:3000")]
        base_url: String,
        /// Passenger creating the request
        #[arg(long, required_unless_present = "update_request_id")]
        passenger_id: Option<i64>,
        /// Also save the request as a reusable profile for this user
        #[arg(long)]
        save_profile_for: Option<i64>,
        /// Update this existing request instead of creating a new one
        #[arg(long, conflicts_with_all = ["passenger_id", "save_profile_for"])]
        update_request_id: Option<i64>,
    },
}

#[derive(Args)]
struct RideArgs {
    /// Pickup location text
    #[arg(long)]
    pickup: String,
    /// Dropoff location text
    #[arg(long)]
    dropoff: String,
    /// Trip distance in kilometers (one leg)
    #[arg(long)]
    distance_km: f64,
    /// Seats to book (1-4)
    #[arg(long, default_value_t = 1)]
    seats: u32,
    /// First ride day, YYYY-MM-DD
    #[arg(long, value_parser = parse_date)]
    date: NaiveDate,
    /// Last ride day, YYYY-MM-DD (must be after the start date)
    #[arg(long, value_parser = parse_date)]
    end_date: NaiveDate,
    /// Pickup clock time, HH:MM
    #[arg(long, value_parser = parse_time)]
    pickup_time: NaiveTime,
    /// Dropoff clock time, HH:MM (required for two-way)
    #[arg(long, value_parser = parse_time)]
    dropoff_time: Option<NaiveTime>,
    #[arg(long, value_enum, default_value = "one-way")]
    route_type: RouteArg,
    /// Ride repeats on the selected weekdays only
    #[arg(long)]
    recurring: bool,
    /// Weekdays for a recurring ride, e.g. --days Monday,Friday
    #[arg(long, value_delimiter = ',')]
    days: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum RouteArg {
    OneWay,
    TwoWay,
}

impl From<RouteArg> for RouteType {
    fn from(route: RouteArg) -> Self {
        match route {
            RouteArg::OneWay => RouteType::OneWay,
            RouteArg::TwoWay => RouteType::TwoWay,
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|err| format!("expected YYYY-MM-DD: {err}"))
}

fn parse_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|err| format!("expected HH:MM: {err}"))
}

// ── Commands ───────────────────────────────────────────────────────

impl RideArgs {
    fn into_request(self) -> RideRequest {
        RideRequest {
            pickup_location: self.pickup,
            dropoff_location: self.dropoff,
            seats: self.seats,
            start_date: self.date,
            end_date: self.end_date,
            pickup_time: self.pickup_time,
            dropoff_time: self.dropoff_time,
            route_type: self.route_type.into(),
            recurring: self.recurring,
            selected_weekdays: self.days,
            distance_km: self.distance_km,
            preferences: RidePreferences::default(),
            special_requests: None,
        }
    }
}

fn print_summary(summary: &FareSummary) {
    println!("Fare summary");
    println!("  fare per seat/day : {}", summary.fare_per_day);
    match summary.return_fare {
        Some(fare) => println!("  return fare/seat  : {}", fare),
        None => println!("  return fare/seat  : -"),
    }
    println!(
        "  ride days         : {} (of {} in range)",
        summary.total_days, summary.full_range_days
    );
    println!("  total per person  : {}", summary.total_fare_per_person);
    println!("  total fare        : {}", summary.total_fare);
    println!("  driver earnings   : {}", summary.driver_earnings);
    println!("  app commission    : {}", summary.app_commission);
}

fn print_leg(label: &str, leg: &RoundedLegFare) {
    println!("{label} leg{}", if leg.is_peak_hour { " (peak)" } else { "" });
    println!("  base fuel cost    : {}", leg.base_fuel_cost);
    println!("  peak surcharge    : {}", leg.peak_surcharge);
    println!("  fuel per seat     : {}", leg.shared_fuel_per_seat);
    println!("  maintenance/seat  : {}", leg.maintenance_per_seat);
    println!("  base cost/seat    : {}", leg.base_cost_per_seat);
    println!("  driver profit/seat: {}", leg.driver_profit_per_seat);
    println!("  commission/seat   : {}", leg.app_commission_per_seat);
    println!("  fare per seat     : {}", leg.final_fare_per_seat);
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Quote { ride, breakdown } => {
            let mut pipeline =
                RequestPipeline::new(ride.into_request(), FareParameters::default());
            let summary = *pipeline.reprice()?;
            print_summary(&summary);
            if breakdown {
                println!();
                print_leg("pickup", &summary.breakdown.pickup);
                if let Some(dropoff) = &summary.breakdown.dropoff {
                    println!();
                    print_leg("dropoff", dropoff);
                }
            }
        }
        Commands::Submit {
            ride,
            base_url,
            passenger_id,
            save_profile_for,
            update_request_id,
        } => {
            let mut pipeline =
                RequestPipeline::new(ride.into_request(), FareParameters::default());
            let summary = *pipeline.reprice()?;
            print_summary(&summary);

            let mode = match update_request_id {
                Some(request_id) => SubmitMode::Update { request_id },
                None => SubmitMode::Create {
                    passenger_id: passenger_id.ok_or("--passenger-id is required")?,
                    save_profile_for,
                },
            };

            let client = CarpoolClient::new(&base_url);
            match submit(&client, &mut pipeline, mode)? {
                SubmitOutcome::Created {
                    request_id,
                    profile_id,
                } => {
                    println!("created request {request_id}");
                    if let Some(profile_id) = profile_id {
                        println!("saved profile {profile_id}");
                    }
                }
                SubmitOutcome::Updated { request_id } => {
                    println!("updated request {request_id}");
                }
                SubmitOutcome::AlreadyInFlight => {
                    println!("a submission is already in flight; nothing sent");
                }
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        exit(1);
    }
}
