use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use booking_desk::api::advisory_dto::{AdvisoryResultDto, SlotAvailabilityDto};
use booking_desk::api::booking_dto::{BookingDto, BookingStatusDto};
use booking_desk::api::restaurant_dto::{RestaurantDto, TableDto, VibeDto};
use booking_desk::api::snapshot_dto::DaySnapshotDto;
use booking_desk::domain::advisor::{AdvisoryRequest, Occasion};
use booking_desk::domain::clock::{Clock, SystemClock};
use booking_desk::domain::desk::BookingDesk;
use booking_desk::domain::restaurant::RestaurantDirectory;
use booking_desk::domain::store::{BookingStore, InMemoryBookingStore};
use booking_desk::domain::time_slot::{ServiceWindow, TimeSlot};
use booking_desk::{loader::parser::write_json_file, load_day_snapshot, logger};

#[derive(Parser)]
#[command(name = "booking_desk", about = "Availability board and slot advisor over a day snapshot file")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the availability board of a snapshot.
    Board {
        /// Path to a day snapshot JSON file.
        file: String,
    },
    /// Suggest a slot (and estimate the wait for a requested time).
    Advise {
        /// Path to a day snapshot JSON file.
        file: String,
        /// Number of guests.
        #[arg(long, default_value_t = 2)]
        party_size: u32,
        /// Occasion of the visit.
        #[arg(long, value_enum)]
        occasion: Option<OccasionArg>,
        /// A specific "HH:MM" slot to estimate the wait for.
        #[arg(long)]
        time: Option<String>,
    },
    /// Write a synthetic day snapshot for trying out the other commands.
    Seed {
        /// Output path of the snapshot JSON file.
        file: String,
        /// How many bookings to generate.
        #[arg(long, default_value_t = 40)]
        bookings: usize,
        /// RNG seed; omit for a random snapshot.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OccasionArg {
    Date,
    Birthday,
    Anniversary,
    Business,
    Casual,
    Celebration,
}

impl From<OccasionArg> for Occasion {
    fn from(arg: OccasionArg) -> Self {
        match arg {
            OccasionArg::Date => Occasion::Date,
            OccasionArg::Birthday => Occasion::Birthday,
            OccasionArg::Anniversary => Occasion::Anniversary,
            OccasionArg::Business => Occasion::Business,
            OccasionArg::Casual => Occasion::Casual,
            OccasionArg::Celebration => Occasion::Celebration,
        }
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Board { file } => print_board(&file),
        Command::Advise { file, party_size, occasion, time } => advise(&file, party_size, occasion, time.as_deref()),
        Command::Seed { file, bookings, seed } => seed_snapshot(&file, bookings, seed),
    }
}

/// Builds a desk around the snapshot so the commands go through the same
/// service path the platform uses.
fn desk_for(file: &str) -> anyhow::Result<(BookingDesk, String, chrono::NaiveDate)> {
    let snapshot = load_day_snapshot(file).with_context(|| format!("Could not load snapshot '{}'", file))?;

    let slug = snapshot.restaurant.slug.clone();
    let date = snapshot.date;

    let store = Arc::new(InMemoryBookingStore::new());
    for booking in &snapshot.bookings {
        store.insert(booking.clone());
    }

    let directory = RestaurantDirectory::new(vec![snapshot.restaurant]);
    let desk = BookingDesk::new(directory, store, Arc::new(SystemClock));

    Ok((desk, slug, date))
}

fn print_board(file: &str) -> anyhow::Result<()> {
    let (desk, slug, date) = desk_for(file)?;

    let board = desk.availability_board(&slug, date)?;

    println!("{}", format!("Availability for '{}' on {}", slug, date).bold());
    println!("{:<8} {:>12} {:>12}", "slot", "available", "popularity");

    for row in board.iter().map(SlotAvailabilityDto::from) {
        let available = match row.availability {
            0 => row.availability.to_string().red(),
            1..=9 => row.availability.to_string().yellow(),
            _ => row.availability.to_string().green(),
        };

        println!("{:<8} {:>12} {:>12}", row.time, available, row.popularity);
    }

    Ok(())
}

fn advise(file: &str, party_size: u32, occasion: Option<OccasionArg>, time: Option<&str>) -> anyhow::Result<()> {
    let (desk, slug, date) = desk_for(file)?;

    let requested_slot = match time {
        Some(time) => match TimeSlot::parse(time) {
            Some(slot) => Some(slot),
            None => bail!("'{}' is not a valid HH:MM half-hour slot", time),
        },
        None => None,
    };

    let request = AdvisoryRequest { party_size, occasion: occasion.map(Into::into), requested_slot };
    let result = desk.advise(&slug, date, &request)?;
    let dto = AdvisoryResultDto::from(&result);

    match &dto.suggestion {
        Some(slot) => println!("Suggested slot: {}", slot.green().bold()),
        None => println!("{}", "Fully booked for that party size.".red().bold()),
    }

    if let Some(wait) = dto.wait_estimate_minutes {
        println!("Estimated wait at {}: {} minutes", time.unwrap_or("-"), wait.to_string().yellow());
    }

    Ok(())
}

fn seed_snapshot(file: &str, bookings: usize, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let clock = SystemClock;
    let date = clock.today();

    let first_names = ["Maya", "Oliver", "Sophia", "Lucas", "Amara", "Diego", "Ingrid", "Chen"];
    let last_names = ["Hart", "Okafor", "Lindqvist", "Moreau", "Tanaka", "Silva", "Novak", "Reyes"];

    let restaurant = RestaurantDto {
        id: "rest-demo-1".to_string(),
        name: "La Lumiere".to_string(),
        slug: "la-lumiere".to_string(),
        description: "Fine dining with a seasonal menu.".to_string(),
        vibe: VibeDto::Luxury,
        primary_color: None,
        secondary_color: None,
        accent_color: None,
        address: "12 Harbor Lane".to_string(),
        city: "Portside".to_string(),
        is_active: true,
        tables: (1..=8)
            .map(|i| TableDto {
                id: Some(format!("table-{}", i)),
                table_number: format!("T{}", i),
                capacity: if i <= 5 { 4 } else { 6 },
                location: None,
            })
            .collect(),
        opening_hour: None,
        closing_hour: None,
        total_capacity: None,
    };

    let slots = ServiceWindow::default().slots();

    let booking_dtos: Vec<BookingDto> = (0..bookings)
        .map(|i| {
            let first = first_names[rng.random_range(0..first_names.len())];
            let last = last_names[rng.random_range(0..last_names.len())];
            let slot = slots[rng.random_range(0..slots.len())];

            BookingDto {
                id: format!("booking-{}", i + 1),
                restaurant_id: restaurant.id.clone(),
                customer_name: format!("{} {}", first, last),
                customer_email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
                customer_phone: format!("555{:07}", rng.random_range(0..10_000_000)),
                person_count: rng.random_range(1..=8),
                occasion: None,
                seating_preference: None,
                booking_date: date.format("%Y-%m-%d").to_string(),
                booking_time: slot.to_string(),
                special_requests: None,
                priority_booking: rng.random_bool(0.1),
                status: if rng.random_bool(0.5) { BookingStatusDto::Confirmed } else { BookingStatusDto::Pending },
                table_id: None,
                created_at: clock.now().to_rfc3339(),
                confirmed_at: None,
                cancelled_at: None,
            }
        })
        .collect();

    let snapshot = DaySnapshotDto { restaurant, date: date.format("%Y-%m-%d").to_string(), bookings: booking_dtos };

    write_json_file(file, &snapshot).with_context(|| format!("Could not write snapshot '{}'", file))?;

    println!("Wrote {} bookings to {}", snapshot.bookings.len(), file.bold());

    Ok(())
}
