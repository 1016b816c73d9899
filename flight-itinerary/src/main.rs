use flight_itinerary::config::ConnectionConfig;
use flight_itinerary::domain::{BaggagePolicy, Itinerary, ItineraryError, Leg};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), ItineraryError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flight_itinerary=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ConnectionConfig::from_env();
    tracing::debug!(?config, "Loaded connection thresholds");

    let mut itinerary = Itinerary::new();
    itinerary.add_to_end(Leg::new("CMH", "ORD", 7 * 60 + 20, 8 * 60 + 35)?);
    itinerary.add_to_end(Leg::new("ORD", "SFO", 10 * 60, 12 * 60 + 55)?);

    let min_through = config.min_through_mins;
    let min_recheck = config.min_recheck_mins;

    println!("Leg count: {}", itinerary.length());
    println!("Origin: {}", itinerary.origin());
    println!("Destination: {}", itinerary.destination());
    println!("Layover time (min): {}", itinerary.layover_time()?);
    let through_valid = itinerary.is_connection_valid_for_policy(
        BaggagePolicy::ThroughCheck,
        min_through,
        min_recheck,
    )?;
    let recheck_valid = itinerary.is_connection_valid_for_policy(
        BaggagePolicy::RecheckRequired,
        min_through,
        min_recheck,
    )?;

    println!(
        "Valid ({}, min={min_through})? {through_valid}",
        BaggagePolicy::ThroughCheck
    );
    println!(
        "Valid ({}, min={min_recheck})? {recheck_valid}",
        BaggagePolicy::RecheckRequired
    );

    Ok(())
}
