use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use voya_package::PackageSynthesizer;
use voya_store::{
    ActivityLogService, BookingService, Config, CustomerMessageService, InMemoryActivityLog,
    InMemoryBookings, InMemoryInquiries, InMemoryMessages, InquiryService,
};
use voya_supply::{
    AmadeusFlights, AmadeusHotels, ClientCredentialsTokens, ProviderClient, SyntheticOffers,
    TokenProvider,
};

use voya_api::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voya_api=info,voya_supply=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    let timeout = Duration::from_secs(config.provider.timeout_seconds);

    let tokens: Arc<dyn TokenProvider> = Arc::new(ClientCredentialsTokens::new(
        &config.provider.auth_url,
        &config.provider.client_id,
        &config.provider.client_secret,
    ));

    let synthetic = |seed: Option<u64>| match seed {
        Some(seed) => SyntheticOffers::with_seed(seed),
        None => SyntheticOffers::new(),
    };
    let flights = AmadeusFlights::new(
        ProviderClient::new(&config.provider.base_url, Arc::clone(&tokens), timeout)?,
        synthetic(config.synthetic.seed),
    );
    let hotels = AmadeusHotels::new(
        ProviderClient::new(&config.provider.base_url, Arc::clone(&tokens), timeout)?,
        synthetic(config.synthetic.seed),
    );
    let synthesizer = Arc::new(PackageSynthesizer::new(Arc::new(flights), Arc::new(hotels)));

    let activity = ActivityLogService::new(Arc::new(InMemoryActivityLog::new()));
    let state = AppState {
        synthesizer,
        bookings: BookingService::new(Arc::new(InMemoryBookings::new()), activity.clone()),
        messages: CustomerMessageService::new(Arc::new(InMemoryMessages::new())),
        inquiries: InquiryService::new(Arc::new(InMemoryInquiries::new())),
        activity,
    };

    let addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app(state)).await?;
    Ok(())
}
