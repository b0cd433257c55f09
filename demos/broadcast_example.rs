use rand::{SeedableRng, rngs::StdRng};
use tracing::info;
use tracing_subscriber::fmt;

use bgw::{BgwScheme, BroadcastEncryption, BroadcastParameters, PairingEngine};

const RECEIVERS: usize = 16;
const SUBSET: [usize; 3] = [1, 4, 5];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_max_level(tracing::Level::INFO)
        .with_span_events(fmt::format::FmtSpan::ENTER | fmt::format::FmtSpan::CLOSE)
        .with_target(false)
        .with_ansi(false)
        .init();

    let mut rng = StdRng::seed_from_u64(42);
    let scheme = BgwScheme::<PairingEngine>::new();

    info!(receivers = RECEIVERS, subset = ?SUBSET, "starting broadcast example");

    let params = BroadcastParameters::for_receivers(RECEIVERS)?;
    let keys = scheme.setup(&mut rng, &params)?;
    let sender_key = keys.public_key.broadcast_public_key()?;

    let (header, session) = scheme.encrypt(&mut rng, &sender_key, &SUBSET)?;
    let payload_key = session.derive_symmetric_key("bgw demo 2024 payload key")?;

    for index in 1..=RECEIVERS {
        let receiver_key = keys.public_key.advertiser_public_key(index)?;
        let recovered = scheme.decrypt(keys.secret_key(index)?, &SUBSET, &header, &receiver_key)?;
        let matches = recovered == session;
        info!(
            receiver = index,
            member = SUBSET.contains(&index),
            matches,
            "decryption finished"
        );
        if matches {
            let derived = recovered.derive_symmetric_key("bgw demo 2024 payload key")?;
            info!(receiver = index, same_payload_key = (derived == payload_key), "payload key derived");
        }
    }

    Ok(())
}
