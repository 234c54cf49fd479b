//! Shared test helpers for integration tests.

use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use repute_core::{synthesize_profile_with, WalletReputationProfile};
use repute_gateway::payment::LOOKUP_FEE_STROOPS;
use repute_gateway::{Network, SimulatedGateway};

/// Platform fee account; also a handy well-formed address.
pub const FEE_ACCOUNT: &str = "GDA44RZOXHV7LSDAJ7EPWS6JPBTKMJ7SDELR7XMEBQ4PZTPOKQRIPZU2";

/// A funded viewer in most scenarios.
pub const VIEWER: &str = "GBRPYHIL2CI3FNQ4BXLFMNDLFJUNPU2HY3ZMFSHONUCEOASW7QC7OX2H";

/// Lookup targets.
pub const TARGETS: [&str; 3] = [
    "GCEZWKCA5VLDNRLN3RPRJMRZOX3Z6G5CHCGSNFHEYVXM3XOJMDS674JZ",
    "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF",
    "GDA44RZOXHV7LSDAJ7EPWS6JPBTKMJ7SDELR7XMEBQ4PZTPOKQRIPZU2",
];

/// Fixed reference clock.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
}

/// Profile with comment selection pinned to `seed`.
pub fn seeded_profile(address: &str, seed: u64) -> WalletReputationProfile {
    synthesize_profile_with(address, fixed_now(), &mut StdRng::seed_from_u64(seed))
}

/// Profile with comment text blanked, leaving only reproducible fields.
pub fn numeric_profile(address: &str, seed: u64) -> WalletReputationProfile {
    let mut p = seeded_profile(address, seed);
    for r in &mut p.reviews {
        r.comment.clear();
    }
    p
}

/// Testnet gateway with [`VIEWER`] funded for `lookups` paid lookups.
pub fn funded_gateway(lookups: u64) -> SimulatedGateway {
    let gw = SimulatedGateway::new(Network::Testnet);
    gw.fund(VIEWER, lookups * (LOOKUP_FEE_STROOPS + 100));
    gw
}
