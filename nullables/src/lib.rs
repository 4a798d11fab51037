//! Nullable infrastructure: deterministic substitutes for everything the
//! governance engine treats as external: the clock, the encryption backend,
//! the decryption oracle, and the value-holding execution environment.
//!
//! Nothing here touches the system clock, the network, or real cryptographic
//! key material; every double is fully driven by the test.

pub mod clock;
pub mod encryption;
pub mod env;
pub mod oracle;

pub use clock::NullClock;
pub use encryption::NullEncryption;
pub use env::NullEnv;
pub use oracle::NullOracle;
