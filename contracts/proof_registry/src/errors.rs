use soroban_sdk::contracterror;

/// Contract errors. The first failing precondition short-circuits with
/// this code and the host rolls back every write of the invocation.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Admin-gated operation called by a non-admin principal.
    OwnerOnly = 3,
    /// Referenced proof, verifier profile, or stats record is absent.
    NotFound = 4,
    /// Caller is not the proof's owner, or attempted a self-transfer.
    Unauthorized = 5,
    /// A proof with this document hash is already registered.
    AlreadyExists = 6,
    /// Malformed input: wrong hash length, empty or over-long text,
    /// fee below the floor, or a zero/excess withdrawal amount.
    InvalidHash = 7,
    /// Caller has no verifier profile, or the profile is inactive.
    NotVerifier = 8,
    AlreadyVerified = 9,
    /// The underlying token transfer was declined.
    TransferFailed = 10,
}
