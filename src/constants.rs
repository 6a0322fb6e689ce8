pub const SEQ_LEN: usize = 20;

// Tier lengths; the seed is fixed, the extension is either of two lengths
pub const SEED_LEN: usize = 5;
pub const EXTENSION_SHORT: usize = 9;
pub const EXTENSION_LONG: usize = 10;

// Maximum number of N symbols tolerated in a guide + PAM window
pub const MAX_N: usize = 2;

pub const INDEX_HEADER: &[u8] = b"OffTarget";
pub const INDEX_VERSION: u8 = 1;
pub const INDEX_EXTENSION: &str = ".offtarget";
