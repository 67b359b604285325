//! Engine configuration and tuned constants.

// ============================================================================
// EVALUATION WEIGHTS
// ============================================================================

/// Weight applied to the edge-disc differential
pub const EDGE_WEIGHT: i32 = 3;

/// Weight applied to the corner-disc differential. The edge ring
/// includes the corners, so a corner disc scores under both weights.
pub const CORNER_WEIGHT: i32 = 10;

// ============================================================================
// SEARCH DEPTHS
// ============================================================================

/// Depth of the first iteration of every search
pub const BASE_SEARCH_DEPTH: u32 = 4;

/// Fixed depth used by the material-only testing mode
pub const MATERIAL_TEST_DEPTH: u32 = 2;

// ============================================================================
// TIME AND MEMORY LIMITS
// ============================================================================

/// Divisor turning the remaining game clock into a per-move allowance.
/// Deepening continues while elapsed time stays under clock / divisor.
pub const TIME_ALLOWANCE_DIVISOR: u64 = 500;

/// Transposition cache bound during play
pub const CACHE_CAPACITY: usize = 100_000;

/// Number of positions the opening precompute caches before stopping
pub const OPENING_BOOK_TARGET: usize = 25_000;

/// Tunable engine parameters.
///
/// The defaults reproduce the standard playing strength; tests inject
/// smaller capacities and shallower depths.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub edge_weight: i32,
    pub corner_weight: i32,
    pub base_depth: u32,
    pub material_test_depth: u32,
    pub time_allowance_divisor: u64,
    pub cache_capacity: usize,
    pub opening_book_target: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            edge_weight: EDGE_WEIGHT,
            corner_weight: CORNER_WEIGHT,
            base_depth: BASE_SEARCH_DEPTH,
            material_test_depth: MATERIAL_TEST_DEPTH,
            time_allowance_divisor: TIME_ALLOWANCE_DIVISOR,
            cache_capacity: CACHE_CAPACITY,
            opening_book_target: OPENING_BOOK_TARGET,
        }
    }
}
