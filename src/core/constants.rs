// Shared tuning constants for the particle core. The shell (frame loop,
// renderer) layers its own display-side constants on top in `src/constants.rs`.

/// Number of particles in the field. Every shape generator returns exactly
/// this many points so index i means the same particle in every shape.
pub const PARTICLE_COUNT: usize = 2750;

// Morph journey
pub const PHASE_SPAN: f32 = 0.5; // progress width of one phase
pub const MORPH_MAX: f32 = 3.0; // six phases, clamped here

// Per-frame chase factor toward the morph target. A first-order filter;
// values in (0, 1) cannot overshoot.
pub const CHASE_DAMPING: f32 = 0.06;

// Outward-burst projection of the cloud target used by the launch phase
pub const BURST_SCALE_XY: f32 = 1.5;
pub const BURST_SCALE_Z: f32 = 2.0;

// Index-derived drift offset used by the screen-drift phase. Deterministic
// per index so re-evaluating at the same progress yields identical targets.
pub const DRIFT_FREQ_X: f32 = 0.1;
pub const DRIFT_FREQ_Y: f32 = 0.15;
pub const DRIFT_FREQ_Z: f32 = 0.2;
pub const DRIFT_AMP_X: f32 = 3.0;
pub const DRIFT_AMP_Y: f32 = 2.5;
pub const DRIFT_AMP_Z: f32 = 2.0;

// Per-particle angular velocity bound, drawn once at assembly (rad/frame)
pub const SPIN_MAX: f32 = 0.001;

// Ambient wave: small sinusoidal offset of the displayed position, a
// function of elapsed time and the particle's own resting coordinates.
// Never written back into the chased position.
pub const WAVE_AMP: f32 = 0.05;
pub const WAVE_TIME_FREQ_X: f32 = 0.6;
pub const WAVE_TIME_FREQ_Y: f32 = 0.5;
pub const WAVE_POS_FREQ: f32 = 0.3;

// Pointer repulsion: planar push inside REPEL_RADIUS with linear falloff
// over REPEL_FALLOFF (kept slightly larger than the radius, so the force
// steps in softly at the activation edge), plus a small z lift.
pub const REPEL_RADIUS: f32 = 5.0;
pub const REPEL_FALLOFF: f32 = 5.5;
pub const REPEL_STRENGTH: f32 = 0.3;
pub const REPEL_LIFT: f32 = 0.3;
pub const REPEL_DEAD_ZONE: f32 = 0.01;

// Pointer-follow parallax: fraction of the normalized pointer position
// added to every displayed x/y.
pub const FOLLOW_GAIN: f32 = 0.2;

// Initial render scale ranges (silhouette particles read larger)
pub const PRIMARY_SCALE_BASE: f32 = 0.8;
pub const PRIMARY_SCALE_SPAN: f32 = 0.4;
pub const FILLER_SCALE_BASE: f32 = 0.5;
pub const FILLER_SCALE_SPAN: f32 = 0.5;

// Weighted palette draw thresholds: roll > A → accent A (~15%),
// roll > B → accent B (~20%), everything else base color.
pub const PALETTE_ACCENT_A_THRESHOLD: f32 = 0.85;
pub const PALETTE_ACCENT_B_THRESHOLD: f32 = 0.65;
