/// Shell-side tuning constants: camera, palette, page wiring.
///
/// These express intended behavior and keep magic numbers out of the code;
/// the particle core's own constants live in `core/constants.rs`.
// Canvas the experience renders into; missing it disables the whole system.
pub const CANVAS_ID: &str = "particle-canvas";

// Camera: fixed perspective look down -z, dollied by the scroll bindings.
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_Z: f32 = 18.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// Slow whole-field yaw applied on top of the camera
pub const FIELD_YAW_FREQ: f32 = 0.06;
pub const FIELD_YAW_AMP: f32 = 0.02;

// Instance mesh: circumradius of the wireframe tetrahedron
pub const PARTICLE_RADIUS: f32 = 0.2;

// Palette, indexed by the weighted draw in the core (0 base, 1 accent B,
// 2 accent A)
pub const PALETTE: [[f32; 3]; 3] = [
    [0.96, 0.96, 0.96], // base white
    [1.0, 0.82, 0.4],   // amber
    [0.9, 0.22, 0.27],  // signal red
];

// Render opacity per page mode (the journey's is also the resolver's
// initial value, overridden by whichever bindings carry an opacity band)
pub const JOURNEY_OPACITY: f32 = 0.75;
pub const STATIC_OPACITY: f32 = 0.2;
pub const HEADLINE_OPACITY: f32 = 0.45;

// Gallery-style pages pin the field to the fully scattered mid-journey pose
pub const STATIC_PROGRESS: f32 = 1.5;

// Structural markers checked once at startup to pick the page mode
pub const GALLERY_MARKERS: [&str; 2] = [".gallery-section", ".workshop-grid"];
pub const OVERVIEW_MARKER: &str = ".overview-section";
