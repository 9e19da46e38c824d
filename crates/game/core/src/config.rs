/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig;

impl GameConfig {
    // ===== level landmarks =====
    /// Level assigned to the primary superuser (entity id 1).
    pub const GOD_LVL: i32 = 210;
    /// Level assigned to every other superuser.
    pub const WIZ_LVL: i32 = 205;
    /// Characters above this level pass the wizard/builder permission gate.
    pub const BUILDER_LVL: i32 = 200;
    /// Starting level for ordinary characters.
    pub const MORTAL_START_LVL: i32 = 1;

    // ===== characteristic bounds =====
    /// Lower bound for a characteristic's base value.
    pub const CHARACTERISTIC_MIN: i32 = 0;
    /// Upper bound for a characteristic's base value.
    pub const CHARACTERISTIC_MAX: i32 = 100;

    // ===== effect policy =====
    /// Hard cap on simultaneous instances of a multi-stacking effect kind.
    pub const MAX_STACKED_EFFECTS: usize = 8;
}
