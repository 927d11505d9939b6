/// Game parameters an engine is started with.
///
/// - `items`: Whether item cards exist at all
/// - `k`: Cards offered per draft turn
/// - `n`: Draft turns, so also deck size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rules {
    pub items: bool,
    pub k: usize,
    pub n: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            items: true,
            k: crate::DRAFT_CHOICES,
            n: crate::DRAFT_TURNS,
        }
    }
}
