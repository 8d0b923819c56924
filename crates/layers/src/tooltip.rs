use scene::World;
use scene::interaction::HoverTarget;

/// Offsets from the pointer so the tooltip clears the cursor.
const OFFSET_X: f64 = 10.0;
const OFFSET_Y: f64 = -10.0;

/// What the tooltip sink displays.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    pub visible: bool,
    pub text: String,
    pub x: f64,
    pub y: f64,
}

impl TooltipState {
    pub fn hidden() -> Self {
        Self {
            visible: false,
            text: String::new(),
            x: 0.0,
            y: 0.0,
        }
    }
}

/// Maps a hover target to the tooltip sink state.
pub fn tooltip_for(world: &World, hover: Option<HoverTarget>) -> TooltipState {
    match hover {
        Some(target) => TooltipState {
            visible: true,
            text: format!(
                "Plant Name: {}",
                world.label(target.feature).unwrap_or("unknown")
            ),
            x: target.pointer_x + OFFSET_X,
            y: target.pointer_y + OFFSET_Y,
        },
        None => TooltipState::hidden(),
    }
}
