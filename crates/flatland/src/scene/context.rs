use flatland_macro_tools::Fields;
use serde::{Deserialize, Serialize};

use crate::math::vector::Vector;

/// scene wide config, missing keys take their default when loaded
#[derive(Clone, Debug, PartialEq, Fields, Serialize, Deserialize)]
#[r]
#[serde(default)]
pub struct Context {
    #[w(set)]
    enable_gravity: bool,
    #[r(copy)]
    #[w(set)]
    default_gravity: Vector,
    // share the position fix of two dynamic bodies by inverse mass
    #[w(set)]
    split_position_fix: bool,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            enable_gravity: false,
            default_gravity: (0., -9.8).into(),
            split_position_fix: true,
        }
    }
}
