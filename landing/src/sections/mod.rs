// Landing page sections
// Nav, animated hero, feature grid, footer.

/// Badge text shown in the hero and the nav (single source of truth)
pub const TAGLINE: &str = "Now in public beta";

mod features;
mod footer;
mod hero;
mod nav;

pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
