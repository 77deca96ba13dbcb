// Browser binding for the stellar hero core
// Canvas painter, requestAnimationFrame scheduler, planet transforms, runtime.

mod canvas;
mod planets;
mod runtime;
mod scheduler;

pub use runtime::HeroRuntime;

use stellar::HeroConfig;

/// Hero tunables, fixed at compile time.
pub fn hero_config() -> HeroConfig {
    HeroConfig::load_or_default(include_str!("../../hero.toml"))
}
